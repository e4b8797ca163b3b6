//! Long id list batching.
//!
//! The service accepts a bounded number of ids per call. Longer lists are
//! split into consecutive chunks, requested one chunk at a time, and the
//! results concatenated in chunk order. The first failing chunk aborts the
//! batch; later chunks are never issued.

use tracing::{debug, warn};

use crate::client::RequestExecutor;
use crate::client::config::BatchSize;
use crate::error::BatchError;
use crate::model::{CanonicalRecord, Id, ParamValue, Params};

/// One chunk of an id list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdBatch<'a> {
    /// 0-based position of this chunk.
    pub index: usize,
    pub ids: &'a [Id],
}

impl IdBatch<'_> {
    /// Returns `template` with `id_field` set to this chunk's ids.
    pub fn params(&self, template: &Params, id_field: &str) -> Params {
        let mut params = template.clone();
        params.insert(id_field, ParamValue::ids(self.ids));
        params
    }
}

/// Splits `ids` into consecutive chunks of at most `size`, preserving order.
pub fn partition(ids: &[Id], size: BatchSize) -> Vec<IdBatch<'_>> {
    ids.chunks(size.get())
        .enumerate()
        .map(|(index, ids)| IdBatch { index, ids })
        .collect()
}

/// Requests records for arbitrarily long id lists, one chunk per call.
#[derive(Debug, Clone)]
pub struct BatchedIdRequester {
    executor: RequestExecutor,
    batch_size: BatchSize,
}

impl BatchedIdRequester {
    pub fn new(executor: RequestExecutor, batch_size: BatchSize) -> Self {
        Self { executor, batch_size }
    }

    pub fn batch_size(&self) -> BatchSize {
        self.batch_size
    }

    /// Fetches records for `ids` by calling `operation` once per chunk.
    ///
    /// Each call uses `template` with `id_field` replaced by the chunk's ids.
    /// Results keep chunk order and each chunk's own order; nothing is
    /// deduplicated or re-sorted. An empty id list issues no request.
    pub fn fetch_by_ids(
        &self,
        operation: &str,
        ids: &[Id],
        template: &Params,
        id_field: &str,
    ) -> Result<Vec<CanonicalRecord>, BatchError> {
        self.fetch_by_ids_in(operation, ids, template, id_field, self.batch_size)
    }

    /// Like [`fetch_by_ids`](Self::fetch_by_ids) with a batch size for this
    /// call only.
    pub fn fetch_by_ids_in(
        &self,
        operation: &str,
        ids: &[Id],
        template: &Params,
        id_field: &str,
        batch_size: BatchSize,
    ) -> Result<Vec<CanonicalRecord>, BatchError> {
        let batches = partition(ids, batch_size);
        let chunk_count = batches.len();
        let mut records = Vec::new();

        for batch in batches {
            debug!(operation, chunk = batch.index, chunk_count, ids = batch.ids.len(), "requesting chunk");
            let chunk = self
                .executor
                .execute(operation, batch.params(template, id_field))
                .map_err(|source| {
                    warn!(operation, chunk = batch.index, chunk_count, "batch aborted");
                    BatchError {
                        chunk_index: batch.index,
                        chunk_count,
                        source,
                    }
                })?;
            records.extend(chunk);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::RequestError;
    use crate::model::RawNode;
    use crate::transport::ReplayTransport;

    const OP: &str = "get_vehicle_by_ids_2";

    fn size(n: usize) -> BatchSize {
        BatchSize::new(n).unwrap()
    }

    fn ids(range: std::ops::RangeInclusive<Id>) -> Vec<Id> {
        range.collect()
    }

    /// Builds a response with one record per requested id.
    fn echo(chunk: &[Id]) -> RawNode {
        RawNode::collection(
            "data",
            chunk.iter().map(|id| RawNode::item([RawNode::leaf("carId", id.to_string())])),
        )
    }

    fn requester(transport: &Arc<ReplayTransport>, n: usize) -> BatchedIdRequester {
        BatchedIdRequester::new(RequestExecutor::new(transport.clone()), size(n))
    }

    fn sent_ids(body: &Params, field: &str) -> Vec<Id> {
        body.get(field)
            .and_then(ParamValue::as_list)
            .unwrap()
            .iter()
            .filter_map(ParamValue::as_int)
            .collect()
    }

    #[test]
    fn test_partition() {
        let all = ids(1..=40);
        let batches = partition(&all, size(25));
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].ids, &all[..25]);
        assert_eq!(batches[1].ids, &all[25..]);
        assert_eq!(batches[1].index, 1);

        assert!(partition(&[], size(25)).is_empty());
        assert_eq!(partition(&ids(1..=25), size(25)).len(), 1);
        assert_eq!(partition(&ids(1..=26), size(25)).len(), 2);
    }

    #[test]
    fn test_forty_ids_make_two_ordered_requests() {
        let all = ids(1..=40);
        let transport = Arc::new(ReplayTransport::new());
        transport.push_response(OP, echo(&all[..25]));
        transport.push_response(OP, echo(&all[25..]));

        let template = Params::new().with("lang", "lv");
        let records = requester(&transport, 25).fetch_by_ids(OP, &all, &template, "car_ids").unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(sent_ids(&calls[0].body, "car_ids"), ids(1..=25));
        assert_eq!(sent_ids(&calls[1].body, "car_ids"), ids(26..=40));
        assert_eq!(calls[1].body.get("lang").and_then(ParamValue::as_text), Some("lv"));

        let returned: Vec<Id> = records
            .iter()
            .filter_map(|r| r.text("car_id"))
            .filter_map(|t| t.parse().ok())
            .collect();
        assert_eq!(returned, all);
    }

    #[test]
    fn test_results_are_not_deduplicated() {
        let transport = Arc::new(ReplayTransport::new());
        transport.push_response(OP, echo(&[7, 7]));
        transport.push_response(OP, echo(&[7]));

        let records = requester(&transport, 2)
            .fetch_by_ids(OP, &[7, 7, 7], &Params::new(), "car_ids")
            .unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_empty_ids_issue_no_request() {
        let transport = Arc::new(ReplayTransport::new());
        let records = requester(&transport, 25)
            .fetch_by_ids(OP, &[], &Params::new(), "car_ids")
            .unwrap();
        assert!(records.is_empty());
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_fail_fast_on_second_chunk() {
        let transport = Arc::new(ReplayTransport::new());
        transport.push_response(OP, echo(&[1, 2]));
        transport.push_failure(OP, "503 service unavailable");
        transport.push_response(OP, echo(&[5, 6]));

        let err = requester(&transport, 2)
            .fetch_by_ids(OP, &[1, 2, 3, 4, 5, 6], &Params::new(), "car_ids")
            .unwrap_err();

        assert_eq!(err.chunk_index, 1);
        assert_eq!(err.chunk_count, 3);
        assert!(matches!(err.source, RequestError::Transport { .. }));
        assert_eq!(transport.call_count(OP), 2);
        assert_eq!(transport.pending(OP), 1);
    }

    #[test]
    fn test_per_call_batch_size() {
        let transport = Arc::new(ReplayTransport::new());
        transport.push_response(OP, echo(&[1, 2]));
        transport.push_response(OP, echo(&[3, 4]));
        transport.push_response(OP, echo(&[5]));

        let requester = requester(&transport, 25);
        let records = requester
            .fetch_by_ids_in(OP, &ids(1..=5), &Params::new(), "car_ids", size(2))
            .unwrap();

        assert_eq!(records.len(), 5);
        let calls = transport.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(sent_ids(&calls[2].body, "car_ids"), vec![5]);
        assert_eq!(requester.batch_size(), size(25));
    }

    #[test]
    fn test_template_id_field_is_replaced() {
        let transport = Arc::new(ReplayTransport::new());
        transport.push_response(OP, echo(&[3]));

        let template = Params::new().with("car_ids", "placeholder");
        requester(&transport, 25).fetch_by_ids(OP, &[3], &template, "car_ids").unwrap();
        assert_eq!(sent_ids(&transport.calls()[0].body, "car_ids"), vec![3]);
    }
}
