//! Vehicle manufacturers.

use crate::catalog::operations::VEHICLE_MANUFACTURERS;
use crate::catalog::vehicle::CarType;
use crate::client::Client;
use crate::error::Result;
use crate::model::{CanonicalRecord, Id, Params};

/// A vehicle manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VehicleManufacturer {
    pub id: Id,
    pub name: String,
}

/// Options for [`VehicleManufacturer::all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerQuery {
    pub car_type: CarType,
    pub countries_car_selection: String,
    pub country_group_flag: bool,
    pub eval_favor: bool,
    pub favoured_list: Option<i64>,
    pub lang: String,
}

impl ManufacturerQuery {
    pub fn new(lang: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            car_type: CarType::default(),
            countries_car_selection: country.into(),
            country_group_flag: false,
            eval_favor: false,
            favoured_list: None,
            lang: lang.into(),
        }
    }

    pub fn params(&self) -> Params {
        Params::new()
            .with("car_type", self.car_type as u8)
            .with("countries_car_selection", self.countries_car_selection.as_str())
            .with("country_group_flag", self.country_group_flag)
            .with("eval_favor", self.eval_favor)
            .with_opt("favoured_list", self.favoured_list)
            .with("lang", self.lang.as_str())
    }
}

impl VehicleManufacturer {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        Self {
            id: record.int("manu_id"),
            name: record.string("manu_name"),
        }
    }

    /// Lists all vehicle manufacturers.
    pub fn all(client: &Client, query: &ManufacturerQuery) -> Result<Vec<VehicleManufacturer>> {
        let records = client.execute(VEHICLE_MANUFACTURERS, query.params())?;
        Ok(records.iter().map(VehicleManufacturer::from_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::ErrorKind;
    use crate::model::RawNode;
    use crate::transport::ReplayTransport;

    #[test]
    fn test_all() {
        let transport = Arc::new(ReplayTransport::new());
        transport.push_response(
            VEHICLE_MANUFACTURERS,
            RawNode::collection(
                "data",
                [
                    RawNode::item([RawNode::leaf("manuId", "2"), RawNode::leaf("manuName", "ALFA ROMEO")]),
                    RawNode::item([RawNode::leaf("manuId", "5"), RawNode::leaf("manuName", "AUDI")]),
                ],
            ),
        );
        let client = Client::new(transport);

        let all = VehicleManufacturer::all(&client, &ManufacturerQuery::new("lv", "lv")).unwrap();
        assert_eq!(
            all,
            vec![
                VehicleManufacturer { id: 2, name: "ALFA ROMEO".to_string() },
                VehicleManufacturer { id: 5, name: "AUDI".to_string() },
            ]
        );
    }

    #[test]
    fn test_all_propagates_transport_failure() {
        let transport = ReplayTransport::new();
        transport.push_failure(VEHICLE_MANUFACTURERS, "dns lookup failed");
        let client = Client::new(transport);

        let err = VehicleManufacturer::all(&client, &ManufacturerQuery::new("lv", "lv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
    }
}
