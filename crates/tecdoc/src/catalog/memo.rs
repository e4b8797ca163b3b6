//! Compute-once cells for lazily fetched entity fields.

use std::fmt;

use once_cell::sync::OnceCell;

/// A value computed on first access and cached for the owner's lifetime.
///
/// Failed initializations are not cached, so the next access retries.
/// Concurrent first accesses are serialized: one caller runs the
/// initializer, the others block and then read its result. There is no
/// expiry or invalidation.
pub struct Memo<T> {
    cell: OnceCell<T>,
}

impl<T> Memo<T> {
    pub const fn new() -> Self {
        Self { cell: OnceCell::new() }
    }

    /// Returns the cached value, if initialized.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns the cached value, running `init` if there is none yet.
    pub fn get_or_try_init<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        self.cell.get_or_try_init(init)
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones carry the cached snapshot, not a shared cell.
impl<T: Clone> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self { cell: self.cell.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Memo").field(value).finish(),
            None => f.write_str("Memo(<uninit>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;

    #[test]
    fn test_initializes_once() {
        let memo = Memo::new();
        let mut calls = 0;
        for _ in 0..3 {
            let value = memo
                .get_or_try_init(|| {
                    calls += 1;
                    Ok::<_, ()>(42)
                })
                .unwrap();
            assert_eq!(*value, 42);
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let memo: Memo<u32> = Memo::new();
        assert_eq!(memo.get_or_try_init(|| Err("boom")), Err("boom"));
        assert!(!memo.is_initialized());
        assert_eq!(memo.get_or_try_init(|| Ok::<_, &str>(7)), Ok(&7));
        assert_eq!(memo.get(), Some(&7));
    }

    #[test]
    fn test_concurrent_first_access_runs_init_once() {
        let memo = Arc::new(Memo::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let memo = Arc::clone(&memo);
                let calls = Arc::clone(&calls);
                thread::spawn(move || {
                    *memo
                        .get_or_try_init(|| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(std::time::Duration::from_millis(10));
                            Ok::<_, ()>(5u32)
                        })
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clone_is_a_snapshot() {
        let memo = Memo::new();
        memo.get_or_try_init(|| Ok::<_, ()>(vec![1, 2])).unwrap();
        let copy = memo.clone();
        assert_eq!(copy.get(), Some(&vec![1, 2]));
        assert!(Memo::<u8>::new().clone().get().is_none());
    }
}
