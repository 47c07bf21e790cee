use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::uid::IdGenerator;

/// An [`IdGenerator`] returning `"1"`, `"2"`, `"3"`, ...
///
/// Clones share the counter.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next_id: Arc<AtomicU64>,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialIds {
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_sequential() {
        let ids = SequentialIds::new();

        assert_eq!("1", ids.next_id());
        assert_eq!("2", ids.next_id());
        assert_eq!("3", ids.next_id());
    }

    #[test]
    fn test_clones_share_counter() {
        let ids1 = SequentialIds::new();
        let ids2 = ids1.clone();

        assert_eq!("1", ids1.next_id());
        assert_eq!("2", ids2.next_id());
        assert_eq!("3", ids1.next_id());
    }
}
