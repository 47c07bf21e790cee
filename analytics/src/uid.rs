use uuid::Uuid;

/// Generates unique message ids.
///
/// Called concurrently by dispatch workers; every call must return a new id. Any
/// `Fn() -> String` closure is an `IdGenerator`.
pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self) -> String;
}

impl<F> IdGenerator for F
where F: Fn() -> String + Send + Sync + 'static
{
    fn next_id(&self) -> String {
        self()
    }
}

/// Random UUID v4 ids in the canonical hyphenated form, e.g.
/// `67e55044-10b1-426f-9247-bb680e5fe0c8`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidV4;

impl IdGenerator for UuidV4 {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
