use chrono::DateTime;
use chrono::Utc;

/// A source of wall-clock time, used to timestamp messages.
///
/// Any `Fn() -> DateTime<Utc>` closure is a `Clock`, which lets tests pin the time.
pub trait Clock: Send + Sync + 'static {
    /// Return the current time.
    fn now(&self) -> DateTime<Utc>;
}

impl<F> Clock for F
where F: Fn() -> DateTime<Utc> + Send + Sync + 'static
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
