use chrono::NaiveDateTime;

/// Source of "now" for the elapsed-time helpers.
///
/// Returns local wall-clock time. Dates handled by this crate are local
/// calendar dates, so comparisons stay in local time as well.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
