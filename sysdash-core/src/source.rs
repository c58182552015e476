use crate::model::{MetricsSnapshot, ProcessRow};

/// Provider of the metrics the dashboard renders.
///
/// Implementations own whatever cache they sample from. Both calls must
/// always return; an unreadable process table is reported as an empty
/// sequence rather than an error.
pub trait DataSource {
    /// Current system-wide metrics.
    ///
    /// Process counts describe the table returned by the latest
    /// [`processes`](Self::processes) call.
    fn system(&mut self) -> MetricsSnapshot;

    /// Current process table.
    ///
    /// Refreshes the source's internal snapshot as a side effect, so two
    /// consecutive calls may return different sequences.
    fn processes(&mut self) -> Vec<ProcessRow>;
}
