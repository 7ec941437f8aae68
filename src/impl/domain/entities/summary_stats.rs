/// Headline usage statistics over a user's full event log.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryStats {
    /// Count of unique calendar dates with at least one event.
    pub distinct_days: usize,
    pub total_events: usize,
    /// `total_events / distinct_days`, rounded to one decimal; 0 when the
    /// log is empty.
    pub average_events_per_day: f64,
}
