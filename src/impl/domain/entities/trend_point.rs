use chrono::NaiveDate;

use super::value_vector::ValueVector;

/// One row of the cumulative asset trend series: the running component-wise
/// totals up to and including `date`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub cumulative: ValueVector,
    pub cumulative_total_value: f64,
}
