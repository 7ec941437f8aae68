use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidCalendarDate;

/// Calendar dates travel as `YYYY-MM-DD` strings in stored documents.
#[derive(Debug)]
pub(crate) struct CalendarDateModel(NaiveDate);

impl FromStr for CalendarDateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| InvalidCalendarDate::with_debug(s, &e))?;
        Ok(CalendarDateModel(d))
    }
}

impl<'de> Deserialize<'de> for CalendarDateModel {
    fn deserialize<D>(deserializer: D) -> Result<CalendarDateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CalendarDateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for CalendarDateModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for CalendarDateModel {
    fn from(d: NaiveDate) -> Self {
        CalendarDateModel(d)
    }
}

impl From<CalendarDateModel> for NaiveDate {
    fn from(m: CalendarDateModel) -> Self {
        m.0
    }
}
