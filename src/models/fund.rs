use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::NavSeries;

// A mutual fund as supplied by the caller. The engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub current_value: f64,
    pub risk_label: String,
    #[serde(default)]
    pub category: Option<String>,
    pub history: NavSeries,
}

impl Fund {
    /// Percentage change over the trailing twelve points of history.
    ///
    /// Returns 0.0 when fewer than twelve points exist.
    pub fn annual_return(&self) -> f64 {
        let values = self.history.values();
        let n = values.len();
        if n < 12 {
            return 0.0;
        }

        let oldest = values[n - 12];
        let newest = values[n - 1];
        (newest - oldest) / oldest * 100.0
    }
}
