use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A fund's Net Asset Value on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl NavPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Chronologically ordered, non-empty NAV history.
///
/// Dates are strictly increasing and every value is finite and positive.
/// The only way to build one is [`NavSeries::new`], so downstream
/// computations can rely on those guarantees without re-checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NavPoint>", into = "Vec<NavPoint>")]
pub struct NavSeries {
    points: Vec<NavPoint>,
}

impl NavSeries {
    pub fn new(points: Vec<NavPoint>) -> Result<Self, AppError> {
        if points.is_empty() {
            return Err(AppError::Validation(
                "NAV series must contain at least one point".to_string(),
            ));
        }

        if let Some(bad) = points.iter().find(|p| !p.value.is_finite() || p.value <= 0.0) {
            return Err(AppError::Validation(format!(
                "NAV on {} must be a positive number, got {}",
                bad.date, bad.value
            )));
        }

        if let Some(pair) = points.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(AppError::Validation(format!(
                "NAV dates must be strictly increasing: {} is followed by {}",
                pair[0].date, pair[1].date
            )));
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    // Always false for a constructed series; kept for the usual len/is_empty pairing.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn last(&self) -> &NavPoint {
        // Non-empty by construction
        &self.points[self.points.len() - 1]
    }

    /// Trailing `count` points as a new series. `count` is clamped to `1..=len`.
    pub fn tail(&self, count: usize) -> NavSeries {
        let keep = count.clamp(1, self.points.len());
        NavSeries {
            points: self.points[self.points.len() - keep..].to_vec(),
        }
    }

    pub fn into_points(self) -> Vec<NavPoint> {
        self.points
    }
}

impl TryFrom<Vec<NavPoint>> for NavSeries {
    type Error = AppError;

    fn try_from(value: Vec<NavPoint>) -> Result<Self, Self::Error> {
        NavSeries::new(value)
    }
}

impl From<NavSeries> for Vec<NavPoint> {
    fn from(value: NavSeries) -> Self {
        value.points
    }
}
