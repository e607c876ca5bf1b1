use serde::{Deserialize, Serialize};

/// Inputs to a Systematic Investment Plan projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipPlan {
    /// Amount invested at the start of every month
    pub monthly_investment: f64,

    /// Investment horizon in whole years
    pub years: u32,

    /// Expected annual return in percent, e.g. 12.0 for 12%
    pub annual_return_pct: f64,
}

/// One month of the projected growth curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipPoint {
    pub month: u32,
    /// "Year k" on every twelfth month, "M{n}" for plans of two years or less
    pub label: String,
    pub invested: f64,
    /// Rounded to the nearest whole unit
    pub value: f64,
}

/// Result of projecting a SIP plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipProjection {
    pub total_investment: f64,
    pub future_value: f64,
    pub estimated_returns: f64,
    pub schedule: Vec<SipPoint>,
}
