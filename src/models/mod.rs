mod fund;
mod nav;
mod prediction;
mod range;
mod recommendation;
mod report;
mod sip;

pub use fund::Fund;
pub use nav::{NavPoint, NavSeries};
pub use prediction::{
    ComponentForecasts, ForecastMethod, PredictionModel, PredictionResult, SupportingStats,
};
pub use range::TimeRange;
pub use recommendation::{Advice, Recommendation};
pub use report::FundReport;
pub use sip::{SipPlan, SipPoint, SipProjection};
