pub mod fund_report_service;
pub mod indicators;
pub mod nav_import_service;
pub mod prediction_service;
pub mod range_filter;
pub mod recommendation_service;
pub mod sip_calculator;
