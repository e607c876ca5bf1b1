use crate::errors::AppError;
use crate::models::{SipPlan, SipPoint, SipProjection};

/// Future value of an annuity-due: `monthly * ((1 + r)^months - 1) / r * (1 + r)`.
///
/// A zero rate degenerates to the plain sum of contributions.
pub fn future_value(monthly: f64, months: u32, monthly_rate: f64) -> f64 {
    if monthly_rate == 0.0 {
        return monthly * months as f64;
    }

    let growth = (1.0 + monthly_rate).powi(months as i32);
    monthly * ((growth - 1.0) / monthly_rate) * (1.0 + monthly_rate)
}

fn schedule_label(month: u32, total_months: u32) -> String {
    if month % 12 == 0 {
        format!("Year {}", month / 12)
    } else if total_months <= 24 {
        format!("M{}", month)
    } else {
        String::new()
    }
}

/// Project a SIP plan: totals plus the month-by-month growth curve.
pub fn project(plan: SipPlan) -> Result<SipProjection, AppError> {
    if !plan.monthly_investment.is_finite() || plan.monthly_investment <= 0.0 {
        return Err(AppError::Validation(
            "Monthly investment must be a positive number".to_string(),
        ));
    }
    if plan.years == 0 {
        return Err(AppError::Validation(
            "Investment period must be at least one year".to_string(),
        ));
    }
    if !plan.annual_return_pct.is_finite() || plan.annual_return_pct < 0.0 {
        return Err(AppError::Validation(
            "Expected return must be zero or a positive percentage".to_string(),
        ));
    }

    let months = plan.years * 12;
    let monthly_rate = plan.annual_return_pct / 100.0 / 12.0;

    let schedule = (1..=months)
        .map(|month| SipPoint {
            month,
            label: schedule_label(month, months),
            invested: plan.monthly_investment * month as f64,
            value: future_value(plan.monthly_investment, month, monthly_rate).round(),
        })
        .collect();

    let total_investment = plan.monthly_investment * months as f64;
    let future_value = future_value(plan.monthly_investment, months, monthly_rate);

    Ok(SipProjection {
        total_investment,
        future_value,
        estimated_returns: future_value - total_investment,
        schedule,
    })
}
