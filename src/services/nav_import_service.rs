use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::models::{Fund, NavPoint, NavSeries};

#[derive(Debug, Deserialize)]
struct NavRow {
    #[serde(alias = "Date")]
    date: NaiveDate,
    #[serde(alias = "NAV", alias = "value")]
    nav: f64,
}

/// Parse a `date,nav` CSV into a validated series.
///
/// Rows may arrive in any order; they are sorted by date before validation.
/// Duplicate dates and non-positive values are rejected.
pub fn parse_nav_csv<R: Read>(reader: R) -> Result<NavSeries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for (index, result) in reader.deserialize::<NavRow>().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let row = result.with_context(|| format!("Invalid NAV row on line {}", index + 2))?;
        points.push(NavPoint::new(row.date, row.nav));
    }

    points.sort_by_key(|p| p.date);

    debug!("Parsed {} NAV rows", points.len());

    NavSeries::new(points).context("NAV file does not form a valid series")
}

pub fn load_nav_csv(path: &Path) -> Result<NavSeries> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open NAV file: {:?}", path))?;

    let series = parse_nav_csv(file)
        .with_context(|| format!("Failed to import NAV file: {:?}", path))?;

    info!("Loaded {} NAV points from {:?}", series.len(), path);
    Ok(series)
}

/// Load a JSON array of funds. Each fund's history is validated as a [`NavSeries`].
pub fn load_fund_catalog(path: &Path) -> Result<Vec<Fund>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fund catalog: {:?}", path))?;

    let funds: Vec<Fund> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse fund catalog: {:?}", path))?;

    info!("Loaded {} funds from {:?}", funds.len(), path);
    Ok(funds)
}
