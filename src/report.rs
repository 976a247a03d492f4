use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{bounding_box::BoundingBox, clusterer::Strategy, formatter::labelled, survey::Survey};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DepositSummary {
    pub symbol: char,
    pub size: usize,
    pub bounds: Option<BoundingBox>,
}

/// Serializable summary of a finished survey
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SurveyReport {
    version: String,
    pub source: Option<String>,
    pub surveyed_at: DateTime<Utc>,
    pub strategy: Strategy,
    pub rows: usize,
    pub columns: usize,
    pub oil_tiles: usize,
    pub deposit_count: usize,
    /// in symbol order
    pub deposits: Vec<DepositSummary>,
}

impl SurveyReport {
    pub fn new(survey: &Survey, source: Option<String>) -> SurveyReport {
        let grid = survey.grid();
        let deposits: Vec<DepositSummary> = labelled(survey.deposits())
            .map(|(symbol, deposit)| DepositSummary {
                symbol,
                size: deposit.len(),
                bounds: deposit.bounds(),
            })
            .collect();

        SurveyReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            source,
            surveyed_at: Utc::now(),
            strategy: survey.strategy(),
            rows: grid.height(),
            columns: grid.width(),
            oil_tiles: grid.oil_count(),
            deposit_count: deposits.len(),
            deposits,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn largest(&self) -> Option<&DepositSummary> {
        self.deposits.iter().max_by_key(|d| d.size)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
