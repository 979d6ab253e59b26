use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RoyaltyError};
use crate::rules::Draw;

/// Book prices are drawn on a cent grid.
pub const PRICE_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of records per batch.
    pub count: usize,
    pub output: String,
    pub format: ExportFormat,
    /// Fixed seed for reproducible batches; entropy when unset.
    pub seed: Option<u64>,
    /// Overrides the current date, e.g. `today = "2025-06-30"`.
    pub today: Option<NaiveDate>,
    pub distribution: DistributionParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionParams {
    pub price_min: Decimal,
    pub price_max: Decimal,
    /// Releases fall within this many days before today.
    pub release_window_days: i64,
    /// Chance a human narrator shares royalties.
    pub narrator_split_probability: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    /// Single-sheet spreadsheet workbook.
    Xlsx,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 50,
            output: "FakeRoyaltyData.csv".to_string(),
            format: ExportFormat::Csv,
            seed: None,
            today: None,
            distribution: DistributionParams::default(),
        }
    }
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self {
            price_min: dec!(7.99),
            price_max: dec!(19.99),
            release_window_days: 730,
            narrator_split_probability: 0.5,
        }
    }
}

impl GeneratorConfig {
    /// Checks the batch size and distribution parameters.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty batch or unusable distribution bounds.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(RoyaltyError::invalid_batch_size(self.count));
        }
        self.distribution.validate()
    }
}

impl DistributionParams {
    /// Uniform book price draw in cents.
    #[must_use]
    pub const fn price_draw(&self) -> Draw {
        Draw::Uniform {
            min: self.price_min,
            max: self.price_max,
            scale: PRICE_SCALE,
        }
    }

    /// # Errors
    ///
    /// Returns [`RoyaltyError::InvalidParameter`] for a negative, inverted or
    /// sub-cent price range, a negative release window, or a probability
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.price_min < Decimal::ZERO {
            return Err(RoyaltyError::invalid_parameter(
                "price_min",
                format!("{} is negative", self.price_min),
            ));
        }
        self.price_draw().validate("price")?;
        if self.release_window_days < 0 {
            return Err(RoyaltyError::invalid_parameter(
                "release_window_days",
                format!("{} is negative", self.release_window_days),
            ));
        }
        if !(0.0..=1.0).contains(&self.narrator_split_probability) {
            return Err(RoyaltyError::invalid_parameter(
                "narrator_split_probability",
                format!("{} outside [0, 1]", self.narrator_split_probability),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
            Self::Xlsx => f.write_str("xlsx"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(format!(
                "unknown export format '{other}' (expected csv, json or xlsx)"
            )),
        }
    }
}
