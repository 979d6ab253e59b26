//! Record synthesizer and batch driver.
//!
//! Randomness is always injected. Each record draws from the caller's
//! generator in a fixed order, so a seeded generator reproduces a batch
//! exactly.

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::breakeven::{evaluate, EconomicsInput};
use crate::config::{DistributionParams, GeneratorConfig};
use crate::cost::production_cost;
use crate::error::{Result, RoyaltyError};
use crate::model::{BreakEvenStatus, Narrator, Platform, RoyaltyRecord};
use crate::names::NameSource;
use crate::rate::{final_royalty_rate, needs_low_royalty_override, resolve_royalty_rate};
use crate::sales::{apply_launch_boost, base_units, low_royalty_units, months_since_release};

/// Builds one fully populated [`RoyaltyRecord`] per call.
#[derive(Debug, Clone)]
pub struct RecordSynthesizer {
    params: DistributionParams,
    today: NaiveDate,
}

impl RecordSynthesizer {
    /// # Errors
    ///
    /// Returns an error if `params` cannot be sampled.
    pub fn new(params: DistributionParams, today: NaiveDate) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, today })
    }

    /// Draws one record.
    ///
    /// Units are resampled for low-royalty split titles before the launch
    /// boost, so the recorded boost flag always describes the final units.
    pub fn synthesize(&self, rng: &mut dyn RngCore, names: &mut dyn NameSource) -> RoyaltyRecord {
        let author = names.person_name(rng);
        let book_title = names.title(rng);

        let platform = *Platform::ALL.choose(&mut *rng).unwrap_or(&Platform::AcxExclusive);
        let release_date = self.release_date(rng);
        let months = months_since_release(release_date, self.today);
        let book_price = self.book_price(rng);

        let narrator = *Narrator::ROSTER.choose(&mut *rng).unwrap_or(&Narrator::AI);
        let narrator_split =
            !narrator.is_ai() && rng.gen_bool(self.params.narrator_split_probability);

        let mut units = base_units(platform.is_royalty_share(), months, &mut *rng);
        let rate = resolve_royalty_rate(platform, narrator_split, &mut *rng);
        if needs_low_royalty_override(rate.resolved, narrator_split) {
            units = low_royalty_units(&mut *rng);
        }
        let (monthly_units, new_release_boost) = apply_launch_boost(units, months, &mut *rng);
        let royalty_rate = final_royalty_rate(platform, narrator_split, rate.resolved);

        let cost = production_cost(narrator, platform, &mut *rng);

        let economics = evaluate(&EconomicsInput {
            platform,
            narrator_split,
            royalty_rate,
            monthly_units,
            book_price,
            production_cost: cost.cost,
            release_date,
            months_since_release: months,
        });

        debug!(
            platform = %platform,
            rule = rate.rule,
            royalty_rate = %royalty_rate,
            monthly_units,
            status = %economics.status,
            "synthesized record"
        );

        RoyaltyRecord {
            author,
            book_title,
            release_date,
            platform,
            book_price,
            narrator,
            uses_ai: cost.uses_ai,
            narrator_split,
            monthly_units,
            new_release_boost,
            production_cost: cost.cost,
            royalty_rate,
            monthly_earnings: economics.monthly_earnings,
            months_since_release: months,
            break_even: economics.break_even,
            break_even_status: economics.status,
            break_even_date: economics.break_even_date,
            flags: economics.flags,
        }
    }

    fn release_date(&self, rng: &mut dyn RngCore) -> NaiveDate {
        let back = rng.gen_range(0..=self.params.release_window_days);
        let back = u64::try_from(back).unwrap_or(0);
        self.today.checked_sub_days(Days::new(back)).unwrap_or(self.today)
    }

    fn book_price(&self, rng: &mut dyn RngCore) -> Decimal {
        self.params.price_draw().sample(&mut *rng)
    }
}

/// Generates `config.count` independent records in order.
///
/// # Errors
///
/// Returns [`RoyaltyError::InvalidBatchSize`] for an empty batch and
/// [`RoyaltyError::InvalidParameter`] for unusable distribution bounds.
pub fn generate_batch(
    config: &GeneratorConfig,
    today: NaiveDate,
    rng: &mut dyn RngCore,
    names: &mut dyn NameSource,
) -> Result<Vec<RoyaltyRecord>> {
    if config.count == 0 {
        return Err(RoyaltyError::invalid_batch_size(config.count));
    }
    let synthesizer = RecordSynthesizer::new(config.distribution.clone(), today)?;

    info!(count = config.count, %today, "generating royalty batch");
    let records: Vec<RoyaltyRecord> = (0..config.count)
        .map(|_| synthesizer.synthesize(rng, names))
        .collect();

    Ok(records)
}

/// Tallies over a generated batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub records: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_platform: BTreeMap<String, usize>,
    pub loss_leaders: usize,
    pub risky_combos: usize,
    pub overachievers: usize,
    pub platform_risks: usize,
    pub launch_boosts: usize,
    pub total_monthly_earnings: Decimal,
}

impl BatchSummary {
    #[must_use]
    pub fn from_records(records: &[RoyaltyRecord]) -> Self {
        let mut summary = Self {
            records: records.len(),
            ..Self::default()
        };
        for status in BreakEvenStatus::ALL {
            summary.by_status.insert(status.to_string(), 0);
        }

        for record in records {
            *summary
                .by_status
                .entry(record.break_even_status.to_string())
                .or_default() += 1;
            *summary
                .by_platform
                .entry(record.platform.to_string())
                .or_default() += 1;
            summary.loss_leaders += usize::from(record.flags.loss_leader);
            summary.risky_combos += usize::from(record.flags.risky_combo);
            summary.overachievers += usize::from(record.flags.overachiever);
            summary.platform_risks += usize::from(record.flags.platform_risk);
            summary.launch_boosts += usize::from(record.new_release_boost);
            summary.total_monthly_earnings += record.monthly_earnings;
        }

        summary
    }

    /// Emits the summary at info level.
    pub fn log(&self) {
        info!(
            records = self.records,
            loss_leaders = self.loss_leaders,
            risky_combos = self.risky_combos,
            overachievers = self.overachievers,
            platform_risks = self.platform_risks,
            launch_boosts = self.launch_boosts,
            total_monthly_earnings = %self.total_monthly_earnings.round_dp(2),
            "batch summary"
        );
        for (status, count) in &self.by_status {
            info!("  {status}: {count}");
        }
    }
}
