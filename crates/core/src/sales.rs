//! Monthly sales volume model.
//!
//! Units depend on platform reach and how long the title has been out.
//! ACX Royalty Share titles sell from a strictly lower band in every bucket.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of a month for elapsed-time bucketing.
pub const DAYS_PER_MONTH: i64 = 30;

/// Probability a title under a month old gets the launch boost.
pub const LAUNCH_BOOST_PROBABILITY: f64 = 0.5;

/// Launch boost multiplier, in percent.
pub const LAUNCH_BOOST_PERCENT: u32 = 130;

/// Inclusive integer range of monthly units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRange {
    pub min: u32,
    pub max: u32,
}

impl UnitRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    #[must_use]
    pub const fn contains(&self, units: u32) -> bool {
        units >= self.min && units <= self.max
    }
}

/// Elapsed-time bucket with per-platform unit ranges.
#[derive(Debug, Clone, Copy)]
pub struct VolumeBand {
    /// Exclusive upper bound on months since release; `None` for the last band.
    pub below_months: Option<i64>,
    pub standard: UnitRange,
    pub royalty_share: UnitRange,
}

impl VolumeBand {
    fn covers(&self, months: i64) -> bool {
        self.below_months.map_or(true, |limit| months < limit)
    }
}

/// Buckets ordered by age, first match wins.
pub static VOLUME_BANDS: [VolumeBand; 4] = [
    VolumeBand {
        below_months: Some(1),
        standard: UnitRange::new(300, 1000),
        royalty_share: UnitRange::new(150, 600),
    },
    VolumeBand {
        below_months: Some(3),
        standard: UnitRange::new(200, 800),
        royalty_share: UnitRange::new(100, 450),
    },
    VolumeBand {
        below_months: Some(6),
        standard: UnitRange::new(100, 600),
        royalty_share: UnitRange::new(50, 300),
    },
    VolumeBand {
        below_months: None,
        standard: UnitRange::new(50, 400),
        royalty_share: UnitRange::new(20, 200),
    },
];

/// Rare breakout month for a low-royalty title.
pub const LOW_ROYALTY_BREAKOUT: UnitRange = UnitRange::new(500, 800);
pub const LOW_ROYALTY_BREAKOUT_PROBABILITY: f64 = 0.05;
/// Typical month for a low-royalty title.
pub const LOW_ROYALTY_TYPICAL: UnitRange = UnitRange::new(20, 300);

/// Whole 30-day blocks between release and `today`; 0 for future releases.
#[must_use]
pub fn months_since_release(release: NaiveDate, today: NaiveDate) -> i64 {
    let days = (today - release).num_days();
    days.max(0).div_euclid(DAYS_PER_MONTH)
}

/// Band covering `months`.
#[must_use]
pub fn volume_band(months: i64) -> &'static VolumeBand {
    VOLUME_BANDS
        .iter()
        .find(|band| band.covers(months))
        .unwrap_or(&VOLUME_BANDS[VOLUME_BANDS.len() - 1])
}

/// Samples base monthly units before any override or boost.
pub fn base_units<R: Rng + ?Sized>(royalty_share: bool, months: i64, rng: &mut R) -> u32 {
    let band = volume_band(months);
    let range = if royalty_share {
        band.royalty_share
    } else {
        band.standard
    };
    range.sample(rng)
}

/// Resamples units for a split title paying a low royalty.
pub fn low_royalty_units<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_bool(LOW_ROYALTY_BREAKOUT_PROBABILITY) {
        LOW_ROYALTY_BREAKOUT.sample(rng)
    } else {
        LOW_ROYALTY_TYPICAL.sample(rng)
    }
}

/// Applies the new-release boost from a single draw.
///
/// Returns the (possibly boosted) units and whether the boost was applied.
/// The flag and the multiplier always come from the same draw.
pub fn apply_launch_boost<R: Rng + ?Sized>(units: u32, months: i64, rng: &mut R) -> (u32, bool) {
    if months >= 1 {
        return (units, false);
    }
    if rng.gen_bool(LAUNCH_BOOST_PROBABILITY) {
        let boosted = u64::from(units) * u64::from(LAUNCH_BOOST_PERCENT) / 100;
        (u32::try_from(boosted).unwrap_or(u32::MAX), true)
    } else {
        (units, false)
    }
}
