//! Royalty rate resolution.
//!
//! Maps `(platform, narrator split)` to the royalty rate a platform pays,
//! then applies the narrator's share exactly once.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::Platform;
use crate::rules::{always, first_match, Draw, Rule};

/// Resolved rates under this trigger unit resampling for split titles.
pub const LOW_ROYALTY_THRESHOLD: Decimal = dec!(0.25);

/// Inputs the rate table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateContext {
    pub platform: Platform,
    pub narrator_split: bool,
}

fn is_acx_exclusive(ctx: &RateContext) -> bool {
    ctx.platform == Platform::AcxExclusive
}

fn is_royalty_share_split(ctx: &RateContext) -> bool {
    ctx.platform == Platform::AcxRoyaltyShare && ctx.narrator_split
}

fn is_royalty_share(ctx: &RateContext) -> bool {
    ctx.platform == Platform::AcxRoyaltyShare
}

fn is_findaway(ctx: &RateContext) -> bool {
    ctx.platform == Platform::Findaway
}

fn is_bookfunnel(ctx: &RateContext) -> bool {
    ctx.platform == Platform::BookFunnel
}

/// Platform payout conventions, first match wins.
///
/// The Spotify row is also the AYCL catch-all.
pub static RATE_RULES: [Rule<RateContext>; 6] = [
    Rule {
        name: "acx_exclusive",
        applies: is_acx_exclusive,
        draw: Draw::Fixed(dec!(0.40)),
    },
    Rule {
        name: "acx_royalty_share_split",
        applies: is_royalty_share_split,
        draw: Draw::rate(dec!(0.10), dec!(0.18)),
    },
    Rule {
        name: "acx_royalty_share",
        applies: is_royalty_share,
        draw: Draw::rate(dec!(0.18), dec!(0.25)),
    },
    Rule {
        name: "findaway",
        applies: is_findaway,
        draw: Draw::rate(dec!(0.30), dec!(0.45)),
    },
    // Direct sales channel, no revenue share.
    Rule {
        name: "bookfunnel",
        applies: is_bookfunnel,
        draw: Draw::Fixed(dec!(1.00)),
    },
    Rule {
        name: "aycl",
        applies: always,
        draw: Draw::rate(dec!(0.30), dec!(0.50)),
    },
];

/// A platform rate before the narrator share is taken out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateResolution {
    /// Name of the rule that produced the rate.
    pub rule: &'static str,
    pub resolved: Decimal,
}

/// Samples the platform rate for a title.
pub fn resolve_royalty_rate<R: Rng + ?Sized>(
    platform: Platform,
    narrator_split: bool,
    rng: &mut R,
) -> RateResolution {
    let ctx = RateContext {
        platform,
        narrator_split,
    };
    let rule = first_match(&RATE_RULES, &ctx).unwrap_or(&RATE_RULES[RATE_RULES.len() - 1]);
    RateResolution {
        rule: rule.name,
        resolved: rule.draw.sample(rng),
    }
}

/// Whether a split title's resolved rate is low enough to depress sales.
#[must_use]
pub fn needs_low_royalty_override(resolved: Decimal, narrator_split: bool) -> bool {
    narrator_split && resolved < LOW_ROYALTY_THRESHOLD
}

/// Takes the narrator's share out of the royalty rate.
///
/// Split titles are halved once. ACX Royalty Share split rates are already
/// net of the narrator share and pass through unchanged.
#[must_use]
pub fn final_royalty_rate(platform: Platform, narrator_split: bool, resolved: Decimal) -> Decimal {
    if narrator_split && !platform.is_royalty_share() {
        resolved / dec!(2)
    } else {
        resolved
    }
}
