//! Break-even and classification engine.
//!
//! Pure arithmetic over the final economics of a title. Every degenerate
//! input (no units, no earnings, a rate too low to recoup) resolves to a
//! sentinel instead of dividing by zero.
//!
//! Evaluation order matters: earnings feed the horizon, the horizon feeds
//! the status, and the flags read all three.

use chrono::{Days, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{BreakEven, BreakEvenStatus, ClassificationFlags, Platform};
use crate::sales::DAYS_PER_MONTH;

/// Below this rate a title is not expected to recoup its cost.
pub const MIN_BREAK_EVEN_RATE: Decimal = dec!(0.15);
pub const LOSS_LEADER_RATE: Decimal = dec!(0.20);
pub const LOSS_LEADER_UNITS: u32 = 100;
pub const RISKY_COMBO_RATE: Decimal = dec!(0.35);
pub const HIGH_PRODUCTION_COST: Decimal = dec!(5000);
pub const OVERACHIEVER_RATE: Decimal = dec!(0.50);
pub const OVERACHIEVER_UNITS: u32 = 700;
pub const OVERACHIEVER_MAX_HORIZON: Decimal = dec!(2);
pub const OVERACHIEVER_MAX_AGE_MONTHS: i64 = 3;
pub const PLATFORM_RISK_RATE: Decimal = dec!(0.18);

/// Final per-title values the engine works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EconomicsInput {
    pub platform: Platform,
    pub narrator_split: bool,
    /// Net of any narrator share.
    pub royalty_rate: Decimal,
    pub monthly_units: u32,
    pub book_price: Decimal,
    pub production_cost: Decimal,
    pub release_date: NaiveDate,
    pub months_since_release: i64,
}

/// Derived economics for one title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Economics {
    pub monthly_earnings: Decimal,
    pub break_even: BreakEven,
    pub status: BreakEvenStatus,
    pub break_even_date: Option<NaiveDate>,
    pub flags: ClassificationFlags,
}

/// Runs the full engine.
#[must_use]
pub fn evaluate(input: &EconomicsInput) -> Economics {
    let monthly_earnings = monthly_earnings(input.monthly_units, input.book_price, input.royalty_rate);
    let break_even = break_even_horizon(input.production_cost, monthly_earnings, input.royalty_rate);
    let status = break_even_status(
        break_even,
        input.royalty_rate,
        input.monthly_units,
        input.months_since_release,
    );
    let break_even_date = break_even_date(input.release_date, break_even);
    let flags = classify(input, break_even, status);

    Economics {
        monthly_earnings,
        break_even,
        status,
        break_even_date,
        flags,
    }
}

/// `units * price * rate`, exact.
#[must_use]
pub fn monthly_earnings(units: u32, book_price: Decimal, royalty_rate: Decimal) -> Decimal {
    if units == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(units) * book_price * royalty_rate
}

/// Months of earnings needed to recoup `production_cost`.
#[must_use]
pub fn break_even_horizon(
    production_cost: Decimal,
    monthly_earnings: Decimal,
    royalty_rate: Decimal,
) -> BreakEven {
    if monthly_earnings <= Decimal::ZERO && production_cost.is_zero() {
        BreakEven::Months(Decimal::ZERO)
    } else if royalty_rate < MIN_BREAK_EVEN_RATE || monthly_earnings <= Decimal::ZERO {
        BreakEven::Unknown
    } else {
        BreakEven::Months(production_cost / monthly_earnings)
    }
}

/// Status precedence: zero horizon, unknown horizon, unlikely, in progress,
/// broken even.
#[must_use]
pub fn break_even_status(
    break_even: BreakEven,
    royalty_rate: Decimal,
    monthly_units: u32,
    months_since_release: i64,
) -> BreakEvenStatus {
    match break_even {
        BreakEven::Months(m) if m.is_zero() => BreakEvenStatus::AlreadyProfitable,
        BreakEven::Unknown => BreakEvenStatus::Unclear,
        _ if royalty_rate < LOSS_LEADER_RATE && monthly_units < LOSS_LEADER_UNITS => {
            BreakEvenStatus::Unlikely
        }
        BreakEven::Months(m) if m > Decimal::from(months_since_release) => {
            BreakEvenStatus::InProgress
        }
        BreakEven::Months(_) => BreakEvenStatus::BrokenEven,
    }
}

/// Release date plus the horizon in 30-day months, rounded up to a whole day.
#[must_use]
pub fn break_even_date(release_date: NaiveDate, break_even: BreakEven) -> Option<NaiveDate> {
    let months = break_even.months()?;
    let days = (months * Decimal::from(DAYS_PER_MONTH)).ceil().to_u64()?;
    release_date.checked_add_days(Days::new(days))
}

/// Derives the classification flags from the final values.
#[must_use]
pub fn classify(
    input: &EconomicsInput,
    break_even: BreakEven,
    status: BreakEvenStatus,
) -> ClassificationFlags {
    let pending = status.is_pending();
    let rate = input.royalty_rate;
    let cost = input.production_cost;

    let loss_leader = rate < LOSS_LEADER_RATE && input.monthly_units < LOSS_LEADER_UNITS && pending;
    let risky_combo = rate < RISKY_COMBO_RATE && input.narrator_split && cost > HIGH_PRODUCTION_COST;
    let overachiever = rate >= OVERACHIEVER_RATE
        && input.monthly_units > OVERACHIEVER_UNITS
        && break_even
            .months()
            .is_some_and(|m| m < OVERACHIEVER_MAX_HORIZON)
        && input.months_since_release <= OVERACHIEVER_MAX_AGE_MONTHS;
    let platform_risk = input.platform.is_royalty_share()
        && (rate < PLATFORM_RISK_RATE || cost > HIGH_PRODUCTION_COST || pending);

    ClassificationFlags {
        loss_leader,
        risky_combo,
        overachiever,
        platform_risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> EconomicsInput {
        EconomicsInput {
            platform: Platform::AcxExclusive,
            narrator_split: false,
            royalty_rate: dec!(0.40),
            monthly_units: 500,
            book_price: dec!(10.00),
            production_cost: dec!(1000),
            release_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            months_since_release: 6,
        }
    }

    // ============================================================
    // Reference scenarios
    // ============================================================

    #[test]
    fn acx_exclusive_reference_scenario() {
        let economics = evaluate(&input());
        assert_eq!(economics.monthly_earnings, dec!(2000));
        assert_eq!(economics.break_even, BreakEven::Months(dec!(0.5)));
        assert_eq!(economics.status, BreakEvenStatus::BrokenEven);
        assert_eq!(
            economics.break_even_date,
            NaiveDate::from_ymd_opt(2025, 1, 16)
        );
    }

    #[test]
    fn rate_below_threshold_is_unknown() {
        let economics = evaluate(&EconomicsInput {
            royalty_rate: dec!(0.10),
            ..input()
        });
        assert!(economics.monthly_earnings > Decimal::ZERO);
        assert_eq!(economics.break_even, BreakEven::Unknown);
        assert_eq!(economics.status, BreakEvenStatus::Unclear);
        assert_eq!(economics.break_even_date, None);

        let free = evaluate(&EconomicsInput {
            royalty_rate: dec!(0.10),
            production_cost: Decimal::ZERO,
            ..input()
        });
        assert_eq!(free.break_even, BreakEven::Unknown);
    }

    #[test]
    fn zero_cost_zero_earnings_is_already_profitable() {
        let economics = evaluate(&EconomicsInput {
            monthly_units: 0,
            production_cost: Decimal::ZERO,
            ..input()
        });
        assert_eq!(economics.monthly_earnings, Decimal::ZERO);
        assert_eq!(economics.break_even, BreakEven::Months(Decimal::ZERO));
        assert_eq!(economics.status, BreakEvenStatus::AlreadyProfitable);
        assert_eq!(economics.break_even_date, Some(input().release_date));
    }

    #[test]
    fn zero_units_with_cost_never_divides() {
        let economics = evaluate(&EconomicsInput {
            monthly_units: 0,
            ..input()
        });
        assert_eq!(economics.monthly_earnings, Decimal::ZERO);
        assert_eq!(economics.break_even, BreakEven::Unknown);
        assert_eq!(economics.status, BreakEvenStatus::Unclear);
    }

    #[test]
    fn zero_cost_with_earnings_is_already_profitable() {
        let economics = evaluate(&EconomicsInput {
            production_cost: Decimal::ZERO,
            ..input()
        });
        assert_eq!(economics.break_even, BreakEven::Months(Decimal::ZERO));
        assert_eq!(economics.status, BreakEvenStatus::AlreadyProfitable);
    }

    // ============================================================
    // Horizon boundary
    // ============================================================

    #[test]
    fn horizon_known_at_exactly_min_rate() {
        let horizon = break_even_horizon(dec!(1000), dec!(100), MIN_BREAK_EVEN_RATE);
        assert_eq!(horizon, BreakEven::Months(dec!(10)));
        let below = break_even_horizon(dec!(1000), dec!(100), dec!(0.1499));
        assert_eq!(below, BreakEven::Unknown);
    }

    // ============================================================
    // Status precedence
    // ============================================================

    #[test]
    fn unlikely_takes_precedence_over_progress() {
        let status = break_even_status(BreakEven::Months(dec!(40)), dec!(0.19), 99, 2);
        assert_eq!(status, BreakEvenStatus::Unlikely);
        let enough_units = break_even_status(BreakEven::Months(dec!(40)), dec!(0.19), 100, 2);
        assert_eq!(enough_units, BreakEvenStatus::InProgress);
        let enough_rate = break_even_status(BreakEven::Months(dec!(40)), dec!(0.20), 99, 2);
        assert_eq!(enough_rate, BreakEvenStatus::InProgress);
    }

    #[test]
    fn unlikely_even_when_already_past_horizon() {
        let status = break_even_status(BreakEven::Months(dec!(1)), dec!(0.16), 50, 12);
        assert_eq!(status, BreakEvenStatus::Unlikely);
    }

    #[test]
    fn progress_versus_broken_even_boundary() {
        let at = break_even_status(BreakEven::Months(dec!(6)), dec!(0.40), 500, 6);
        assert_eq!(at, BreakEvenStatus::BrokenEven);
        let beyond = break_even_status(BreakEven::Months(dec!(6.01)), dec!(0.40), 500, 6);
        assert_eq!(beyond, BreakEvenStatus::InProgress);
    }

    #[test]
    fn zero_horizon_beats_low_rate_rule() {
        let status = break_even_status(BreakEven::Months(Decimal::ZERO), dec!(0.10), 10, 0);
        assert_eq!(status, BreakEvenStatus::AlreadyProfitable);
    }

    #[test]
    fn break_even_date_rounds_up_to_whole_days() {
        let release = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let date = break_even_date(release, BreakEven::Months(dec!(0.51)));
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 17));
        assert_eq!(break_even_date(release, BreakEven::Unknown), None);
    }

    // ============================================================
    // Classification flags
    // ============================================================

    #[test]
    fn loss_leader_requires_pending_break_even() {
        let pending = EconomicsInput {
            royalty_rate: dec!(0.16),
            monthly_units: 50,
            book_price: dec!(10),
            production_cost: dec!(3000),
            months_since_release: 2,
            ..input()
        };
        assert!(evaluate(&pending).flags.loss_leader);

        let profitable = EconomicsInput {
            production_cost: Decimal::ZERO,
            ..pending
        };
        assert!(!evaluate(&profitable).flags.loss_leader);
    }

    #[test]
    fn risky_combo_needs_split_low_rate_and_high_cost() {
        let risky = EconomicsInput {
            narrator_split: true,
            royalty_rate: dec!(0.20),
            production_cost: dec!(5000.01),
            ..input()
        };
        assert!(evaluate(&risky).flags.risky_combo);
        assert!(!evaluate(&EconomicsInput { narrator_split: false, ..risky }).flags.risky_combo);
        assert!(!evaluate(&EconomicsInput { production_cost: dec!(5000), ..risky }).flags.risky_combo);
        assert!(!evaluate(&EconomicsInput { royalty_rate: dec!(0.35), ..risky }).flags.risky_combo);
    }

    #[test]
    fn overachiever_boundaries() {
        let star = EconomicsInput {
            platform: Platform::BookFunnel,
            royalty_rate: dec!(0.50),
            monthly_units: 701,
            book_price: dec!(10),
            production_cost: dec!(3000),
            months_since_release: 3,
            ..input()
        };
        assert!(evaluate(&star).flags.overachiever);
        assert!(!evaluate(&EconomicsInput { monthly_units: 700, ..star }).flags.overachiever);
        assert!(!evaluate(&EconomicsInput { months_since_release: 4, ..star }).flags.overachiever);
        assert!(!evaluate(&EconomicsInput { royalty_rate: dec!(0.4999), ..star }).flags.overachiever);
        // 701 * 10 * 0.5 = 3505 per month, so 7010 of cost is exactly two months.
        assert!(!evaluate(&EconomicsInput { production_cost: dec!(7010), ..star }).flags.overachiever);
    }

    #[test]
    fn platform_risk_only_for_royalty_share() {
        let share = EconomicsInput {
            platform: Platform::AcxRoyaltyShare,
            royalty_rate: dec!(0.17),
            monthly_units: 400,
            production_cost: dec!(2000),
            months_since_release: 12,
            ..input()
        };
        assert!(evaluate(&share).flags.platform_risk);
        assert!(!evaluate(&EconomicsInput { platform: Platform::Findaway, ..share }).flags.platform_risk);

        let healthy = EconomicsInput {
            royalty_rate: dec!(0.20),
            ..share
        };
        assert_eq!(evaluate(&healthy).status, BreakEvenStatus::BrokenEven);
        assert!(!evaluate(&healthy).flags.platform_risk);
        assert!(evaluate(&EconomicsInput { production_cost: dec!(5500), ..healthy }).flags.platform_risk);
        assert!(evaluate(&EconomicsInput { months_since_release: 0, ..healthy }).flags.platform_risk);
    }
}
