//! All-You-Can-Listen (AYCL) payout share.
//!
//! A subscriber's monthly fee is divided evenly across the books they
//! listened to, the platform keeps its cut, and the rest forms the
//! author/narrator pool.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoyaltyError};

/// Share of per-book revenue retained by the platform.
pub const PLATFORM_CUT: Decimal = dec!(0.5);

/// Typical subscription inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyclDefaults {
    pub monthly_fee: Decimal,
    pub books_listened: i64,
    pub narrator_split: bool,
}

impl Default for AyclDefaults {
    fn default() -> Self {
        Self {
            monthly_fee: dec!(14.95),
            books_listened: 5,
            narrator_split: true,
        }
    }
}

/// Per-book earnings for author and narrator, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutShare {
    pub author: Decimal,
    pub narrator: Decimal,
}

/// Computes the per-book AYCL payout.
///
/// The author is paid the pool share; with a narrator split the narrator is
/// paid a matching share, otherwise nothing. Amounts are rounded to cents,
/// half away from zero.
///
/// # Errors
///
/// Returns [`RoyaltyError::InvalidListenCount`] when `books_listened <= 0`
/// and [`RoyaltyError::InvalidMonthlyFee`] for a negative fee.
///
/// # Examples
/// ```
/// use royalty_gen_core::payout::simulate_aycl_royalty;
/// use rust_decimal_macros::dec;
///
/// let share = simulate_aycl_royalty(dec!(14.95), 10, true).unwrap();
/// assert_eq!((share.author, share.narrator), (dec!(0.75), dec!(0.75)));
/// ```
pub fn simulate_aycl_royalty(
    monthly_fee: Decimal,
    books_listened: i64,
    narrator_split: bool,
) -> Result<PayoutShare> {
    if books_listened <= 0 {
        return Err(RoyaltyError::invalid_listen_count(books_listened));
    }
    if monthly_fee < Decimal::ZERO {
        return Err(RoyaltyError::invalid_monthly_fee(monthly_fee));
    }

    let revenue_per_book = monthly_fee / Decimal::from(books_listened);
    let pool = revenue_per_book * (Decimal::ONE - PLATFORM_CUT);
    let author = to_cents(pool);
    let narrator = if narrator_split { author } else { Decimal::ZERO };

    Ok(PayoutShare { author, narrator })
}

fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
