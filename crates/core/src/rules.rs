//! Declarative rule tables.
//!
//! Each scenario cascade (royalty rate, production cost) is an ordered table
//! of `condition -> draw` pairs evaluated first-match-wins. Tables always end
//! in a catch-all so resolution never falls through.

use rand::Rng;
use rust_decimal::Decimal;

use crate::error::{Result, RoyaltyError};

/// A value distribution attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Draw {
    /// Always the same value.
    Fixed(Decimal),
    /// Uniform over `[min, max]` on a grid of `10^-scale` steps.
    Uniform {
        min: Decimal,
        max: Decimal,
        scale: u32,
    },
    /// `hit` with the given probability, otherwise `miss`.
    Chance {
        probability: f64,
        hit: &'static Draw,
        miss: &'static Draw,
    },
}

impl Draw {
    /// Uniform draw in basis points (rates).
    #[must_use]
    pub const fn rate(min: Decimal, max: Decimal) -> Self {
        Self::Uniform { min, max, scale: 4 }
    }

    /// Uniform draw in whole units (dollar amounts).
    #[must_use]
    pub const fn whole(min: Decimal, max: Decimal) -> Self {
        Self::Uniform { min, max, scale: 0 }
    }

    /// Samples a value. Uniform bounds are inclusive.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal {
        match self {
            Self::Fixed(value) => *value,
            Self::Uniform { min, max, scale } => {
                let lo = scaled_mantissa(*min, *scale);
                let hi = scaled_mantissa(*max, *scale);
                let step = rng.gen_range(lo..=hi);
                Decimal::from_i128_with_scale(step, *scale)
            }
            Self::Chance { probability, hit, miss } => {
                if rng.gen_bool(*probability) {
                    hit.sample(rng)
                } else {
                    miss.sample(rng)
                }
            }
        }
    }

    /// Smallest value the draw can produce.
    #[cfg(test)]
    pub(crate) fn lower_bound(&self) -> Decimal {
        match self {
            Self::Fixed(value) => *value,
            Self::Uniform { min, .. } => *min,
            Self::Chance { hit, miss, .. } => hit.lower_bound().min(miss.lower_bound()),
        }
    }

    /// Largest value the draw can produce.
    #[cfg(test)]
    pub(crate) fn upper_bound(&self) -> Decimal {
        match self {
            Self::Fixed(value) => *value,
            Self::Uniform { max, .. } => *max,
            Self::Chance { hit, miss, .. } => hit.upper_bound().max(miss.upper_bound()),
        }
    }

    /// Checks that the draw can be sampled.
    ///
    /// # Errors
    ///
    /// Returns [`RoyaltyError::InvalidParameter`] for inverted bounds, bounds
    /// finer than the sampling grid, or a probability outside `[0, 1]`.
    pub fn validate(&self, name: &str) -> Result<()> {
        match self {
            Self::Fixed(_) => Ok(()),
            Self::Uniform { min, max, scale } => {
                if min > max {
                    return Err(RoyaltyError::invalid_parameter(
                        name,
                        format!("min {min} exceeds max {max}"),
                    ));
                }
                // Rescaling an off-grid bound would round it outside the range.
                let off_grid = [min, max]
                    .into_iter()
                    .find(|bound| bound.normalize().scale() > *scale);
                if let Some(bound) = off_grid {
                    return Err(RoyaltyError::invalid_parameter(
                        name,
                        format!("bound {bound} is finer than {scale} decimal places"),
                    ));
                }
                Ok(())
            }
            Self::Chance { probability, hit, miss } => {
                if !(0.0..=1.0).contains(probability) {
                    return Err(RoyaltyError::invalid_parameter(
                        name,
                        format!("probability {probability} outside [0, 1]"),
                    ));
                }
                hit.validate(name)?;
                miss.validate(name)
            }
        }
    }
}

fn scaled_mantissa(value: Decimal, scale: u32) -> i128 {
    let mut scaled = value;
    scaled.rescale(scale);
    scaled.mantissa()
}

/// One row of a rule table.
pub struct Rule<C> {
    /// Short name, used in logs and tests.
    pub name: &'static str,
    pub applies: fn(&C) -> bool,
    pub draw: Draw,
}

impl<C> std::fmt::Debug for Rule<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("draw", &self.draw)
            .finish()
    }
}

/// Returns the first rule whose condition holds for `ctx`.
pub fn first_match<'a, C>(table: &'a [Rule<C>], ctx: &C) -> Option<&'a Rule<C>> {
    table.iter().find(|rule| (rule.applies)(ctx))
}

/// Condition for catch-all rows.
pub fn always<C>(_: &C) -> bool {
    true
}
