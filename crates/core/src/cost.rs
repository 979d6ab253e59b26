//! Production cost model.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{Narrator, Platform};
use crate::rules::{always, first_match, Draw, Rule};

const BUNDLED_SYNTHESIS: Draw = Draw::Fixed(dec!(0));
const PAID_SYNTHESIS: Draw = Draw::whole(dec!(100), dec!(1500));

/// Extra spend needed to market a lower-royalty ACX Royalty Share title.
pub const ROYALTY_SHARE_SURCHARGE: Draw = Draw::Uniform {
    min: dec!(1.10),
    max: dec!(1.50),
    scale: 2,
};

fn is_ai(narrator: &Narrator) -> bool {
    narrator.is_ai()
}

fn is_high_end(narrator: &Narrator) -> bool {
    narrator.is_high_end()
}

/// Narrator cost tiers, first match wins.
pub static COST_RULES: [Rule<Narrator>; 3] = [
    Rule {
        name: "ai_narrator",
        applies: is_ai,
        draw: Draw::Chance {
            probability: 0.40,
            hit: &BUNDLED_SYNTHESIS,
            miss: &PAID_SYNTHESIS,
        },
    },
    Rule {
        name: "high_end_narrator",
        applies: is_high_end,
        draw: Draw::whole(dec!(4000), dec!(8000)),
    },
    Rule {
        name: "standard_narrator",
        applies: always,
        draw: Draw::whole(dec!(2000), dec!(4000)),
    },
];

/// Sampled production cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostResolution {
    pub cost: Decimal,
    pub uses_ai: bool,
}

/// Samples the production cost for a narrator on a platform.
pub fn production_cost<R: Rng + ?Sized>(
    narrator: Narrator,
    platform: Platform,
    rng: &mut R,
) -> CostResolution {
    let rule = first_match(&COST_RULES, &narrator).unwrap_or(&COST_RULES[COST_RULES.len() - 1]);
    let mut cost = rule.draw.sample(rng);
    if platform.is_royalty_share() {
        cost = (cost * ROYALTY_SHARE_SURCHARGE.sample(rng)).round_dp(2);
    }
    CostResolution {
        cost,
        uses_ai: narrator.is_ai(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn named(name: &str) -> Narrator {
        Narrator::from_name(name).unwrap()
    }

    #[test]
    fn ai_narrator_is_sometimes_free_and_always_flagged() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let samples: Vec<_> = (0..500)
            .map(|_| production_cost(Narrator::AI, Platform::Findaway, &mut rng))
            .collect();
        assert!(samples.iter().all(|s| s.uses_ai));
        assert!(samples.iter().any(|s| s.cost.is_zero()));
        for sample in samples.iter().filter(|s| !s.cost.is_zero()) {
            assert!(sample.cost >= dec!(100) && sample.cost <= dec!(1500));
        }
    }

    #[test]
    fn high_end_narrator_cost_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let sample = production_cost(named("Evelyn Hart"), Platform::AcxExclusive, &mut rng);
            assert!(!sample.uses_ai);
            assert!(sample.cost >= dec!(4000) && sample.cost <= dec!(8000));
        }
    }

    #[test]
    fn standard_narrator_cost_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let sample = production_cost(named("Marcus Bell"), Platform::Spotify, &mut rng);
            assert!(sample.cost >= dec!(2000) && sample.cost <= dec!(4000));
        }
    }

    #[test]
    fn royalty_share_surcharge_scales_cost() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let sample = production_cost(named("Marcus Bell"), Platform::AcxRoyaltyShare, &mut rng);
            assert!(sample.cost >= dec!(2200) && sample.cost <= dec!(6000), "{}", sample.cost);
            assert!(sample.cost.scale() <= 2);
        }
    }

    #[test]
    fn surcharge_keeps_free_ai_production_free() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let free = (0..200)
            .map(|_| production_cost(Narrator::AI, Platform::AcxRoyaltyShare, &mut rng))
            .find(|s| s.cost.is_zero());
        assert!(free.is_some());
    }

    #[test]
    fn cost_table_is_valid() {
        for rule in &COST_RULES {
            rule.draw.validate(rule.name).unwrap();
            assert!(rule.draw.lower_bound() >= Decimal::ZERO);
        }
        ROYALTY_SHARE_SURCHARGE.validate("surcharge").unwrap();
    }
}
