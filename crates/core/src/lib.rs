pub mod breakeven;
pub mod config;
pub mod config_loader;
pub mod cost;
pub mod error;
pub mod model;
pub mod names;
pub mod payout;
pub mod rate;
pub mod rules;
pub mod sales;
pub mod synth;

pub use breakeven::{evaluate, Economics, EconomicsInput};
pub use config::{DistributionParams, ExportFormat, GeneratorConfig};
pub use config_loader::ConfigLoader;
pub use error::{Result, RoyaltyError};
pub use model::{
    BreakEven, BreakEvenStatus, ClassificationFlags, Narrator, Platform, RoyaltyRecord,
};
pub use names::{FixedNames, NameSource, WordListNames};
pub use payout::{simulate_aycl_royalty, AyclDefaults, PayoutShare};
pub use synth::{generate_batch, BatchSummary, RecordSynthesizer};
