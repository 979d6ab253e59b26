//! CLI commands for the royalty fixture generator.

pub mod generate;
pub mod payout;

pub use generate::{run_generate, GenerateArgs};
pub use payout::{run_payout, PayoutArgs};
