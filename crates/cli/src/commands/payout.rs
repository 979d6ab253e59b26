//! AYCL payout command.
//!
//! Prints the per-book author/narrator payout for a subscription fee.

use anyhow::{anyhow, Result};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use royalty_gen_core::{simulate_aycl_royalty, AyclDefaults, PayoutShare};

/// Arguments for the payout command.
#[derive(Args, Debug, Clone)]
pub struct PayoutArgs {
    /// Monthly subscription fee
    #[arg(long, default_value_t = AyclDefaults::default().monthly_fee)]
    pub fee: Decimal,

    /// Books listened to in the month
    #[arg(
        long,
        default_value_t = AyclDefaults::default().books_listened,
        allow_negative_numbers = true
    )]
    pub listens: i64,

    /// Author keeps the whole pool; narrator is paid nothing
    #[arg(long)]
    pub no_split: bool,

    /// Output format: text, json (default: text)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct PayoutReport {
    monthly_fee: Decimal,
    books_listened: i64,
    narrator_split: bool,
    author: Decimal,
    narrator: Decimal,
}

/// Formats a payout for display.
///
/// # Errors
/// Returns error for an unknown format.
pub fn render_payout(args: &PayoutArgs, share: &PayoutShare) -> Result<String> {
    match args.format.to_lowercase().as_str() {
        "text" => Ok(format!(
            "Fee ${} over {} books (narrator split: {})\n  Author:   ${:.2}\n  Narrator: ${:.2}",
            args.fee,
            args.listens,
            if args.no_split { "no" } else { "yes" },
            share.author,
            share.narrator
        )),
        "json" => {
            let report = PayoutReport {
                monthly_fee: args.fee,
                books_listened: args.listens,
                narrator_split: !args.no_split,
                author: share.author,
                narrator: share.narrator,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        other => Err(anyhow!(
            "Invalid format: '{}'. Valid values: text, json",
            other
        )),
    }
}

/// Run the payout command.
pub fn run_payout(args: PayoutArgs) -> Result<()> {
    let share = simulate_aycl_royalty(args.fee, args.listens, !args.no_split)?;
    info!(
        "AYCL payout: author {} narrator {}",
        share.author, share.narrator
    );
    println!("{}", render_payout(&args, &share)?);
    Ok(())
}
