//! Error types for the royalty rule engine.
//!
//! Degenerate economics (zero units, zero earnings, very low royalty rates)
//! are not errors; they resolve to sentinel outputs in the break-even engine.
//! Only invalid parameters surface here.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the royalty generator.
#[derive(Debug, Error)]
pub enum RoyaltyError {
    /// Payout share requested for a non-positive number of listened books.
    #[error("invalid listen count: {listens} (must be greater than 0)")]
    InvalidListenCount {
        /// The rejected listen count.
        listens: i64,
    },

    /// Subscription fee below zero.
    #[error("invalid monthly fee: {fee} (must not be negative)")]
    InvalidMonthlyFee {
        /// The rejected fee.
        fee: Decimal,
    },

    /// Batch requested with no records.
    #[error("invalid batch size: {count} (must be at least 1)")]
    InvalidBatchSize {
        /// The rejected record count.
        count: usize,
    },

    /// Distribution parameters that cannot be sampled.
    #[error("invalid distribution parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl RoyaltyError {
    /// Creates an invalid listen count error.
    pub fn invalid_listen_count(listens: i64) -> Self {
        Self::InvalidListenCount { listens }
    }

    /// Creates an invalid monthly fee error.
    pub fn invalid_monthly_fee(fee: Decimal) -> Self {
        Self::InvalidMonthlyFee { fee }
    }

    /// Creates an invalid batch size error.
    pub fn invalid_batch_size(count: usize) -> Self {
        Self::InvalidBatchSize { count }
    }

    /// Creates an invalid distribution parameter error.
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for royalty operations.
pub type Result<T> = std::result::Result<T, RoyaltyError>;
