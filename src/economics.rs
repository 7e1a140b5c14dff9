//! Consumed interfaces of the economics collaborators.
//!
//! The cryptographic core does not depend on anything in this module; it
//! exists because the surrounding application pairs the proof system with
//! simple monetary calculators. Only the interfaces are defined here — a
//! concrete HTTP price oracle belongs to the application, not this crate.

/// Errors a price oracle implementation may surface.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// The remote ticker could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not parseable.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The response parsed but did not match the expected schema.
    #[error("Schema error: {0}")]
    Schema(String),
}

/// A source of the current market price, implemented by the application.
pub trait PriceOracle {
    /// Fetches the current market price in the oracle's quote currency.
    fn fetch_price(&self) -> Result<f64, OracleError>;
}

/// Number of blocks between block-reward halvings.
const HALVING_INTERVAL: u64 = 210_000;

/// Block reward before the first halving, in BTC.
const INITIAL_REWARD: f64 = 50.0;

/// After 64 halvings the reward underflows to zero outright.
const MAX_HALVINGS: u64 = 64;

/// Pure block-reward halving schedule.
#[derive(Clone, Debug)]
pub struct RewardSchedule {
    initial_reward: f64,
    halving_interval: u64,
}

impl RewardSchedule {
    /// The Bitcoin mainnet schedule: 50 BTC halving every 210 000 blocks.
    pub fn new() -> Self {
        Self {
            initial_reward: INITIAL_REWARD,
            halving_interval: HALVING_INTERVAL,
        }
    }

    /// Returns the block reward in BTC at the given block height.
    pub fn reward_at(&self, height: u64) -> f64 {
        let halvings = height / self.halving_interval;
        if halvings >= MAX_HALVINGS {
            return 0.0;
        }
        self.initial_reward / (1u64 << halvings) as f64
    }
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_schedule_halves() {
        let schedule = RewardSchedule::new();
        assert_eq!(schedule.reward_at(0), 50.0);
        assert_eq!(schedule.reward_at(209_999), 50.0);
        assert_eq!(schedule.reward_at(210_000), 25.0);
        assert_eq!(schedule.reward_at(420_000), 12.5);
        assert_eq!(schedule.reward_at(630_000), 6.25);
    }

    #[test]
    fn reward_vanishes_after_final_halving() {
        let schedule = RewardSchedule::new();
        assert_eq!(schedule.reward_at(64 * 210_000), 0.0);
        assert_eq!(schedule.reward_at(u64::MAX), 0.0);
    }

    #[test]
    fn oracle_errors_format() {
        let err = OracleError::Schema("missing field `price`".to_string());
        assert!(err.to_string().contains("Schema"));
    }
}
