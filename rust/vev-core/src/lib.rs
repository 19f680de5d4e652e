//! vev-core: configuration shared by the ranking and ferry seating crates.

pub mod config;

pub use config::{
    checked_seats, BarcaConfig, Config, ConfigError, RankingConfig, DEFAULT_RANKING_CAPACITY,
    DEFAULT_ROWS, DEFAULT_SEATS_PER_ROW,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
