//! vev-ranking: top-N leaderboard of name/score records.
//!
//! - [`Ranking`] keeps at most `capacity` records (default [`MAX_RECORDS`]),
//!   highest score first.
//! - [`Record`] is an optionally named score.

pub mod ranking;
pub mod record;

pub use ranking::{Ranking, RankingError, MAX_RECORDS};
pub use record::Record;

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
