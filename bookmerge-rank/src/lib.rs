//! Source-quality ranking.
//!
//! When two sources disagree about a value that has no richer merge rule
//! (chiefly cover image URLs), [`SourceRanker`] picks the one from the more
//! trustworthy provider. Known low-quality URL shapes are rewritten to
//! their canonical form by [`SourceRanker::fixup`] before ranking, so the
//! chosen value is always canonical.

mod config;
mod error;
mod ranker;

pub use config::{RankConfig, RankPattern, UrlRewrite};
pub use error::{RankError, RankResult};
pub use ranker::{RANK_DEFAULT, SourceRanker};
