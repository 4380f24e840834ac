//! Text handling for bookmerge.
//!
//! - [`normalize`] and [`tokens`]: the comparison-stable form of free text
//! - [`IdentityMatcher`]: decides whether two strings (or two delimited
//!   name lists) denote the same thing
//! - name and title cleanup used before storage and for file naming
//!
//! Every function here is total: absent or blank input yields an empty
//! result, never an error.

mod clean;
mod matcher;
mod normalize;

pub use clean::{
    FILE_NAME_MAX_LENGTH, clean_author, clean_title, file_name_from_texts, is_blank,
    normalize_names, split_list, split_names, title_case,
};
pub use matcher::{DEFAULT_MATCH_THRESHOLD, IdentityMatcher};
pub use normalize::{normalize, tokens};
