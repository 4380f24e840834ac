use crate::clean::split_list;
use crate::normalize::{normalize, tokens};

/// Token-overlap threshold used when no configuration overrides it.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.8;

/// Decides whether two differently-sourced strings name the same thing.
///
/// Two values match when their normalized forms are equal, or when the
/// overlap coefficient of their token sets, `|A ∩ B| / min(|A|, |B|)`,
/// reaches the threshold. An absent value never matches anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentityMatcher {
    threshold: f64,
}

impl Default for IdentityMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl IdentityMatcher {
    /// Creates a matcher with the given overlap threshold.
    ///
    /// Values outside `(0, 1]` are clamped into that range; configuration
    /// loading rejects them before they get here.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_MATCH_THRESHOLD
        } else {
            threshold.clamp(f64::EPSILON, 1.0)
        };
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn fuzzy_match(&self, a: Option<&str>, b: Option<&str>) -> bool {
        let (Some(a), Some(b)) = (a, b) else {
            return false;
        };
        if a == b || normalize(a) == normalize(b) {
            return true;
        }
        let left = tokens(a);
        let right = tokens(b);
        let smaller = left.len().min(right.len());
        if smaller == 0 {
            return false;
        }
        let shared = left.intersection(&right).count();
        shared as f64 / smaller as f64 >= self.threshold
    }

    /// Treats each side as a delimited list and matches when any entry on
    /// one side fuzzy-matches any entry on the other.
    pub fn fuzzy_list_match(&self, a: Option<&str>, b: Option<&str>) -> bool {
        let (Some(a), Some(b)) = (a, b) else {
            return false;
        };
        let left = split_list(a);
        let right = split_list(b);
        left.iter().any(|l| {
            right
                .iter()
                .any(|r| self.fuzzy_match(Some(l.as_str()), Some(r.as_str())))
        })
    }
}
