use crate::config::RankConfig;
use crate::error::{RankError, RankResult};
use regex_lite::Regex;
use tracing::debug;
use url::Url;

/// Rank of a value that matches no configured provider pattern.
pub const RANK_DEFAULT: i32 = -1;

/// Orders candidate values by provider quality.
#[derive(Debug, Clone)]
pub struct SourceRanker {
    patterns: Vec<(String, Regex)>,
    rewrites: Vec<(Regex, String)>,
}

fn compile(pattern: &str) -> RankResult<Regex> {
    Regex::new(pattern).map_err(|e| RankError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

impl SourceRanker {
    /// Compiles every pattern and rewrite in `config`.
    pub fn new(config: &RankConfig) -> RankResult<Self> {
        let patterns = config
            .patterns
            .iter()
            .map(|p| Ok((p.name.clone(), compile(&p.pattern)?)))
            .collect::<RankResult<Vec<_>>>()?;
        let rewrites = config
            .rewrites
            .iter()
            .map(|r| Ok((compile(&r.pattern)?, r.replacement.clone())))
            .collect::<RankResult<Vec<_>>>()?;
        Ok(Self { patterns, rewrites })
    }

    /// Rank of `value`: `len - index` of the first matching pattern, or
    /// [`RANK_DEFAULT`].
    #[must_use]
    pub fn rank(&self, value: &str) -> i32 {
        let count = self.patterns.len() as i32;
        self.patterns
            .iter()
            .position(|(_, re)| re.is_match(value))
            .map_or(RANK_DEFAULT, |index| count - index as i32)
    }

    /// Name of the first pattern matching `value`.
    pub fn provider(&self, value: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(value))
            .map(|(name, _)| name.as_str())
    }

    /// Applies every rewrite in order.
    #[must_use]
    pub fn fixup(&self, value: &str) -> String {
        self.rewrites
            .iter()
            .fold(value.to_string(), |acc, (re, replacement)| {
                re.replace_all(&acc, replacement.as_str()).into_owned()
            })
    }

    /// Picks the better of two candidates, canonicalized.
    ///
    /// An absent side yields the other; otherwise the higher rank wins and
    /// `b` wins ties.
    pub fn choose(&self, a: Option<&str>, b: Option<&str>) -> Option<String> {
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(self.fixup(a)),
            (None, Some(b)) => Some(self.fixup(b)),
            (Some(a), Some(b)) => {
                let fa = self.fixup(a);
                let fb = self.fixup(b);
                let ra = self.rank(&fa);
                let rb = self.rank(&fb);
                if ra != rb {
                    debug!("Ranked {} ({}) against {} ({})", fa, ra, fb, rb);
                }
                Some(if rb >= ra { fb } else { fa })
            }
        }
    }

    /// [`choose`](Self::choose) for URLs. A rewrite that produces an
    /// unparseable URL falls back to the chosen input unchanged.
    pub fn choose_url(&self, a: Option<&Url>, b: Option<&Url>) -> Option<Url> {
        let chosen = self.choose(a.map(Url::as_str), b.map(Url::as_str))?;
        match Url::parse(&chosen) {
            Ok(url) => Some(url),
            Err(_) => {
                let ra = a.map_or(RANK_DEFAULT, |u| self.rank(u.as_str()));
                let rb = b.map_or(RANK_DEFAULT, |u| self.rank(u.as_str()));
                match (a, b) {
                    (Some(a), Some(b)) => Some(if rb >= ra { b } else { a }.clone()),
                    (a, b) => a.or(b).cloned(),
                }
            }
        }
    }

    /// Canonicalizes a single URL.
    pub fn fixup_url(&self, url: &Url) -> Url {
        Url::parse(&self.fixup(url.as_str())).unwrap_or_else(|_| url.clone())
    }

    /// Folds [`choose`](Self::choose) over any number of candidates.
    pub fn choose_best<'a, I>(&self, candidates: I) -> Option<String>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        candidates
            .into_iter()
            .fold(None, |best: Option<String>, next| self.choose(best.as_deref(), next))
    }

    /// Folds [`choose_url`](Self::choose_url) over any number of candidates.
    pub fn choose_best_url<'a, I>(&self, candidates: I) -> Option<Url>
    where
        I: IntoIterator<Item = Option<&'a Url>>,
    {
        candidates
            .into_iter()
            .fold(None, |best: Option<Url>, next| self.choose_url(best.as_ref(), next))
    }
}
