use serde::{Deserialize, Serialize};

/// One provider-quality pattern. Earlier entries rank higher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankPattern {
    pub name: String,
    pub pattern: String,
}

/// A rewrite from a known low-quality URL shape to its canonical form.
/// `replacement` may reference capture groups as `${1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRewrite {
    pub pattern: String,
    pub replacement: String,
}

/// Ranking table: provider patterns, highest first, and canonicalizing
/// rewrites applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    pub patterns: Vec<RankPattern>,
    pub rewrites: Vec<UrlRewrite>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            patterns: vec![
                pattern("media-audiobookstore", "(?i)//media[.]audiobookstore[.]com/"),
                pattern("cdn-storygraph", "(?i)//cdn[.]storygraph[.]com/"),
                pattern("gr-assets", "(?i)//i[.]gr-assets[.]com/"),
            ],
            rewrites: vec![
                rewrite(
                    "//s3-us-west-2[.]amazonaws[.]com/tabs[.]web[.]media/",
                    "//media.audiobookstore.com/",
                ),
                rewrite("images-na[.]ssl-images-amazon[.]com", "i.gr-assets.com"),
                rewrite(r"^(.+?i[.]gr-assets[.]com.+?[.])_[^/]+?_[.]", "${1}"),
                rewrite("-square-[0-9]+[.]", "-square-1536."),
            ],
        }
    }
}

fn pattern(name: &str, pattern: &str) -> RankPattern {
    RankPattern {
        name: name.to_string(),
        pattern: pattern.to_string(),
    }
}

fn rewrite(pattern: &str, replacement: &str) -> UrlRewrite {
    UrlRewrite {
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
    }
}
