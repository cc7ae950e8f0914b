use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const WILDCARD: char = '*';
const WILDCARD_PREFIX: &str = "*.";

/// A single configured origin pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPattern {
    /// Matches only an identical origin string.
    Exact(String),
    /// `*.<suffix>` form. `base` is the pattern with the first `*.` removed and
    /// matches any origin that ends with it.
    Wildcard { pattern: String, base: String },
}

impl OriginPattern {
    pub fn parse(value: &str) -> Self {
        if value.contains(WILDCARD) {
            Self::Wildcard {
                pattern: value.to_owned(),
                base: value.replacen(WILDCARD_PREFIX, "", 1),
            }
        } else {
            Self::Exact(value.to_owned())
        }
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            OriginPattern::Exact(value) => value,
            OriginPattern::Wildcard { pattern, .. } => pattern,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, OriginPattern::Wildcard { .. })
    }

    /// Plain suffix comparison. There is no `.` boundary check, so
    /// `*.example.com` also accepts `https://evilexample.com`.
    pub fn matches(&self, origin: &str) -> bool {
        match self {
            OriginPattern::Exact(value) => value == origin,
            OriginPattern::Wildcard { base, .. } => origin.ends_with(base.as_str()),
        }
    }
}

impl fmt::Display for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for OriginPattern {
    fn from(value: &str) -> Self {
        OriginPattern::parse(value)
    }
}

impl From<String> for OriginPattern {
    fn from(value: String) -> Self {
        OriginPattern::parse(&value)
    }
}

/// Ordered origin patterns. Duplicates are kept as configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    patterns: Vec<OriginPattern>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `raw` on commas, trims every entry and drops the empty ones.
    pub fn parse(raw: &str) -> Self {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(OriginPattern::parse)
            .collect()
    }

    pub fn patterns(&self) -> &[OriginPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First pattern accepting `origin`, in configuration order.
    pub fn find_match(&self, origin: &str) -> Option<&OriginPattern> {
        self.patterns
            .iter()
            .filter(|pattern| !pattern.as_str().is_empty())
            .find(|pattern| pattern.matches(origin))
    }

    /// Requests without an origin are not subject to browser enforcement and
    /// are always allowed.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) if origin.is_empty() => true,
            Some(origin) => self.find_match(origin).is_some(),
        }
    }
}

/// Free-standing form of [`AllowList::is_allowed`].
pub fn is_allowed(origin: Option<&str>, patterns: &AllowList) -> bool {
    patterns.is_allowed(origin)
}

impl FromStr for AllowList {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(AllowList::parse(raw))
    }
}

impl FromIterator<OriginPattern> for AllowList {
    fn from_iter<I: IntoIterator<Item = OriginPattern>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for AllowList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(OriginPattern::parse).collect()
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, pattern) in self.patterns.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            f.write_str(pattern.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "allow_list_test.rs"]
mod allow_list_test;
