//! URL path patterns.
//!
//! A pattern is a `/`-separated list of segments. A segment is either static
//! (`divisions`) or named (`:id`). Named segments capture exactly one
//! non-empty path segment, percent-decoded.

use std::collections::BTreeMap;
use std::fmt;

/// Captured named segments, keyed by parameter name.
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Pattern must start with '/': '{0}'")]
    MissingLeadingSlash(String),

    #[error("Empty segment in pattern: '{0}'")]
    EmptySegment(String),

    #[error("Parameter without a name in pattern: '{0}'")]
    UnnamedParam(String),

    #[error("Parameter ':{name}' appears twice in pattern: '{pattern}'")]
    DuplicateParam { pattern: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

impl Segment {
    /// Whether some concrete path segment matches both `self` and `other`.
    fn compatible(&self, other: &Segment) -> bool {
        match (self, other) {
            (Segment::Static(a), Segment::Static(b)) => a == b,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        };

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(PatternError::EmptySegment(raw.to_string()));
                }
                match part.strip_prefix(':') {
                    Some("") => return Err(PatternError::UnnamedParam(raw.to_string())),
                    Some(name) => {
                        let duplicate = segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                        if duplicate {
                            return Err(PatternError::DuplicateParam {
                                pattern: raw.to_string(),
                                name: name.to_string(),
                            });
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Static(part.to_string())),
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.param_names().any(|p| p == name)
    }

    /// True when the pattern has no named segments.
    pub fn is_static(&self) -> bool {
        self.param_names().next().is_none()
    }

    /// The last segment, when it is static.
    pub fn trailing_literal(&self) -> Option<&str> {
        match self.segments.last()? {
            Segment::Static(s) => Some(s),
            Segment::Param(_) => None,
        }
    }

    /// Match a concrete path, returning the captured parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts = split_path(path);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), decode_segment(part));
                }
            }
        }
        Some(params)
    }

    /// Whether any concrete path matches both patterns.
    pub fn overlaps(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.compatible(b))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split a path into segments, dropping any query or fragment and
/// ignoring leading and trailing slashes.
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Percent-decode a captured segment; malformed UTF-8 is kept as written.
fn decode_segment(part: &str) -> String {
    urlencoding::decode(part).map_or_else(|_| part.to_string(), |decoded| decoded.into_owned())
}

/// Canonical form of a path: leading slash, no trailing slash, no query.
pub(crate) fn normalize_path(path: &str) -> String {
    format!("/{}", split_path(path).join("/"))
}
