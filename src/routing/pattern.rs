//! Path pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse pattern strings into segments (literal, `:param`, `*rest`)
//! - Match a prefix of request path segments, capturing params
//! - Order patterns by specificity
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - A param segment always matches, consuming exactly one path segment
//! - A catch-all must be the final segment and consumes the remainder
//! - No regex to guarantee O(n) matching

use std::collections::BTreeMap;

use thiserror::Error;

/// One segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches its text exactly.
    Literal(String),
    /// `:name` — matches any single path segment, captured under `name`.
    Param(String),
    /// `*name` — matches the rest of the path, captured under `name`.
    CatchAll(String),
}

impl Segment {
    /// Rank used for specificity ordering. Lower matches first.
    fn rank(&self) -> u8 {
        match self {
            Segment::Literal(_) => 0,
            Segment::Param(_) => 1,
            Segment::CatchAll(_) => 2,
        }
    }
}

/// Errors raised while parsing a pattern string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern {0:?} must start with '/'")]
    MissingLeadingSlash(String),

    #[error("pattern {0:?} contains an empty segment")]
    EmptySegment(String),

    #[error("pattern {0:?} has an unnamed capture segment")]
    UnnamedCapture(String),

    #[error("pattern {0:?} has a catch-all before the final segment")]
    CatchAllNotLast(String),
}

/// A parsed path pattern.
///
/// Patterns are relative to their parent route. The empty pattern (`""`)
/// is an index pattern: it matches when the parent has consumed the whole
/// path and contributes no segments of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// `""` parses as the index pattern; anything else must start with `/`.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Ok(Self {
                raw: String::new(),
                segments: Vec::new(),
            });
        }
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }

        let mut segments = Vec::new();
        // "/" is the root pattern: zero segments, distinct from index only
        // in how it reads at the registration site.
        for part in raw.split('/').skip(1).filter(|p| !p.is_empty() || raw != "/") {
            if part.is_empty() {
                return Err(PatternError::EmptySegment(raw.to_string()));
            }
            if let Some(last) = segments.last() {
                if matches!(last, Segment::CatchAll(_)) {
                    return Err(PatternError::CatchAllNotLast(raw.to_string()));
                }
            }
            let segment = if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::UnnamedCapture(raw.to_string()));
                }
                Segment::Param(name.to_string())
            } else if let Some(name) = part.strip_prefix('*') {
                if name.is_empty() {
                    return Err(PatternError::UnnamedCapture(raw.to_string()));
                }
                Segment::CatchAll(name.to_string())
            } else {
                Segment::Literal(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern string as registered.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True for the index pattern and for `/`.
    pub fn is_index(&self) -> bool {
        self.segments.is_empty()
    }

    /// Param names captured by this pattern, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) | Segment::CatchAll(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match this pattern against the front of `path_segments`.
    ///
    /// On success returns the unconsumed tail and records captures into
    /// `params`. Returns `None` without touching `params` on mismatch.
    pub fn match_prefix<'p>(
        &self,
        path_segments: &'p [&'p str],
        params: &mut BTreeMap<String, String>,
    ) -> Option<&'p [&'p str]> {
        let mut captured = Vec::new();
        let mut rest = path_segments;

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    let (head, tail) = rest.split_first()?;
                    if head != text {
                        return None;
                    }
                    rest = tail;
                }
                Segment::Param(name) => {
                    let (head, tail) = rest.split_first()?;
                    captured.push((name.clone(), (*head).to_string()));
                    rest = tail;
                }
                Segment::CatchAll(name) => {
                    captured.push((name.clone(), rest.join("/")));
                    rest = &rest[rest.len()..];
                }
            }
        }

        for (name, value) in captured {
            params.insert(name, value);
        }
        Some(rest)
    }

    /// Specificity key: segment ranks, compared lexicographically.
    ///
    /// Literal-heavy patterns sort first, so `/help` wins over `/:page`
    /// regardless of registration order. Equal keys preserve registration
    /// order via stable sorting.
    pub fn specificity(&self) -> Vec<u8> {
        self.segments.iter().map(Segment::rank).collect()
    }
}

/// Split a request path into segments, ignoring empty runs.
///
/// `"/"` and `""` both yield no segments; a trailing slash is not
/// significant.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literals_params_and_catchall() {
        let pattern = PathPattern::parse("/docs/:page/*rest").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("docs".into()),
                Segment::Param("page".into()),
                Segment::CatchAll("rest".into()),
            ]
        );
    }

    #[test]
    fn root_and_index_have_no_segments() {
        assert!(PathPattern::parse("/").unwrap().is_index());
        assert!(PathPattern::parse("").unwrap().is_index());
    }

    #[test]
    fn rejects_malformed_patterns() {
        assert_eq!(
            PathPattern::parse("about"),
            Err(PatternError::MissingLeadingSlash("about".into()))
        );
        assert_eq!(
            PathPattern::parse("/a//b"),
            Err(PatternError::EmptySegment("/a//b".into()))
        );
        assert_eq!(
            PathPattern::parse("/a/:"),
            Err(PatternError::UnnamedCapture("/a/:".into()))
        );
        assert_eq!(
            PathPattern::parse("/*rest/more"),
            Err(PatternError::CatchAllNotLast("/*rest/more".into()))
        );
    }

    #[test]
    fn matches_and_captures() {
        let pattern = PathPattern::parse("/docs/:page").unwrap();
        let mut params = BTreeMap::new();
        let rest = pattern
            .match_prefix(&["docs", "intro", "deep"], &mut params)
            .unwrap();
        assert_eq!(rest, &["deep"]);
        assert_eq!(params.get("page").map(String::as_str), Some("intro"));
    }

    #[test]
    fn literal_mismatch_leaves_params_untouched() {
        let pattern = PathPattern::parse("/docs/:page").unwrap();
        let mut params = BTreeMap::new();
        assert!(pattern.match_prefix(&["blog", "intro"], &mut params).is_none());
        assert!(params.is_empty());
    }

    #[test]
    fn catchall_consumes_remainder() {
        let pattern = PathPattern::parse("/files/*path").unwrap();
        let mut params = BTreeMap::new();
        let rest = pattern
            .match_prefix(&["files", "a", "b", "c"], &mut params)
            .unwrap();
        assert!(rest.is_empty());
        assert_eq!(params.get("path").map(String::as_str), Some("a/b/c"));
    }

    #[test]
    fn specificity_prefers_literals() {
        let literal = PathPattern::parse("/help").unwrap();
        let param = PathPattern::parse("/:page").unwrap();
        let splat = PathPattern::parse("/*rest").unwrap();
        assert!(literal.specificity() < param.specificity());
        assert!(param.specificity() < splat.specificity());
    }

    #[test]
    fn splits_request_paths() {
        assert_eq!(split_path("/"), Vec::<&str>::new());
        assert_eq!(split_path("/about/"), vec!["about"]);
        assert_eq!(split_path("/docs/intro"), vec!["docs", "intro"]);
    }
}
