use crate::{error::InternalError, model::FilterKind};
use regex::{Regex, RegexBuilder};

///
/// Anchor
/// Where the query must sit inside a candidate.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Anchor {
    Start,
    End,
    Anywhere,
}

impl Anchor {
    /// `StartsWith` and `EndsWith` anchor; every other kind, including an
    /// unspecified one, matches anywhere.
    #[must_use]
    pub const fn for_filter(kind: Option<&FilterKind>) -> Self {
        match kind {
            Some(FilterKind::StartsWith) => Self::Start,
            Some(FilterKind::EndsWith) => Self::End,
            _ => Self::Anywhere,
        }
    }
}

///
/// MatchPattern
///
/// Compiled match predicate for one query. The query is always escaped, so
/// user input can never contribute regex syntax.
///

#[derive(Clone, Debug)]
pub enum MatchPattern {
    /// Empty query: every candidate matches.
    Any,
    Literal(Regex),
}

impl MatchPattern {
    /// Build a case-insensitive literal matcher for `query`.
    pub fn build(query: &str, anchor: Anchor) -> Result<Self, InternalError> {
        if query.is_empty() {
            return Ok(Self::Any);
        }

        let literal = regex::escape(query);
        let source = match anchor {
            Anchor::Start => format!("^{literal}"),
            Anchor::End => format!("{literal}$"),
            Anchor::Anywhere => literal,
        };

        // Escaped input only fails on size limits.
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|err| InternalError::pattern_internal(format!("query pattern: {err}")))?;

        Ok(Self::Literal(regex))
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(regex) => regex.is_match(text),
        }
    }
}

///
/// TESTS
///
