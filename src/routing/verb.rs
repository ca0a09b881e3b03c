//! Method classification.
//!
//! # Responsibilities
//! - Map an operation name to the HTTP verb it implements
//! - Report "no match" for names outside the verb vocabulary
//!
//! # Design Decisions
//! - Closed enum instead of string dispatch
//! - Prefixes are checked in a fixed priority order, first match wins
//! - Matching is case-sensitive (`GetUsers` is not routable)

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verbs recognized as operation name prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Any,
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    /// The vocabulary in match priority order.
    pub const ALL: [HttpVerb; 6] = [
        HttpVerb::Any,
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Patch,
        HttpVerb::Delete,
    ];

    /// Lowercase token used both as name prefix and in registration calls.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Any => "any",
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Patch => "patch",
            HttpVerb::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an operation name has to relate to a verb prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbMatching {
    /// Raw leading substring: `postpone` is `post` + `pone`.
    #[default]
    Prefix,
    /// The remainder must be empty or start with a non-lowercase character.
    WordBoundary,
}

/// Result of classifying an operation name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub verb: HttpVerb,
    /// Operation name with the verb prefix removed.
    pub remainder: &'a str,
}

impl Classified<'_> {
    /// True when the verb prefix runs straight into a lowercase letter,
    /// e.g. `postpone`.
    pub fn lacks_word_boundary(&self) -> bool {
        self.remainder
            .chars()
            .next()
            .is_some_and(|c| c.is_lowercase())
    }
}

/// Classify an operation name.
///
/// Returns `None` if no verb applies; the operation is then simply not
/// routable.
pub fn classify(name: &str, matching: VerbMatching) -> Option<Classified<'_>> {
    let classified = HttpVerb::ALL.iter().find_map(|verb| {
        name.strip_prefix(verb.as_str()).map(|remainder| Classified {
            verb: *verb,
            remainder,
        })
    })?;

    match matching {
        VerbMatching::Prefix => Some(classified),
        VerbMatching::WordBoundary if classified.lacks_word_boundary() => None,
        VerbMatching::WordBoundary => Some(classified),
    }
}
