//! Destructor mangling selection.
//!
//! The single-mangling query for a destructor returns a variant the compiler
//! does not export. The exported symbol is one entry of the candidate set,
//! and which one depends on the target ABI.

/// Picks the exported destructor symbol from the candidate set.
pub trait DestructorManglingPolicy: std::fmt::Debug {
    /// Returns the selected candidate, or `None` if none qualifies.
    fn select<'a>(&self, candidates: &'a [String]) -> Option<&'a str>;
}

/// Selects the candidate at a fixed position.
///
/// Microsoft x64 exports the first candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateAt(pub usize);

impl Default for CandidateAt {
    fn default() -> Self {
        Self(0)
    }
}

impl DestructorManglingPolicy for CandidateAt {
    fn select<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        candidates.get(self.0).map(String::as_str)
    }
}

/// Selects the candidate whose destructor variant matches.
///
/// Itanium distinguishes destructor variants by the `D0`/`D1`/`D2` component
/// that closes the nested name (`_ZN6WidgetD1Ev`). Only that component is
/// compared, so a scope or template argument spelled like a variant never
/// matches. The complete-object destructor is `D1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestructorVariant(pub String);

impl DestructorVariant {
    /// The Itanium complete-object destructor.
    #[must_use]
    pub fn itanium_complete_object() -> Self {
        Self("D1".to_string())
    }

    fn matches(&self, candidate: &str) -> bool {
        candidate
            .strip_suffix("Ev")
            .is_some_and(|name| name.ends_with(self.0.as_str()))
    }
}

impl DestructorManglingPolicy for DestructorVariant {
    fn select<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        candidates
            .iter()
            .find(|candidate| self.matches(candidate))
            .map(String::as_str)
    }
}
