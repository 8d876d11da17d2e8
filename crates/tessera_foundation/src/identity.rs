//! Stable declaration identity tokens.

use std::cell::Cell;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity token of a declaration.
///
/// A declaration keeps its token across every copy-on-write update, so passes
/// can recognise "the same" declaration in two different tree generations even
/// after its name, diagnostics, or children changed. Tokens are never reused
/// within a library.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclId(u64);

impl DeclId {
    /// Creates a token from a raw index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Returns the raw index of this token.
    #[must_use]
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({})", self.0)
    }
}

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh [`DeclId`]s in increasing order.
///
/// The allocator is owned by whoever is building or rewriting a library
/// generation and is never shared between generations; the library records
/// the next free index so a later pass continues where the previous one
/// stopped. Allocation order follows traversal order, which keeps tokens
/// reproducible for a given input.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: Cell<u64>,
}

impl IdAllocator {
    /// Creates an allocator starting at index zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator whose first token has index `next`.
    #[must_use]
    pub fn starting_at(next: u64) -> Self {
        Self {
            next: Cell::new(next),
        }
    }

    /// Allocates a fresh token.
    pub fn allocate(&self) -> DeclId {
        let index = self.next.get();
        self.next.set(index + 1);
        DeclId(index)
    }

    /// Returns the index the next allocation will use.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next.get()
    }
}
