//! Immutable two-slot tuple

use std::fmt;

/// A value paired with another, compared by both slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    /// Create a pair
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    /// Alias of [`Pair::new`]
    pub fn of(first: A, second: B) -> Self {
        Self::new(first, second)
    }

    /// Get the first value
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get the second value
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Take both values out as a tuple
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_inner()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({}, {})", self.first, self.second)
    }
}
