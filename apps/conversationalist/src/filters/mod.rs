//! Filter engines that derive the displayed event and people lists.
//!
//! Both engines are pure functions over borrowed slices. They never clone
//! records and never touch the catalog.

pub mod events;
pub mod people;

pub use events::{filter_events, list_events, EventListing, EventQuery};
pub use people::{area_options, filter_people, toggle_interest, AreaOption, PeopleQuery};

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A single-select filter: either everything, or one exact value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Choice<T> {
    /// No restriction
    All,
    /// Only records equal to this value
    Only(T),
}

// Manual impl: no `T: Default` bound
impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> Choice<T> {
    /// Whether `value` passes the filter
    pub fn admits<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self {
            Self::All => true,
            Self::Only(expected) => expected.borrow() == value,
        }
    }
}

/// Parses selector values; the literal `"all"` selects everything.
impl<T: FromStr> FromStr for Choice<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl Choice<String> {
    /// Builds a string choice from a selector value.
    #[must_use]
    pub fn from_selection(selection: &str) -> Self {
        match selection {
            "all" => Self::All,
            value => Self::Only(value.to_string()),
        }
    }
}

/// Case-insensitive substring search with the needle lowered once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub(crate) fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// An empty query matches everything
    pub(crate) fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub(crate) fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }

    pub(crate) fn matches_any<I, S>(&self, haystacks: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        haystacks.into_iter().any(|h| self.matches(h.as_ref()))
    }
}
