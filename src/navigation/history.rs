//! In-app navigation history used by `go_back`.
//!
//! This is not the browser's history stack and does not try to agree with it.

use serde::Serialize;

use super::route::RouteId;

/// Ordered list of visited routes. Never empty and never holds two equal
/// consecutive entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationHistory {
    entries: Vec<RouteId>,
}

impl NavigationHistory {
    /// Start a history at `initial`.
    pub fn new(initial: RouteId) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// Append `route` unless it is already the last entry.
    ///
    /// Returns `true` when an entry was added.
    pub fn push(&mut self, route: &RouteId) -> bool {
        if self.entries.last() == Some(route) {
            return false;
        }
        self.entries.push(route.clone());
        true
    }

    /// Drop the last entry and return the new last one.
    ///
    /// `None` when only one entry is left; the history is unchanged then.
    pub fn pop(&mut self) -> Option<&RouteId> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        self.entries.last()
    }

    pub fn last(&self) -> &RouteId {
        // Invariant: at least one entry.
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: a history always keeps its first entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn entries(&self) -> &[RouteId] {
        &self.entries
    }
}
