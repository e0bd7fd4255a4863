//! Route identifiers.
//!
//! A route identifier is an opaque string naming a screen. The set of
//! identifiers the app knows about is closed (see `app::routes`), but the
//! navigation core stores whatever it is handed: resolving unknown ids is the
//! route table's job at render time.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the codec falls back to for empty or unparseable fragments.
pub const HOME_ROUTE: &str = "home";

/// Opaque screen identifier (e.g. `"order-history"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The designated home route.
    pub fn home() -> Self {
        Self(HOME_ROUTE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        self.0 == HOME_ROUTE
    }

    /// Identifier with any accidental `?query` suffix removed.
    ///
    /// Callers occasionally hand over `"order-history?x=1"`; lookups only ever
    /// see the part before the first `?`.
    pub fn normalized(&self) -> &str {
        normalize(&self.0)
    }
}

/// `id` up to (not including) the first `?`.
pub fn normalize(id: &str) -> &str {
    match id.find('?') {
        Some(idx) => &id[..idx],
        None => id,
    }
}

impl Default for RouteId {
    fn default() -> Self {
        RouteId::home()
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RouteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&RouteId> for RouteId {
    fn from(id: &RouteId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RouteId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RouteId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
