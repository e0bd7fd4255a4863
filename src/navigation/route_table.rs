//! Route table: route identifier -> screen factory.
//!
//! Built once at startup. Resolution is total: every identifier produces a
//! value, falling back to the not-found factory.
//!
//! ## Entries
//!
//! - Exact: `"order-history"` matches only itself.
//! - Family: prefix `"admin-api-detail-"` matches `"admin-api-detail-payment-api"`
//!   and hands `"payment-api"` to the factory as the sub-type.
//!
//! Exact entries win over families; among families the longest prefix wins.
//! The table is generic over the rendered value so it can be exercised
//! without a UI runtime.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use super::params::RouteParams;
use super::route::{normalize, RouteId};

/// Everything a screen factory gets to see.
#[derive(Debug, Clone, Copy)]
pub struct ScreenRequest<'a> {
    /// Identifier as looked up (query suffix already stripped).
    pub route: &'a str,
    /// Remainder after a family prefix; `None` for exact entries.
    pub sub_type: Option<&'a str>,
    pub params: &'a RouteParams,
}

/// Renders one screen.
pub type ScreenFactory<V> = Rc<dyn Fn(&ScreenRequest<'_>) -> V>;

/// Which entry an identifier resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    Exact(&'a str),
    Family { prefix: &'a str, sub_type: &'a str },
    NotFound,
}

impl RouteMatch<'_> {
    pub fn is_found(&self) -> bool {
        !matches!(self, RouteMatch::NotFound)
    }
}

/// Problems detected while building a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route {0:?} registered more than once")]
    DuplicateRoute(String),
    #[error("route family {0:?} registered more than once")]
    DuplicateFamily(String),
    #[error("route identifiers must be non-empty")]
    EmptyIdentifier,
    #[error("route identifier {0:?} contains '?'")]
    QueryInIdentifier(String),
}

/// Immutable lookup table.
pub struct RouteTable<V> {
    exact: HashMap<String, ScreenFactory<V>>,
    // Sorted longest prefix first.
    families: Vec<(String, ScreenFactory<V>)>,
    not_found: ScreenFactory<V>,
}

impl<V> RouteTable<V> {
    pub fn builder(not_found: impl Fn(&ScreenRequest<'_>) -> V + 'static) -> RouteTableBuilder<V> {
        RouteTableBuilder {
            exact: HashMap::new(),
            families: Vec::new(),
            not_found: Rc::new(not_found),
            error: None,
        }
    }

    /// A table that renders the not-found screen for everything.
    pub fn only_not_found(not_found: ScreenFactory<V>) -> Self {
        Self {
            exact: HashMap::new(),
            families: Vec::new(),
            not_found,
        }
    }

    /// Find the entry for `route` without rendering anything.
    pub fn lookup<'a>(&'a self, route: &'a str) -> RouteMatch<'a> {
        let id = normalize(route);

        if let Some((key, _)) = self.exact.get_key_value(id) {
            return RouteMatch::Exact(key);
        }

        for (prefix, _) in &self.families {
            if let Some(rest) = id.strip_prefix(prefix.as_str()) {
                if !rest.is_empty() {
                    return RouteMatch::Family {
                        prefix,
                        sub_type: rest,
                    };
                }
            }
        }

        RouteMatch::NotFound
    }

    pub fn contains(&self, route: &str) -> bool {
        self.lookup(route).is_found()
    }

    /// Render `route` with `params`.
    pub fn resolve(&self, route: &RouteId, params: &RouteParams) -> V {
        let id = route.normalized();
        let (factory, sub_type) = match self.lookup(id) {
            RouteMatch::Exact(key) => (self.exact.get(key), None),
            RouteMatch::Family { prefix, sub_type } => (
                self.families
                    .iter()
                    .find(|(p, _)| p == prefix)
                    .map(|(_, f)| f),
                Some(sub_type),
            ),
            RouteMatch::NotFound => (None, None),
        };

        let request = ScreenRequest {
            route: id,
            sub_type,
            params,
        };

        match factory {
            Some(factory) => factory(&request),
            None => {
                tracing::debug!("No screen for route {:?}, rendering not-found", id);
                (self.not_found)(&request)
            }
        }
    }

    /// Exact identifiers in the table, sorted.
    pub fn routes(&self) -> Vec<&str> {
        let mut routes: Vec<&str> = self.exact.keys().map(String::as_str).collect();
        routes.sort_unstable();
        routes
    }

    /// Family prefixes in the table, longest first.
    pub fn families(&self) -> Vec<&str> {
        self.families.iter().map(|(p, _)| p.as_str()).collect()
    }
}

/// Collects entries; the first registration problem is reported by `build`.
pub struct RouteTableBuilder<V> {
    exact: HashMap<String, ScreenFactory<V>>,
    families: Vec<(String, ScreenFactory<V>)>,
    not_found: ScreenFactory<V>,
    error: Option<RouteTableError>,
}

impl<V> RouteTableBuilder<V> {
    /// Register a screen for exactly `id`.
    pub fn route(
        mut self,
        id: impl Into<String>,
        factory: impl Fn(&ScreenRequest<'_>) -> V + 'static,
    ) -> Self {
        let id = id.into();
        if let Err(e) = validate(&id) {
            self.record(e);
            return self;
        }
        if self.exact.contains_key(&id) {
            self.record(RouteTableError::DuplicateRoute(id));
            return self;
        }
        self.exact.insert(id, Rc::new(factory));
        self
    }

    /// Register a screen for every identifier starting with `prefix`.
    pub fn family(
        mut self,
        prefix: impl Into<String>,
        factory: impl Fn(&ScreenRequest<'_>) -> V + 'static,
    ) -> Self {
        let prefix = prefix.into();
        if let Err(e) = validate(&prefix) {
            self.record(e);
            return self;
        }
        if self.families.iter().any(|(p, _)| *p == prefix) {
            self.record(RouteTableError::DuplicateFamily(prefix));
            return self;
        }
        self.families.push((prefix, Rc::new(factory)));
        self
    }

    pub fn build(mut self) -> Result<RouteTable<V>, RouteTableError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.families.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Ok(RouteTable {
            exact: self.exact,
            families: self.families,
            not_found: self.not_found,
        })
    }

    /// Factory used for unknown routes; lets callers fall back after a
    /// failed `build`.
    pub fn not_found_factory(&self) -> ScreenFactory<V> {
        self.not_found.clone()
    }

    fn record(&mut self, error: RouteTableError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

fn validate(id: &str) -> Result<(), RouteTableError> {
    if id.is_empty() {
        return Err(RouteTableError::EmptyIdentifier);
    }
    if id.contains('?') {
        return Err(RouteTableError::QueryInIdentifier(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(name: &'static str) -> impl Fn(&ScreenRequest<'_>) -> String {
        move |req: &ScreenRequest<'_>| match req.sub_type {
            Some(sub) => format!("{}:{}", name, sub),
            None => name.to_string(),
        }
    }

    fn table() -> RouteTable<String> {
        RouteTable::builder(|req| format!("not-found:{}", req.route))
            .route("home", describe("home"))
            .route("order-history", describe("orders"))
            .route("admin-api-detail-legacy", describe("legacy"))
            .family("admin-api-", describe("api"))
            .family("admin-api-detail-", describe("api-detail"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_exact_lookup() {
        let t = table();
        assert_eq!(t.resolve(&"order-history".into(), &RouteParams::new()), "orders");
        assert_eq!(t.lookup("home"), RouteMatch::Exact("home"));
    }

    #[test]
    fn test_unknown_renders_not_found() {
        let t = table();
        assert_eq!(
            t.resolve(&"totally-unknown-id".into(), &RouteParams::new()),
            "not-found:totally-unknown-id"
        );
        assert!(!t.contains("totally-unknown-id"));
    }

    #[test]
    fn test_query_suffix_stripped_before_lookup() {
        let t = table();
        assert_eq!(t.resolve(&"order-history?page=2".into(), &RouteParams::new()), "orders");
        assert_eq!(t.lookup("home?x"), RouteMatch::Exact("home"));
    }

    #[test]
    fn test_family_longest_prefix_and_exact_precedence() {
        let t = table();
        let none = RouteParams::new();
        assert_eq!(
            t.resolve(&"admin-api-detail-payment-api".into(), &none),
            "api-detail:payment-api"
        );
        assert_eq!(t.resolve(&"admin-api-keys".into(), &none), "api:keys");
        assert_eq!(t.resolve(&"admin-api-detail-legacy".into(), &none), "legacy");
        // A bare prefix is not a member of its family.
        assert_eq!(
            t.resolve(&"admin-api-detail-".into(), &none),
            "api:detail-"
        );
        assert_eq!(t.families(), vec!["admin-api-detail-", "admin-api-"]);
    }

    #[test]
    fn test_params_reach_factory() {
        let t: RouteTable<String> = RouteTable::builder(|_| String::new())
            .route("customer-order-track", |req| {
                req.params.get_str("orderId").unwrap_or("none").to_string()
            })
            .build()
            .unwrap();
        let params = RouteParams::new().with("orderId", "TEST-123");
        assert_eq!(t.resolve(&"customer-order-track".into(), &params), "TEST-123");
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let result = RouteTable::builder(|_| ())
            .route("home", |_| ())
            .route("home", |_| ())
            .build();
        assert_eq!(result.err(), Some(RouteTableError::DuplicateRoute("home".into())));
    }

    #[test]
    fn test_bad_identifiers_rejected() {
        let result = RouteTable::builder(|_| ()).route("", |_| ()).build();
        assert_eq!(result.err(), Some(RouteTableError::EmptyIdentifier));

        let result = RouteTable::builder(|_| ()).family("a?b", |_| ()).build();
        assert_eq!(
            result.err(),
            Some(RouteTableError::QueryInIdentifier("a?b".into()))
        );

        let result = RouteTable::builder(|_| ())
            .family("x-", |_| ())
            .family("x-", |_| ())
            .build();
        assert_eq!(result.err(), Some(RouteTableError::DuplicateFamily("x-".into())));
    }

    #[test]
    fn test_only_not_found() {
        let t: RouteTable<&str> = RouteTable::only_not_found(Rc::new(|_: &ScreenRequest<'_>| "nf"));
        assert_eq!(t.resolve(&RouteId::home(), &RouteParams::new()), "nf");
        assert!(t.routes().is_empty());
    }
}
