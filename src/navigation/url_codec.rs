//! Location fragment codec.
//!
//! Translates between the browser fragment and the internal route
//! representation. Grammar:
//!
//! ```text
//! #/<routeId>[?<key>=<value>(&<key>=<value>)*]
//! ```
//!
//! ## Robust Parsing
//!
//! Parsing is total. Anything it cannot make sense of lands on the home route
//! with empty params:
//! - Missing marker: `order-history`, `/order-history`, `#order-history`
//! - Empty fragment: `""`, `#`, `#/`
//! - Trailing slashes: `#/order-history/`
//! - Malformed escapes (`%zz`) are kept verbatim
//!
//! The query uses `application/x-www-form-urlencoded` rules: `+` is a space,
//! later duplicate keys win, there are no list semantics.

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use super::params::RouteParams;
use super::route::RouteId;

/// Result of parsing a fragment.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParsedLocation {
    pub route: RouteId,
    pub params: RouteParams,
}

/// Parse a location fragment into a route and its query params.
pub fn parse(fragment: &str) -> ParsedLocation {
    let s = fragment.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    let (raw_path, raw_query) = match s.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (s, None),
    };

    let path = raw_path.trim_start_matches('/').trim_end_matches('/');
    let route = if path.is_empty() {
        RouteId::home()
    } else {
        RouteId::new(decode_path(path))
    };

    let params = match raw_query {
        Some(query) => form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
        None => RouteParams::new(),
    };

    ParsedLocation { route, params }
}

/// Serialize a route and params into a fragment suitable for `location.hash`.
///
/// String values round-trip exactly through [`parse`]. Other values are
/// written as their JSON text and come back as strings; `null` is dropped.
pub fn serialize(route: &RouteId, params: &RouteParams) -> String {
    let mut out = String::from("#/");
    out.push_str(&urlencoding::encode(route.as_str()));

    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut has_pairs = false;
    for (key, value) in params {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        query.append_pair(key, &text);
        has_pairs = true;
    }

    if has_pairs {
        out.push('?');
        out.push_str(&query.finish());
    }
    out
}

fn decode_path(path: &str) -> String {
    match urlencoding::decode(path) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            tracing::debug!("Fragment path {:?} is not valid UTF-8 once decoded, keeping raw", path);
            path.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_home() {
        for raw in ["", "#", "#/", "/", "  #/  ", "#//"] {
            let parsed = parse(raw);
            assert_eq!(parsed.route, RouteId::home(), "input {:?}", raw);
            assert!(parsed.params.is_empty(), "input {:?}", raw);
        }
    }

    #[test]
    fn test_parse_route_and_query() {
        let parsed = parse("#/customer-order-track?orderId=TEST-123");
        assert_eq!(parsed.route, "customer-order-track");
        assert_eq!(parsed.params.get_str("orderId"), Some("TEST-123"));
        assert_eq!(parsed.params.len(), 1);
    }

    #[test]
    fn test_parse_without_marker_or_slash() {
        assert_eq!(parse("order-history").route, "order-history");
        assert_eq!(parse("#order-history").route, "order-history");
        assert_eq!(parse("/order-history").route, "order-history");
        assert_eq!(parse("#/order-history/").route, "order-history");
    }

    #[test]
    fn test_parse_splits_on_first_question_mark() {
        let parsed = parse("#/search?q=what?&page=2");
        assert_eq!(parsed.route, "search");
        assert_eq!(parsed.params.get_str("q"), Some("what?"));
        assert_eq!(parsed.params.get_str("page"), Some("2"));
    }

    #[test]
    fn test_parse_later_duplicate_wins() {
        let parsed = parse("#/onboarding?step=1&step=4");
        assert_eq!(parsed.params.get_str("step"), Some("4"));
        assert_eq!(parsed.params.len(), 1);
    }

    #[test]
    fn test_parse_decodes_escapes() {
        let parsed = parse("#/store%20settings?name=Pizza+Palace&city=S%C3%A3o%20Paulo");
        assert_eq!(parsed.route, "store settings");
        assert_eq!(parsed.params.get_str("name"), Some("Pizza Palace"));
        assert_eq!(parsed.params.get_str("city"), Some("São Paulo"));
    }

    #[test]
    fn test_parse_malformed_escape_kept_verbatim() {
        let parsed = parse("#/bad%zzroute");
        assert_eq!(parsed.route, "bad%zzroute");
        let parsed = parse("#/%FF%FE");
        assert_eq!(parsed.route, "%FF%FE");
    }

    #[test]
    fn test_parse_query_without_values() {
        let parsed = parse("#/pricing?annual&&plan=");
        assert_eq!(parsed.params.get_str("annual"), Some(""));
        assert_eq!(parsed.params.get_str("plan"), Some(""));
        assert_eq!(parsed.params.len(), 2);
    }

    #[test]
    fn test_serialize_shape() {
        let params = RouteParams::new().with("orderId", "TEST-123");
        assert_eq!(
            serialize(&RouteId::from("customer-order-track"), &params),
            "#/customer-order-track?orderId=TEST-123"
        );
        assert_eq!(serialize(&RouteId::home(), &RouteParams::new()), "#/home");
    }

    #[test]
    fn test_serialize_non_string_values() {
        let params = RouteParams::new()
            .with("noticeId", 7)
            .with("draft", true)
            .with("nothing", Value::Null);
        let fragment = serialize(&RouteId::from("notice-detail"), &params);
        assert_eq!(fragment, "#/notice-detail?noticeId=7&draft=true");

        let parsed = parse(&fragment);
        assert_eq!(parsed.params.get_i64("noticeId"), Some(7));
        assert_eq!(parsed.params.get_str("draft"), Some("true"));
        assert!(!parsed.params.contains_key("nothing"));
    }

    #[test]
    fn test_round_trip_awkward_strings() {
        let route = RouteId::from("/weird route?#&=");
        let params = RouteParams::new()
            .with("a b", "c+d")
            .with("", "")
            .with("emoji", "🍕 & 🍔")
            .with("eq", "x=y");
        let parsed = parse(&serialize(&route, &params));
        assert_eq!(parsed.route, route);
        assert_eq!(parsed.params, params);
    }
}
