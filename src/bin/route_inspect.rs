//! Route Inspector CLI
//!
//! Parses and builds location fragments the way the app does, and replays
//! navigation sequences against an in-memory browser.
//!
//! Usage:
//!   route-inspect parse <fragment>
//!   route-inspect serialize <route> [key=value ...]
//!   route-inspect replay <initial-fragment> [step ...]
//!   route-inspect list
//!
//! Replay steps:
//!   go:<route>[?query]   navigate (query becomes params)
//!   back                 go back
//!   hash:<fragment>      browser changed the fragment, reconcile
//!   modal:<kind>         open a modal
//!   close                close the modal

use std::env;
use std::process;

use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use delivery_app_builder::app::routes::route_table;
use delivery_app_builder::config;
use delivery_app_builder::navigation::{
    parse, serialize, MemoryHost, Navigator, RouteId, RouteMatch, RouteParams,
};

fn main() {
    let config = config::load_config_or_default();

    // Logs go to stderr; stdout carries the JSON output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let output = match args[1].as_str() {
        "parse" => {
            let Some(fragment) = args.get(2) else {
                eprintln!("Error: Missing fragment argument");
                print_usage();
                process::exit(1);
            };
            inspect_fragment(fragment)
        }
        "serialize" => {
            let Some(route) = args.get(2) else {
                eprintln!("Error: Missing route argument");
                print_usage();
                process::exit(1);
            };
            let params = match parse_pairs(&args[3..]) {
                Ok(params) => params,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };
            Value::String(serialize(&RouteId::from(route.as_str()), &params))
        }
        "replay" => {
            let initial = args.get(2).map(String::as_str).unwrap_or("");
            match replay(initial, &args[3.min(args.len())..]) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }
        "list" => {
            let table = route_table();
            json!({
                "routes": table.routes(),
                "families": table.families(),
            })
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error encoding output: {}", e);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Route Inspector - Parse, build and replay app locations");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  route-inspect parse <fragment>");
    eprintln!("  route-inspect serialize <route> [key=value ...]");
    eprintln!("  route-inspect replay <initial-fragment> [step ...]");
    eprintln!("  route-inspect list");
    eprintln!();
    eprintln!("Steps: go:<route>[?query]  back  hash:<fragment>  modal:<kind>  close");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  route-inspect parse '#/customer-order-track?orderId=TEST-123'");
    eprintln!("  route-inspect serialize notice-detail noticeId=7");
    eprintln!("  route-inspect replay '' go:order-history go:customer-order-track?orderId=A1 back");
}

/// Parsed location plus which route table entry it hits.
fn inspect_fragment(fragment: &str) -> Value {
    let location = parse(fragment);
    let table = route_table();
    let matched = match table.lookup(location.route.as_str()) {
        RouteMatch::Exact(route) => json!({ "exact": route }),
        RouteMatch::Family { prefix, sub_type } => {
            json!({ "family": prefix, "subType": sub_type })
        }
        RouteMatch::NotFound => json!("not-found"),
    };
    json!({
        "route": location.route,
        "params": location.params,
        "match": matched,
    })
}

/// `key=value` pairs; values that parse as JSON keep their type.
fn parse_pairs(pairs: &[String]) -> Result<RouteParams, String> {
    pairs
        .iter()
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("expected key=value, got {:?}", pair))?;
            let value = serde_json::from_str::<Value>(value)
                .unwrap_or_else(|_| Value::String(value.to_string()));
            Ok((key.to_string(), value))
        })
        .collect()
}

fn replay(initial: &str, steps: &[String]) -> Result<Value, String> {
    let mut navigator = Navigator::new(MemoryHost::new(initial));

    for step in steps {
        match step.split_once(':') {
            Some(("go", target)) => {
                let location = parse(target);
                let params = (!location.params.is_empty()).then_some(location.params);
                navigator.navigate(location.route, params);
            }
            Some(("hash", fragment)) => {
                navigator.host_mut().set_fragment(fragment);
                navigator.reconcile();
            }
            Some(("modal", kind)) => navigator.open_modal(kind, None),
            None if step == "back" => navigator.go_back(),
            None if step == "close" => navigator.close_modal(),
            _ => return Err(format!("unknown step {:?}", step)),
        }
        tracing::debug!("After {}: {}", step, navigator.current_route());
    }

    serde_json::to_value(navigator.snapshot()).map_err(|e| e.to_string())
}
