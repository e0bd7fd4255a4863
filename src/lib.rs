//! Delivery App Builder - client shell
//!
//! The web client for a build-your-own delivery app service: marketing
//! pages, onboarding, and role-scoped dashboards for customers, store
//! owners and platform admins.
//!
//! - [`navigation`]: framework-free routing core (fragment codec, history,
//!   modal slot, route table)
//! - [`app`]: Dioxus components wired to the core through context
//! - [`config`]: layered settings (defaults, file, `DAB_*` env)

pub mod app;
pub mod config;
pub mod navigation;
