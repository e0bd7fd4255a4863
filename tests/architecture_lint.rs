#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Architecture enforcement lint - one navigator per app, framework-free core.
//!
//! Screens share a single `Navigator` through context. This test parses the
//! crate sources and flags:
//! - `Navigator::new` / `NavigationController::new` outside the navigation
//!   core, the context provider and dev tools
//! - Global mutable state (`thread_local!`, `static mut`, lazily initialized
//!   or locked statics) in `navigation/` or `app/`
//! - `dioxus` imports in `navigation/` (the core must build and test without
//!   a UI runtime)

use std::fs;
use std::path::Path;
use syn::visit::Visit;
use syn::{ExprCall, ExprPath, File, ItemStatic, ItemUse, Macro, StaticMutability, UseTree};
use walkdir::WalkDir;

/// Files allowed to construct a navigator
const CONSTRUCTION_ALLOWED: &[&str] = &["src/navigation/", "src/app/navigation_context.rs", "src/bin/"];

/// Constructors that create independent navigation state
const CONSTRUCTORS: &[&str] = &["Navigator", "NavigationController"];

/// Types that turn a `static` into shared mutable state
const GLOBAL_STATE_TYPES: &[&str] = &[
    "OnceLock", "OnceCell", "Lazy", "LazyLock", "Mutex", "RwLock", "RefCell", "Cell",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Area {
    Core,
    App,
    Other,
}

fn area_of(path: &str) -> Area {
    if path.contains("src/navigation/") {
        Area::Core
    } else if path.contains("src/app/") {
        Area::App
    } else {
        Area::Other
    }
}

struct ArchitectureVisitor {
    current_file: String,
    area: Area,
    construction_allowed: bool,
    violations: Vec<(String, String)>,
}

impl ArchitectureVisitor {
    fn new(file: String) -> Self {
        let normalized = file.replace('\\', "/");
        let construction_allowed = CONSTRUCTION_ALLOWED.iter().any(|p| normalized.contains(p));
        Self {
            area: area_of(&normalized),
            current_file: normalized,
            construction_allowed,
            violations: Vec::new(),
        }
    }

    fn flag(&mut self, message: String) {
        self.violations.push((self.current_file.clone(), message));
    }

    fn checks_global_state(&self) -> bool {
        matches!(self.area, Area::Core | Area::App)
    }
}

fn use_tree_mentions(tree: &UseTree, name: &str) -> bool {
    match tree {
        UseTree::Path(p) => p.ident == name || use_tree_mentions(&p.tree, name),
        UseTree::Name(n) => n.ident == name,
        UseTree::Rename(r) => r.ident == name,
        UseTree::Glob(_) => false,
        UseTree::Group(g) => g.items.iter().any(|t| use_tree_mentions(t, name)),
    }
}

impl<'ast> Visit<'ast> for ArchitectureVisitor {
    fn visit_expr_call(&mut self, call: &'ast ExprCall) {
        if !self.construction_allowed {
            if let syn::Expr::Path(ExprPath { path, .. }) = &*call.func {
                let segments: Vec<String> =
                    path.segments.iter().map(|s| s.ident.to_string()).collect();
                if let [.., ty, method] = segments.as_slice() {
                    if method == "new" && CONSTRUCTORS.contains(&ty.as_str()) {
                        self.flag(format!(
                            "{}::new() - use use_navigation() instead of a second navigator",
                            ty
                        ));
                    }
                }
            }
        }
        syn::visit::visit_expr_call(self, call);
    }

    fn visit_item_static(&mut self, item: &'ast ItemStatic) {
        if self.checks_global_state() {
            if matches!(item.mutability, StaticMutability::Mut(_)) {
                self.flag(format!("static mut {} - global mutable state", item.ident));
            }
            let ty = quote_type(&item.ty);
            if let Some(hit) = GLOBAL_STATE_TYPES.iter().find(|t| ty.contains(*t)) {
                self.flag(format!("static {}: {} - global mutable state", item.ident, hit));
            }
        }
        syn::visit::visit_item_static(self, item);
    }

    fn visit_macro(&mut self, mac: &'ast Macro) {
        if self.checks_global_state() && mac.path.is_ident("thread_local") {
            self.flag("thread_local! - global mutable state".to_string());
        }
        syn::visit::visit_macro(self, mac);
    }

    fn visit_item_use(&mut self, item: &'ast ItemUse) {
        if self.area == Area::Core && use_tree_mentions(&item.tree, "dioxus") {
            self.flag("use dioxus - navigation core must stay framework-free".to_string());
        }
        syn::visit::visit_item_use(self, item);
    }
}

/// Type as written, identifiers only.
fn quote_type(ty: &syn::Type) -> String {
    struct Idents(Vec<String>);
    impl<'ast> Visit<'ast> for Idents {
        fn visit_ident(&mut self, ident: &'ast syn::Ident) {
            self.0.push(ident.to_string());
        }
    }
    let mut idents = Idents(Vec::new());
    idents.visit_type(ty);
    idents.0.join(" ")
}

fn analyze_source(file: &str, content: &str) -> Vec<(String, String)> {
    let syntax: File = match syn::parse_file(content) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to parse {}: {}", file, e);
            return vec![];
        }
    };

    let mut visitor = ArchitectureVisitor::new(file.to_string());
    visitor.visit_file(&syntax);
    visitor.violations
}

fn analyze_file(path: &Path) -> Vec<(String, String)> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };
    analyze_source(&path.display().to_string(), &content)
}

#[test]
fn detects_second_navigator_in_screen() {
    let bad_code = r#"
        fn screen() {
            let nav = Navigator::new(MemoryHost::default());
        }
    "#;
    let violations = analyze_source("src/app/pages/home.rs", bad_code);
    assert_eq!(violations.len(), 1, "{violations:?}");

    let allowed = analyze_source("src/app/navigation_context.rs", bad_code);
    assert!(allowed.is_empty(), "{allowed:?}");
}

#[test]
fn detects_global_state() {
    let bad_code = r#"
        use std::sync::OnceLock;
        static NAV: OnceLock<u32> = OnceLock::new();
        static mut COUNT: u32 = 0;
        thread_local! { static ROUTE: String = String::new(); }
    "#;
    let violations = analyze_source("src/navigation/controller.rs", bad_code);
    assert_eq!(violations.len(), 3, "{violations:?}");

    let fine = r#"
        static NO_PAYLOAD: Value = Value::Null;
        const ROUTES: &[&str] = &["home"];
    "#;
    assert!(analyze_source("src/navigation/overlay.rs", fine).is_empty());
}

#[test]
fn detects_framework_import_in_core() {
    let bad_code = "use dioxus::prelude::*;";
    assert_eq!(analyze_source("src/navigation/navigator.rs", bad_code).len(), 1);
    assert!(analyze_source("src/app/routes.rs", bad_code).is_empty());
}

#[test]
fn navigation_architecture_is_respected() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let violations = analyze_file(entry.path());
        all_violations.extend(violations);
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\n\
            ╔══════════════════════════════════════════════════════════════════════════════╗\n\
            ║  ARCHITECTURE VIOLATION: one navigator, framework-free core                  ║\n\
            ╚══════════════════════════════════════════════════════════════════════════════╝\n\n\
            Screens read and change navigation through use_navigation().\n\
            A second Navigator or a global would let screens disagree about\n\
            the current route, history or open modal.\n\n\
            Violations found:\n\n",
        );

        for (file, context) in &all_violations {
            error_msg.push_str(&format!("  {}\n    {}\n\n", file, context));
        }

        panic!("{}", error_msg);
    }
}
