//! Browser host seam.
//!
//! The controller needs a few things from the page it lives in: the current
//! location fragment, a way to scroll back to the top, a way to bring an
//! anchor element into view, and notice when the browser moves the
//! fragment on its own. `WebHost` talks to the real DOM through web-sys;
//! `MemoryHost` backs native builds and tests.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// How a scroll request should move the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Instant,
    Smooth,
}

impl ScrollBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Instant => "instant",
            ScrollBehavior::Smooth => "smooth",
        }
    }
}

/// Scroll behaviors applied by a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollSettings {
    /// Used when a navigation resets the viewport.
    #[serde(default)]
    pub top: ScrollBehavior,
    /// Used by `scroll_to_section`.
    #[serde(default = "default_section_behavior")]
    pub section: ScrollBehavior,
}

fn default_section_behavior() -> ScrollBehavior {
    ScrollBehavior::Smooth
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            top: ScrollBehavior::Instant,
            section: default_section_behavior(),
        }
    }
}

/// What the navigation core needs from the surrounding page.
pub trait BrowserHost {
    /// Current location fragment including the leading `#` (may be empty).
    fn location_fragment(&self) -> String;

    /// Reset the viewport to the top of the page.
    fn scroll_to_top(&self);

    /// Bring the element with `element_id` into view.
    ///
    /// Returns `false` when no such element exists.
    fn scroll_to_element(&self, element_id: &str) -> bool;

    /// Call `listener` whenever the browser changes the fragment (back,
    /// forward, address bar edits). The subscription ends when the returned
    /// guard is dropped.
    fn on_location_change(&self, listener: Box<dyn FnMut()>) -> ListenerGuard;
}

/// RAII guard ending a location subscription on drop
#[must_use = "the subscription ends when the guard is dropped"]
pub struct ListenerGuard {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Guard for a subscription that could not be made.
    pub fn inactive() -> Self {
        Self { unsubscribe: None }
    }

    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("active", &self.is_active())
            .finish()
    }
}

/// A scroll request recorded by [`MemoryHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollRequest {
    Top(ScrollBehavior),
    Element {
        id: String,
        behavior: ScrollBehavior,
        found: bool,
    },
}

type Listener = Box<dyn FnMut()>;

/// Page state shared by every clone of a [`MemoryHost`].
#[derive(Default)]
struct MemoryPage {
    fragment: RefCell<String>,
    requests: RefCell<Vec<ScrollRequest>>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener_id: Cell<u64>,
}

/// In-memory host: settable fragment, fixed set of anchor ids, a log of
/// every scroll request, and location listeners fired by `set_fragment`.
///
/// Clones share the same page, so a test can keep a handle while the
/// navigator owns another.
#[derive(Clone, Default)]
pub struct MemoryHost {
    page: Rc<MemoryPage>,
    anchors: Vec<String>,
    scroll: ScrollSettings,
}

impl MemoryHost {
    pub fn new(fragment: impl Into<String>) -> Self {
        let host = Self::default();
        *host.page.fragment.borrow_mut() = fragment.into();
        host
    }

    pub fn with_scroll(mut self, scroll: ScrollSettings) -> Self {
        self.scroll = scroll;
        self
    }

    /// Element ids that `scroll_to_element` will find.
    pub fn with_anchors<I, S>(mut self, anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.anchors = anchors.into_iter().map(Into::into).collect();
        self
    }

    /// Simulate the user editing the address bar or pressing back/forward.
    ///
    /// Listeners fire only when the fragment actually changes, like
    /// `hashchange`. They must not subscribe or unsubscribe while firing.
    pub fn set_fragment(&self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        {
            let mut current = self.page.fragment.borrow_mut();
            if *current == fragment {
                return;
            }
            *current = fragment;
        }

        for (_, listener) in self.page.listeners.borrow_mut().iter_mut() {
            listener();
        }
    }

    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.page.requests.borrow().clone()
    }

    pub fn clear_scroll_requests(&self) {
        self.page.requests.borrow_mut().clear();
    }

    /// Number of live location subscriptions.
    pub fn listener_count(&self) -> usize {
        self.page.listeners.borrow().len()
    }
}

impl fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHost")
            .field("fragment", &self.page.fragment.borrow())
            .field("anchors", &self.anchors)
            .field("scroll", &self.scroll)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl BrowserHost for MemoryHost {
    fn location_fragment(&self) -> String {
        self.page.fragment.borrow().clone()
    }

    fn scroll_to_top(&self) {
        self.page
            .requests
            .borrow_mut()
            .push(ScrollRequest::Top(self.scroll.top));
    }

    fn scroll_to_element(&self, element_id: &str) -> bool {
        let found = self.anchors.iter().any(|a| a == element_id);
        self.page.requests.borrow_mut().push(ScrollRequest::Element {
            id: element_id.to_string(),
            behavior: self.scroll.section,
            found,
        });
        found
    }

    fn on_location_change(&self, listener: Box<dyn FnMut()>) -> ListenerGuard {
        let id = self.page.next_listener_id.get();
        self.page.next_listener_id.set(id + 1);
        self.page.listeners.borrow_mut().push((id, listener));

        let page = Rc::downgrade(&self.page);
        ListenerGuard::new(move || {
            if let Some(page) = page.upgrade() {
                page.listeners.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }
}

// ============ WASM-only host ============

/// Host backed by `window.location` and the live DOM.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct WebHost {
    scroll: ScrollSettings,
}

#[cfg(target_arch = "wasm32")]
impl WebHost {
    pub fn new(scroll: ScrollSettings) -> Self {
        Self { scroll }
    }
}

#[cfg(target_arch = "wasm32")]
fn web_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    }
}

#[cfg(target_arch = "wasm32")]
impl BrowserHost for WebHost {
    fn location_fragment(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_behavior(self.scroll.top));
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn scroll_to_element(&self, element_id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(element_id));

        match element {
            Some(element) => {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_behavior(self.scroll.section));
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }

    fn on_location_change(&self, mut listener: Box<dyn FnMut()>) -> ListenerGuard {
        use wasm_bindgen::prelude::*;

        let Some(window) = web_sys::window() else {
            tracing::warn!("No window, location changes will not be followed");
            return ListenerGuard::inactive();
        };

        let callback = Closure::wrap(Box::new(move |_: web_sys::HashChangeEvent| {
            listener();
        }) as Box<dyn FnMut(_)>);

        if let Err(e) =
            window.add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to add hashchange listener: {:?}", e);
            return ListenerGuard::inactive();
        }
        tracing::debug!("Listening for hashchange");

        // The closure moves into the guard so it lives exactly as long as
        // the subscription
        ListenerGuard::new(move || {
            tracing::debug!("Removing hashchange listener");
            if let Err(e) = window
                .remove_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
            {
                tracing::warn!("Failed to remove hashchange listener: {:?}", e);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_host_records_scrolls() {
        let host = MemoryHost::new("#/home")
            .with_anchors(["features", "pricing"])
            .with_scroll(ScrollSettings {
                top: ScrollBehavior::Smooth,
                section: ScrollBehavior::Instant,
            });

        host.scroll_to_top();
        assert!(host.scroll_to_element("features"));
        assert!(!host.scroll_to_element("faq"));

        assert_eq!(
            host.scroll_requests(),
            vec![
                ScrollRequest::Top(ScrollBehavior::Smooth),
                ScrollRequest::Element {
                    id: "features".into(),
                    behavior: ScrollBehavior::Instant,
                    found: true,
                },
                ScrollRequest::Element {
                    id: "faq".into(),
                    behavior: ScrollBehavior::Instant,
                    found: false,
                },
            ]
        );
    }

    #[test]
    fn test_listeners_fire_on_fragment_change() {
        let host = MemoryHost::new("#/home");
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = seen.clone();
        let handle = host.clone();
        let guard = host.on_location_change(Box::new(move || {
            log.borrow_mut().push(handle.location_fragment());
        }));
        assert!(guard.is_active());
        assert_eq!(host.listener_count(), 1);

        host.set_fragment("#/pricing");
        // Unchanged fragment: no hashchange
        host.set_fragment("#/pricing");
        host.set_fragment("#/login?next=x");
        assert_eq!(*seen.borrow(), vec!["#/pricing", "#/login?next=x"]);

        drop(guard);
        assert_eq!(host.listener_count(), 0);
        host.set_fragment("#/home");
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_guard_outliving_host_is_harmless() {
        let host = MemoryHost::new("");
        let guard = host.on_location_change(Box::new(|| {}));
        drop(host);
        drop(guard);
        assert!(!ListenerGuard::inactive().is_active());
    }

    #[test]
    fn test_scroll_settings_deserialize_defaults() {
        let settings: ScrollSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ScrollSettings::default());
        let settings: ScrollSettings =
            serde_json::from_str(r#"{"top":"smooth","section":"instant"}"#).unwrap();
        assert_eq!(settings.top, ScrollBehavior::Smooth);
        assert_eq!(settings.section, ScrollBehavior::Instant);
    }
}
