//! Modal overlay state.
//!
//! One modal at a time, independent of routing: navigating never opens or
//! closes it.

use serde::Serialize;
use serde_json::Value;

static NO_PAYLOAD: Value = Value::Null;

/// Current overlay.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ModalState {
    #[default]
    Closed,
    Open { kind: String, payload: Value },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn kind(&self) -> Option<&str> {
        match self {
            ModalState::Open { kind, .. } => Some(kind),
            ModalState::Closed => None,
        }
    }

    /// Payload of the open modal; `null` when closed or opened without one.
    pub fn payload(&self) -> &Value {
        match self {
            ModalState::Open { payload, .. } => payload,
            ModalState::Closed => &NO_PAYLOAD,
        }
    }
}

/// Owns the [`ModalState`].
#[derive(Debug, Default)]
pub struct OverlayManager {
    state: ModalState,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `kind`, replacing whatever modal is showing.
    pub fn open(&mut self, kind: impl Into<String>, payload: Option<Value>) {
        let kind = kind.into();
        if let Some(previous) = self.state.kind() {
            tracing::debug!("Modal {} replaced by {}", previous, kind);
        } else {
            tracing::debug!("Modal {} opened", kind);
        }
        self.state = ModalState::Open {
            kind,
            payload: payload.unwrap_or(Value::Null),
        };
    }

    /// Close the modal and drop its payload. No-op when already closed.
    pub fn close(&mut self) {
        if let Some(kind) = self.state.kind() {
            tracing::debug!("Modal {} closed", kind);
        }
        self.state = ModalState::Closed;
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_closed_by_default() {
        let overlay = OverlayManager::new();
        assert!(!overlay.state().is_open());
        assert_eq!(overlay.state().kind(), None);
        assert_eq!(overlay.state().payload(), &Value::Null);
    }

    #[test]
    fn test_open_replaces_instead_of_stacking() {
        let mut overlay = OverlayManager::new();
        overlay.open("order-details", Some(json!({ "orderId": "A-1" })));
        overlay.open("confirm-cancel", Some(json!({ "orderId": "A-2" })));

        assert_eq!(overlay.state().kind(), Some("confirm-cancel"));
        assert_eq!(overlay.state().payload()["orderId"], "A-2");

        overlay.close();
        assert_eq!(overlay.state(), &ModalState::Closed);
    }

    #[test]
    fn test_close_discards_payload() {
        let mut overlay = OverlayManager::new();
        overlay.open("upgrade-plan", Some(json!({ "plan": "pro" })));
        overlay.close();
        overlay.close();
        assert_eq!(overlay.state().payload(), &Value::Null);

        overlay.open("upgrade-plan", None);
        assert!(overlay.state().is_open());
        assert_eq!(overlay.state().payload(), &Value::Null);
    }

    #[test]
    fn test_unknown_kind_still_opens() {
        let mut overlay = OverlayManager::new();
        overlay.open("no-such-modal", None);
        assert!(overlay.state().is_open());
        assert_eq!(overlay.state().kind(), Some("no-such-modal"));
    }
}
