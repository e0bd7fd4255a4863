//! Session context for the signed-in role.
//!
//! Authentication itself lives elsewhere; this only tracks which role the
//! mock sign-in picked so the role guard and nav can react to it.

use dioxus::prelude::*;

/// Who is using the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Guest,
    Customer,
    StoreOwner,
    Admin,
}

impl Role {
    pub const SIGNED_IN: [Role; 3] = [Role::Customer, Role::StoreOwner, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Customer => "customer",
            Role::StoreOwner => "store-owner",
            Role::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "customer" => Role::Customer,
            "store-owner" => Role::StoreOwner,
            "admin" => Role::Admin,
            _ => Role::Guest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Customer => "Customer",
            Role::StoreOwner => "Store owner",
            Role::Admin => "Platform admin",
        }
    }

    /// Whether this role may open screens that require `required`.
    ///
    /// Admins see everything, store owners also see customer screens.
    pub fn allows(&self, required: Role) -> bool {
        match required {
            Role::Guest => true,
            Role::Customer => *self != Role::Guest,
            Role::StoreOwner => matches!(self, Role::StoreOwner | Role::Admin),
            Role::Admin => *self == Role::Admin,
        }
    }
}

/// Global session state shared via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    role: Signal<Role>,
}

impl SessionContext {
    pub fn role(&self) -> Role {
        (self.role)()
    }

    pub fn sign_in(&self, role: Role) {
        tracing::info!("Signed in as {}", role.as_str());
        let mut current = self.role;
        current.set(role);
    }

    pub fn sign_out(&self) {
        tracing::info!("Signed out");
        let mut current = self.role;
        current.set(Role::Guest);
    }
}

/// Initialize session context provider - call once at app root
pub fn use_session_provider(initial: Role) -> SessionContext {
    let role = use_signal(|| initial);
    let ctx = SessionContext { role };
    use_context_provider(|| ctx);
    ctx
}

/// Get session context - use in any component
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
