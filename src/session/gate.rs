use crate::model::{Identity, Role};

/// Proof that the current identity may use the cart.
/// Only `RoleGate::cart_access` can create one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartAccess {
    _private: (),
}

/// Capability checks derived from the current identity. Read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleGate {
    role: Option<Role>,
}

impl RoleGate {
    pub fn new(identity: Option<&Identity>) -> Self {
        Self {
            role: identity.map(|i| i.role),
        }
    }

    pub fn can_view_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    pub fn can_use_cart(&self) -> bool {
        self.role == Some(Role::User)
    }

    pub fn cart_access(&self) -> Option<CartAccess> {
        self.can_use_cart().then_some(CartAccess { _private: () })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_identity_has_no_capabilities() {
        let gate = RoleGate::new(None);
        assert!(!gate.can_view_admin());
        assert!(!gate.can_use_cart());
        assert!(gate.cart_access().is_none());
    }

    #[test]
    fn test_user_can_use_cart_only() {
        let user = Identity::new("ana", "Ana", Role::User);
        let gate = RoleGate::new(Some(&user));
        assert!(!gate.can_view_admin());
        assert!(gate.can_use_cart());
        assert!(gate.cart_access().is_some());
    }

    #[test]
    fn test_admin_can_view_admin_only() {
        let admin = Identity::new("root", "Chef", Role::Admin);
        let gate = RoleGate::new(Some(&admin));
        assert!(gate.can_view_admin());
        assert!(!gate.can_use_cart());
        assert!(gate.cart_access().is_none());
    }
}
