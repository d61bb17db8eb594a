use bevy::log::debug;

use crate::model::Section;
use crate::session::RoleGate;

/// What the main content area should show for a (section, capabilities) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionView {
    Home,
    Menu,
    About,
    Contact,
    Admin,
    /// The requested section is not available; show this one instead
    Redirect(Section),
}

impl SectionView {
    /// Total over every section and capability combination.
    /// Admin without admin capability redirects to home.
    pub fn resolve(section: Section, gate: &RoleGate) -> Self {
        match section {
            Section::Home => SectionView::Home,
            Section::Menu => SectionView::Menu,
            Section::About => SectionView::About,
            Section::Contact => SectionView::Contact,
            Section::Admin if gate.can_view_admin() => SectionView::Admin,
            Section::Admin => SectionView::Redirect(Section::Home),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SectionRouter {
    current: Section,
}

impl SectionRouter {
    pub fn current(&self) -> Section {
        self.current
    }

    pub fn navigate(&mut self, section: Section) {
        if self.current != section {
            debug!("navigate {:?} -> {:?}", self.current, section);
        }
        self.current = section;
    }

    /// Resolves the current section, following a redirect if one is needed.
    /// The router ends up on the section that is actually rendered.
    pub fn resolve(&mut self, gate: &RoleGate) -> SectionView {
        match SectionView::resolve(self.current, gate) {
            SectionView::Redirect(target) => {
                debug!("{:?} not available, redirecting to {:?}", self.current, target);
                self.current = target;
                SectionView::resolve(target, gate)
            }
            view => view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Identity, Role};
    use crate::session::AuthProvider;

    #[test]
    fn test_initial_section_is_home() {
        assert_eq!(SectionRouter::default().current(), Section::Home);
    }

    #[test]
    fn test_any_section_reachable_from_any_other() {
        let mut router = SectionRouter::default();
        for from in Section::ALL {
            for to in Section::ALL {
                router.navigate(from);
                router.navigate(to);
                assert_eq!(router.current(), to);
            }
        }
    }

    #[test]
    fn test_resolve_is_total() {
        let admin = Identity::new("a", "A", Role::Admin);
        let user = Identity::new("u", "U", Role::User);
        let gates = [
            RoleGate::new(None),
            RoleGate::new(Some(&user)),
            RoleGate::new(Some(&admin)),
        ];
        for gate in &gates {
            for section in Section::ALL {
                let view = SectionView::resolve(section, gate);
                if section == Section::Admin {
                    let expected = if gate.can_view_admin() {
                        SectionView::Admin
                    } else {
                        SectionView::Redirect(Section::Home)
                    };
                    assert_eq!(view, expected);
                } else {
                    assert!(!matches!(view, SectionView::Redirect(_) | SectionView::Admin));
                }
            }
        }
    }

    #[test]
    fn test_sign_out_drops_admin_view_immediately() {
        let mut auth = AuthProvider::default();
        auth.sign_in("admin", "admin123").unwrap();
        let mut router = SectionRouter::default();
        router.navigate(Section::Admin);
        assert_eq!(router.resolve(&RoleGate::new(auth.current())), SectionView::Admin);

        auth.sign_out();
        assert_eq!(router.resolve(&RoleGate::new(auth.current())), SectionView::Home);
        assert_eq!(router.current(), Section::Home);
    }

    #[test]
    fn test_admin_without_identity_renders_home() {
        let gate = RoleGate::new(None);
        let mut router = SectionRouter::default();
        router.navigate(Section::Admin);
        assert_eq!(router.current(), Section::Admin);

        assert_eq!(router.resolve(&gate), SectionView::Home);
        assert_eq!(router.current(), Section::Home);
    }

    #[test]
    fn test_admin_with_admin_identity() {
        let admin = Identity::new("a", "A", Role::Admin);
        let gate = RoleGate::new(Some(&admin));
        let mut router = SectionRouter::default();
        router.navigate(Section::Admin);
        assert_eq!(router.resolve(&gate), SectionView::Admin);
        assert_eq!(router.current(), Section::Admin);
    }
}
