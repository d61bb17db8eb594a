use bevy::prelude::*;
use bevy_egui::egui;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::catalog::DishCatalog;
use crate::model::Section;
use crate::session::ContactMessage;

use super::config::AppConfig;
use super::router::SectionRouter;
use super::selection::DishSelection;
use super::viewer::ViewerState;

/// Transient notification shown in the bottom-right corner
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created: Instant,
}

/// Application-level state container. Section, selection and zoom are only
/// changed through the operations of their holders.
#[derive(Resource)]
pub struct AppState {
    pub config: AppConfig,
    pub router: SectionRouter,
    pub selection: DishSelection,
    pub viewer: ViewerState,

    // Toasts, newest last
    pub toasts: Vec<Toast>,

    // Loaded textures cache (dish id -> egui::TextureHandle)
    pub texture_cache: HashMap<String, egui::TextureHandle>,

    // Dialogs
    pub show_sign_in_dialog: bool,
    pub show_cart_window: bool,

    // Dialog input buffers
    pub sign_in_username: String,
    pub sign_in_password: String,
    pub sign_in_error: Option<String>,

    // Feedback form
    pub feedback_author: String,
    pub feedback_rating: u8,
    pub feedback_comment: String,

    // Contact form
    pub contact: ContactMessage,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: DishCatalog) -> Self {
        Self {
            config,
            router: SectionRouter::default(),
            selection: DishSelection::new(catalog),
            viewer: ViewerState::default(),
            toasts: Vec::new(),
            texture_cache: HashMap::new(),
            show_sign_in_dialog: false,
            show_cart_window: false,
            sign_in_username: String::new(),
            sign_in_password: String::new(),
            sign_in_error: None,
            feedback_author: String::new(),
            feedback_rating: 5,
            feedback_comment: String::new(),
            contact: ContactMessage::default(),
        }
    }

    pub fn catalog(&self) -> &DishCatalog {
        self.selection.catalog()
    }

    /// Switch section. The full-size viewer belongs to the home gallery and
    /// is closed when leaving it.
    pub fn navigate(&mut self, section: Section) {
        if section != Section::Home {
            self.viewer.close_full_size();
        }
        self.router.navigate(section);
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.toasts.push(Toast {
            message,
            created: Instant::now(),
        });
    }

    /// Drop toasts older than the configured lifetime
    pub fn expire_toasts(&mut self, now: Instant) {
        let lifetime = Duration::from_secs_f32(self.config.toast_seconds);
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created) < lifetime);
    }

    pub fn open_sign_in(&mut self) {
        self.show_sign_in_dialog = true;
        self.sign_in_password.clear();
        self.sign_in_error = None;
    }

    pub fn close_sign_in(&mut self) {
        self.show_sign_in_dialog = false;
        self.sign_in_password.clear();
        self.sign_in_error = None;
    }

    pub fn reset_feedback_form(&mut self) {
        self.feedback_comment.clear();
        self.feedback_rating = 5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), DishCatalog::builtin())
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.router.current(), Section::Home);
        assert_eq!(state.selection.current().id, state.catalog().dishes()[0].id);
        assert_eq!(state.viewer.inline_zoom(), 1.0);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_zoom_survives_dish_change() {
        let mut state = state();
        state.viewer.zoom_in();
        state.selection.next();
        assert!((state.viewer.inline_zoom() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_toasts_expire() {
        let mut state = state();
        state.notify("Saved");
        let created = state.toasts[0].created;

        state.expire_toasts(created + Duration::from_secs(1));
        assert_eq!(state.toasts.len(), 1);
        state.expire_toasts(created + Duration::from_secs(4));
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_huge_toast_lifetime_does_not_panic() {
        let mut state = AppState::new(
            AppConfig::from_json(r#"{ "toast_seconds": 1e20 }"#),
            DishCatalog::builtin(),
        );
        state.notify("Saved");
        state.expire_toasts(Instant::now());
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn test_leaving_home_closes_full_size() {
        let mut state = state();
        state.viewer.open_full_size();
        state.navigate(Section::Home);
        assert!(state.viewer.full_size_open);
        state.navigate(Section::Menu);
        assert!(!state.viewer.full_size_open);
    }

    #[test]
    fn test_sign_in_dialog_clears_password() {
        let mut state = state();
        state.sign_in_password = "secret".into();
        state.sign_in_error = Some("wrong password".into());
        state.open_sign_in();
        assert!(state.show_sign_in_dialog);
        assert!(state.sign_in_password.is_empty());
        assert!(state.sign_in_error.is_none());
    }
}
