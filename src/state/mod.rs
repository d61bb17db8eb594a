mod app_state;
mod config;
mod router;
mod selection;
mod viewer;

pub use app_state::AppState;
pub use config::{AppConfig, ThemePreference, DEFAULT_PANEL_MARGIN};
pub use router::SectionView;
pub use selection::DishSelection;
pub use viewer::{add_current_to_cart, ViewerState};
