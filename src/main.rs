mod catalog;
mod imaging;
mod model;
mod session;
mod state;
mod ui;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use catalog::DishCatalog;
use session::{AuthProvider, FeedbackBoard, IdentityChanged, SessionCart};
use state::{AppConfig, AppState};
use ui::{identity_change_system, ui_system};

/// Problem with the configured catalog, reported once the log is up
#[derive(Resource, Default)]
struct CatalogFallback(Option<String>);

fn main() {
    let config = AppConfig::load();
    let (catalog, fallback) = load_catalog(&config);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Casa Sabores".into(),
                resolution: (1440., 900.).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(AppState::new(config, catalog))
        .insert_resource(CatalogFallback(fallback))
        .init_resource::<AuthProvider>()
        .init_resource::<SessionCart>()
        .init_resource::<FeedbackBoard>()
        .add_event::<IdentityChanged>()
        .add_systems(Startup, setup)
        .add_systems(Update, (ui_system, identity_change_system).chain())
        .run();
}

/// Configured catalog if it loads, otherwise the built-in one plus the reason
fn load_catalog(config: &AppConfig) -> (DishCatalog, Option<String>) {
    match config.catalog_path {
        Some(ref path) => match DishCatalog::load(path) {
            Ok(catalog) => (catalog, None),
            Err(e) => (
                DishCatalog::builtin(),
                Some(format!("Could not load catalog {}: {}", path, e)),
            ),
        },
        None => (DishCatalog::builtin(), None),
    }
}

fn setup(mut commands: Commands, mut state: ResMut<AppState>, fallback: Res<CatalogFallback>) {
    commands.spawn(Camera2d);

    if let Some(ref reason) = fallback.0 {
        warn!("{}; using built-in dishes", reason);
        state.notify(format!("{}. Showing the house menu instead.", reason));
    }
    info!(
        "loaded {} dishes and {} offers",
        state.catalog().len(),
        state.catalog().offers().len()
    );
}
