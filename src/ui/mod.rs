mod admin;
mod dialogs;
mod gallery;
mod pages;
mod panels;
mod system;
mod widgets;

pub use system::{identity_change_system, ui_system};
