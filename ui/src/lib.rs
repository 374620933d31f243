//! Shared UI crate for Rollcall. Directory logic and views live here; platform crates only launch.

use dioxus::prelude::*;

pub mod core;
pub mod directory;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

/// Shared theme stylesheet (web builds link it, desktop inlines the same file).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
