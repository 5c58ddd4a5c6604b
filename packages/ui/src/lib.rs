//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod popup;
pub use popup::{Popup, PopupError};
#[cfg(target_arch = "wasm32")]
pub use popup::PopupToggle;

mod garden;
pub use garden::{load_garden, use_garden};

mod markdown;
pub use markdown::{render_markdown, Markdown};

mod navbar;
pub use navbar::Navbar;

pub mod views;
pub use views::{ClientList, MaintenanceCalendar, NewClientForm, PlantTable};
