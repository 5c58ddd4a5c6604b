//! A single popup overlay shown by an open button and hidden by its close
//! control or by a click on its own backdrop.
//!
//! [`PopupState`] holds the visibility rules and is platform independent.
//! On wasm, [`PopupToggle`] binds those rules to DOM elements and [`Popup`]
//! renders the markup and binds it once mounted.

mod component;
mod error;
mod state;
#[cfg(target_arch = "wasm32")]
mod toggle;

pub use component::Popup;
pub use error::{PopupError, PopupPart};
pub use state::{ClickTarget, Display, PopupEvent, PopupState};
#[cfg(target_arch = "wasm32")]
pub use toggle::PopupToggle;
