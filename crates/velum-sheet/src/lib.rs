//! Modal sheet presentation of declarative view-trees over a host UI
//! runtime.
//!
//! A [`SheetController`] is configured builder-style (content view,
//! presentation style, optional navigation chrome, dismiss prevention),
//! bound to host resources with [`SheetController::init`], and then
//! presented and dismissed at will. The host runtime itself stays behind
//! the `velum-host` traits.

mod controller;
mod error;
mod nav_bar;
mod quick_look;

pub use controller::{HostBinding, SheetController};
pub use error::SheetError;
pub use nav_bar::{
    ButtonSpec, ChromeMetrics, NavBarSpec, COMPACT_BAR_HEIGHT, DEFAULT_BAR_HEIGHT,
    LARGE_TITLE_EXTENT,
};
pub use quick_look::{quick_look_image, quick_look_image_titled};
