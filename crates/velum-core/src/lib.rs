//! View-tree value model, geometry, and pure utilities for Velum.

mod geometry;
mod image;
mod strings;
mod text;
mod value;
mod version;
mod view;

pub use geometry::{Rect, Size};
pub use image::{downscale_factor, downscale_factor_default, DEFAULT_MAX_PIXEL_AREA};
pub use strings::{parse_table, StringTable};
pub use text::{format_size, trim, TrimSide};
pub use value::{deep_equal, Props, Value};
pub use version::compare_versions;
pub use view::View;
