//! Host-runtime contract.
//!
//! Velum binds to a native UI runtime it does not implement. The runtime
//! provides screen geometry, container views, modal controllers, localized
//! strings, and a share surface; everything crosses this boundary through
//! the two traits below, implemented by production hosts and by the test
//! doubles in `velum-testing` alike.

use velum_core::{Rect, Size, Value};

/// Modal display mode recognized by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PresentationStyle {
    Automatic,
    FullScreen,
    #[default]
    PageSheet,
    FormSheet,
    CurrentContext,
    Custom,
    OverFullScreen,
    OverCurrentContext,
    Popover,
    BlurOverFullScreen,
}

impl PresentationStyle {
    /// The native constant the host's modal controller expects.
    pub fn raw(self) -> i32 {
        match self {
            Self::Automatic => -2,
            Self::FullScreen => 0,
            Self::PageSheet => 1,
            Self::FormSheet => 2,
            Self::CurrentContext => 3,
            Self::Custom => 4,
            Self::OverFullScreen => 5,
            Self::OverCurrentContext => 6,
            Self::Popover => 7,
            Self::BlurOverFullScreen => 8,
        }
    }

    /// Styles that paint edge to edge and therefore keep the top safe-area
    /// inset in their chrome.
    pub fn is_edge_to_edge(self) -> bool {
        matches!(
            self,
            Self::FullScreen | Self::OverFullScreen | Self::BlurOverFullScreen
        )
    }
}

/// A native modal-controller handle paired with its container view.
///
/// Presentation and dismissal are fire-and-forget: the host animates the
/// transition and owns its completion, no callback is awaited.
pub trait ModalSurface {
    fn set_style(&mut self, style: PresentationStyle);

    /// When set, the host must reject interactive (gesture or tap-outside)
    /// dismissal.
    fn set_prevents_dismissal(&mut self, prevent: bool);

    /// Materializes `view` into the container ahead of presentation.
    fn attach(&mut self, view: &Value);

    /// Requests animated presentation.
    fn present(&mut self);

    /// Requests animated dismissal.
    fn dismiss(&mut self);
}

/// The capabilities a host runtime exposes to this layer.
pub trait HostRuntime {
    type Modal: ModalSurface;

    /// Device display size in points.
    fn screen_size(&self) -> Size;

    /// Creates a container view sized to `frame` with a modal controller
    /// bound to it.
    fn create_modal(&self, frame: Rect) -> Self::Modal;

    /// Localized string lookup for default chrome titles such as `CLOSE`
    /// and `PREVIEW`.
    fn localized(&self, key: &str) -> String;

    /// Hands raw image data to the host's share/export surface.
    fn share_image(&self, data: &[u8]);
}
