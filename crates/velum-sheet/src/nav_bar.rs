//! Navigation chrome composed around sheet content.

use std::fmt;
use std::rc::Rc;

use velum_core::{Value, View};
use velum_host::{HostRuntime, PresentationStyle};

/// Height of the host's default navigation bar.
pub const DEFAULT_BAR_HEIGHT: f64 = 44.0;
/// Compact bar height used when content is presented as a sheet.
pub const COMPACT_BAR_HEIGHT: f64 = 56.0;
/// Vertical extent of the large-title block above the normal bar.
pub const LARGE_TITLE_EXTENT: f64 = 52.0;

/// A chrome button: a title and/or symbol plus an optional tap handler.
#[derive(Clone, Default)]
pub struct ButtonSpec {
    pub(crate) title: Option<String>,
    pub(crate) symbol: Option<String>,
    pub(crate) on_tap: Option<Rc<dyn Fn()>>,
}

impl ButtonSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn on_tap(mut self, action: Rc<dyn Fn()>) -> Self {
        self.on_tap = Some(action);
        self
    }
}

impl fmt::Debug for ButtonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSpec")
            .field("title", &self.title)
            .field("symbol", &self.symbol)
            .field("on_tap", &self.on_tap.is_some())
            .finish()
    }
}

/// Chrome options for a sheet: title, leading dismiss button, trailing
/// buttons. The dismiss button defaults to the host's localized `CLOSE`
/// title when left unconfigured.
#[derive(Clone, Default)]
pub struct NavBarSpec {
    pub(crate) title: String,
    pub(crate) dismiss_button: ButtonSpec,
    pub(crate) trailing_buttons: Vec<ButtonSpec>,
}

impl NavBarSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn dismiss_button(mut self, button: ButtonSpec) -> Self {
        self.dismiss_button = button;
        self
    }

    pub fn trailing_button(mut self, button: ButtonSpec) -> Self {
        self.trailing_buttons.push(button);
        self
    }

    pub fn trailing_buttons(mut self, buttons: Vec<ButtonSpec>) -> Self {
        self.trailing_buttons = buttons;
        self
    }
}

impl fmt::Debug for NavBarSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavBarSpec")
            .field("title", &self.title)
            .field("dismiss_button", &self.dismiss_button)
            .field("trailing_buttons", &self.trailing_buttons)
            .finish()
    }
}

/// Bar heights for the chrome. The large-title height tracks the normal
/// height, so rebasing must subtract the old normal height before adding
/// the new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeMetrics {
    pub normal_height: f64,
    pub large_title_height: f64,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            normal_height: DEFAULT_BAR_HEIGHT,
            large_title_height: DEFAULT_BAR_HEIGHT + LARGE_TITLE_EXTENT,
        }
    }
}

impl ChromeMetrics {
    /// Rebases the bar onto [`COMPACT_BAR_HEIGHT`], keeping the large-title
    /// block's own extent intact.
    pub fn compact(mut self) -> Self {
        self.large_title_height -= self.normal_height;
        self.normal_height = COMPACT_BAR_HEIGHT;
        self.large_title_height += self.normal_height;
        self
    }
}

/// Wraps `content` in sheet chrome: a compact title bar with a leading
/// dismiss button and the spec's trailing buttons.
///
/// Tapping the dismiss button always runs `dismiss` first and the caller's
/// own handler second. The top safe-area inset stays only for edge-to-edge
/// styles. A `bgcolor` declared on the content's props becomes the page
/// background. The controller's other state is left untouched.
pub(crate) fn build_chrome<H: HostRuntime>(
    host: &H,
    content: &Value,
    spec: &NavBarSpec,
    style: PresentationStyle,
    dismiss: Rc<dyn Fn()>,
) -> Value {
    let metrics = ChromeMetrics::default().compact();
    let top_safe_area = style.is_edge_to_edge();

    let caller_tap = spec.dismiss_button.on_tap.clone();
    let tap: Rc<dyn Fn()> = Rc::new(move || {
        dismiss();
        if let Some(tap) = &caller_tap {
            tap();
        }
    });
    let mut dismiss_button = spec.dismiss_button.clone();
    if dismiss_button.title.is_none() && dismiss_button.symbol.is_none() {
        dismiss_button.title = Some(host.localized("CLOSE"));
    }

    let mut bar = View::new("navbar")
        .prop("title", spec.title.clone())
        .prop("height", metrics.normal_height)
        .prop("largeTitleHeight", metrics.large_title_height)
        .prop("largeTitleDisplayMode", "never")
        .prop("topSafeArea", top_safe_area)
        .child(button_view(&dismiss_button, Some(tap), "leading"));
    for button in &spec.trailing_buttons {
        bar = bar.child(button_view(button, button.on_tap.clone(), "trailing"));
    }

    let mut page = View::new("page").fill();
    if let Some(bgcolor) = content.get("props").and_then(|props| props.get("bgcolor")) {
        page = page.prop("bgcolor", bgcolor.clone());
    }
    page.child(bar).child(content.clone()).into()
}

fn button_view(spec: &ButtonSpec, tap: Option<Rc<dyn Fn()>>, slot: &str) -> View {
    let mut view = View::new("button").prop("slot", slot);
    if let Some(title) = &spec.title {
        view = view.prop("title", title.clone());
    }
    if let Some(symbol) = &spec.symbol {
        view = view.prop("symbol", symbol.clone());
    }
    if let Some(tap) = tap {
        view = view.action("tapped", tap);
    }
    view
}
