//! Sheet lifecycle: configuration, host binding, present/dismiss.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use velum_core::{Rect, Value};
use velum_host::{HostRuntime, ModalSurface, PresentationStyle};

use crate::error::SheetError;
use crate::nav_bar::{build_chrome, NavBarSpec};

/// The native resources bound at [`SheetController::init`]: a container view
/// sized to the screen plus the host's modal controller, owned here and
/// operated only through [`present`](Self::present) and
/// [`dismiss`](Self::dismiss).
pub struct HostBinding<M: ModalSurface> {
    modal: M,
}

impl<M: ModalSurface> HostBinding<M> {
    fn new(modal: M) -> Self {
        Self { modal }
    }

    fn present(&mut self, tree: Option<&Value>) {
        if let Some(tree) = tree {
            self.modal.attach(tree);
        }
        self.modal.present();
    }

    fn dismiss(&mut self) {
        self.modal.dismiss();
    }
}

type BindingCell<M> = Rc<RefCell<Option<HostBinding<M>>>>;

/// Builder and lifecycle owner for one modal sheet.
///
/// Configuration is mutable until [`init`](Self::init) binds host resources;
/// [`present`](Self::present) and [`dismiss`](Self::dismiss) may then be
/// called any number of times, including presenting again after a dismissal.
/// Single-threaded by contract: calls are expected from the host's UI-event
/// thread and nothing here locks.
pub struct SheetController<H: HostRuntime> {
    host: Rc<H>,
    view: Option<Value>,
    style: PresentationStyle,
    prevent_dismiss: bool,
    nav_bar: Option<NavBarSpec>,
    chrome: Option<Value>,
    binding: BindingCell<H::Modal>,
}

impl<H: HostRuntime> fmt::Debug for SheetController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetController")
            .field("style", &self.style)
            .field("prevent_dismiss", &self.prevent_dismiss)
            .field("has_view", &self.view.is_some())
            .field("has_nav_bar", &self.nav_bar.is_some())
            .field("initialized", &self.binding.borrow().is_some())
            .finish()
    }
}

// The chrome's dismiss action captures the binding cell inside an
// `Rc<dyn Fn()>`, so the host's modal type must be owned, not borrowed.
impl<H: HostRuntime + 'static> SheetController<H> {
    pub fn new(host: Rc<H>) -> Self {
        Self {
            host,
            view: None,
            style: PresentationStyle::default(),
            prevent_dismiss: false,
            nav_bar: None,
            chrome: None,
            binding: Rc::new(RefCell::new(None)),
        }
    }

    /// Sets the content view. Fails unless `view` is a composite value.
    pub fn set_view(&mut self, view: impl Into<Value>) -> Result<&mut Self, SheetError> {
        let view = view.into();
        if !view.is_composite() {
            return Err(SheetError::InvalidView { got: view.kind_name() });
        }
        self.view = Some(view);
        Ok(self)
    }

    pub fn set_style(&mut self, style: PresentationStyle) -> &mut Self {
        self.style = style;
        self
    }

    /// Asks the host to reject interactive dismissal once presented.
    pub fn prevent_dismiss(&mut self) -> &mut Self {
        self.prevent_dismiss = true;
        self
    }

    /// Stores chrome options. The chrome itself is built by
    /// [`init`](Self::init).
    pub fn add_nav_bar(&mut self, spec: NavBarSpec) -> &mut Self {
        self.nav_bar = Some(spec);
        self
    }

    /// Freezes configuration and binds host resources: builds the chrome
    /// when a nav bar was added (requiring a content view), then creates a
    /// screen-sized modal configured with the style and dismissal flag.
    ///
    /// Call exactly once. A second call builds a fresh, independent binding;
    /// the previously created modal stays registered with the host with no
    /// way to reach it from here.
    pub fn init(&mut self) -> Result<&mut Self, SheetError> {
        self.chrome = self.compose_chrome()?;
        let screen = self.host.screen_size();
        let mut modal = self.host.create_modal(Rect::sized(screen));
        modal.set_style(self.style);
        modal.set_prevents_dismissal(self.prevent_dismiss);
        *self.binding.borrow_mut() = Some(HostBinding::new(modal));
        log::debug!(
            "sheet bound (style {:?}, chrome: {})",
            self.style,
            self.chrome.is_some()
        );
        Ok(self)
    }

    fn compose_chrome(&self) -> Result<Option<Value>, SheetError> {
        let Some(spec) = &self.nav_bar else {
            return Ok(None);
        };
        let Some(view) = &self.view else {
            return Err(SheetError::ViewUndefined);
        };
        let binding = Rc::clone(&self.binding);
        let dismiss: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(binding) = binding.borrow_mut().as_mut() {
                binding.dismiss();
            }
        });
        Ok(Some(build_chrome(
            self.host.as_ref(),
            view,
            spec,
            self.style,
            dismiss,
        )))
    }

    /// Attaches the final view-tree (chrome-wrapped when chrome exists, raw
    /// content otherwise) and asks the host to present it animated. Inert
    /// before [`init`](Self::init).
    pub fn present(&mut self) {
        match self.binding.borrow_mut().as_mut() {
            Some(binding) => binding.present(self.chrome.as_ref().or(self.view.as_ref())),
            None => log::warn!("present() called before init(); ignoring"),
        }
    }

    /// Asks the host to dismiss the sheet animated. Inert before
    /// [`init`](Self::init).
    pub fn dismiss(&mut self) {
        match self.binding.borrow_mut().as_mut() {
            Some(binding) => binding.dismiss(),
            None => log::warn!("dismiss() called before init(); ignoring"),
        }
    }
}
