//! Recording test doubles for the Velum host contract.

use std::cell::RefCell;
use std::rc::Rc;

use velum_core::{parse_table, Rect, Size, StringTable, Value};
use velum_host::{HostRuntime, ModalSurface, PresentationStyle};

/// One host-visible operation performed on a [`RecordedModal`], in call
/// order.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalEvent {
    StyleSet(PresentationStyle),
    PreventDismissSet(bool),
    Attached,
    Presented,
    Dismissed,
}

/// Shared handles into one recorded modal: kept by the [`FakeHost`] so tests
/// can inspect a modal after the controller has taken ownership of it.
#[derive(Clone)]
pub struct ModalProbe {
    pub frame: Rect,
    pub events: Rc<RefCell<Vec<ModalEvent>>>,
    pub attached: Rc<RefCell<Option<Value>>>,
}

impl ModalProbe {
    pub fn events(&self) -> Vec<ModalEvent> {
        self.events.borrow().clone()
    }

    pub fn attached(&self) -> Option<Value> {
        self.attached.borrow().clone()
    }

    pub fn was_dismissed(&self) -> bool {
        self.events.borrow().contains(&ModalEvent::Dismissed)
    }
}

/// Modal surface that records every call through its probe.
pub struct RecordedModal {
    probe: ModalProbe,
}

impl ModalSurface for RecordedModal {
    fn set_style(&mut self, style: PresentationStyle) {
        self.probe.events.borrow_mut().push(ModalEvent::StyleSet(style));
    }

    fn set_prevents_dismissal(&mut self, prevent: bool) {
        self.probe
            .events
            .borrow_mut()
            .push(ModalEvent::PreventDismissSet(prevent));
    }

    fn attach(&mut self, view: &Value) {
        *self.probe.attached.borrow_mut() = Some(view.clone());
        self.probe.events.borrow_mut().push(ModalEvent::Attached);
    }

    fn present(&mut self) {
        self.probe.events.borrow_mut().push(ModalEvent::Presented);
    }

    fn dismiss(&mut self) {
        self.probe.events.borrow_mut().push(ModalEvent::Dismissed);
    }
}

/// In-memory host runtime with a fixed screen, an English string table, and
/// a log of every modal it created and every image it was asked to share.
pub struct FakeHost {
    screen: Size,
    language: String,
    strings: StringTable,
    shared: RefCell<Vec<Vec<u8>>>,
    modals: RefCell<Vec<ModalProbe>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::with_screen(Size::new(390.0, 844.0))
    }

    pub fn with_screen(screen: Size) -> Self {
        let mut strings = StringTable::new();
        strings.merge(
            "en",
            parse_table(r#""CLOSE" = "Close"; "PREVIEW" = "Preview";"#),
            true,
        );
        Self {
            screen,
            language: "en".to_owned(),
            strings,
            shared: RefCell::new(Vec::new()),
            modals: RefCell::new(Vec::new()),
        }
    }

    pub fn modal_count(&self) -> usize {
        self.modals.borrow().len()
    }

    pub fn modal(&self, index: usize) -> Option<ModalProbe> {
        self.modals.borrow().get(index).cloned()
    }

    pub fn shared_images(&self) -> Vec<Vec<u8>> {
        self.shared.borrow().clone()
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRuntime for FakeHost {
    type Modal = RecordedModal;

    fn screen_size(&self) -> Size {
        self.screen
    }

    fn create_modal(&self, frame: Rect) -> Self::Modal {
        let probe = ModalProbe {
            frame,
            events: Rc::new(RefCell::new(Vec::new())),
            attached: Rc::new(RefCell::new(None)),
        };
        self.modals.borrow_mut().push(probe.clone());
        RecordedModal { probe }
    }

    fn localized(&self, key: &str) -> String {
        self.strings
            .lookup(&self.language, key)
            .map(str::to_owned)
            .unwrap_or_else(|| key.to_owned())
    }

    fn share_image(&self, data: &[u8]) {
        self.shared.borrow_mut().push(data.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modals_record_their_call_sequence() {
        let host = FakeHost::new();
        let mut modal = host.create_modal(Rect::sized(host.screen_size()));
        modal.set_style(PresentationStyle::FullScreen);
        modal.set_prevents_dismissal(true);
        modal.present();
        modal.dismiss();
        let probe = host.modal(0).expect("probe");
        assert_eq!(
            probe.events(),
            vec![
                ModalEvent::StyleSet(PresentationStyle::FullScreen),
                ModalEvent::PreventDismissSet(true),
                ModalEvent::Presented,
                ModalEvent::Dismissed,
            ]
        );
        assert_eq!(probe.frame.width, 390.0);
    }

    #[test]
    fn localized_falls_back_to_the_key() {
        let host = FakeHost::new();
        assert_eq!(host.localized("CLOSE"), "Close");
        assert_eq!(host.localized("UNKNOWN"), "UNKNOWN");
    }

    #[test]
    fn shared_images_are_collected() {
        let host = FakeHost::new();
        host.share_image(&[1, 2, 3]);
        assert_eq!(host.shared_images(), vec![vec![1, 2, 3]]);
    }
}
