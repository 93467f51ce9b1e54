use std::rc::Rc;

use velum_core::{Value, View};
use velum_host::{HostRuntime, PresentationStyle};
use velum_sheet::{quick_look_image, ButtonSpec, NavBarSpec, SheetController, SheetError};
use velum_testing::{FakeHost, ModalEvent};

fn content() -> View {
    View::new("view").prop("id", "content").fill()
}

fn navbar_of(tree: &Value) -> &Value {
    tree.get("views").and_then(|views| views.index(0)).expect("navbar")
}

fn leading_button_of(tree: &Value) -> &Value {
    navbar_of(tree)
        .get("views")
        .and_then(|views| views.index(0))
        .expect("leading button")
}

fn tap(button: &Value) {
    let action = button
        .get("events")
        .and_then(|events| events.get("tapped"))
        .and_then(Value::as_action)
        .expect("tapped action");
    action();
}

#[test]
fn chrome_wraps_the_content_with_the_configured_title() {
    let host = Rc::new(FakeHost::new());
    let mut sheet = SheetController::new(Rc::clone(&host));
    sheet
        .set_view(content())
        .unwrap()
        .add_nav_bar(NavBarSpec::new().title("T"))
        .init()
        .unwrap();
    sheet.present();

    let tree = host.modal(0).unwrap().attached().expect("attached tree");
    assert_eq!(tree.get("type").and_then(Value::as_str), Some("page"));
    let bar = navbar_of(&tree);
    assert_eq!(
        bar.get("props").and_then(|p| p.get("title")).and_then(Value::as_str),
        Some("T")
    );
    let wrapped = tree.get("views").and_then(|views| views.index(1)).expect("content");
    assert_eq!(
        wrapped.get("props").and_then(|p| p.get("id")).and_then(Value::as_str),
        Some("content")
    );
}

#[test]
fn without_chrome_the_raw_content_is_attached() {
    let host = Rc::new(FakeHost::new());
    let mut sheet = SheetController::new(Rc::clone(&host));
    sheet.set_view(content()).unwrap().init().unwrap();
    sheet.present();

    let tree = host.modal(0).unwrap().attached().expect("attached tree");
    assert_eq!(tree.get("type").and_then(Value::as_str), Some("view"));
}

#[test]
fn safe_area_inset_tracks_the_style() {
    for (style, expected) in [
        (PresentationStyle::FullScreen, true),
        (PresentationStyle::PageSheet, false),
    ] {
        let host = Rc::new(FakeHost::new());
        let mut sheet = SheetController::new(Rc::clone(&host));
        sheet
            .set_view(content())
            .unwrap()
            .set_style(style)
            .add_nav_bar(NavBarSpec::new())
            .init()
            .unwrap();
        sheet.present();
        let tree = host.modal(0).unwrap().attached().expect("attached tree");
        let inset = navbar_of(&tree)
            .get("props")
            .and_then(|p| p.get("topSafeArea"))
            .and_then(Value::as_bool);
        assert_eq!(inset, Some(expected), "style {style:?}");
    }
}

#[test]
fn style_and_dismissal_flag_reach_the_modal() {
    let host = Rc::new(FakeHost::new());
    let mut sheet = SheetController::new(Rc::clone(&host));
    sheet
        .set_view(content())
        .unwrap()
        .set_style(PresentationStyle::OverCurrentContext)
        .prevent_dismiss()
        .init()
        .unwrap();

    let events = host.modal(0).unwrap().events();
    assert_eq!(
        events,
        vec![
            ModalEvent::StyleSet(PresentationStyle::OverCurrentContext),
            ModalEvent::PreventDismissSet(true),
        ]
    );
}

#[test]
fn dismissal_stays_allowed_by_default() {
    let host = Rc::new(FakeHost::new());
    let mut sheet = SheetController::new(Rc::clone(&host));
    sheet.set_view(content()).unwrap().init().unwrap();
    assert!(host
        .modal(0)
        .unwrap()
        .events()
        .contains(&ModalEvent::PreventDismissSet(false)));
}

#[test]
fn represent_after_dismiss_reattaches_and_presents() {
    let host = Rc::new(FakeHost::new());
    let mut sheet = SheetController::new(Rc::clone(&host));
    sheet.set_view(content()).unwrap().init().unwrap();
    sheet.present();
    sheet.dismiss();
    sheet.present();

    let events = host.modal(0).unwrap().events();
    let lifecycle: Vec<_> = events
        .into_iter()
        .filter(|event| {
            matches!(
                event,
                ModalEvent::Attached | ModalEvent::Presented | ModalEvent::Dismissed
            )
        })
        .collect();
    assert_eq!(
        lifecycle,
        vec![
            ModalEvent::Attached,
            ModalEvent::Presented,
            ModalEvent::Dismissed,
            ModalEvent::Attached,
            ModalEvent::Presented,
        ]
    );
}

#[test]
fn present_and_dismiss_before_init_are_inert() {
    let host = Rc::new(FakeHost::new());
    let mut sheet = SheetController::new(Rc::clone(&host));
    sheet.set_view(content()).unwrap();
    sheet.present();
    sheet.dismiss();
    assert_eq!(host.modal_count(), 0);
}

#[test]
fn non_composite_content_is_rejected() {
    let host = Rc::new(FakeHost::new());
    let mut sheet = SheetController::new(host);
    let err = sheet.set_view("not-a-view").unwrap_err();
    assert_eq!(err, SheetError::InvalidView { got: "string" });
    let err = sheet.set_view(3.0).unwrap_err();
    assert_eq!(err, SheetError::InvalidView { got: "number" });
}

#[test]
fn chrome_without_a_view_fails_init() {
    let host = Rc::new(FakeHost::new());
    let mut sheet = SheetController::new(Rc::clone(&host));
    let err = sheet.add_nav_bar(NavBarSpec::new()).init().unwrap_err();
    assert_eq!(err, SheetError::ViewUndefined);
    assert_eq!(host.modal_count(), 0);
}

#[test]
fn init_twice_binds_a_second_modal() {
    let host = Rc::new(FakeHost::new());
    let mut sheet = SheetController::new(Rc::clone(&host));
    sheet.set_view(content()).unwrap().init().unwrap();
    sheet.init().unwrap();
    assert_eq!(host.modal_count(), 2);

    sheet.present();
    assert!(host.modal(1).unwrap().events().contains(&ModalEvent::Presented));
    assert!(!host.modal(0).unwrap().events().contains(&ModalEvent::Presented));
}

#[test]
fn modal_container_is_sized_to_the_screen() {
    let host = Rc::new(FakeHost::new());
    let screen = host.screen_size();
    let mut sheet = SheetController::new(Rc::clone(&host));
    sheet.set_view(content()).unwrap().init().unwrap();

    let frame = host.modal(0).unwrap().frame;
    assert_eq!(frame.x, 0.0);
    assert_eq!(frame.y, 0.0);
    assert_eq!(frame.width, screen.width);
    assert_eq!(frame.height, screen.height);
}

#[test]
fn chrome_dismiss_button_dismisses_through_the_binding() {
    let host = Rc::new(FakeHost::new());
    let mut sheet = SheetController::new(Rc::clone(&host));
    sheet
        .set_view(content())
        .unwrap()
        .add_nav_bar(NavBarSpec::new())
        .init()
        .unwrap();
    sheet.present();

    let probe = host.modal(0).unwrap();
    let tree = probe.attached().expect("attached tree");
    tap(leading_button_of(&tree));
    assert!(probe.was_dismissed());
}

#[test]
fn caller_dismiss_handler_sees_the_dismissal_first() {
    let host = Rc::new(FakeHost::new());
    let observer = Rc::clone(&host);
    let seen = Rc::new(std::cell::Cell::new(false));
    let seen_by_handler = Rc::clone(&seen);
    let mut sheet = SheetController::new(Rc::clone(&host));
    sheet
        .set_view(content())
        .unwrap()
        .add_nav_bar(NavBarSpec::new().dismiss_button(ButtonSpec::new().title("Done").on_tap(
            Rc::new(move || {
                seen_by_handler.set(observer.modal(0).map(|m| m.was_dismissed()).unwrap_or(false));
            }),
        )))
        .init()
        .unwrap();
    sheet.present();

    let tree = host.modal(0).unwrap().attached().expect("attached tree");
    tap(leading_button_of(&tree));
    assert!(seen.get(), "dismiss must run before the caller's handler");
}

#[test]
fn quick_look_presents_a_zoomable_preview_with_share() {
    let host = Rc::new(FakeHost::new());
    let data = vec![0xDE, 0xAD, 0xBE, 0xEF];
    let _sheet = quick_look_image(Rc::clone(&host), data.clone()).unwrap();

    let probe = host.modal(0).expect("modal created");
    let tree = probe.attached().expect("presented immediately");
    assert!(probe.events().contains(&ModalEvent::Presented));

    let bar = navbar_of(&tree);
    assert_eq!(
        bar.get("props").and_then(|p| p.get("title")).and_then(Value::as_str),
        Some("Preview")
    );

    let scroll = tree
        .get("views")
        .and_then(|views| views.index(1))
        .and_then(|wrapper| wrapper.get("views"))
        .and_then(|views| views.index(0))
        .expect("scroll view");
    let scroll_props = scroll.get("props").expect("scroll props");
    assert_eq!(scroll_props.get("zoomEnabled").and_then(Value::as_bool), Some(true));
    assert_eq!(scroll_props.get("maxZoomScale").and_then(Value::as_num), Some(3.0));
    let image = scroll.get("views").and_then(|views| views.index(0)).expect("image view");
    assert_eq!(
        image.get("props").and_then(|p| p.get("data")).and_then(Value::as_data),
        Some(data.as_slice())
    );

    let share_button = navbar_of(&tree)
        .get("views")
        .and_then(|views| views.index(1))
        .expect("share button");
    assert_eq!(
        share_button.get("props").and_then(|p| p.get("symbol")).and_then(Value::as_str),
        Some("square.and.arrow.up")
    );
    tap(share_button);
    assert_eq!(host.shared_images(), vec![data]);
}

#[test]
fn bound_actions_keep_the_host_alive_past_the_caller_handle() {
    // The dismiss and share closures own their host clones, so dropping the
    // caller's handle must not invalidate an already-presented sheet.
    let host = Rc::new(FakeHost::new());
    let mut sheet = quick_look_image(Rc::clone(&host), vec![7]).unwrap();
    let probe = host.modal(0).unwrap();
    drop(host);

    let tree = probe.attached().expect("attached tree");
    tap(leading_button_of(&tree));
    assert!(probe.was_dismissed());
    sheet.present();
    assert!(probe.events().iter().filter(|e| **e == ModalEvent::Presented).count() >= 2);
}

#[test]
fn quick_look_dismiss_button_closes_the_sheet() {
    let host = Rc::new(FakeHost::new());
    let _sheet = quick_look_image(Rc::clone(&host), vec![1, 2, 3]).unwrap();
    let probe = host.modal(0).unwrap();
    let tree = probe.attached().expect("attached tree");
    let close = leading_button_of(&tree);
    assert_eq!(
        close.get("props").and_then(|p| p.get("title")).and_then(Value::as_str),
        Some("Close")
    );
    tap(close);
    assert!(probe.was_dismissed());
}
