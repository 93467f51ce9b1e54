//! Quick image preview sheet.

use std::rc::Rc;

use velum_core::View;
use velum_host::HostRuntime;

use crate::controller::SheetController;
use crate::error::SheetError;
use crate::nav_bar::{ButtonSpec, NavBarSpec};

const MAX_ZOOM_SCALE: f64 = 3.0;

/// Presents a pinch-zoomable preview of `data`, titled with the host's
/// localized `PREVIEW` string and carrying one trailing share button.
pub fn quick_look_image<H: HostRuntime + 'static>(
    host: Rc<H>,
    data: Vec<u8>,
) -> Result<SheetController<H>, SheetError> {
    let title = host.localized("PREVIEW");
    quick_look_image_titled(host, data, title)
}

/// [`quick_look_image`] with a caller-supplied title.
pub fn quick_look_image_titled<H: HostRuntime + 'static>(
    host: Rc<H>,
    data: Vec<u8>,
    title: impl Into<String>,
) -> Result<SheetController<H>, SheetError> {
    let share_host = Rc::clone(&host);
    let share_data = data.clone();
    let share: Rc<dyn Fn()> = Rc::new(move || share_host.share_image(&share_data));

    let mut sheet = SheetController::new(host);
    sheet
        .set_view(
            View::new("view").fill().child(
                View::new("scroll")
                    .prop("zoomEnabled", true)
                    .prop("maxZoomScale", MAX_ZOOM_SCALE)
                    .fill()
                    .child(View::new("image").prop("data", data).fill()),
            ),
        )?
        .add_nav_bar(
            NavBarSpec::new().title(title).trailing_button(
                ButtonSpec::new().symbol("square.and.arrow.up").on_tap(share),
            ),
        )
        .init()?;
    sheet.present();
    Ok(sheet)
}
