use crate::core::ParticleField;
use crate::dom::{self, EventListener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Resize the canvas backing store and regenerate the field on every
/// window resize.
pub fn wire_field_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
) -> anyhow::Result<EventListener> {
    EventListener::new(window, "resize", move |_| {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        field.borrow_mut().resize(w, h);
        log::debug!("[resize] field {}x{}", w, h);
    })
}
