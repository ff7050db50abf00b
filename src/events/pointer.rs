use crate::core::ParticleField;
use crate::dom::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in viewport coordinates for the field's attraction.
///
/// The canvas covers the viewport, so `clientX/clientY` are canvas pixels.
pub fn wire_pointer_tracking(
    window: &web::Window,
    field: Rc<RefCell<ParticleField>>,
) -> anyhow::Result<EventListener> {
    EventListener::new(window, "mousemove", move |ev: web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            field
                .borrow_mut()
                .set_pointer(mouse.client_x() as f64, mouse.client_y() as f64);
        }
    })
}
