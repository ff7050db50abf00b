use crate::constants::CANVAS_ID;
use crate::core::{FieldConfig, ParticleField};
use crate::dom::{self, EventListener};
use crate::events;
use crate::frame::{self, FrameContext, FrameLoop};
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The mounted particle-network background.
///
/// Owns the frame loop and the resize/pointer subscriptions; dropping it
/// tears all of them down.
pub struct Background {
    field: Rc<RefCell<ParticleField>>,
    frame_loop: FrameLoop,
    _listeners: Vec<EventListener>,
}

impl Background {
    pub fn field(&self) -> &Rc<RefCell<ParticleField>> {
        &self.field
    }

    /// Stop animating; the listeners stay subscribed until the value is dropped.
    pub fn stop(&self) {
        self.frame_loop.stop();
    }
}

/// Mount the background on `#neural-bg`; `Ok(None)` when the page has no
/// such canvas.
pub fn mount(
    window: &web::Window,
    document: &web::Document,
    config: FieldConfig,
) -> anyhow::Result<Option<Background>> {
    let Some(el) = document.get_element_by_id(CANVAS_ID) else {
        log::debug!("[background] no #{} canvas, skipping", CANVAS_ID);
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))?;
    let surface = CanvasSurface::new(&canvas)?;

    let field = Rc::new(RefCell::new(ParticleField::new(config)));
    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    field.borrow_mut().resize(w, h);
    log::info!(
        "[background] {}x{} with {} particles",
        w,
        h,
        field.borrow().particles().len()
    );

    let listeners = vec![
        events::wire_field_resize(window, canvas, field.clone())?,
        events::wire_pointer_tracking(window, field.clone())?,
    ];

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        field: field.clone(),
        surface,
        frames: 0,
    }));
    let frame_loop = frame::start_loop(frame_ctx)?;

    Ok(Some(Background {
        field,
        frame_loop,
        _listeners: listeners,
    }))
}
