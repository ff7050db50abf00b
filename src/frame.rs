use crate::core::ParticleField;
use crate::render::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub surface: CanvasSurface,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.field.borrow_mut().tick(&mut self.surface);
        self.frames += 1;
        if self.frames == 1 {
            log::info!(
                "[frame] first frame drawn, {} particles",
                self.field.borrow().particles().len()
            );
        }
    }
}

/// Handle to a running `requestAnimationFrame` loop.
///
/// Stopping cancels the pending frame and releases the callback, which also
/// breaks the callback's reference to itself. Dropping the handle stops it.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<FrameLoop> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let running = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    let closure = Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = tick_clone.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => pending_tick.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
            }
        }
    }) as Box<dyn FnMut()>);

    let id = window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?;
    pending.set(Some(id));
    *tick.borrow_mut() = Some(closure);

    Ok(FrameLoop {
        running,
        pending,
        tick,
    })
}
