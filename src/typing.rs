use crate::constants::{PHRASES, TYPED_TEXT_ID};
use crate::core::{Typewriter, TypewriterConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Running typewriter on `#typed-text`, driven by a `setTimeout` chain.
pub struct TypingEffect {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    step: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl TypingEffect {
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(id);
            }
        }
        self.step.borrow_mut().take();
    }
}

impl Drop for TypingEffect {
    fn drop(&mut self) {
        self.stop();
    }
}

// Show the next text and return how long to wait before the following step.
fn show_next(el: &web::Element, typewriter: &RefCell<Typewriter>) -> Option<u32> {
    let step = typewriter.borrow_mut().step()?;
    el.set_text_content(Some(&step.text));
    Some(step.delay_ms)
}

fn schedule(
    window: &web::Window,
    cb: &Closure<dyn FnMut()>,
    delay_ms: u32,
) -> anyhow::Result<i32> {
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .map_err(|e| anyhow::anyhow!("setTimeout: {:?}", e))
}

/// Start typing into `#typed-text`; `Ok(None)` when the element is absent.
pub fn mount(
    window: &web::Window,
    document: &web::Document,
    config: TypewriterConfig,
) -> anyhow::Result<Option<TypingEffect>> {
    let Some(el) = document.get_element_by_id(TYPED_TEXT_ID) else {
        log::debug!("[typing] no #{} element, skipping", TYPED_TEXT_ID);
        return Ok(None);
    };
    let typewriter = Rc::new(RefCell::new(Typewriter::new(PHRASES, config)));

    // First step runs synchronously; the rest ride the timer chain.
    let Some(first_delay) = show_next(&el, &typewriter) else {
        return Ok(None);
    };

    let running = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let step: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let step_clone = step.clone();
    let running_step = running.clone();
    let pending_step = pending.clone();
    let closure = Closure::wrap(Box::new(move || {
        pending_step.set(None);
        if !running_step.get() {
            return;
        }
        let Some(delay) = show_next(&el, &typewriter) else {
            return;
        };
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = step_clone.borrow().as_ref() {
            match schedule(&w, cb, delay) {
                Ok(id) => pending_step.set(Some(id)),
                Err(e) => log::error!("[typing] {:?}", e),
            }
        }
    }) as Box<dyn FnMut()>);

    pending.set(Some(schedule(window, &closure, first_delay)?));
    *step.borrow_mut() = Some(closure);
    log::info!("[typing] started with {} phrases", PHRASES.len());

    Ok(Some(TypingEffect {
        running,
        pending,
        step,
    }))
}
