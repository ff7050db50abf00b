#![cfg(target_arch = "wasm32")]
use crate::core::{FieldConfig, TypewriterConfig};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod background;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod navbar;
mod reveal;
mod render;
mod typing;

/// Everything mounted on the page. Dropping it unsubscribes every listener,
/// stops both timer loops and disconnects the observers.
struct Effects {
    _background: Option<background::Background>,
    _typing: Option<typing::TypingEffect>,
    _navbar_scroll: Option<dom::EventListener>,
    _mobile_menu: Option<Vec<dom::EventListener>>,
    _sections: Option<reveal::Observer>,
    _skill_bars: Option<reveal::Observer>,
}

thread_local! {
    static EFFECTS: RefCell<Option<Effects>> = RefCell::new(None);
}

// A failing effect is logged and skipped so the rest of the page still animates.
fn mounted<T>(name: &str, result: anyhow::Result<Option<T>>) -> Option<T> {
    match result {
        Ok(v) => v,
        Err(e) => {
            log::error!("[{}] mount error: {:?}", name, e);
            None
        }
    }
}

fn mount() -> anyhow::Result<Effects> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    Ok(Effects {
        _background: mounted(
            "background",
            background::mount(&window, &document, FieldConfig::default()),
        ),
        _typing: mounted(
            "typing",
            typing::mount(&window, &document, TypewriterConfig::default()),
        ),
        _navbar_scroll: mounted("navbar", navbar::mount_scroll_style(&window, &document)),
        _mobile_menu: mounted("navbar", navbar::mount_mobile_menu(&document)),
        _sections: mounted("reveal", reveal::mount_sections(&document)),
        _skill_bars: mounted("reveal", reveal::mount_skill_bars(&document)),
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    // Replacing a previous mount drops it, which tears it down first.
    teardown();
    match mount() {
        Ok(effects) => EFFECTS.with(|slot| *slot.borrow_mut() = Some(effects)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Stop every effect and release its listeners, timers and observers.
#[wasm_bindgen]
pub fn teardown() {
    let effects = EFFECTS.with(|slot| slot.borrow_mut().take());
    if let Some(effects) = effects {
        drop(effects);
        log::info!("portfolio-fx torn down");
    }
}
