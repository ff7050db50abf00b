use crate::constants::{
    REVEAL_CLASS, REVEAL_SELECTOR, REVEAL_THRESHOLD, SKILL_FILL_SELECTOR, SKILL_LEVEL_ATTR,
    SKILL_THRESHOLD, VISIBLE_CLASS,
};
use crate::core::skill_width;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// An intersection observer and its callback; disconnects when dropped.
pub struct Observer {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
    observed: usize,
}

impl Observer {
    pub fn observed(&self) -> usize {
        self.observed
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `targets`, calling `on_visible` each time one of them intersects
/// the viewport by at least `threshold`.
pub fn observe_all(
    targets: &[web::Element],
    threshold: f64,
    mut on_visible: impl FnMut(&web::Element) + 'static,
) -> anyhow::Result<Observer> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(&entry.target());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for el in targets {
        observer.observe(el);
    }
    Ok(Observer {
        observer,
        _callback: callback,
        observed: targets.len(),
    })
}

/// Mark the page sections for reveal and fade them in as they scroll into view.
pub fn mount_sections(document: &web::Document) -> anyhow::Result<Option<Observer>> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        log::debug!("[reveal] no sections to reveal");
        return Ok(None);
    }
    for el in &targets {
        _ = el.class_list().add_1(REVEAL_CLASS);
    }
    let observer = observe_all(&targets, REVEAL_THRESHOLD, |el| {
        _ = el.class_list().add_1(VISIBLE_CLASS);
    })?;
    log::info!("[reveal] observing {} sections", observer.observed());
    Ok(Some(observer))
}

/// Grow each skill bar to its `data-level` percentage once it is in view.
pub fn mount_skill_bars(document: &web::Document) -> anyhow::Result<Option<Observer>> {
    let fills = dom::query_all(document, SKILL_FILL_SELECTOR);
    if fills.is_empty() {
        log::debug!("[reveal] no skill bars");
        return Ok(None);
    }
    let observer = observe_all(&fills, SKILL_THRESHOLD, |el| {
        let Some(width) = el
            .get_attribute(SKILL_LEVEL_ATTR)
            .and_then(|level| skill_width(&level))
        else {
            return;
        };
        if let Some(bar) = el.dyn_ref::<web::HtmlElement>() {
            _ = bar.style().set_property("width", &width);
        }
    })?;
    log::info!("[reveal] observing {} skill bars", observer.observed());
    Ok(Some(observer))
}
