use crate::constants::{
    NAVBAR_ID, NAV_LINKS_SELECTOR, NAV_OPEN_CLASS, NAV_TOGGLE_SELECTOR, SCROLLED_CLASS,
    SCROLL_THRESHOLD_PX,
};
use crate::core::is_scrolled;
use crate::dom::{self, EventListener};
use web_sys as web;

/// Toggle `scrolled` on `#navbar` as the page scrolls past the threshold.
pub fn mount_scroll_style(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Option<EventListener>> {
    let Some(nav) = document.get_element_by_id(NAVBAR_ID) else {
        log::debug!("[navbar] no #{} element, skipping", NAVBAR_ID);
        return Ok(None);
    };
    let win = window.clone();
    let listener = EventListener::new(window, "scroll", move |_| {
        let y = win.scroll_y().unwrap_or(0.0);
        _ = nav
            .class_list()
            .toggle_with_force(SCROLLED_CLASS, is_scrolled(y, SCROLL_THRESHOLD_PX));
    })?;
    Ok(Some(listener))
}

/// Wire the mobile menu: the toggle opens/closes `.nav-links`, and following
/// any link inside closes it.
pub fn mount_mobile_menu(document: &web::Document) -> anyhow::Result<Option<Vec<EventListener>>> {
    let toggle = document.query_selector(NAV_TOGGLE_SELECTOR).ok().flatten();
    let links = document.query_selector(NAV_LINKS_SELECTOR).ok().flatten();
    let (Some(toggle), Some(links)) = (toggle, links) else {
        log::debug!("[navbar] mobile menu markup missing, skipping");
        return Ok(None);
    };

    let mut listeners = Vec::new();
    let menu = links.clone();
    listeners.push(EventListener::new(&toggle, "click", move |_| {
        _ = menu.class_list().toggle(NAV_OPEN_CLASS);
    })?);

    for anchor in dom::query_all_in(&links, "a") {
        let menu = links.clone();
        listeners.push(EventListener::new(&anchor, "click", move |_| {
            _ = menu.class_list().remove_1(NAV_OPEN_CLASS);
        })?);
    }
    log::info!("[navbar] mobile menu wired with {} links", listeners.len() - 1);
    Ok(Some(listeners))
}
