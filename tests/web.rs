// Browser tests for the mounted background and page teardown.
// Run with `wasm-pack test --headless --chrome` (or `--firefox`).

#![cfg(target_arch = "wasm32")]

use portfolio_fx::background;
use portfolio_fx::core::{particle_count, FieldConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

const CANVAS_ID: &str = "neural-bg";

fn window() -> web::Window {
    web::window().expect("window")
}

fn document() -> web::Document {
    window().document().expect("document")
}

fn remove_anchor() {
    if let Some(el) = document().get_element_by_id(CANVAS_ID) {
        el.remove();
    }
}

fn add_anchor(tag: &str) -> web::Element {
    remove_anchor();
    let doc = document();
    let el = doc.create_element(tag).expect("create element");
    el.set_id(CANVAS_ID);
    doc.body()
        .expect("body")
        .append_child(&el)
        .expect("append");
    el
}

fn add_canvas() -> web::HtmlCanvasElement {
    add_anchor("canvas")
        .dyn_into::<web::HtmlCanvasElement>()
        .expect("canvas")
}

fn seeded() -> FieldConfig {
    FieldConfig {
        seed: Some(17),
        ..FieldConfig::default()
    }
}

fn expected_count(canvas: &web::HtmlCanvasElement) -> usize {
    particle_count(
        canvas.width() as f64,
        canvas.height() as f64,
        &FieldConfig::default(),
    )
}

fn fire_resize() {
    let ev = web::Event::new("resize").expect("event");
    window().dispatch_event(&ev).expect("dispatch");
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("setTimeout");
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .expect("timer");
}

fn context(canvas: &web::HtmlCanvasElement) -> web::CanvasRenderingContext2d {
    canvas
        .get_context("2d")
        .expect("getContext")
        .expect("2d context")
        .dyn_into::<web::CanvasRenderingContext2d>()
        .expect("2d context type")
}

fn has_ink(canvas: &web::HtmlCanvasElement) -> bool {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let pixels = context(canvas)
        .get_image_data(0.0, 0.0, w, h)
        .expect("image data")
        .data();
    pixels.0.chunks_exact(4).any(|px| px[3] != 0)
}

#[wasm_bindgen_test]
fn missing_canvas_mounts_nothing() {
    remove_anchor();
    let mounted = background::mount(&window(), &document(), seeded()).expect("mount");
    assert!(mounted.is_none());
}

#[wasm_bindgen_test]
fn non_canvas_anchor_is_an_error() {
    add_anchor("div");
    let result = background::mount(&window(), &document(), seeded());
    assert!(result.is_err());
    remove_anchor();
}

#[wasm_bindgen_test]
fn canvas_mount_sizes_field_to_viewport() {
    let canvas = add_canvas();
    let bg = background::mount(&window(), &document(), seeded())
        .expect("mount")
        .expect("canvas present");
    let field = bg.field().borrow();
    assert_eq!(field.width(), canvas.width() as f64);
    assert_eq!(field.height(), canvas.height() as f64);
    assert_eq!(field.particles().len(), expected_count(&canvas));
    drop(field);
    drop(bg);
    remove_anchor();
}

#[wasm_bindgen_test]
fn resize_event_regenerates_field() {
    let canvas = add_canvas();
    let bg = background::mount(&window(), &document(), seeded())
        .expect("mount")
        .expect("canvas present");
    let expected = expected_count(&canvas);
    assert!(expected > 0, "viewport too small for any particles");

    bg.field().borrow_mut().resize(10.0, 10.0);
    assert!(bg.field().borrow().particles().is_empty());

    fire_resize();
    assert_eq!(bg.field().borrow().particles().len(), expected);
    drop(bg);
    remove_anchor();
}

#[wasm_bindgen_test]
async fn stopped_background_stops_ticking() {
    add_canvas();
    let bg = background::mount(&window(), &document(), seeded())
        .expect("mount")
        .expect("canvas present");
    sleep(150).await;
    let clock = bg.field().borrow().clock();
    assert!(clock > 0.0, "no frames ran");

    bg.stop();
    sleep(150).await;
    assert_eq!(bg.field().borrow().clock(), clock);
    drop(bg);
    remove_anchor();
}

#[wasm_bindgen_test]
async fn dropped_background_releases_its_listeners() {
    add_canvas();
    let bg = background::mount(&window(), &document(), seeded())
        .expect("mount")
        .expect("canvas present");
    let field = bg.field().clone();
    drop(bg);

    field.borrow_mut().resize(10.0, 10.0);
    fire_resize();
    assert!(field.borrow().particles().is_empty());

    let clock = field.borrow().clock();
    sleep(150).await;
    assert_eq!(field.borrow().clock(), clock);
    remove_anchor();
}

#[wasm_bindgen_test]
async fn teardown_leaves_canvas_quiet() {
    let canvas = add_canvas();
    portfolio_fx::start().expect("start");
    sleep(150).await;
    assert!(has_ink(&canvas), "background never drew");

    portfolio_fx::teardown();
    let ctx = context(&canvas);
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    sleep(150).await;
    assert!(!has_ink(&canvas), "frames still drawn after teardown");

    // second call finds nothing mounted
    portfolio_fx::teardown();
    assert!(!has_ink(&canvas));
    remove_anchor();
}
