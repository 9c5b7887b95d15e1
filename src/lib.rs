#![cfg(target_arch = "wasm32")]
use crate::core::{generate_stars, DriftAnimator, DriftParams, Gallery, GalleryParams, Sway};
use constants::*;
use instant::Instant;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod gallery;
mod input;
mod lightbox;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("flob-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Every page section comes up on its own; a missing element only
    // disables the section that needs it.
    let gallery_state = Rc::new(RefCell::new(Gallery::new(GalleryParams::default())));
    match gallery::build(&document, gallery_state.clone()) {
        Ok(()) => events::wire_lightbox_keys(gallery_state),
        Err(e) => log::warn!("gallery disabled: {:?}", e),
    }
    if let Err(e) = audio::wire_background_music(&document) {
        log::warn!("background music disabled: {:?}", e);
    }

    // ---------------- Hero scene ----------------
    let flog = match dom::html_element(&document, FLOG_ID) {
        Ok(el) => Some(el),
        Err(e) => {
            log::warn!("hero drift disabled: {:?}", e);
            None
        }
    };
    let rocket = dom::html_element(&document, ROCKET_ID).ok();
    let mut rng = StdRng::from_entropy();
    let animator = Rc::new(RefCell::new(DriftAnimator::new(
        DriftParams::default(),
        rng.gen(),
    )));
    if let Some(flog) = &flog {
        let b = animator.borrow().params().bounds;
        log::info!("[drift] bounds=({:.0},{:.0})", b.x, b.y);
        events::wire_drag_handlers(events::DragWiring {
            sprite: flog.clone(),
            animator: animator.clone(),
            drag_state: Rc::new(RefCell::new(input::DragState::default())),
        });
    }

    // ---------------- Starfield ----------------
    let canvas = document
        .get_element_by_id(STARS_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    match &canvas {
        // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
        Some(canvas) => wire_canvas_resize(canvas),
        None => log::warn!("[stars] no #{} canvas", STARS_CANVAS_ID),
    }
    let stars = generate_stars(STAR_COUNT, &mut rng);
    let fallback_root = dom::html_element(&document, STARS_FALLBACK_ID).ok();
    let star_layer = frame::init_star_layer(canvas.as_ref(), fallback_root, stars, CLEAR_COLOR)
        .await
        .unwrap_or_else(|| {
            log::warn!("no starfield surface available");
            frame::StarLayer::Dom(Vec::new())
        });

    // Animation loop driven by requestAnimationFrame; impulses on a timer
    let has_hero = flog.is_some();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        animator: animator.clone(),
        flog,
        rocket,
        sway: Sway::default(),
        stars: star_layer,
        last_instant: Instant::now(),
        elapsed_sec: 0.0,
    }));
    frame::start_loop(frame_ctx);
    if has_hero {
        frame::schedule_impulses(animator);
    }

    Ok(())
}
