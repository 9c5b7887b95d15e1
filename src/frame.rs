use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{DriftAnimator, Star, Sway};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// How the starfield is drawn this session.
pub enum StarLayer<'a> {
    Gpu {
        gpu: render::GpuState<'a>,
        canvas: web::HtmlCanvasElement,
    },
    /// One absolutely positioned element per star, restyled every frame.
    Dom(Vec<(web::HtmlElement, Star)>),
}

pub struct FrameContext<'a> {
    pub animator: Rc<RefCell<DriftAnimator>>,
    pub flog: Option<web::HtmlElement>,
    pub rocket: Option<web::HtmlElement>,
    pub sway: Sway,
    pub stars: StarLayer<'a>,

    pub last_instant: Instant,
    pub elapsed_sec: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();
        self.elapsed_sec += dt_sec;

        // Impulses from the timer land on the same animator before this step
        if let Some(flog) = &self.flog {
            let pose = self.animator.borrow_mut().step(dt);
            dom::set_transform(flog, &pose.css_transform());
        }

        if let Some(rocket) = &self.rocket {
            let sway = self.sway.sample(self.elapsed_sec);
            dom::set_transform(rocket, &sway.css_transform());
        }

        match &mut self.stars {
            StarLayer::Gpu { gpu, canvas } => {
                gpu.resize_if_needed(canvas.width(), canvas.height());
                if let Err(e) = gpu.render(dt_sec, dom::device_pixel_ratio()) {
                    log::error!("render error: {:?}", e);
                }
            }
            StarLayer::Dom(nodes) => {
                for (el, star) in nodes.iter() {
                    let tw = star.twinkle(self.elapsed_sec);
                    let style = el.style();
                    _ = style.set_property("opacity", &format!("{:.3}", tw.opacity));
                    _ = style.set_property("transform", &format!("scale({:.3})", tw.scale));
                }
            }
        }
    }
}

/// WebGPU stars on `canvas` when possible, otherwise one element per star
/// under `fallback_root`.
pub async fn init_star_layer(
    canvas: Option<&web::HtmlCanvasElement>,
    fallback_root: Option<web::HtmlElement>,
    stars: Vec<Star>,
    clear: [f64; 4],
) -> Option<StarLayer<'static>> {
    if let Some(canvas) = canvas {
        // leak a canvas clone to satisfy 'static lifetime for surface
        let leaked_canvas: &'static web::HtmlCanvasElement =
            Box::leak(Box::new(canvas.clone()));
        match render::GpuState::new(leaked_canvas, &stars, clear).await {
            Ok(gpu) => {
                log::info!("[stars] WebGPU starfield with {} stars", stars.len());
                return Some(StarLayer::Gpu {
                    gpu,
                    canvas: canvas.clone(),
                });
            }
            Err(e) => log::warn!("WebGPU init error, using DOM stars: {:?}", e),
        }
        _ = canvas.style().set_property("display", "none");
    }
    let root = fallback_root?;
    let document = dom::window_document()?;
    let mut nodes = Vec::with_capacity(stars.len());
    for star in stars {
        let el = match dom::create_html(&document, "div") {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[stars] {:?}", e);
                continue;
            }
        };
        el.set_class_name("star");
        let style = el.style();
        _ = style.set_property("left", &format!("{:.2}%", star.x));
        _ = style.set_property("top", &format!("{:.2}%", star.y));
        _ = style.set_property("width", &format!("{:.2}px", star.size));
        _ = style.set_property("height", &format!("{:.2}px", star.size));
        _ = root.append_child(&el);
        nodes.push((el, star));
    }
    Some(StarLayer::Dom(nodes))
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Kick the animator at random intervals, forever.
pub fn schedule_impulses(animator: Rc<RefCell<DriftAnimator>>) {
    let delay = animator.borrow_mut().next_impulse_delay();
    let Some(window) = web::window() else {
        return;
    };
    let next = animator;
    let cb = Closure::once_into_js(move || {
        next.borrow_mut().impulse();
        schedule_impulses(next);
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        delay.as_millis() as i32,
    ) {
        log::error!("impulse timer error: {:?}", e);
    }
}
