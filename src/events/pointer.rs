use crate::core::DriftAnimator;
use crate::input::DragState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct DragWiring {
    pub sprite: web::HtmlElement,
    pub animator: Rc<RefCell<DriftAnimator>>,
    pub drag_state: Rc<RefCell<DragState>>,
}

pub fn wire_drag_handlers(w: DragWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

fn wire_pointerdown(w: &DragWiring) {
    let w = w.clone();
    let sprite_for_listener = w.sprite.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let pos = crate::input::pointer_client_px(&ev);
        w.drag_state.borrow_mut().begin(ev.pointer_id(), pos);
        if w.animator.borrow_mut().begin_manual() {
            log::info!("[drag] begin at ({:.0},{:.0})", pos.x, pos.y);
        }
        _ = w.sprite.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = sprite_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &DragWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = crate::input::pointer_client_px(&ev);
        let delta = w.drag_state.borrow_mut().move_to(ev.pointer_id(), pos);
        if let Some(delta) = delta {
            if delta != Vec2::ZERO {
                w.animator.borrow_mut().drag_by(delta);
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &DragWiring, event: &str) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.drag_state.borrow_mut().end(ev.pointer_id()) {
            return;
        }
        _ = w.sprite.release_pointer_capture(ev.pointer_id());
        let mut animator = w.animator.borrow_mut();
        if animator.end_manual() {
            let v = animator.velocity();
            log::info!("[drag] release vel=({:.2},{:.2})", v.x, v.y);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
