use crate::core::{Gallery, LightboxKey};
use crate::gallery;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_lightbox_keydown(ev: &web::KeyboardEvent, gallery_state: &Rc<RefCell<Gallery>>) {
    // Keys only act while an image is open
    if gallery_state.borrow().selected().is_none() {
        return;
    }
    let Some(key) = LightboxKey::from_key(&ev.key()) else {
        return;
    };
    gallery::apply_key(gallery_state, key);
    ev.prevent_default();
}

pub fn wire_lightbox_keys(gallery_state: Rc<RefCell<Gallery>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_lightbox_keydown(&ev, &gallery_state);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
