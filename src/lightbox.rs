use crate::constants::{HIDDEN_CLASS, LIGHTBOX_ID, LIGHTBOX_IMAGE_ID};
use crate::core::{Gallery, Lightbox};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, src: &str, id: usize) {
    if let Some(img) = document
        .get_element_by_id(LIGHTBOX_IMAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    {
        img.set_src(src);
        img.set_alt(&format!("Full size image {}", id));
    }
    if let Some(el) = document.get_element_by_id(LIGHTBOX_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LIGHTBOX_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Make the modal reflect the gallery's current state.
pub fn sync(document: &web::Document, gallery: &Gallery) {
    match gallery.state() {
        Lightbox::Closed => hide(document),
        Lightbox::Open(id) => match gallery.image_href(id) {
            Ok(src) => show(document, &src, id),
            Err(e) => {
                log::warn!("[lightbox] {}", e);
                hide(document);
            }
        },
    }
}
