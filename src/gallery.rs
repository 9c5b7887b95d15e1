use crate::constants::*;
use crate::core::{DownloadRequest, Gallery, GalleryError, LightboxKey};
use crate::{dom, lightbox};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fill `#gallery` with two columns of image cards and wire the lightbox
/// controls to the shared `gallery` state.
pub fn build(document: &web::Document, gallery: Rc<RefCell<Gallery>>) -> anyhow::Result<()> {
    let root = dom::html_element(document, GALLERY_ID)?;
    let columns = gallery.borrow().columns();
    for (ids, class) in columns.iter().zip(GALLERY_COLUMN_CLASSES) {
        let column = dom::create_html(document, "div")?;
        column.set_class_name(class);
        for &id in ids {
            let card = build_card(document, &gallery, id)?;
            _ = column.append_child(&card);
        }
        _ = root.append_child(&column);
    }
    wire_lightbox(document, gallery);
    log::info!("[gallery] built {} columns", columns.len());
    Ok(())
}

fn build_card(
    document: &web::Document,
    gallery: &Rc<RefCell<Gallery>>,
    id: usize,
) -> anyhow::Result<web::HtmlElement> {
    let card = dom::create_html(document, "div")?;
    card.set_class_name("gallery-card");

    let img = document
        .create_element("img")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(&gallery.borrow().image_href(id)?);
    img.set_alt(&format!("Gallery image {}", id));
    _ = img.set_attribute("loading", "lazy");
    let g = gallery.clone();
    dom::on_click(&img, move |_ev| open(&g, id));
    _ = card.append_child(&img);

    let button = dom::create_html(document, "button")?;
    button.set_class_name("download-button");
    button.set_inner_text("Download");
    let g = gallery.clone();
    dom::on_click(&button, move |ev| {
        // must not reach enclosing click handlers
        ev.stop_propagation();
        download(&g.borrow(), id);
    });
    _ = card.append_child(&button);
    Ok(card)
}

fn wire_lightbox(document: &web::Document, gallery: Rc<RefCell<Gallery>>) {
    // Backdrop click closes; clicks inside the panel must not reach it.
    let g = gallery.clone();
    dom::add_click_listener(document, LIGHTBOX_ID, move |_ev| close(&g));
    dom::add_click_listener(document, LIGHTBOX_PANEL_ID, |ev| ev.stop_propagation());

    let g = gallery.clone();
    dom::add_click_listener(document, LIGHTBOX_CLOSE_ID, move |ev| {
        ev.stop_propagation();
        close(&g);
    });

    let g = gallery.clone();
    dom::add_click_listener(document, LIGHTBOX_DOWNLOAD_ID, move |ev| {
        ev.stop_propagation();
        let gallery = g.borrow();
        match gallery.selected() {
            Some(id) => download(&gallery, id),
            None => log::warn!("[gallery] {}", GalleryError::NothingOpen),
        }
    });

    let g = gallery.clone();
    dom::add_click_listener(document, LIGHTBOX_PREV_ID, move |ev| {
        ev.stop_propagation();
        apply_key(&g, LightboxKey::Previous);
    });

    let g = gallery;
    dom::add_click_listener(document, LIGHTBOX_NEXT_ID, move |ev| {
        ev.stop_propagation();
        apply_key(&g, LightboxKey::Next);
    });
}

pub fn open(gallery: &Rc<RefCell<Gallery>>, id: usize) {
    let res = gallery.borrow_mut().open(id);
    match res {
        Ok(_) => {
            log::info!("[gallery] open image {}", id);
            refresh(gallery);
        }
        Err(e) => log::warn!("[gallery] {}", e),
    }
}

pub fn close(gallery: &Rc<RefCell<Gallery>>) {
    gallery.borrow_mut().close();
    log::info!("[gallery] close lightbox");
    refresh(gallery);
}

pub fn apply_key(gallery: &Rc<RefCell<Gallery>>, key: LightboxKey) {
    let res = gallery.borrow_mut().apply_key(key);
    match res {
        Ok(state) => {
            log::info!("[gallery] key {:?} -> {:?}", key, state);
            refresh(gallery);
        }
        Err(e) => log::warn!("[gallery] {}", e),
    }
}

fn refresh(gallery: &Rc<RefCell<Gallery>>) {
    if let Some(doc) = dom::window_document() {
        lightbox::sync(&doc, &gallery.borrow());
    }
}

/// Best-effort save-as; failures are logged and never touch the selection.
pub fn download(gallery: &Gallery, id: usize) {
    let result = gallery
        .download(id)
        .map_err(anyhow::Error::from)
        .and_then(|req| trigger_download(&req));
    match result {
        Ok(()) => log::info!("[gallery] download image {}", id),
        Err(e) => log::warn!("[gallery] download of image {} failed: {:?}", id, e),
    }
}

fn trigger_download(req: &DownloadRequest) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let link = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.set_href(&req.href);
    link.set_download(&req.file_name);
    body.append_child(&link)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.click();
    body.remove_child(&link)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
