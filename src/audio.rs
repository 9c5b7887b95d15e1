use crate::constants::{MUSIC_SRC, MUSIC_TOGGLE_ID, MUSIC_VOLUME, UNLOCK_EVENTS};
use crate::core::{MusicState, PlaybackCommand};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone)]
pub struct BackgroundMusic {
    element: web::HtmlAudioElement,
    state: Rc<RefCell<MusicState>>,
    // Shared gesture listener, kept so it can be removed once playback starts
    unlock_listener: Rc<RefCell<Option<js_sys::Function>>>,
}

impl BackgroundMusic {
    fn new() -> anyhow::Result<Self> {
        let element =
            web::HtmlAudioElement::new_with_src(MUSIC_SRC).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        element.set_loop(true);
        element.set_volume(MUSIC_VOLUME);
        Ok(Self {
            element,
            state: Rc::new(RefCell::new(MusicState::new())),
            unlock_listener: Rc::new(RefCell::new(None)),
        })
    }

    fn on_loaded(&self) {
        if !self.state.borrow_mut().mark_loaded() {
            return;
        }
        log::info!("[audio] music ready");
        self.sync_button();
        self.arm_unlock();
    }

    // Listen on the document for the first gesture that lets audio start
    fn arm_unlock(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        let music = self.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            if music.state.borrow().wants_interaction() {
                music.play();
            }
        }) as Box<dyn FnMut(_)>);
        let func: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        for event in UNLOCK_EVENTS {
            _ = document.add_event_listener_with_callback(event, &func);
        }
        *self.unlock_listener.borrow_mut() = Some(func);
        closure.forget();
    }

    fn release_unlock(&self) {
        let Some(func) = self.unlock_listener.borrow_mut().take() else {
            return;
        };
        if let Some(document) = dom::window_document() {
            for event in UNLOCK_EVENTS {
                _ = document.remove_event_listener_with_callback(event, &func);
            }
        }
    }

    fn play(&self) {
        if !self.state.borrow_mut().request_play() {
            return;
        }
        let promise = match self.element.play() {
            Ok(p) => p,
            Err(e) => {
                self.on_play_error(&e);
                return;
            }
        };
        let music = self.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    let released = music.state.borrow_mut().play_started();
                    if released {
                        music.release_unlock();
                        log::info!("[audio] playback unlocked");
                    }
                    music.sync_button();
                }
                Err(e) => music.on_play_error(&e),
            }
        });
    }

    fn pause(&self) {
        _ = self.element.pause();
        self.state.borrow_mut().paused();
        self.sync_button();
    }

    fn toggle(&self) {
        let cmd = self.state.borrow().toggle();
        match cmd {
            Some(PlaybackCommand::Play) => self.play(),
            Some(PlaybackCommand::Pause) => self.pause(),
            None => {}
        }
    }

    fn on_play_error(&self, err: &JsValue) {
        self.state.borrow_mut().play_failed();
        self.sync_button();
        let name = err
            .dyn_ref::<web::DomException>()
            .map(|d| d.name())
            .unwrap_or_else(|| format!("{:?}", err));
        match name.as_str() {
            // a pause() or reload raced the play request
            "AbortError" => {}
            // no user activation yet; the next gesture retries
            "NotAllowedError" => log::debug!("[audio] playback blocked until a gesture"),
            _ => log::warn!("[audio] playback issue: {}", name),
        }
    }

    fn sync_button(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        if let Some(button) = document.get_element_by_id(MUSIC_TOGGLE_ID) {
            let state = self.state.borrow();
            dom::set_hidden(&button, !state.is_loaded());
            _ = button.set_attribute("aria-label", state.label());
            _ = button.set_attribute("data-playing", if state.is_playing() { "1" } else { "0" });
        }
    }
}

/// Load the soundtrack, reveal the toggle button once it can play through,
/// and start playback on the first user gesture.
pub fn wire_background_music(document: &web::Document) -> anyhow::Result<()> {
    let music = BackgroundMusic::new()?;
    music.sync_button();

    let m = music.clone();
    let on_ready = Closure::wrap(Box::new(move |_ev: web::Event| m.on_loaded()) as Box<dyn FnMut(_)>);
    music
        .element
        .add_event_listener_with_callback("canplaythrough", on_ready.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    on_ready.forget();

    let m = music.clone();
    dom::add_click_listener(document, MUSIC_TOGGLE_ID, move |ev| {
        // the document-level unlock listener would otherwise start playback too
        ev.stop_propagation();
        m.toggle();
    });
    Ok(())
}
