use super::constants::*;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;
use thiserror::Error;

const DEFAULT_LEN: NonZeroUsize = match NonZeroUsize::new(GALLERY_LEN) {
    Some(n) => n,
    None => panic!("gallery must hold at least one image"),
};

/// Caller misuse of the gallery controller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    #[error("image {id} is outside 1..={len}")]
    OutOfRange { id: usize, len: usize },
    #[error("no image is open in the lightbox")]
    NothingOpen,
}

/// Where images live and how downloads are named.
#[derive(Clone, Debug)]
pub struct GalleryParams {
    pub len: NonZeroUsize,
    pub image_dir: &'static str,
    pub download_prefix: &'static str,
    pub extension: &'static str,
}

impl Default for GalleryParams {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            image_dir: GALLERY_IMAGE_DIR,
            download_prefix: GALLERY_DOWNLOAD_PREFIX,
            extension: GALLERY_EXTENSION,
        }
    }
}

/// Lightbox view state. Ids are 1-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(usize),
}

/// A save-as request handed to the browser; completion is not tracked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub id: usize,
    pub href: String,
    pub file_name: String,
}

/// Keyboard commands understood while the lightbox is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Previous,
    Next,
}

impl LightboxKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Selection state for the image grid and its full-size lightbox.
///
/// Navigation wraps: `next` after the last image is the first, `previous`
/// before the first is the last.
#[derive(Clone, Debug)]
pub struct Gallery {
    params: GalleryParams,
    state: Lightbox,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(GalleryParams::default())
    }
}

impl Gallery {
    pub fn new(params: GalleryParams) -> Self {
        Self {
            params,
            state: Lightbox::Closed,
        }
    }

    pub fn len(&self) -> usize {
        self.params.len.get()
    }

    pub fn ids(&self) -> RangeInclusive<usize> {
        1..=self.len()
    }

    pub fn state(&self) -> Lightbox {
        self.state
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            Lightbox::Closed => None,
            Lightbox::Open(id) => Some(id),
        }
    }

    /// Display columns: position `i` goes to column `((i + 1) / 2) % 2`.
    pub fn columns(&self) -> [Vec<usize>; 2] {
        let mut cols = [Vec::new(), Vec::new()];
        for (i, id) in self.ids().enumerate() {
            cols[((i + 1) / 2) % 2].push(id);
        }
        cols
    }

    pub fn open(&mut self, id: usize) -> Result<Lightbox, GalleryError> {
        self.check(id)?;
        self.state = Lightbox::Open(id);
        log::debug!("[gallery] open {}", id);
        Ok(self.state)
    }

    pub fn close(&mut self) -> Lightbox {
        self.state = Lightbox::Closed;
        self.state
    }

    pub fn next(&mut self) -> Result<usize, GalleryError> {
        let id = self.selected().ok_or(GalleryError::NothingOpen)?;
        let id = if id >= self.len() { 1 } else { id + 1 };
        self.state = Lightbox::Open(id);
        Ok(id)
    }

    pub fn previous(&mut self) -> Result<usize, GalleryError> {
        let id = self.selected().ok_or(GalleryError::NothingOpen)?;
        let id = if id <= 1 { self.len() } else { id - 1 };
        self.state = Lightbox::Open(id);
        Ok(id)
    }

    /// Apply a lightbox key; returns the new state.
    pub fn apply_key(&mut self, key: LightboxKey) -> Result<Lightbox, GalleryError> {
        match key {
            LightboxKey::Close => Ok(self.close()),
            LightboxKey::Previous => self.previous().map(Lightbox::Open),
            LightboxKey::Next => self.next().map(Lightbox::Open),
        }
    }

    pub fn image_href(&self, id: usize) -> Result<String, GalleryError> {
        self.check(id)?;
        let p = &self.params;
        Ok(format!("{}/img{}.{}", p.image_dir, id, p.extension))
    }

    /// Build the save-as request for `id`. Never touches the selection.
    pub fn download(&self, id: usize) -> Result<DownloadRequest, GalleryError> {
        let href = self.image_href(id)?;
        let p = &self.params;
        Ok(DownloadRequest {
            id,
            href,
            file_name: format!("{}-image-{}.{}", p.download_prefix, id, p.extension),
        })
    }

    fn check(&self, id: usize) -> Result<(), GalleryError> {
        if self.ids().contains(&id) {
            Ok(())
        } else {
            Err(GalleryError::OutOfRange {
                id,
                len: self.len(),
            })
        }
    }
}
