//! Header graphic loading.
//!
//! The graphic is optional decoration. Loading is tried once, at startup,
//! from a short list of install locations; the caller decides what to do on
//! failure (the canvas just skips drawing it).

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Decoded header pixels, straight (non-premultiplied) RGBA8.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for HeaderImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    #[error("header image not found (tried {tried:?})")]
    NotFound { tried: Vec<PathBuf> },
    #[error("header image {path:?} could not be decoded: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl HeaderImage {
    /// Decode the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::Decode`] if the file cannot be read or is not a supported image.
    pub fn open(path: &Path) -> Result<Self, HeaderError> {
        let img = image::open(path).map_err(|source| HeaderError::Decode { path: path.to_path_buf(), source })?;
        let rgba = img.to_rgba8();
        Ok(Self { width: rgba.width(), height: rgba.height(), rgba: rgba.into_raw() })
    }

    /// Screen area the image covers when drawn at the origin.
    #[must_use]
    pub fn bounds(&self) -> crate::geom::Rect {
        crate::geom::Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Load the first readable header image from `paths`.
///
/// Missing files are skipped and a file that fails to decode falls through
/// to the next location.
///
/// # Errors
///
/// Returns the last [`HeaderError::Decode`] if some file existed but none
/// decoded, otherwise [`HeaderError::NotFound`].
pub fn load_header<P: AsRef<Path>>(paths: &[P]) -> Result<HeaderImage, HeaderError> {
    let mut last_err = None;
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            continue;
        }
        match HeaderImage::open(path) {
            Ok(image) => {
                info!(path = %path.display(), width = image.width, height = image.height, "header image loaded");
                return Ok(image);
            }
            Err(err) => {
                debug!(path = %path.display(), %err, "header candidate rejected");
                last_err = Some(err);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| HeaderError::NotFound { tried: paths.iter().map(|p| p.as_ref().to_path_buf()).collect() }))
}
