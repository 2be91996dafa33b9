// SPDX-License-Identifier: MPL-2.0
//! Decoding files into the bitmap the view draws.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// A decoded bitmap ready to be drawn by the view.
///
/// The empty image (0×0) is a valid value: the view accepts it and simply
/// draws nothing.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// The image shown before anything is loaded.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_rgba(0, 0, Vec::new())
    }

    /// Returns true if the image has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the image dimensions in pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

impl Default for ImageData {
    fn default() -> Self {
        Self::empty()
    }
}

/// Loads the image shown by the view.
///
/// SVG documents (by extension) are rasterized at their intrinsic size. Any
/// other file goes through the raster decoders, which sniff the format from
/// the content.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read or decoded, [`Error::Svg`] when
/// an SVG document is malformed or has no area.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let image = if is_svg {
        rasterize_svg(&bytes)?
    } else {
        decode_raster(&bytes)?
    };

    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(image)
}

fn decode_raster(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    Ok(ImageData::from_rgba(width, height, decoded.into_rgba8().into_raw()))
}

fn rasterize_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| Error::Svg("document has no area".into()))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(size.width(), size.height(), pixmap.take()))
}
