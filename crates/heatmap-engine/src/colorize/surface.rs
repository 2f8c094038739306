use std::path::Path;

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};

use crate::coords::DocSize;

/// Straight-alpha RGBA8 pixel, laid out for direct texture upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Rgba8 = Rgba8 { r: 0, g: 0, b: 0, a: 0 };

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Colorized overlay matching the density field's dimensions.
///
/// Regenerated wholesale by each colorize pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleImage {
    size: DocSize,
    pixels: Vec<Rgba8>,
}

impl VisibleImage {
    /// Fully transparent image.
    pub fn new(size: DocSize) -> Self {
        Self { size, pixels: vec![Rgba8::TRANSPARENT; size.area()] }
    }

    #[inline]
    pub fn size(&self) -> DocSize {
        self.size
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(self.pixels[y as usize * self.size.width as usize + x as usize])
    }

    /// Tightly packed RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Makes every pixel transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgba8::TRANSPARENT);
    }

    /// Copies into an `image` buffer for encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.size.width, self.size.height, self.as_bytes().to_vec())
    }

    /// Writes the overlay as a PNG with transparency.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        anyhow::ensure!(!self.size.is_empty(), "cannot save an empty overlay");
        let img = self
            .to_rgba_image()
            .context("overlay buffer does not match its dimensions")?;
        img.save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("failed to write overlay to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_is_transparent() {
        let img = VisibleImage::new(DocSize::new(4, 3));
        assert_eq!(img.pixels().len(), 12);
        assert!(img.pixels().iter().all(|p| *p == Rgba8::TRANSPARENT));
    }

    #[test]
    fn bytes_are_rgba_row_major() {
        let mut img = VisibleImage::new(DocSize::new(2, 1));
        img.pixels_mut()[1] = Rgba8::new(1, 2, 3, 4);
        assert_eq!(img.as_bytes(), &[0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let img = VisibleImage::new(DocSize::new(2, 2));
        assert!(img.pixel(1, 1).is_some());
        assert!(img.pixel(2, 0).is_none());
    }

    #[test]
    fn converts_to_image_buffer() {
        let mut img = VisibleImage::new(DocSize::new(3, 2));
        img.pixels_mut()[4] = Rgba8::new(9, 8, 7, 6);
        let buf = img.to_rgba_image().unwrap();
        assert_eq!(buf.dimensions(), (3, 2));
        assert_eq!(buf.get_pixel(1, 1).0, [9, 8, 7, 6]);
    }

    #[test]
    fn empty_overlay_is_not_saved() {
        let img = VisibleImage::new(DocSize::new(0, 0));
        assert!(img.save_png(std::env::temp_dir().join("heatmap-empty.png")).is_err());
    }
}
