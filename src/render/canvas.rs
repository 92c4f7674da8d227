//! Premultiplied RGBA8 canvas with offset bounds.

use std::io::Cursor;

use anyhow::Context as _;

use crate::foundation::core::{Bounds, Rgba8Premul};
use crate::foundation::error::ScrawlResult;
use crate::render::composite::over_row;

/// Mutable premultiplied RGBA8 pixel buffer with fixed bounds.
///
/// Pixel coordinates are absolute: `(bounds.min_x, bounds.min_y)` is the first pixel. Writes
/// outside the bounds are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    bounds: Bounds,
    data: Vec<u8>,
}

impl Canvas {
    /// Transparent canvas anchored at the origin.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_bounds(Bounds::from_size(width, height))
    }

    /// Transparent canvas covering `bounds`.
    pub fn with_bounds(bounds: Bounds) -> Self {
        let len = (bounds.width() as usize) * (bounds.height() as usize) * 4;
        Self {
            bounds,
            data: vec![0u8; len],
        }
    }

    /// Canvas covering `bounds` with every pixel set to `color`.
    pub fn filled(bounds: Bounds, color: Rgba8Premul) -> Self {
        let mut canvas = Self::with_bounds(bounds);
        canvas.fill(color);
        canvas
    }

    /// Wrap existing premultiplied RGBA8 bytes; `None` if the length does not match.
    pub fn from_rgba8_premul(bounds: Bounds, data: Vec<u8>) -> Option<Self> {
        let expected = (bounds.width() as usize) * (bounds.height() as usize) * 4;
        (data.len() == expected).then_some(Self { bounds, data })
    }

    /// Pixel rectangle covered by the canvas.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let col = (x - self.bounds.min_x) as usize;
        let row = (y - self.bounds.min_y) as usize;
        Some((row * self.bounds.width() as usize + col) * 4)
    }

    /// Pixel at `(x, y)`, or `None` outside the bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8Premul> {
        let i = self.index(x, y)?;
        Some(Rgba8Premul::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Overwrite the pixel at `(x, y)`; silently clipped.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba8Premul) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Overwrite every pixel.
    pub fn fill(&mut self, color: Rgba8Premul) {
        let px = color.to_array();
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    /// Source-over `src` onto `self`, with `src`'s minimum corner placed at `(x, y)`.
    pub fn composite_over(&mut self, src: &Canvas, x: i32, y: i32) {
        let placed = src.bounds.moved_to(x, y);
        for (di, si, len) in row_runs(self.bounds, placed) {
            over_row(&mut self.data[di..di + len], &src.data[si..si + len]);
        }
    }

    /// Source-over a layer expressed in the same coordinate space as `self`.
    pub fn overlay(&mut self, layer: &Canvas) {
        self.composite_over(layer, layer.bounds.min_x, layer.bounds.min_y);
    }

    /// Copy out the pixels under `rect` as a new origin-anchored canvas.
    ///
    /// Parts of `rect` outside `self` come back transparent.
    pub fn crop(&self, rect: Bounds) -> Canvas {
        let mut out = Canvas::with_bounds(rect);
        for (di, si, len) in row_runs(rect, self.bounds) {
            out.data[di..di + len].copy_from_slice(&self.data[si..si + len]);
        }
        out.bounds = rect.moved_to(0, 0);
        out
    }

    /// Iterate `(x, y, color)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, Rgba8Premul)> + '_ {
        let b = self.bounds;
        let w = b.width().max(1) as usize;
        self.data.chunks_exact(4).enumerate().map(move |(i, px)| {
            let x = b.min_x + (i % w) as i32;
            let y = b.min_y + (i / w) as i32;
            (x, y, Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]))
        })
    }

    /// Straight-alpha copy for the `image` ecosystem.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let w = self.bounds.width();
        image::RgbaImage::from_fn(w, self.bounds.height(), |x, y| {
            let i = ((y as usize) * (w as usize) + (x as usize)) * 4;
            image::Rgba(unpremultiply([
                self.data[i],
                self.data[i + 1],
                self.data[i + 2],
                self.data[i + 3],
            ]))
        })
    }

    /// Encode as PNG bytes.
    pub fn encode_png(&self) -> ScrawlResult<Vec<u8>> {
        let mut out = Vec::new();
        self.to_rgba_image()
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .context("encode canvas as png")?;
        Ok(out)
    }
}

/// Byte ranges `(dst_offset, src_offset, len)` for each row where `src` overlaps `dst`.
///
/// Both rectangles are in the same absolute coordinate space.
fn row_runs(dst: Bounds, src: Bounds) -> impl Iterator<Item = (usize, usize, usize)> {
    let clip = src.intersect(dst);
    let rows = if clip.is_empty() {
        0..0
    } else {
        clip.min_y..clip.max_y
    };
    let dst_w = dst.width() as usize;
    let src_w = src.width() as usize;
    let len = clip.width() as usize * 4;
    let dx = (clip.min_x - dst.min_x).max(0) as usize;
    let sx = (clip.min_x - src.min_x).max(0) as usize;
    rows.map(move |y| {
        let di = ((y - dst.min_y) as usize * dst_w + dx) * 4;
        let si = ((y - src.min_y) as usize * src_w + sx) * 4;
        (di, si, len)
    })
}

fn unpremultiply(px: [u8; 4]) -> [u8; 4] {
    let a = u32::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let un = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
