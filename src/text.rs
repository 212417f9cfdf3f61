//! Bitmap Text
//!
//! Characters are drawn by copying a bitmap supplied by a [GlyphProvider]
//! onto the image and moving a cursor by the advance the glyph declares.
//!
//! [GlyphProvider]: trait.GlyphProvider.html

use crate::color::Rgb8;
use crate::pixfmt::Pixfmt;

use std::path::Path;

/// Bitmap of a single character
///
/// Pixels are opaque RGB triples stored row-major with row 0 at the top
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Glyph {
    /// Width of bitmap in pixels
    pub width: usize,
    /// Height of bitmap in pixels
    pub height: usize,
    /// Pixel data, width * height * 3
    pub data: Vec<u8>,
    /// Cursor movement along x after the glyph
    pub dx: i64,
    /// Cursor movement along y after the glyph
    pub dy: i64,
}

impl Glyph {
    /// Create a new glyph; `data` holds `width * height` RGB triples
    pub fn new(width: usize, height: usize, data: Vec<u8>, dx: i64, dy: i64) -> Self {
        debug_assert_eq!(data.len(), width * height * 3);
        Self { width, height, data, dx, dy }
    }
    /// Empty glyph which only moves the cursor
    pub fn blank(dx: i64, dy: i64) -> Self {
        Self::new(0, 0, vec![], dx, dy)
    }
    /// Glyph of a single solid color, advancing by its width
    pub fn solid(width: usize, height: usize, c: Rgb8) -> Self {
        let data = c.to_array().iter().cycle().take(width * height * 3).cloned().collect();
        Self::new(width, height, data, width as i64, 0)
    }
    /// Glyph from a decoded image, advancing by the image width
    pub fn from_image(img: &image::RgbImage) -> Self {
        let (w, h) = img.dimensions();
        Self::new(w as usize, h as usize, img.as_raw().clone(), i64::from(w), 0)
    }
    /// Check that `data` holds exactly `width * height` RGB triples
    pub fn is_complete(&self) -> bool {
        self.width.checked_mul(self.height)
            .and_then(|n| n.checked_mul(3))
            .map_or(false, |n| n == self.data.len())
    }
    /// Color of bitmap pixel (`x`,`y`)
    pub fn pixel(&self, x: usize, y: usize) -> Rgb8 {
        let i = (y * self.width + x) * 3;
        Rgb8::from_slice(&self.data[i .. i+3])
    }
}

/// Source of character bitmaps
///
/// Lookups never fail: a provider answers an unknown character with a
/// fallback glyph (usually blank) so a string is always drawn to the end
pub trait GlyphProvider {
    /// Glyph for character `c`, using fonts found in `font_dir`
    fn glyph(&self, c: char, font_dir: &Path) -> Glyph;
}

impl<'a, G: GlyphProvider + ?Sized> GlyphProvider for &'a G {
    fn glyph(&self, c: char, font_dir: &Path) -> Glyph {
        (**self).glyph(c, font_dir)
    }
}

/// Cursor movement and width of a drawn character
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Advance {
    pub dx: i64,
    pub dy: i64,
    pub width: usize,
}

/// Draw the character `c` with its lower left corner at (`x0`,`y0`)
///
/// The bottom row of the bitmap lands on row `y0` and the remaining rows
/// go upward. Pixels outside of the image are dropped. A glyph whose data
/// does not match its size is not drawn, but still moves the cursor
pub fn draw_char<G>(pix: &mut Pixfmt, glyphs: &G, c: char,
                    x0: i64, y0: i64, font_dir: &Path) -> Advance
    where G: GlyphProvider + ?Sized
{
    let g = glyphs.glyph(c, font_dir);
    if ! g.is_complete() {
        log::warn!("glyph for {:?} is {}x{} but holds {} bytes, skipped",
                   c, g.width, g.height, g.data.len());
        return Advance { dx: g.dx, dy: g.dy, width: g.width };
    }
    let top = y0.saturating_sub(g.height as i64 - 1);
    for row in 0 .. g.height {
        let y = top.saturating_add(row as i64);
        for col in 0 .. g.width {
            pix.copy_pixel(x0.saturating_add(col as i64), y, g.pixel(col, row));
        }
    }
    Advance { dx: g.dx, dy: g.dy, width: g.width }
}

/// Draw the string `s` starting with the cursor at (`x0`,`y0`)
///
/// Each character is drawn at the cursor, then the cursor moves by the
/// character's advance. There is no wrapping; control characters such
/// as newline move the cursor however the provider says they do.
///
/// Returns the cursor position following the last character
///
///     use ppmcanvas::{draw_string,Glyph,GlyphProvider,Pixfmt,Rgb8};
///     use std::path::Path;
///
///     struct Block;
///     impl GlyphProvider for Block {
///         fn glyph(&self, _c: char, _dir: &Path) -> Glyph {
///             Glyph::solid(2, 3, Rgb8::white())
///         }
///     }
///
///     let mut pix = Pixfmt::new(10,10).unwrap();
///     let end = draw_string(&mut pix, &Block, "abc", 1, 5, Path::new("."));
///     assert_eq!(end, (7,5));
///     assert_eq!(pix.get((1,3)), Rgb8::white());
///     assert_eq!(pix.get((6,5)), Rgb8::white());
///     assert_eq!(pix.get((7,5)), Rgb8::black());
///
pub fn draw_string<G>(pix: &mut Pixfmt, glyphs: &G, s: &str,
                      x0: i64, y0: i64, font_dir: &Path) -> (i64, i64)
    where G: GlyphProvider + ?Sized
{
    let (mut x, mut y) = (x0, y0);
    for c in s.chars() {
        let adv = draw_char(pix, glyphs, c, x, y, font_dir);
        x = x.saturating_add(adv.dx);
        y = y.saturating_add(adv.dy);
    }
    (x, y)
}
