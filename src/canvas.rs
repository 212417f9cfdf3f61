//! Canvas
//!
//! An RGB image with drawing operations, read from and written to files.
//!
//!     use ppmcanvas::{Canvas,Rgb8};
//!
//!     let mut canvas = Canvas::new(64, 48).unwrap();
//!     canvas.clear_rect(Rgb8::white());
//!     canvas.fill_rect(4, 4, 10, 6, Rgb8::red());
//!     canvas.draw_rect(0, 0, 64, 48, Rgb8::black(), 2);
//!     canvas.draw_line(0, 47, 63, 0, Rgb8::blue());
//!     canvas.draw_thick_line(10, 40, 50, 30, 3, [0u8,128,0]);
//!     canvas.fill_circle(32, 24, 5.5, Rgb8::gray(90));
//!
//!     assert_eq!(canvas.get_pixel(5, 5), Some(Rgb8::red()));
//!     assert_eq!(canvas.get_pixel(32, 24), Some(Rgb8::gray(90)));
//!     assert_eq!(canvas.get_pixel(64, 0), None);
//!

use crate::base::RenderingBase;
use crate::buffer::RenderingBuffer;
use crate::color::Rgb8;
use crate::convert::{self, Converter, Transcoder};
use crate::error::{Error, Result};
use crate::font::FontDirectory;
use crate::pixfmt::Pixfmt;
use crate::ppm::{self, Encoding};
use crate::primitives::RendererPrimitives;
use crate::text::{self, Advance, GlyphProvider};

use std::path::Path;

/// RGB image with drawing operations
///
/// The canvas exclusively owns its pixel data; the size is fixed at
/// construction. Coordinates have the origin at the top left, x to the
/// right and y downward. Anything drawn outside of the image is clipped
/// silently.
#[derive(Debug)]
pub struct Canvas {
    ren: RenderingBase,
    fonts: FontDirectory,
}

impl Canvas {
    /// Create a black canvas of `width` x `height` pixels
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self::from_buffer(RenderingBuffer::new(width, height)?))
    }
    /// Create a canvas owning an existing buffer
    pub fn from_buffer(rbuf: RenderingBuffer) -> Self {
        Self {
            ren: RenderingBase::new(Pixfmt::with_buffer(rbuf)),
            fonts: FontDirectory::new(),
        }
    }
    /// Read a canvas from an image file
    ///
    /// PPM files are read directly, other formats are converted in-process
    /// with the [Transcoder](../convert/struct.Transcoder.html)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, &Transcoder)
    }
    /// Read a canvas from an image file, converting non-PPM files with `converter`
    pub fn open_with<P: AsRef<Path>>(path: P, converter: &dyn Converter) -> Result<Self> {
        let path = path.as_ref();
        if ppm::is_ppm(path) {
            return Ok(Self::from_buffer(ppm::read_file(path)?));
        }
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let tmp = convert::temp_ppm()?;
        converter.convert(path, &tmp)?;
        Ok(Self::from_buffer(ppm::read_file(&tmp)?))
    }
    /// Write the canvas to an image file
    ///
    /// A `.ppm` file is written directly in the binary variant; other
    /// extensions are written to a temporary PPM file and converted in-process
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_encoded(path.as_ref(), &Transcoder, Encoding::Binary)
    }
    /// Write the canvas to an image file, converting non-PPM files with `converter`
    pub fn write_with<P: AsRef<Path>>(&self, path: P, converter: &dyn Converter) -> Result<()> {
        self.write_encoded(path.as_ref(), converter, Encoding::Binary)
    }
    /// Write the canvas as a plain text (P3) PPM file
    pub fn write_ascii<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_encoded(path.as_ref(), &Transcoder, Encoding::Ascii)
    }
    fn write_encoded(&self, path: &Path, converter: &dyn Converter, encoding: Encoding) -> Result<()> {
        if ppm::is_ppm(path) {
            return ppm::write_file_with(self.buffer(), path, encoding);
        }
        let tmp = convert::temp_ppm()?;
        ppm::write_file_with(self.buffer(), &tmp, encoding)?;
        converter.convert(&tmp, path)
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.ren.pixf.width()
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.ren.pixf.height()
    }
    /// Pixel data
    pub fn buffer(&self) -> &RenderingBuffer {
        self.ren.buffer()
    }
    /// Release the pixel data
    pub fn into_buffer(self) -> RenderingBuffer {
        self.ren.pixf.rbuf
    }
    /// Set pixel (`x`,`y`) to `c`; ignored outside of the canvas
    pub fn set_pixel<C: Into<Rgb8>>(&mut self, x: i64, y: i64, c: C) {
        self.ren.pixf.copy_pixel(x, y, c.into());
    }
    /// Color of pixel (`x`,`y`), `None` outside of the canvas
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Rgb8> {
        self.ren.pixf.pixel(x, y)
    }
    /// Fill the rectangle `[x0, x0+w) x [y0, y0+h)`
    ///
    /// A zero or negative width or height draws nothing
    pub fn fill_rect<C: Into<Rgb8>>(&mut self, x0: i64, y0: i64, w: i64, h: i64, c: C) {
        self.ren.fill_rect(x0, y0, w, h, c.into());
    }
    /// Draw the outline of the rectangle `[x0, x0+w) x [y0, y0+h)`, `line_w`
    /// pixels thick, on the inside of the rectangle
    pub fn draw_rect<C: Into<Rgb8>>(&mut self, x0: i64, y0: i64, w: i64, h: i64, c: C, line_w: i64) {
        self.ren.draw_rect(x0, y0, w, h, c.into(), line_w);
    }
    /// Set the entire canvas to `c`
    pub fn clear_rect<C: Into<Rgb8>>(&mut self, c: C) {
        self.ren.clear(c.into());
    }
    /// Draw a one pixel wide line from (`x0`,`y0`) to (`x1`,`y1`)
    pub fn draw_line<C: Into<Rgb8>>(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, c: C) {
        let mut ren = RendererPrimitives::with_base(&mut self.ren);
        ren.line_color(c.into());
        ren.line(x0, y0, x1, y1);
    }
    /// Draw a line `thickness` pixels wide from (`x0`,`y0`) to (`x1`,`y1`)
    ///
    /// See [RendererPrimitives::thick_line](../primitives/struct.RendererPrimitives.html#method.thick_line)
    pub fn draw_thick_line<C: Into<Rgb8>>(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, thickness: i64, c: C) {
        let mut ren = RendererPrimitives::with_base(&mut self.ren);
        ren.line_color(c.into());
        ren.thick_line(x0, y0, x1, y1, thickness);
    }
    /// Fill the disc of radius `r` centered on (`cx`,`cy`)
    pub fn fill_circle<C: Into<Rgb8>>(&mut self, cx: i64, cy: i64, r: f64, c: C) {
        let mut ren = RendererPrimitives::with_base(&mut self.ren);
        ren.fill_color(c.into());
        ren.fill_circle(cx, cy, r);
    }
    /// Draw character `c` with its lower left corner at (`x0`,`y0`), using the
    /// glyph images in `font_dir`
    ///
    /// Returns how far to move the cursor and the width of the glyph
    pub fn draw_char<P: AsRef<Path>>(&mut self, c: char, x0: i64, y0: i64, font_dir: P) -> Advance {
        text::draw_char(&mut self.ren.pixf, &self.fonts, c, x0, y0, font_dir.as_ref())
    }
    /// Draw string `s` starting at (`x0`,`y0`), using the glyph images in
    /// `font_dir`
    ///
    /// Returns the cursor position following the string
    pub fn draw_string<P: AsRef<Path>>(&mut self, s: &str, x0: i64, y0: i64, font_dir: P) -> (i64, i64) {
        text::draw_string(&mut self.ren.pixf, &self.fonts, s, x0, y0, font_dir.as_ref())
    }
    /// Draw character `c` using glyphs from `glyphs`
    pub fn draw_char_with<G, P>(&mut self, glyphs: &G, c: char, x0: i64, y0: i64, font_dir: P) -> Advance
        where G: GlyphProvider + ?Sized, P: AsRef<Path>
    {
        text::draw_char(&mut self.ren.pixf, glyphs, c, x0, y0, font_dir.as_ref())
    }
    /// Draw string `s` using glyphs from `glyphs`
    pub fn draw_string_with<G, P>(&mut self, glyphs: &G, s: &str, x0: i64, y0: i64, font_dir: P) -> (i64, i64)
        where G: GlyphProvider + ?Sized, P: AsRef<Path>
    {
        text::draw_string(&mut self.ren.pixf, glyphs, s, x0, y0, font_dir.as_ref())
    }
}
