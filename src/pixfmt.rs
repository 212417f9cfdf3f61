//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::Rgb8;
use crate::error::Result;

/// Pixel Format Wrapper around raw pixel component data
///
/// Pixels are addressed with signed coordinates; any location outside
/// of the image is silently ignored when writing
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Pixfmt {
    pub(crate) rbuf: RenderingBuffer,
}

impl Pixfmt {
    /// Create new Pixel Format of width * height
    ///
    /// Allocates memory of width * height * 3, all pixels black
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self { rbuf: RenderingBuffer::new(width, height)? })
    }
    /// Wrap an existing Rendering Buffer
    pub fn with_buffer(rbuf: RenderingBuffer) -> Self {
        Self { rbuf }
    }
    /// Width of rendering buffer in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width()
    }
    /// Height of rendering buffer in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height()
    }
    /// Underlying Rendering Buffer
    pub fn buffer(&self) -> &RenderingBuffer {
        &self.rbuf
    }
    /// Set every pixel to [Color] `c`
    ///
    /// [Color]: ../color/struct.Rgb8.html
    pub fn fill(&mut self, c: Rgb8) {
        let c = c.to_array();
        for row in 0 .. self.height() {
            for p in self.rbuf.row_mut(row).chunks_exact_mut(3) {
                p.copy_from_slice(&c);
            }
        }
    }
    /// Color at pixel (`x`,`y`)
    ///
    /// Panics if the pixel lies outside of the image, see [`pixel`](#method.pixel)
    pub fn get(&self, id: (usize, usize)) -> Rgb8 {
        Rgb8::from_slice(&self.rbuf[id])
    }
    /// Color at pixel (`x`,`y`), or `None` when outside of the image
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb8> {
        if self.rbuf.contains(x, y) {
            Some(self.get((x as usize, y as usize)))
        } else {
            None
        }
    }
    /// Copies the [Color] `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use ppmcanvas::{Pixfmt,Rgb8};
    ///
    ///     let mut pix = Pixfmt::new(1,2).unwrap();
    ///     let white = Rgb8::white();
    ///     pix.copy_pixel(0,1, white);
    ///     assert_eq!(pix.get((0,0)), Rgb8::black());
    ///     assert_eq!(pix.get((0,1)), white);
    ///
    ///     pix.copy_pixel(10,10, white); // Ignored, outside of range
    ///     pix.copy_pixel(-1,0, white);  // Ignored, outside of range
    ///
    /// [Color]: ../color/struct.Rgb8.html
    pub fn copy_pixel(&mut self, x: i64, y: i64, c: Rgb8) {
        if ! self.rbuf.contains(x, y) {
            return;
        }
        self.rbuf[(x as usize, y as usize)].copy_from_slice(&c.to_array());
    }
    /// Copies the [Color] `c` to pixels from (`x`,`y`) to (`x+n-1`,y)
    ///
    /// Locations outside of the region are ignored
    ///
    /// [Color]: ../color/struct.Rgb8.html
    pub fn copy_hline(&mut self, x: i64, y: i64, n: i64, c: Rgb8) {
        let w = self.width() as i64;
        if y < 0 || y >= self.height() as i64 || n <= 0 {
            return;
        }
        let x1 = x.max(0);
        let x2 = x.saturating_add(n).min(w);
        if x1 >= x2 {
            return;
        }
        let c = c.to_array();
        let row = self.rbuf.row_mut(y as usize);
        for p in row[x1 as usize * 3 .. x2 as usize * 3].chunks_exact_mut(3) {
            p.copy_from_slice(&c);
        }
    }
    /// Copies the [Color] `c` to pixels from (`x`,`y`) to (`x`,`y+n-1`)
    ///
    /// Locations outside of the region are ignored
    ///
    /// [Color]: ../color/struct.Rgb8.html
    pub fn copy_vline(&mut self, x: i64, y: i64, n: i64, c: Rgb8) {
        let h = self.height() as i64;
        if x < 0 || x >= self.width() as i64 || n <= 0 {
            return;
        }
        let y1 = y.max(0);
        let y2 = y.saturating_add(n).min(h);
        for yi in y1 .. y2 {
            self.rbuf[(x as usize, yi as usize)].copy_from_slice(&c.to_array());
        }
    }
}
