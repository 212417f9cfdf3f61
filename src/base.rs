//! Rendering Base

use crate::pixfmt::Pixfmt;
use crate::color::Rgb8;
use crate::buffer::RenderingBuffer;

/// Rendering Base
///
/// Clips rectangular operations against the image before handing rows
/// to the [Pixfmt](../pixfmt/struct.Pixfmt.html)
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct RenderingBase {
    pub pixf: Pixfmt,
}


impl RenderingBase {
    /// Create new Rendering Base from Pixel Format
    pub fn new(pixf: Pixfmt) -> RenderingBase {
        RenderingBase { pixf }
    }
    /// Set the entire image to `color`
    pub fn clear(&mut self, color: Rgb8) {
        self.pixf.fill(color);
    }
    /// Inclusive limits of the image as (xmin, xmax, ymin, ymax)
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        (0, w-1, 0, h-1)
    }
    /// Fill the rectangle `[x0, x0+w) x [y0, y0+h)` with `color`
    ///
    /// Only the part inside the image is painted. A zero or negative
    /// width or height paints nothing
    ///
    ///     use ppmcanvas::{RenderingBase,Pixfmt,Rgb8};
    ///
    ///     let mut ren = RenderingBase::new(Pixfmt::new(4,4).unwrap());
    ///     ren.fill_rect(-2, 1, 4, 2, Rgb8::white());
    ///     assert_eq!(ren.pixf.get((0,1)), Rgb8::white());
    ///     assert_eq!(ren.pixf.get((1,2)), Rgb8::white());
    ///     assert_eq!(ren.pixf.get((2,1)), Rgb8::black());
    ///     assert_eq!(ren.pixf.get((0,3)), Rgb8::black());
    ///
    pub fn fill_rect(&mut self, x0: i64, y0: i64, w: i64, h: i64, color: Rgb8) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (xmin,xmax,ymin,ymax) = self.limits();
        let x1 = x0.max(xmin);
        let x2 = x0.saturating_add(w - 1).min(xmax);
        let y1 = y0.max(ymin);
        let y2 = y0.saturating_add(h - 1).min(ymax);
        if x1 > x2 || y1 > y2 {
            return;
        }
        for y in y1 ..= y2 {
            self.pixf.copy_hline(x1, y, x2 - x1 + 1, color);
        }
    }
    /// Draw the outline of the rectangle `[x0, x0+w) x [y0, y0+h)`
    ///
    /// The outline is made of four bars of thickness `line_w`, each inside
    /// the rectangle. Corners are covered by both adjacent bars
    pub fn draw_rect(&mut self, x0: i64, y0: i64, w: i64, h: i64, color: Rgb8, line_w: i64) {
        if w <= 0 || h <= 0 || line_w <= 0 {
            return;
        }
        let x1 = x0.saturating_add(w).saturating_sub(line_w);
        let y1 = y0.saturating_add(h).saturating_sub(line_w);
        self.fill_rect(x0, y0, w, line_w, color); // Top
        self.fill_rect(x0, y1, w, line_w, color); // Bottom
        self.fill_rect(x0, y0, line_w, h, color); // Left
        self.fill_rect(x1, y0, line_w, h, color); // Right
    }
    /// Underlying Rendering Buffer
    pub fn buffer(&self) -> &RenderingBuffer {
        self.pixf.buffer()
    }
}
