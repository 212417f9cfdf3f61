//! Primitive Renderer
//!
//! Aliased lines and discs drawn directly onto a
//! [RenderingBase](../base/struct.RenderingBase.html), one opaque pixel at a time

use crate::base::RenderingBase;
use crate::color::Rgb8;
use crate::line::{Bresenham, thick_offsets};

/// Primitive Renderer
///
/// Holds the current line and fill colors and a pen position for
/// [`move_to`](#method.move_to) / [`line_to`](#method.line_to) polylines
///
///     use ppmcanvas::{RenderingBase,RendererPrimitives,Pixfmt,Rgb8};
///
///     let mut base = RenderingBase::new(Pixfmt::new(10,10).unwrap());
///     let mut ren = RendererPrimitives::with_base(&mut base);
///     ren.line_color(Rgb8::red());
///     ren.move_to(1,1);
///     ren.line_to(8,1);
///     ren.line_to(8,8);
///     assert_eq!(base.pixf.get((8,5)), Rgb8::red());
///
#[derive(Debug)]
pub struct RendererPrimitives<'a> {
    pub base: &'a mut RenderingBase,
    pub fill_color: Rgb8,
    pub line_color: Rgb8,
    pub x: i64,
    pub y: i64,
}

impl<'a> RendererPrimitives<'a> {
    /// Create new Primitive Renderer; both colors start out black
    pub fn with_base(base: &'a mut RenderingBase) -> Self {
        let fill_color = Rgb8::black();
        let line_color = Rgb8::black();
        Self { base, fill_color, line_color, x: 0, y: 0 }
    }
    /// Set color used by lines
    pub fn line_color(&mut self, line_color: Rgb8) {
        self.line_color = line_color;
    }
    /// Set color used by filled shapes
    pub fn fill_color(&mut self, fill_color: Rgb8) {
        self.fill_color = fill_color;
    }
    /// Move the pen to (`x`,`y`) without drawing
    pub fn move_to(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
    }
    /// Draw a thin line from the pen position to (`x`,`y`) and move the pen there
    pub fn line_to(&mut self, x: i64, y: i64) {
        let (x0,y0) = (self.x, self.y);
        self.line(x0, y0, x, y);
        self.x = x;
        self.y = y;
    }
    /// Set a single pixel to the line color
    pub fn point(&mut self, x: i64, y: i64) {
        self.base.pixf.copy_pixel(x, y, self.line_color);
    }
    /// Draw a one pixel wide line from (`x1`,`y1`) to (`x2`,`y2`)
    ///
    /// Paints `max(|dx|,|dy|) + 1` pixels, less any outside of the image
    pub fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.thick_line(x1, y1, x2, y2, 1);
    }
    /// Draw a line `thickness` pixels wide from (`x1`,`y1`) to (`x2`,`y2`)
    ///
    /// The line is drawn as `thickness` parallel thin lines, offset from the
    /// ideal line along its minor axis: vertically for mostly horizontal
    /// lines, horizontally for mostly vertical ones. Offsets are given by
    /// [thick_offsets](../line/fn.thick_offsets.html). Every column (or row)
    /// crossed by the line receives a contiguous run of `thickness` pixels, so
    /// diagonal lines have no holes.
    ///
    /// The walk is clipped to the image along the driving axis and each run
    /// is clipped along the minor axis, so the work done is bounded by the
    /// image size however long or thick the line is
    pub fn thick_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, thickness: i64) {
        if thickness <= 0 {
            return;
        }
        let color = self.line_color;
        let (xmin,xmax,ymin,ymax) = self.base.limits();
        let li = Bresenham::new(x1, y1, x2, y2);
        let steep = li.is_steep();
        let (ulo, uhi, vlo, vhi) = if steep {
            (ymin, ymax, xmin, xmax)
        } else {
            (xmin, xmax, ymin, ymax)
        };
        let offsets = thick_offsets(thickness);
        let (olo, ohi) = (i128::from(*offsets.start()), i128::from(*offsets.end()));
        for (x,y) in li.clip(ulo, uhi) {
            let v = i128::from(if steep { x } else { y });
            let a = (v + olo).max(i128::from(vlo));
            let b = (v + ohi).min(i128::from(vhi));
            if a > b {
                continue;
            }
            // Both ends lie inside the image now
            let (a, n) = (a as i64, (b - a + 1) as i64);
            if steep {
                self.base.pixf.copy_hline(a, y, n, color);
            } else {
                self.base.pixf.copy_vline(x, a, n, color);
            }
        }
    }
    /// Fill a disc centered at (`cx`,`cy`) with radius `r`
    ///
    /// A pixel is painted when `(x-cx)^2 + (y-cy)^2 <= r^2`. A radius of
    /// zero paints only the center; a negative radius paints nothing
    pub fn fill_circle(&mut self, cx: i64, cy: i64, r: f64) {
        if r.is_nan() || r < 0.0 {
            return;
        }
        let color = self.fill_color;
        let (xmin,xmax,ymin,ymax) = self.base.limits();
        let ri = r.floor() as i64;
        let x1 = cx.saturating_sub(ri).max(xmin);
        let x2 = cx.saturating_add(ri).min(xmax);
        let y1 = cy.saturating_sub(ri).max(ymin);
        let y2 = cy.saturating_add(ri).min(ymax);
        let r2 = r * r;
        for y in y1 ..= y2 {
            let dy = y.saturating_sub(cy) as f64;
            for x in x1 ..= x2 {
                let dx = x.saturating_sub(cx) as f64;
                if dx * dx + dy * dy <= r2 {
                    self.base.pixf.copy_pixel(x, y, color);
                }
            }
        }
    }
}
