//! Line Interpolation
//!
//! Integer line stepping using
//! [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)

use std::convert::TryFrom;
use std::ops::RangeInclusive;

/// Pixel positions along a line from `(x0,y0)` to `(x1,y1)`, endpoints included
///
/// Lines where `|dx| >= |dy|` step along x (low slope) and the rest step
/// along y (high slope), so every step along the driving axis produces
/// exactly one pixel and consecutive pixels are 8-connected. Stepping
/// always starts at the endpoint with the smaller driving coordinate,
/// which makes the pixel set independent of the endpoint order.
///
///     use ppmcanvas::Bresenham;
///
///     let pts : Vec<_> = Bresenham::new(0,0, 4,2).collect();
///     assert_eq!(pts, vec![(0,0),(1,0),(2,1),(3,1),(4,2)]);
///
///     let rev : Vec<_> = Bresenham::new(4,2, 0,0).collect();
///     assert_eq!(pts, rev);
///
#[derive(Debug,Clone)]
pub struct Bresenham {
    /// Line is primarily vertical, y is the driving axis
    steep: bool,
    /// First position along the driving axis
    u0: i128,
    /// Minor axis position at `u0`
    v0: i128,
    /// Driving axis delta, never negative
    du: i128,
    /// Absolute minor axis delta
    dv: i128,
    /// Current position along the driving axis
    u: i128,
    /// Last position along the driving axis
    u_end: i128,
    /// Current position along the minor axis
    v: i128,
    /// Minor axis direction, +1 or -1
    v_inc: i128,
    /// Error accumulator
    d: i128,
}

impl Bresenham {
    /// Create a new line from `(x0,y0)` to `(x1,y1)`
    ///
    /// Any pair of `i64` endpoints is accepted; the walk is carried out in
    /// 128 bit arithmetic so the deltas never overflow
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        let (x0, y0) = (i128::from(x0), i128::from(y0));
        let (x1, y1) = (i128::from(x1), i128::from(y1));
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        // Swap into (driving, minor) coordinates
        let (u0, v0, u1, v1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
        // Always step forward along the driving axis
        let (u0, v0, u1, v1) = if u0 > u1 { (u1, v1, u0, v0) } else { (u0, v0, u1, v1) };
        let du = u1 - u0;
        let dv = v1 - v0;
        let v_inc = if dv < 0 { -1 } else { 1 };
        let dv = dv.abs();
        Self {
            steep, u0, v0, du, dv,
            u: u0,
            u_end: u1,
            v: v0,
            v_inc,
            d: 2 * dv - du,
        }
    }
    /// Line steps along y, offsets for thick lines are applied to x
    pub fn is_steep(&self) -> bool {
        self.steep
    }
    /// Restrict the walk to driving axis positions `lo ..= hi`
    ///
    /// The pixels left are exactly those the full line has in that range.
    /// Skipped steps are jumped over in constant time, so clipping a very
    /// long line to a small image costs only the steps that remain
    ///
    ///     use ppmcanvas::Bresenham;
    ///
    ///     let pts : Vec<_> = Bresenham::new(-1_000_000, 0, 1_000_000, 2).clip(0, 2).collect();
    ///     assert_eq!(pts, vec![(0,1),(1,1),(2,1)]);
    ///
    pub fn clip(mut self, lo: i64, hi: i64) -> Self {
        let (lo, hi) = (i128::from(lo), i128::from(hi));
        self.u_end = self.u_end.min(hi);
        if lo > self.u_end {
            self.u = self.u_end + 1;
        } else if lo > self.u {
            self.seek(lo);
        }
        self
    }
    /// Jump to driving axis position `u`, `u0 < u <= u_end`
    ///
    /// After `k` steps the minor axis has moved `m = ceil((2dv k - du) / 2du)`
    /// times. With `dv k = q du + r` that is `q`, plus one when `2r > du`, and
    /// the accumulator is `2(r - du [2r > du]) + 2dv - du`
    fn seek(&mut self, u: i128) {
        let k = (u - self.u0) as u128;
        let (du, dv) = (self.du as u128, self.dv as u128);
        let p = dv * k;
        let (q, r) = (p / du, p % du);
        let up = if 2 * r > du { 1 } else { 0 };
        self.u = u;
        self.v = self.v0 + self.v_inc * (q + up) as i128;
        self.d = 2 * (r as i128 - self.du * up as i128) + 2 * self.dv - self.du;
    }
}

impl Iterator for Bresenham {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<(i64, i64)> {
        if self.u > self.u_end {
            return None;
        }
        let (u, v) = (self.u, self.v);
        if self.d > 0 {
            self.v += self.v_inc;
            self.d -= 2 * self.du;
        }
        self.d += 2 * self.dv;
        self.u += 1;
        // u and v stay between the endpoints, both i64
        let (x, y) = if self.steep { (v, u) } else { (u, v) };
        Some((x as i64, y as i64))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.u_end - self.u + 1).max(0);
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bresenham {}

/// Perpendicular offsets of the parallel lines forming a line of `thickness`
///
/// Offsets are `thickness` consecutive integers centered on zero; for an
/// even thickness the extra line falls on the negative side. A thickness
/// of zero or less yields no offsets.
///
///     use ppmcanvas::thick_offsets;
///
///     assert_eq!(thick_offsets(1), 0 ..= 0);
///     assert_eq!(thick_offsets(3), -1 ..= 1);
///     assert_eq!(thick_offsets(4), -2 ..= 1);
///     assert_eq!(thick_offsets(0).count(), 0);
///
pub fn thick_offsets(thickness: i64) -> RangeInclusive<i64> {
    let lo = -(thickness / 2);
    lo ..= lo + thickness - 1
}
