//! Rendering buffer

use crate::error::{Error, Result};

use std::ops::Index;
use std::ops::IndexMut;

/// Number of color components per pixel (Red, Green, Blue)
pub const BPP: usize = 3;

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format) with the origin at the top
/// left, three contiguous components per pixel
///
/// The buffer is the sole owner of its pixel data. Views into the data,
/// `buf[(x,y)]` for a single pixel and [`row`](#method.row) for a full row,
/// borrow the same allocation, so that
/// `buf[(x,y)][c] == buf.data[(y * width + x) * 3 + c]` always holds
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    data: Vec<u8>,
    /// Image Width in pixels
    width: usize,
    /// Image Height in pixels
    height: usize,
}


impl RenderingBuffer {
    /// Create a new buffer of width and height
    ///
    /// Data for the Image is allocated and set to zero (black)
    ///
    ///     use ppmcanvas::RenderingBuffer;
    ///
    ///     let buf = RenderingBuffer::new(4, 2).unwrap();
    ///     assert_eq!(buf.len(), 4 * 2 * 3);
    ///     assert_eq!(&buf[(3,1)], &[0,0,0]);
    ///
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let n = width.checked_mul(height)
            .and_then(|n| n.checked_mul(BPP))
            .ok_or(Error::OutOfMemory { width, height })?;
        let mut data = Vec::new();
        data.try_reserve_exact(n)
            .map_err(|_| Error::OutOfMemory { width, height })?;
        data.resize(n, 0u8);
        log::debug!("allocated {}x{} rendering buffer ({} bytes)", width, height, n);
        Ok(RenderingBuffer { width, height, data })
    }
    /// Create a buffer from existing pixel data
    ///
    /// `data` must hold exactly `width * height * 3` components
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let n = width.checked_mul(height).and_then(|n| n.checked_mul(BPP));
        if n != Some(data.len()) {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(RenderingBuffer { width, height, data })
    }
    /// Image Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Image Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Rendering Buffer holds no data; never true for a constructed buffer
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Raw component data, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    /// Check if pixel (`x`,`y`) lies inside the buffer
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }
    /// Return the components of row `i`
    pub fn row(&self, i: usize) -> &[u8] {
        debug_assert!(i < self.height);
        let n = self.width * BPP;
        &self.data[i * n .. (i+1) * n]
    }
    /// Return the mutable components of row `i`
    pub fn row_mut(&mut self, i: usize) -> &mut [u8] {
        debug_assert!(i < self.height);
        let n = self.width * BPP;
        &mut self.data[i * n .. (i+1) * n]
    }
    /// Iterate over pixels as `[r,g,b]` slices in row-major order
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(BPP)
    }
    /// Release the pixel data
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
    fn offset(&self, x: usize, y: usize) -> usize {
        ((y * self.width) + x) * BPP
    }
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &self.data[i .. i + BPP]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &mut self.data[i .. i + BPP]
    }
}
