
//! Small 2D raster canvas
//!
//! An RGB image held in one flat buffer, with aliased drawing primitives
//! and PPM file input/output.
//!
//! How does this work
//!    canvas = Canvas( RenderingBase( Pixfmt( RenderingBuffer ) ) )
//!  Drawing Operations
//!    set_pixel                       -- Pixfmt::copy_pixel
//!    fill_rect, draw_rect, clear     -- RenderingBase, clipped rows
//!    draw_line, fill_circle          -- RendererPrimitives
//!      Bresenham                     -- one pixel per driving axis step
//!      thick_offsets                 -- parallel lines along the minor axis
//!    draw_char, draw_string          -- text, glyphs from a GlyphProvider
//!  Files
//!    *.ppm                           -- ppm::read_file / ppm::write_file
//!    anything else                   -- temporary ppm + Converter
//!
//! Every write goes through `Pixfmt::copy_pixel` or a clipped span, so
//! nothing is ever written outside of the buffer.
//!
//! ```
//! use ppmcanvas::{Canvas,Rgb8};
//!
//! let mut canvas = Canvas::new(20, 10).unwrap();
//! canvas.draw_line(-5, -5, 30, 30, Rgb8::white());
//! assert_eq!(canvas.get_pixel(3, 3), Some(Rgb8::white()));
//! ```

pub mod error;
pub mod color;
pub mod buffer;
pub mod pixfmt;
pub mod base;
pub mod line;
pub mod primitives;
pub mod text;
pub mod font;
pub mod ppm;
pub mod convert;
pub mod canvas;

pub use error::*;
pub use color::*;
pub use buffer::*;
pub use pixfmt::*;
pub use base::*;
pub use line::*;
pub use primitives::*;
pub use text::*;
pub use font::*;
pub use convert::*;
pub use canvas::*;
