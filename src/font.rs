//! Bitmap fonts stored as one image per character

use crate::text::{Glyph, GlyphProvider};

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Code point of the glyph whose width is used as the fallback advance
const SPACE: char = ' ';

/// Glyphs read from a directory of images
///
/// The glyph for character `c` is the image `<dir>/<code point>.png`, e.g.
/// `65.png` for `A`. A glyph advances the cursor by its width.
///
/// Characters without a readable image are drawn as a blank glyph that
/// advances by the width of the space glyph, or not at all if the space
/// glyph is missing as well.
///
/// Loaded glyphs are cached per directory; a `FontDirectory` is meant for
/// use from a single thread
#[derive(Debug,Default)]
pub struct FontDirectory {
    cache: RefCell<HashMap<(PathBuf, char), Glyph>>,
}

impl FontDirectory {
    /// Create a new, empty, glyph cache
    pub fn new() -> Self {
        Self::default()
    }
    /// Image file holding the glyph for `c`
    pub fn glyph_path(font_dir: &Path, c: char) -> PathBuf {
        font_dir.join(format!("{}.png", c as u32))
    }
    /// Number of cached glyphs
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }
    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
    fn load(font_dir: &Path, c: char) -> Option<Glyph> {
        let path = Self::glyph_path(font_dir, c);
        match image::open(&path) {
            Ok(img) => Some(Glyph::from_image(&img.to_rgb8())),
            Err(err) => {
                log::warn!("no glyph for {:?} in {}: {}", c, font_dir.display(), err);
                None
            }
        }
    }
    fn fallback(&self, font_dir: &Path, c: char) -> Glyph {
        let dx = if c == SPACE {
            0
        } else {
            self.glyph(SPACE, font_dir).dx
        };
        Glyph::blank(dx, 0)
    }
}

impl GlyphProvider for FontDirectory {
    fn glyph(&self, c: char, font_dir: &Path) -> Glyph {
        let key = (font_dir.to_path_buf(), c);
        if let Some(g) = self.cache.borrow().get(&key) {
            log::trace!("glyph cache hit {:?}", c);
            return g.clone();
        }
        let g = match Self::load(font_dir, c) {
            Some(g) => g,
            None => self.fallback(font_dir, c),
        };
        self.cache.borrow_mut().insert(key, g.clone());
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn write_glyph(dir: &Path, c: char, w: u32, h: u32) {
        let img = RgbImage::from_fn(w, h, |x, y| Rgb([x as u8, y as u8, 7]));
        img.save(FontDirectory::glyph_path(dir, c)).unwrap();
    }

    #[test]
    fn glyph_path_uses_code_point() {
        let p = FontDirectory::glyph_path(Path::new("Font"), 'A');
        assert_eq!(p, Path::new("Font").join("65.png"));
    }

    #[test]
    fn loads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        write_glyph(dir.path(), 'A', 5, 9);
        let fonts = FontDirectory::new();
        let g = fonts.glyph('A', dir.path());
        assert_eq!((g.width, g.height, g.dx, g.dy), (5, 9, 5, 0));
        assert_eq!(g.pixel(4, 8), crate::Rgb8::new(4, 8, 7));
        assert_eq!(fonts.len(), 1);
        // Served from the cache after the file is gone
        std::fs::remove_file(FontDirectory::glyph_path(dir.path(), 'A')).unwrap();
        assert_eq!(fonts.glyph('A', dir.path()), g);
    }

    #[test]
    fn missing_glyph_advances_like_space() {
        let dir = tempfile::tempdir().unwrap();
        write_glyph(dir.path(), ' ', 6, 9);
        let fonts = FontDirectory::new();
        let g = fonts.glyph('\u{2603}', dir.path());
        assert_eq!((g.width, g.height, g.dx, g.dy), (0, 0, 6, 0));
    }

    #[test]
    fn missing_everything() {
        let dir = tempfile::tempdir().unwrap();
        let fonts = FontDirectory::new();
        assert_eq!(fonts.glyph('q', dir.path()), Glyph::blank(0, 0));
        assert_eq!(fonts.glyph(' ', dir.path()), Glyph::blank(0, 0));
    }
}
