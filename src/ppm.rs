//! Reading and Writing of PPM (Portable Pixmap Format) files
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
//! A file holds a header with the width, height and maximum channel value
//! followed by one R,G,B triple per pixel in row-major order, either as
//! bytes (P6, binary) or as whitespace separated numbers (P3, ascii)
//!
use crate::buffer::RenderingBuffer;
use crate::error::{Error, Result};

use image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, DynamicImage, ImageEncoder};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// File extension of the native format
pub const EXTENSION: &str = "ppm";

/// Sample layout used when writing a PPM file
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Encoding {
    /// P6, one byte per channel
    Binary,
    /// P3, decimal text
    Ascii,
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Binary
    }
}

impl From<Encoding> for SampleEncoding {
    fn from(e: Encoding) -> Self {
        match e {
            Encoding::Binary => SampleEncoding::Binary,
            Encoding::Ascii  => SampleEncoding::Ascii,
        }
    }
}

/// Check if `path` names a file in the native format, by extension
pub fn is_ppm<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(EXTENSION))
        .unwrap_or(false)
}

fn open<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(err),
    })
}

/// Read a PPM file
///
/// Both the binary and ascii variants are accepted; channels with a
/// maximum value other than 255 are rescaled to 8 bits
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<RenderingBuffer> {
    let path = filename.as_ref();
    let decode = |source| Error::Decode { path: path.to_path_buf(), source };
    let reader = BufReader::new(open(path)?);
    let decoder = PnmDecoder::new(reader).map_err(decode)?;
    let img = DynamicImage::from_decoder(decoder).map_err(decode)?.to_rgb8();
    let (w, h) = img.dimensions();
    log::debug!("read {}x{} ppm from {}", w, h, path.display());
    RenderingBuffer::from_vec(img.into_raw(), w as usize, h as usize)
}

/// Write a binary PPM file
pub fn write_file<P: AsRef<Path>>(buf: &RenderingBuffer, filename: P) -> Result<()> {
    write_file_with(buf, filename, Encoding::Binary)
}

/// Write a PPM file using `encoding` for the samples
pub fn write_file_with<P: AsRef<Path>>(buf: &RenderingBuffer, filename: P, encoding: Encoding) -> Result<()> {
    let path = filename.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    PnmEncoder::new(&mut out)
        .with_subtype(PnmSubtype::Pixmap(encoding.into()))
        .write_image(buf.data(), buf.width() as u32, buf.height() as u32, ColorType::Rgb8)
        .map_err(|source| Error::Encode { path: path.to_path_buf(), source })?;
    out.flush()?;
    log::debug!("wrote {}x{} ppm ({:?}) to {}", buf.width(), buf.height(), encoding, path.display());
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Files may be of any format the image crate reads. Differences are
/// printed to stdout
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let read = |p: &Path| -> Result<RenderingBuffer> {
        let img = image::open(p)
            .map_err(|source| Error::Decode { path: p.to_path_buf(), source })?
            .to_rgb8();
        let (w, h) = img.dimensions();
        RenderingBuffer::from_vec(img.into_raw(), w as usize, h as usize)
    };
    let b1 = read(f1.as_ref())?;
    let b2 = read(f2.as_ref())?;
    if b1.width() != b2.width() || b1.height() != b2.height() {
        println!("image sizes differ {}x{} {}x{}", b1.width(), b1.height(), b2.width(), b2.height());
        return Ok(false);
    }
    let w1 = b1.width();
    let mut flag = true;
    for (i,(v1,v2)) in b1.data().iter().zip(b2.data().iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RenderingBuffer {
        let data = (0 .. 4*3*3).map(|i| (i * 7) as u8).collect();
        RenderingBuffer::from_vec(data, 4, 3).unwrap()
    }

    #[test]
    fn extension() {
        assert!(is_ppm("a.ppm"));
        assert!(is_ppm("dir/a.PPM"));
        assert!(!is_ppm("a.png"));
        assert!(!is_ppm("ppm"));
    }

    #[test]
    fn binary_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ppm");
        let buf = sample();
        write_file(&buf, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"P6");
        assert_eq!(read_file(&path).unwrap(), buf);
    }

    #[test]
    fn ascii_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ppm");
        let buf = sample();
        write_file_with(&buf, &path, Encoding::Ascii).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"P3");
        assert_eq!(read_file(&path).unwrap(), buf);
    }

    #[test]
    fn reads_hand_written_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ppm");
        std::fs::write(&path, "P3\n2 1\n255\n255 0 0   0 0 255\n").unwrap();
        let buf = read_file(&path).unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 1));
        assert_eq!(buf.data(), &[255,0,0, 0,0,255]);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let r = read_file(dir.path().join("nope.ppm"));
        assert!(matches!(r, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ppm");
        std::fs::write(&path, "this is not an image").unwrap();
        assert!(matches!(read_file(&path), Err(Error::Decode { .. })));
    }

    #[test]
    fn diff() {
        let dir = tempfile::tempdir().unwrap();
        let (a, b) = (dir.path().join("a.ppm"), dir.path().join("b.ppm"));
        let buf = sample();
        write_file(&buf, &a).unwrap();
        write_file_with(&buf, &b, Encoding::Ascii).unwrap();
        assert!(img_diff(&a, &b).unwrap());
        let mut data = buf.into_vec();
        data[5] ^= 1;
        write_file(&RenderingBuffer::from_vec(data, 4, 3).unwrap(), &b).unwrap();
        assert!(!img_diff(&a, &b).unwrap());
    }
}
