//! Conversion between PPM and other image formats
//!
//! Only PPM is read and written natively. Any other format goes through a
//! [Converter], which turns one file into another based on their extensions.
//!
//! [Converter]: trait.Converter.html

use crate::error::{Error, Result};
use crate::ppm;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable naming the ffmpeg executable
pub const FFMPEG_ENV: &str = "PPMCANVAS_FFMPEG";

/// Convert the image file `src` into `dst`
///
/// Formats are taken from the file extensions. Calls block until the
/// output file is complete
pub trait Converter {
    fn convert(&self, src: &Path, dst: &Path) -> Result<()>;
}

/// In-process conversion using the image crate
///
/// Handles png, bmp, jpeg, gif and ppm
#[derive(Debug,Default,Copy,Clone)]
pub struct Transcoder;

impl Converter for Transcoder {
    fn convert(&self, src: &Path, dst: &Path) -> Result<()> {
        let unsupported = |p: &Path| Error::UnsupportedFormat(p.display().to_string());
        image::ImageFormat::from_path(src).map_err(|_| unsupported(src))?;
        let format = image::ImageFormat::from_path(dst).map_err(|_| unsupported(dst))?;
        log::debug!("transcoding {} to {} ({:?})", src.display(), dst.display(), format);
        let failed = |reason: String| Error::Conversion {
            src: src.to_path_buf(), dst: dst.to_path_buf(), reason
        };
        if !src.exists() {
            return Err(Error::FileNotFound(src.to_path_buf()));
        }
        let img = image::open(src).map_err(|e| failed(e.to_string()))?;
        // Formats without color depth options get 8-bit RGB
        let img = image::DynamicImage::ImageRgb8(img.to_rgb8());
        img.save_with_format(dst, format).map_err(|e| failed(e.to_string()))
    }
}

/// Conversion by running ffmpeg
///
/// ```text
/// ffmpeg -y -loglevel error -i <src> <dst>
/// ```
///
#[derive(Debug,Clone)]
pub struct Ffmpeg {
    program: PathBuf,
}

impl Default for Ffmpeg {
    /// Use the program named by `PPMCANVAS_FFMPEG`, otherwise `ffmpeg`
    /// found on the `PATH`
    fn default() -> Self {
        let program = std::env::var_os(FFMPEG_ENV)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| OsString::from("ffmpeg"));
        Self::new(program)
    }
}

impl Ffmpeg {
    /// Use `program` as the ffmpeg executable
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self { program: program.into() }
    }
    /// Executable that will be run
    pub fn program(&self) -> &Path {
        &self.program
    }
    /// Arguments passed to ffmpeg to convert `src` into `dst`
    pub fn args(src: &Path, dst: &Path) -> Vec<OsString> {
        let mut args : Vec<OsString> = ["-y", "-loglevel", "error", "-i"]
            .iter().map(|a| OsString::from(*a)).collect();
        args.push(src.as_os_str().to_owned());
        args.push(dst.as_os_str().to_owned());
        args
    }
}

impl Converter for Ffmpeg {
    fn convert(&self, src: &Path, dst: &Path) -> Result<()> {
        let failed = |reason: String| Error::Conversion {
            src: src.to_path_buf(), dst: dst.to_path_buf(), reason
        };
        log::debug!("running {} to convert {} to {}",
                    self.program.display(), src.display(), dst.display());
        let out = Command::new(&self.program)
            .args(Self::args(src, dst))
            .output()
            .map_err(|e| failed(format!("cannot run {}: {}", self.program.display(), e)))?;
        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(failed(format!("{} {}", out.status, stderr.trim())));
        }
        Ok(())
    }
}

/// Temporary PPM file, removed when dropped
pub(crate) fn temp_ppm() -> Result<tempfile::TempPath> {
    let file = tempfile::Builder::new()
        .prefix("ppmcanvas-")
        .suffix(&format!(".{}", ppm::EXTENSION))
        .tempfile()?;
    Ok(file.into_temp_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RenderingBuffer;

    fn sample(dir: &Path) -> (PathBuf, RenderingBuffer) {
        let data = (0 .. 3*2*3).map(|i| (i * 11) as u8).collect();
        let buf = RenderingBuffer::from_vec(data, 3, 2).unwrap();
        let path = dir.join("src.ppm");
        ppm::write_file(&buf, &path).unwrap();
        (path, buf)
    }

    #[test]
    fn transcode_png_and_back() {
        let dir = tempfile::tempdir().unwrap();
        let (src, buf) = sample(dir.path());
        let png = dir.path().join("img.png");
        let back = dir.path().join("back.ppm");
        Transcoder.convert(&src, &png).unwrap();
        assert_eq!(&std::fs::read(&png).unwrap()[1..4], b"PNG");
        Transcoder.convert(&png, &back).unwrap();
        assert_eq!(ppm::read_file(&back).unwrap(), buf);
    }

    #[test]
    fn transcode_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let (src, _) = sample(dir.path());
        let r = Transcoder.convert(&src, &dir.path().join("img.xyz"));
        assert!(matches!(r, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn transcode_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let r = Transcoder.convert(&dir.path().join("none.png"), &dir.path().join("out.ppm"));
        assert!(matches!(r, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn ffmpeg_args() {
        let args = Ffmpeg::args(Path::new("in.ppm"), Path::new("out.png"));
        let args : Vec<_> = args.iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(args, vec!["-y","-loglevel","error","-i","in.ppm","out.png"]);
    }

    #[test]
    fn ffmpeg_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let ff = Ffmpeg::new(dir.path().join("no-such-ffmpeg"));
        let r = ff.convert(Path::new("in.ppm"), Path::new("out.png"));
        assert!(matches!(r, Err(Error::Conversion { .. })));
    }

    #[test]
    fn temp_ppm_is_removed() {
        let p = temp_ppm().unwrap();
        let path = p.to_path_buf();
        assert!(ppm::is_ppm(&path));
        assert!(path.exists());
        drop(p);
        assert!(!path.exists());
    }
}
