//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Any [`Surface`] can be
//! encoded; the area written out is its nominal [`Surface::bounds`], with
//! unwritten pixels left transparent.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Error, Result};
use crate::surface::Surface;

/// PNG encoder for surface output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a surface to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface area is empty, or if file creation or
    /// PNG encoding fails.
    pub fn write_to_file<S, P>(surface: &S, path: P) -> Result<()>
    where
        S: Surface + ?Sized,
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::encode(surface, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode a surface to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface area is empty or PNG encoding fails.
    pub fn to_bytes<S: Surface + ?Sized>(surface: &S) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(surface, &mut buffer)?;
        Ok(buffer)
    }

    /// Encode a surface as a `data:image/png;base64,...` URI, ready to be
    /// embedded in HTML or SVG.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface area is empty or PNG encoding fails.
    pub fn to_data_uri<S: Surface + ?Sized>(surface: &S) -> Result<String> {
        let png_bytes = Self::to_bytes(surface)?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png_bytes)))
    }

    fn encode<S: Surface + ?Sized, W: Write>(surface: &S, out: W) -> Result<()> {
        let bounds = surface.bounds();
        let (width, height) = (bounds.width(), bounds.height());
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions {
                width: width.max(0) as u32,
                height: height.max(0) as u32,
            });
        }

        let mut encoder = png::Encoder::new(out, width as u32, height as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in bounds.min.y..bounds.max.y {
            for x in bounds.min.x..bounds.max.x {
                data.extend_from_slice(&surface.at(x, y).to_array());
            }
        }

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::framebuffer::Framebuffer;
    use crate::geometry::{Point, Rect};
    use crate::sparse::SparseImage;

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(bytes);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_png_to_bytes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        let bytes = PngEncoder::to_bytes(&fb).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);

        let (info, pixels) = decode(&bytes);
        assert_eq!((info.width, info.height), (10, 10));
        assert_eq!(&pixels[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_sparse_image_region() {
        let mut img = SparseImage::new(Rect::new(5, 5, 8, 7));
        img.insert(Point::new(5, 5), Rgba::BLUE);
        img.insert(Point::new(7, 6), Rgba::WHITE);
        img.insert(Point::new(100, 100), Rgba::RED);

        let (info, pixels) = decode(&PngEncoder::to_bytes(&img).unwrap());

        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(&pixels[0..4], &Rgba::BLUE.to_array());
        assert_eq!(&pixels[4..8], &[0, 0, 0, 0]);
        assert_eq!(&pixels[20..24], &Rgba::WHITE.to_array());
    }

    #[test]
    fn test_empty_region_is_rejected() {
        let img = SparseImage::default();
        let err = PngEncoder::to_bytes(&img).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 0, height: 0 }));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let fb = Framebuffer::new(4, 3).unwrap();

        PngEncoder::write_to_file(&fb, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
        assert_eq!(bytes, PngEncoder::to_bytes(&fb).unwrap());
    }

    #[test]
    fn test_data_uri() {
        let fb = Framebuffer::new(2, 2).unwrap();
        let uri = PngEncoder::to_data_uri(&fb).unwrap();
        assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }
}
