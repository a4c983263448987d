use anyhow::Context;

/// Decoded RGBA8 image for the body surface (equirectangular projection).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Decode an encoded image (JPEG or PNG). Failure here is a startup error.
    pub fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let img = image::load_from_memory(bytes)
            .context("decoding body texture")?
            .to_rgba8();
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            anyhow::bail!("body texture is empty");
        }
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// Width/height ratio; 2.0 for a well-formed equirectangular map.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(img: &RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png_to_rgba() {
        let mut img = RgbaImage::from_pixel(4, 2, Rgba([10, 20, 30, 255]));
        img.put_pixel(0, 0, Rgba([200, 0, 0, 255]));
        let tex = TextureImage::decode(&encode_png(&img)).unwrap();
        assert_eq!((tex.width, tex.height), (4, 2));
        assert_eq!(tex.rgba.len(), 4 * 2 * 4);
        assert_eq!(&tex.rgba[0..4], &[200, 0, 0, 255]);
        assert_eq!(&tex.rgba[4..8], &[10, 20, 30, 255]);
        assert_eq!(tex.aspect(), 2.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(TextureImage::decode(b"not an image").is_err());
    }
}
