//! Loading and saving of pixel buffers in PNG and JPEG formats.
//!
//! Rows of encoded images go from the bottom of a buffer to the top,
//! so a buffer opened with `vertical_flip = true` is saved back unchanged.
use std::path::Path;
use std::str::FromStr;

use crate::UnknownFormatError;

/// Supported formats of encoded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    /// Alpha-channel is dropped, quality is 100.
    Jpg,
}

impl ImageFormat {
    /// Guesses format by extension of the path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UnknownFormatError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for ImageFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            _ => Err(UnknownFormatError(s.to_owned())),
        }
    }
}

#[cfg(feature = "image")]
mod with_image {
    use std::fs::File;
    use std::io::{BufWriter, Cursor, Write};
    use std::path::Path;

    use image::codecs::jpeg::JpegEncoder;
    use image::codecs::png::PngEncoder;
    use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader};
    use log::{debug, error, warn};

    use super::ImageFormat;
    use crate::{DecodeError, EncodeError, PixelBuffer};

    const JPEG_QUALITY: u8 = 100;

    impl PixelBuffer {
        /// Loads an image from file.
        ///
        /// Returns an empty buffer and logs the error if the file
        /// can't be read or decoded.
        pub fn open(path: impl AsRef<Path>, vertical_flip: bool) -> Self {
            let path = path.as_ref();
            Self::try_open(path, vertical_flip).unwrap_or_else(|err| {
                error!("Could not load image at {:?}: {}", path, err);
                Self::default()
            })
        }

        /// Loads an image from file.
        pub fn try_open(path: impl AsRef<Path>, vertical_flip: bool) -> Result<Self, DecodeError> {
            let path = path.as_ref();
            debug!("Opening the image {:?}", path);
            let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
            Self::from_dynamic_image(image, vertical_flip)
        }

        /// Decodes an image from encoded bytes.
        pub fn decode(bytes: &[u8], vertical_flip: bool) -> Result<Self, DecodeError> {
            let image = ImageReader::new(Cursor::new(bytes))
                .with_guessed_format()?
                .decode()?;
            Self::from_dynamic_image(image, vertical_flip)
        }

        fn from_dynamic_image(image: DynamicImage, vertical_flip: bool) -> Result<Self, DecodeError> {
            let image = image.into_rgba8();
            let (width, height) = image.dimensions();
            let buffer = Self::from_raw(width, height, 4, image.as_raw(), vertical_flip)?;
            Ok(buffer)
        }

        /// Encodes the buffer and writes result into `writer`.
        pub fn encode<W: Write>(&self, writer: W, format: ImageFormat) -> Result<(), EncodeError> {
            if self.is_empty() {
                return Err(EncodeError::EmptyImage);
            }
            let (width, height) = self.dimensions();
            match format {
                ImageFormat::Png => {
                    let raw = self.bottom_up_bytes(4);
                    PngEncoder::new(writer).write_image(
                        &raw,
                        width,
                        height,
                        ExtendedColorType::Rgba8,
                    )?;
                }
                ImageFormat::Jpg => {
                    let raw = self.bottom_up_bytes(3);
                    JpegEncoder::new_with_quality(writer, JPEG_QUALITY).write_image(
                        &raw,
                        width,
                        height,
                        ExtendedColorType::Rgb8,
                    )?;
                }
            }
            Ok(())
        }

        /// Saves the buffer into file with the given format.
        pub fn save(&self, path: impl AsRef<Path>, format: ImageFormat) -> Result<(), EncodeError> {
            let path = path.as_ref();
            if self.is_empty() {
                warn!("Refusing to write an empty image into {:?}", path);
                return Err(EncodeError::EmptyImage);
            }
            // Encode first, so a failed encoding doesn't leave a truncated file.
            let mut encoded = Vec::new();
            self.encode(&mut encoded, format)?;
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(&encoded)?;
            writer.flush()?;
            debug!("Image written to {:?}", path);
            Ok(())
        }

        /// Saves the buffer into file with format guessed from
        /// the file extension.
        ///
        /// Nothing is written if the extension is unknown.
        pub fn save_as(&self, path: impl AsRef<Path>) -> Result<(), EncodeError> {
            let path = path.as_ref();
            let format = ImageFormat::from_path(path).map_err(|err| {
                warn!("{}", err);
                err
            })?;
            self.save(path, format)
        }

        /// Row-major channels with rows in bottom-to-top order.
        fn bottom_up_bytes(&self, channels: usize) -> Vec<u8> {
            let mut raw = Vec::with_capacity(self.pixels().len() * channels);
            for row in self.rows().rev() {
                for pixel in row {
                    raw.extend_from_slice(&pixel.channels()[..channels]);
                }
            }
            raw
        }
    }
}
