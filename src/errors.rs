use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Pixel ({x}, {y}) is out of the buffer boundaries ({width}x{height})")]
pub struct OutOfBoundsError {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImageBufferError {
    #[error("Size of buffer is smaller than required")]
    InvalidBufferSize,
    #[error("Count of channels must be 3 (RGB) or 4 (RGBA), got {0}")]
    UnsupportedChannelsCount(u8),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResizeError {
    #[error("Width and height of the resized buffer must be greater than zero")]
    ZeroDimension,
    #[error("Unable to resize an empty buffer")]
    EmptySource,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown image format {0:?}, expected \"png\" or \"jpg\"")]
pub struct UnknownFormatError(pub String);

#[cfg(feature = "image")]
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Failed to read image data")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode image")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Buffer(#[from] ImageBufferError),
}

#[cfg(feature = "image")]
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EncodeError {
    #[error(transparent)]
    UnknownFormat(#[from] UnknownFormatError),
    #[error("Unable to encode an empty buffer")]
    EmptyImage,
    #[error("Failed to write image data")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode image")]
    Image(#[from] image::ImageError),
}
