use std::io::{self, Read};

//===========================================================================//

// The signature that all PNG files start with.
const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

//===========================================================================//

/// One rasterized rendition of an icon: its pixel dimensions and the
/// already-encoded PNG bytes.
///
/// The encoders only read the payload; they never decode or validate it.  A
/// payload that isn't really a PNG is packed as-is, and only fails once some
/// consumer tries to decode it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    payload: Vec<u8>,
}

impl RasterImage {
    /// Creates an image from its dimensions and encoded payload.  Nothing is
    /// checked, not even that the dimensions match the payload.
    pub fn new(width: u32, height: u32, payload: Vec<u8>) -> RasterImage {
        RasterImage { width, height, payload }
    }

    /// Creates an image from PNG data, taking the dimensions from the PNG
    /// header.  Returns an error if the header can't be parsed.
    pub fn from_png(payload: Vec<u8>) -> io::Result<RasterImage> {
        let (width, height) = read_png_size(payload.as_slice())?;
        Ok(RasterImage { width, height, payload })
    }

    /// Reads a whole PNG file into a new image.  I/O errors from `reader`
    /// are passed through unchanged.
    pub fn read_png<R: Read>(mut reader: R) -> io::Result<RasterImage> {
        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;
        RasterImage::from_png(payload)
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the encoded image data.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns true if the payload starts with the PNG signature.
    pub fn is_png(&self) -> bool {
        self.payload.starts_with(PNG_SIGNATURE)
    }
}

//===========================================================================//

/// Decodes just enough of a PNG stream to determine its size.
pub(crate) fn read_png_size<R: Read>(reader: R) -> io::Result<(u32, u32)> {
    let decoder = png::Decoder::new(reader);
    let png_reader = match decoder.read_info() {
        Ok(png_reader) => png_reader,
        Err(png::DecodingError::IoError(error)) => return Err(error),
        Err(error) => invalid_data!("Malformed PNG data: {}", error),
    };
    let info = png_reader.info();
    Ok((info.width, info.height))
}

//===========================================================================//


//===========================================================================//
