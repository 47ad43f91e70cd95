use crate::format::IconFormat;
use byteorder::{BigEndian, ByteOrder, LittleEndian};

//===========================================================================//

/// An append-only byte buffer with fixed-width integer writers.
///
/// Every write is infallible; the caller is responsible for making sure each
/// value fits the width being written.  A fresh buffer is created for each
/// container that gets encoded, and is consumed by
/// [`finish`](#method.finish).
#[derive(Debug, Default)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Creates a new, empty buffer.
    pub fn new() -> ByteBuffer {
        ByteBuffer { data: Vec::new() }
    }

    /// Creates a new, empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> ByteBuffer {
        ByteBuffer { data: Vec::with_capacity(capacity) }
    }

    /// Appends a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    /// Appends a 16-bit little-endian integer.
    pub fn write_u16_le(&mut self, value: u16) {
        let mut bytes = [0u8; 2];
        LittleEndian::write_u16(&mut bytes, value);
        self.data.extend_from_slice(&bytes);
    }

    /// Appends a 32-bit little-endian integer.
    pub fn write_u32_le(&mut self, value: u32) {
        let mut bytes = [0u8; 4];
        LittleEndian::write_u32(&mut bytes, value);
        self.data.extend_from_slice(&bytes);
    }

    /// Appends a 32-bit big-endian integer.
    pub fn write_u32_be(&mut self, value: u32) {
        let mut bytes = [0u8; 4];
        BigEndian::write_u32(&mut bytes, value);
        self.data.extend_from_slice(&bytes);
    }

    /// Appends one byte per character of `text`.  Only meant for short ASCII
    /// tags like `"icns"`; debug builds panic on anything else.
    pub fn write_ascii(&mut self, text: &str) {
        debug_assert!(text.is_ascii(), "Non-ASCII tag {:?}", text);
        self.data.extend_from_slice(text.as_bytes());
    }

    /// Appends `bytes` verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Returns the number of bytes written so far.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Consumes the buffer, tagging its contents with a MIME content type.
    pub fn finish(self, content_type: &'static str) -> Encoded {
        Encoded { content_type, data: self.data }
    }
}

//===========================================================================//

/// A finished container: the encoded bytes plus their MIME content type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Encoded {
    content_type: &'static str,
    data: Vec<u8>,
}

impl Encoded {
    /// Returns the MIME content type, e.g. `"image/x-icon"`.
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Returns the encoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the length of the encoded data, in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no bytes were encoded.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the name to save this file under, given a name without an
    /// extension; e.g. `"Windows - Photos.ico"`.  Unknown content types get
    /// a `.bin` extension.
    pub fn file_name(&self, stem: &str) -> String {
        let extension = IconFormat::from_content_type(self.content_type)
            .map_or("bin", |format| format.extension());
        format!("{}.{}", stem, extension)
    }

    /// Consumes this value, returning just the encoded bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

//===========================================================================//


//===========================================================================//
