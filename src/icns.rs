use crate::buffer::{ByteBuffer, Encoded};
use crate::format::IconFormat;
use crate::icnstype::{IcnsType, OSType};
use crate::image::RasterImage;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, Read};

//===========================================================================//

// The magic number at the start of every ICNS file.
const ICNS_MAGIC: &str = "icns";

// The file header and each chunk header are both a four-byte tag followed by
// a four-byte big-endian length.
const HEADER_LEN: u64 = 8;
const CHUNK_HEADER_LEN: u64 = 8;

//===========================================================================//

/// Packs the images into an Apple ICNS container, in the order given.
///
/// Each image whose width is one of the supported PNG icon sizes (see
/// [`IcnsType`](enum.IcnsType.html)) becomes one chunk.  Other images are
/// left out and reported in [`IcnsOutput::skipped`].  The total length in
/// the header is computed up front, so the header is written once.
pub fn encode_icns(images: &[RasterImage]) -> io::Result<IcnsOutput> {
    let mut chunks = Vec::<(IcnsType, &RasterImage)>::new();
    let mut skipped = Vec::<SkippedImage>::new();
    for (index, image) in images.iter().enumerate() {
        match IcnsType::from_size(image.width()) {
            Some(icon_type) => chunks.push((icon_type, image)),
            None => {
                log::warn!(
                    "Skipping image {} ({}x{}): no ICNS type for that size",
                    index,
                    image.width(),
                    image.height()
                );
                skipped.push(SkippedImage {
                    index,
                    width: image.width(),
                    height: image.height(),
                });
            }
        }
    }
    let total_len = chunks.iter().fold(HEADER_LEN, |total, &(_, image)| {
        total + CHUNK_HEADER_LEN + image.payload().len() as u64
    });
    let total_len = match u32::try_from(total_len) {
        Ok(len) => len,
        Err(_) => invalid_input!(
            "Images are too large for an ICNS file ({} bytes, but max is {})",
            total_len,
            u32::MAX
        ),
    };
    let mut buffer = ByteBuffer::with_capacity(total_len as usize);
    buffer.write_ascii(ICNS_MAGIC);
    buffer.write_u32_be(total_len);
    for &(icon_type, image) in chunks.iter() {
        let payload = image.payload();
        // Can't overflow, since the sum of all chunks fit.
        let chunk_len = payload.len() as u32 + CHUNK_HEADER_LEN as u32;
        buffer.write_bytes(icon_type.ostype().bytes());
        buffer.write_u32_be(chunk_len);
        buffer.write_bytes(payload);
    }
    debug_assert_eq!(buffer.size(), total_len as usize);
    log::debug!(
        "Encoded ICNS with {} of {} images ({} bytes)",
        chunks.len(),
        images.len(),
        total_len
    );
    let encoded = buffer.finish(IconFormat::Icns.content_type());
    Ok(IcnsOutput { encoded, skipped })
}

//===========================================================================//

/// An input image that `encode_icns` left out because no ICNS type exists
/// for its size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SkippedImage {
    /// Position of the image in the input list.
    pub index: usize,
    /// Width of the image, in pixels.
    pub width: u32,
    /// Height of the image, in pixels.
    pub height: u32,
}

/// The result of [`encode_icns`](fn.encode_icns.html): the container, plus
/// any images that couldn't be included in it.
#[derive(Clone, Debug)]
pub struct IcnsOutput {
    encoded: Encoded,
    skipped: Vec<SkippedImage>,
}

impl IcnsOutput {
    /// Returns the encoded container.
    pub fn encoded(&self) -> &Encoded {
        &self.encoded
    }

    /// Returns the images that were left out, in input order.
    pub fn skipped(&self) -> &[SkippedImage] {
        &self.skipped
    }

    /// Returns the container, ignoring any skipped images.
    pub fn into_encoded(self) -> Encoded {
        self.encoded
    }

    /// Returns the container, or an `InvalidInput` error if any image was
    /// skipped.
    pub fn into_strict(self) -> io::Result<Encoded> {
        if let Some(image) = self.skipped.first() {
            invalid_input!(
                "No ICNS type for {}x{} image at index {} \
                 ({} image(s) skipped in total)",
                image.width,
                image.height,
                image.index,
                self.skipped.len()
            );
        }
        Ok(self.encoded)
    }
}

//===========================================================================//

/// One tagged, length-prefixed chunk of an ICNS file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IcnsChunk {
    ostype: OSType,
    payload: Vec<u8>,
}

impl IcnsChunk {
    /// Returns the chunk's four-byte tag.
    pub fn ostype(&self) -> OSType {
        self.ostype
    }

    /// Returns the icon type for this chunk, or `None` if the tag isn't one
    /// of the supported PNG types (e.g. a `TOC ` chunk).
    pub fn icns_type(&self) -> Option<IcnsType> {
        IcnsType::from_ostype(self.ostype)
    }

    /// Returns the chunk payload.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns the length recorded in the chunk header, which counts the
    /// eight header bytes as well as the payload.
    pub fn length(&self) -> u64 {
        CHUNK_HEADER_LEN + self.payload.len() as u64
    }
}

//===========================================================================//

/// The chunks of an ICNS file, as read back from disk.
#[derive(Clone, Debug)]
pub struct IcnsFamily {
    chunks: Vec<IcnsChunk>,
}

impl IcnsFamily {
    /// Reads an ICNS file into memory.  Chunks with unfamiliar tags are kept
    /// as-is.  Returns an error if the header length doesn't match the
    /// actual length of the data.
    pub fn read<R: Read>(mut reader: R) -> io::Result<IcnsFamily> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != ICNS_MAGIC.as_bytes() {
            invalid_data!("Not an ICNS file (magic was {:?})", magic);
        }
        let total_len = reader.read_u32::<BigEndian>()? as u64;
        if total_len < HEADER_LEN {
            invalid_data!(
                "Invalid ICNS file length (was {}, but must be at least {})",
                total_len,
                HEADER_LEN
            );
        }
        let mut remaining = total_len - HEADER_LEN;
        let mut chunks = Vec::<IcnsChunk>::new();
        while remaining > 0 {
            if remaining < CHUNK_HEADER_LEN {
                invalid_data!(
                    "ICNS file ends with a truncated chunk header \
                     ({} bytes left)",
                    remaining
                );
            }
            let mut tag = [0u8; 4];
            reader.read_exact(&mut tag)?;
            let chunk_len = reader.read_u32::<BigEndian>()? as u64;
            if chunk_len < CHUNK_HEADER_LEN || chunk_len > remaining {
                invalid_data!(
                    "Invalid length for {} chunk (was {}, but must be \
                     between {} and {})",
                    OSType(tag),
                    chunk_len,
                    CHUNK_HEADER_LEN,
                    remaining
                );
            }
            let payload_len = (chunk_len - CHUNK_HEADER_LEN) as usize;
            let mut payload = vec![0u8; payload_len];
            reader.read_exact(&mut payload)?;
            chunks.push(IcnsChunk { ostype: OSType(tag), payload });
            remaining -= chunk_len;
        }
        let mut extra = [0u8; 1];
        if reader.read(&mut extra)? != 0 {
            invalid_data!(
                "ICNS file has data past its recorded length of {}",
                total_len
            );
        }
        Ok(IcnsFamily { chunks })
    }

    /// Returns the chunks, in file order.
    pub fn chunks(&self) -> &[IcnsChunk] {
        &self.chunks
    }

    /// Returns the first chunk of the given type, if any.
    pub fn find(&self, icon_type: IcnsType) -> Option<&IcnsChunk> {
        let ostype = icon_type.ostype();
        self.chunks.iter().find(|chunk| chunk.ostype == ostype)
    }

    /// Converts the supported chunks back into a list of images, sized by
    /// their type.  Other chunks are dropped.
    pub fn into_images(self) -> Vec<RasterImage> {
        self.chunks
            .into_iter()
            .filter_map(|chunk| {
                let size = chunk.icns_type()?.size();
                Some(RasterImage::new(size, size, chunk.payload))
            })
            .collect()
    }
}

//===========================================================================//


//===========================================================================//
