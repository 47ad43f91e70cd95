use crate::buffer::{ByteBuffer, Encoded};
use crate::format::IconFormat;
use crate::image::{read_png_size, RasterImage};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read, Seek, SeekFrom};

//===========================================================================//

// Sizes of the ICONDIR header and of each ICONDIRENTRY, in bytes.
const HEADER_LEN: u64 = 6;
const ENTRY_LEN: u64 = 16;

// The ICONDIR resource type for icons (cursors would be 2).
const RESOURCE_TYPE_ICON: u16 = 1;

// Nominal depth recorded for every entry; the real depth lives in the PNG.
const BITS_PER_PIXEL: u16 = 32;

//===========================================================================//

/// Packs the images into a Windows ICO container, in the order given.
///
/// Each image becomes one directory entry, and the payloads follow the
/// directory back-to-back with no padding.  Payloads are embedded verbatim
/// and are not checked in any way.  Returns an error only if the images
/// can't be represented in an ICO file (more than 65535 of them, or a payload
/// or offset beyond 4 GiB).
pub fn encode_ico(images: &[RasterImage]) -> io::Result<Encoded> {
    let count = match u16::try_from(images.len()) {
        Ok(count) => count,
        Err(_) => invalid_input!(
            "Too many images for an ICO file (was {}, but max is {})",
            images.len(),
            u16::MAX
        ),
    };
    let entries = layout_directory(images)?;
    let payload_len: usize =
        images.iter().map(|image| image.payload().len()).sum();
    let directory_len = (HEADER_LEN + ENTRY_LEN * count as u64) as usize;
    let mut buffer = ByteBuffer::with_capacity(directory_len + payload_len);
    buffer.write_u16_le(0); // reserved
    buffer.write_u16_le(RESOURCE_TYPE_ICON);
    buffer.write_u16_le(count);
    for entry in entries.iter() {
        entry.write(&mut buffer);
    }
    for image in images.iter() {
        buffer.write_bytes(image.payload());
    }
    log::debug!(
        "Encoded ICO with {} images ({} bytes)",
        count,
        buffer.size()
    );
    Ok(buffer.finish(IconFormat::Ico.content_type()))
}

/// Computes the directory entries for `images`, assigning each payload the
/// offset just past the previous one.
fn layout_directory(
    images: &[RasterImage],
) -> io::Result<Vec<IcoDirectoryEntry>> {
    let mut data_offset = HEADER_LEN + ENTRY_LEN * (images.len() as u64);
    let mut entries = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        let data_size = match u32::try_from(image.payload().len()) {
            Ok(size) => size,
            Err(_) => invalid_input!(
                "Image {} payload is too large for an ICO file ({} bytes)",
                index,
                image.payload().len()
            ),
        };
        let offset = match u32::try_from(data_offset) {
            Ok(offset) => offset,
            Err(_) => invalid_input!(
                "Image {} starts beyond the 4 GiB limit of an ICO file",
                index
            ),
        };
        entries.push(IcoDirectoryEntry {
            width: image.width(),
            height: image.height(),
            num_colors: 0,
            color_planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            data_size,
            data_offset: offset,
        });
        data_offset += data_size as u64;
    }
    Ok(entries)
}

// A width/height byte of zero indicates a size of 256 or more.
fn dimension_byte(dimension: u32) -> u8 {
    if dimension > 255 {
        0
    } else {
        dimension as u8
    }
}

//===========================================================================//

/// One ICONDIRENTRY record: where an image lives in an ICO file and what
/// size it claims to be.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IcoDirectoryEntry {
    width: u32,
    height: u32,
    num_colors: u8,
    color_planes: u16,
    bits_per_pixel: u16,
    data_size: u32,
    data_offset: u32,
}

impl IcoDirectoryEntry {
    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the width as stored in the directory (zero for 256 or more).
    pub fn width_byte(&self) -> u8 {
        dimension_byte(self.width)
    }

    /// Returns the height as stored in the directory (zero for 256 or more).
    pub fn height_byte(&self) -> u8 {
        dimension_byte(self.height)
    }

    /// Returns the palette size; zero for images without a palette.
    pub fn num_colors(&self) -> u8 {
        self.num_colors
    }

    /// Returns the number of color planes.
    pub fn color_planes(&self) -> u16 {
        self.color_planes
    }

    /// Returns the nominal bits-per-pixel recorded in the directory.
    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    /// Returns the length of the image payload, in bytes.
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Returns the byte offset of the image payload from the start of the
    /// file.
    pub fn data_offset(&self) -> u32 {
        self.data_offset
    }

    fn write(&self, buffer: &mut ByteBuffer) {
        buffer.write_u8(self.width_byte());
        buffer.write_u8(self.height_byte());
        buffer.write_u8(self.num_colors);
        buffer.write_u8(0); // reserved
        buffer.write_u16_le(self.color_planes);
        buffer.write_u16_le(self.bits_per_pixel);
        buffer.write_u32_le(self.data_size);
        buffer.write_u32_le(self.data_offset);
    }
}

//===========================================================================//

/// The contents of an ICO file, as read back from disk.
#[derive(Clone, Debug)]
pub struct IcoDirectory {
    entries: Vec<IcoDirectoryEntry>,
    payloads: Vec<Vec<u8>>,
}

impl IcoDirectory {
    /// Reads an ICO file into memory.
    ///
    /// Each entry's width/height starts out from the directory bytes
    /// (treating zero as 256) and is replaced with the real size from the
    /// PNG header whenever the payload parses as one.
    pub fn read<R: Read + Seek>(mut reader: R) -> io::Result<IcoDirectory> {
        let reserved = reader.read_u16::<LittleEndian>()?;
        if reserved != 0 {
            invalid_data!(
                "Invalid reserved field value in ICONDIR \
                 (was {}, but must be 0)",
                reserved
            );
        }
        let restype = reader.read_u16::<LittleEndian>()?;
        if restype != RESOURCE_TYPE_ICON {
            invalid_data!(
                "Unsupported resource type (was {}, but must be {})",
                restype,
                RESOURCE_TYPE_ICON
            );
        }
        let count = reader.read_u16::<LittleEndian>()? as usize;
        let mut entries = Vec::<IcoDirectoryEntry>::with_capacity(count);
        for _ in 0..count {
            entries.push(IcoDirectory::read_entry(&mut reader)?);
        }
        let mut payloads = Vec::<Vec<u8>>::with_capacity(count);
        for entry in entries.iter_mut() {
            reader.seek(SeekFrom::Start(entry.data_offset as u64))?;
            let mut payload = vec![0u8; entry.data_size as usize];
            reader.read_exact(&mut payload)?;
            // Malformed image data isn't an error here; it only matters once
            // someone decodes it.
            if let Ok((width, height)) = read_png_size(payload.as_slice()) {
                entry.width = width;
                entry.height = height;
            }
            payloads.push(payload);
        }
        Ok(IcoDirectory { entries, payloads })
    }

    fn read_entry<R: Read>(reader: &mut R) -> io::Result<IcoDirectoryEntry> {
        let width_byte = reader.read_u8()?;
        let height_byte = reader.read_u8()?;
        let num_colors = reader.read_u8()?;
        let reserved = reader.read_u8()?;
        if reserved != 0 {
            invalid_data!(
                "Invalid reserved field value in ICONDIRENTRY \
                 (was {}, but must be 0)",
                reserved
            );
        }
        let color_planes = reader.read_u16::<LittleEndian>()?;
        let bits_per_pixel = reader.read_u16::<LittleEndian>()?;
        let data_size = reader.read_u32::<LittleEndian>()?;
        let data_offset = reader.read_u32::<LittleEndian>()?;
        let width = if width_byte == 0 { 256 } else { width_byte as u32 };
        let height = if height_byte == 0 { 256 } else { height_byte as u32 };
        Ok(IcoDirectoryEntry {
            width,
            height,
            num_colors,
            color_planes,
            bits_per_pixel,
            data_size,
            data_offset,
        })
    }

    /// Returns the directory entries, in file order.
    pub fn entries(&self) -> &[IcoDirectoryEntry] {
        &self.entries
    }

    /// Returns the payload of the entry at `index`.  Panics if `index` is
    /// out of range.
    pub fn payload(&self, index: usize) -> &[u8] {
        &self.payloads[index]
    }

    /// Converts the directory back into a list of images.
    pub fn into_images(self) -> Vec<RasterImage> {
        self.entries
            .iter()
            .zip(self.payloads)
            .map(|(entry, payload)| {
                RasterImage::new(entry.width, entry.height, payload)
            })
            .collect()
    }
}

//===========================================================================//


//===========================================================================//
