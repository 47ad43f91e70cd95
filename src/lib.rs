//! A library for packing already-rendered PNG images into icon containers:
//! Windows ICO files and Apple ICNS files.
//!
//! # Overview
//!
//! Both container formats are simple: a short header, some per-image
//! metadata, and the PNG data of each image copied in verbatim.  This crate
//! does no image processing at all; each input is a
//! [`RasterImage`](struct.RasterImage.html), which is just a width, a height,
//! and an opaque payload.  Payloads are never validated, so a corrupt PNG
//! gets packed as-is and only fails once someone decodes it.
//!
//! * [`encode_ico`](fn.encode_ico.html) writes a directory entry per image
//!   followed by the payloads, back-to-back in input order.
//! * [`encode_icns`](fn.encode_icns.html) writes one tagged chunk per image
//!   whose size has an ICNS type (16, 32, 64, 128, 256, 512 or 1024 pixels).
//!   Images of any other size are left out and reported in the returned
//!   [`IcnsOutput`](struct.IcnsOutput.html).
//! * [`encode`](fn.encode.html) picks between the two (or plain PNG) from an
//!   [`IconFormat`](enum.IconFormat.html).
//!
//! Each call builds its output in a fresh in-memory buffer, so encodes can
//! run concurrently on separate threads without any coordination.
//!
//! [`IcoDirectory`](struct.IcoDirectory.html) and
//! [`IcnsFamily`](struct.IcnsFamily.html) read finished containers back, for
//! listing or checking them.
//!
//! # Example usage
//!
//! ```no_run
//! use iconpack::{IconFormat, RasterImage};
//! use std::fs::File;
//!
//! let mut images = Vec::new();
//! for &size in IconFormat::Icns.render_sizes() {
//!     let file = File::open(format!("icon{}.png", size)).unwrap();
//!     images.push(RasterImage::read_png(file).unwrap());
//! }
//! let encoded = iconpack::encode(IconFormat::Icns, &images).unwrap();
//! std::fs::write(encoded.file_name("icon"), encoded.data()).unwrap();
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod buffer;
mod format;
mod icns;
mod icnstype;
mod ico;
mod image;

pub use crate::buffer::{ByteBuffer, Encoded};
pub use crate::format::IconFormat;
pub use crate::icns::{
    encode_icns, IcnsChunk, IcnsFamily, IcnsOutput, SkippedImage,
};
pub use crate::icnstype::{IcnsType, OSType};
pub use crate::ico::{encode_ico, IcoDirectory, IcoDirectoryEntry};
pub use crate::image::RasterImage;

use std::io;

//===========================================================================//

/// Encodes the images into a single file of the given format.
///
/// ICNS images of unsupported sizes are left out (see
/// [`encode_icns`](fn.encode_icns.html) for a version that reports them).
/// For `IconFormat::Png`, the first image's payload is returned as-is, and an
/// empty list is an `InvalidInput` error.
pub fn encode(
    format: IconFormat,
    images: &[RasterImage],
) -> io::Result<Encoded> {
    match format {
        IconFormat::Ico => encode_ico(images),
        IconFormat::Icns => Ok(encode_icns(images)?.into_encoded()),
        IconFormat::Png => {
            let image = match images.first() {
                Some(image) => image,
                None => invalid_input!("No image to save as PNG"),
            };
            let mut buffer = ByteBuffer::with_capacity(image.payload().len());
            buffer.write_bytes(image.payload());
            Ok(buffer.finish(IconFormat::Png.content_type()))
        }
    }
}

//===========================================================================//


//===========================================================================//
