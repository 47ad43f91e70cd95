#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//===========================================================================//

/// A Macintosh OSType: the four-byte identifier that tags each chunk of an
/// ICNS file.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OSType(pub [u8; 4]);

impl OSType {
    /// Returns the four tag bytes.
    pub fn bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for OSType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for &byte in self.0.iter() {
            write!(formatter, "{}", char::from(byte))?;
        }
        Ok(())
    }
}

impl FromStr for OSType {
    type Err = String;

    /// Parses a tag of exactly four ASCII characters.
    fn from_str(string: &str) -> Result<OSType, String> {
        if !string.is_ascii() || string.len() != 4 {
            return Err(format!(
                "OSType must be exactly four ASCII characters (was {:?})",
                string
            ));
        }
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(string.as_bytes());
        Ok(OSType(bytes))
    }
}

//===========================================================================//

/// The PNG-capable ICNS element types, one per supported square size.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum IcnsType {
    /// 16x16 (`icp4`)
    Png_16x16,
    /// 32x32 (`icp5`)
    Png_32x32,
    /// 64x64 (`icp6`)
    Png_64x64,
    /// 128x128 (`ic07`)
    Png_128x128,
    /// 256x256 (`ic08`)
    Png_256x256,
    /// 512x512 (`ic09`)
    Png_512x512,
    /// 1024x1024 (`ic10`)
    Png_1024x1024,
}

impl IcnsType {
    /// All supported types, smallest first.
    pub const ALL: [IcnsType; 7] = [
        IcnsType::Png_16x16,
        IcnsType::Png_32x32,
        IcnsType::Png_64x64,
        IcnsType::Png_128x128,
        IcnsType::Png_256x256,
        IcnsType::Png_512x512,
        IcnsType::Png_1024x1024,
    ];

    /// Returns the type used for images `size` pixels wide, if any.
    pub fn from_size(size: u32) -> Option<IcnsType> {
        match size {
            16 => Some(IcnsType::Png_16x16),
            32 => Some(IcnsType::Png_32x32),
            64 => Some(IcnsType::Png_64x64),
            128 => Some(IcnsType::Png_128x128),
            256 => Some(IcnsType::Png_256x256),
            512 => Some(IcnsType::Png_512x512),
            1024 => Some(IcnsType::Png_1024x1024),
            _ => None,
        }
    }

    /// Returns the type with the given OSType, if it is one of ours.
    pub fn from_ostype(ostype: OSType) -> Option<IcnsType> {
        IcnsType::ALL
            .iter()
            .copied()
            .find(|icon_type| icon_type.ostype() == ostype)
    }

    /// Returns the width (and height) of images of this type, in pixels.
    pub fn size(&self) -> u32 {
        match *self {
            IcnsType::Png_16x16 => 16,
            IcnsType::Png_32x32 => 32,
            IcnsType::Png_64x64 => 64,
            IcnsType::Png_128x128 => 128,
            IcnsType::Png_256x256 => 256,
            IcnsType::Png_512x512 => 512,
            IcnsType::Png_1024x1024 => 1024,
        }
    }

    /// Returns the OSType that tags chunks of this type.
    pub fn ostype(&self) -> OSType {
        match *self {
            IcnsType::Png_16x16 => OSType(*b"icp4"),
            IcnsType::Png_32x32 => OSType(*b"icp5"),
            IcnsType::Png_64x64 => OSType(*b"icp6"),
            IcnsType::Png_128x128 => OSType(*b"ic07"),
            IcnsType::Png_256x256 => OSType(*b"ic08"),
            IcnsType::Png_512x512 => OSType(*b"ic09"),
            IcnsType::Png_1024x1024 => OSType(*b"ic10"),
        }
    }
}

//===========================================================================//


//===========================================================================//
