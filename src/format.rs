#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//===========================================================================//

// Lowercase substrings of an OS name that select a container format.
const ICNS_KEYWORDS: &[&str] = &["mac", "apple", "os x"];
const ICO_KEYWORDS: &[&str] = &["windows", "win"];

//===========================================================================//

/// The kind of file an icon is delivered as.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IconFormat {
    /// A single plain PNG image
    Png,
    /// A Windows icon container (ICO)
    Ico,
    /// An Apple icon family (ICNS)
    Icns,
}

impl IconFormat {
    /// Returns the format for a file extension (without the leading dot),
    /// ignoring case.
    pub fn from_extension(extension: &str) -> Option<IconFormat> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(IconFormat::Png),
            "ico" => Some(IconFormat::Ico),
            "icns" => Some(IconFormat::Icns),
            _ => None,
        }
    }

    /// Returns the format whose MIME content type is `content_type`.
    pub fn from_content_type(content_type: &str) -> Option<IconFormat> {
        match content_type {
            "image/png" => Some(IconFormat::Png),
            "image/x-icon" => Some(IconFormat::Ico),
            "image/x-icns" => Some(IconFormat::Icns),
            _ => None,
        }
    }

    /// Guesses the format to deliver for an operating system, from its
    /// display name (e.g. `"macOS Sonoma"` or `"Windows 11"`).  Apple names
    /// win over Windows names; returns `None` if neither matches.
    pub fn detect(os_name: &str) -> Option<IconFormat> {
        let name = os_name.to_lowercase();
        if ICNS_KEYWORDS.iter().any(|keyword| name.contains(keyword)) {
            Some(IconFormat::Icns)
        } else if ICO_KEYWORDS.iter().any(|keyword| name.contains(keyword)) {
            Some(IconFormat::Ico)
        } else {
            None
        }
    }

    /// Returns the file extension for this format, without a leading dot.
    pub fn extension(&self) -> &'static str {
        match *self {
            IconFormat::Png => "png",
            IconFormat::Ico => "ico",
            IconFormat::Icns => "icns",
        }
    }

    /// Returns the MIME content type of files in this format.
    pub fn content_type(&self) -> &'static str {
        match *self {
            IconFormat::Png => "image/png",
            IconFormat::Ico => "image/x-icon",
            IconFormat::Icns => "image/x-icns",
        }
    }

    /// Returns the square sizes, in pixels, that an icon should be rendered
    /// at before being packed in this format.
    pub fn render_sizes(&self) -> &'static [u32] {
        match *self {
            IconFormat::Png => &[512],
            IconFormat::Ico => &[16, 32, 48, 64, 256],
            IconFormat::Icns => &[16, 32, 64, 128, 256, 512, 1024],
        }
    }
}

impl fmt::Display for IconFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.extension())
    }
}

impl FromStr for IconFormat {
    type Err = String;

    fn from_str(string: &str) -> Result<IconFormat, String> {
        IconFormat::from_extension(string)
            .ok_or_else(|| format!("Unknown icon format: {:?}", string))
    }
}

//===========================================================================//


//===========================================================================//
