//! Media type tags and their key-derivation categories.

use std::str::FromStr;

use super::error::MediaCryptoError;

/// Media type tag attached to an encrypted payload.
///
/// Push-to-talk notes and stickers are distinct tags on the wire but share
/// key material with the Audio and Image categories respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Still image
    Image,
    /// Video clip
    Video,
    /// Audio attachment
    Audio,
    /// Push-to-talk voice note (Audio category)
    Ptt,
    /// Generic document
    Document,
    /// Sticker (Image category)
    Sticker,
}

impl MediaType {
    /// Parse a caller-supplied tag, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`MediaCryptoError::UnknownMediaType`] for tags outside the
    /// recognized set.
    pub fn parse(tag: &str) -> Result<Self, MediaCryptoError> {
        match tag.to_ascii_uppercase().as_str() {
            "IMAGE" => Ok(Self::Image),
            "VIDEO" => Ok(Self::Video),
            "AUDIO" => Ok(Self::Audio),
            "PTT" => Ok(Self::Ptt),
            "DOCUMENT" => Ok(Self::Document),
            "STICKER" => Ok(Self::Sticker),
            _ => Err(MediaCryptoError::UnknownMediaType { tag: tag.to_string() }),
        }
    }

    /// Category name used in the HKDF info string.
    pub fn category(self) -> &'static str {
        match self {
            Self::Image | Self::Sticker => "Image",
            Self::Video => "Video",
            Self::Audio | Self::Ptt => "Audio",
            Self::Document => "Document",
        }
    }

    /// Info string binding derived key material to this media category.
    pub(crate) fn hkdf_info(self) -> String {
        format!("WhatsApp {} Keys", self.category())
    }
}

impl FromStr for MediaType {
    type Err = MediaCryptoError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::parse(tag)
    }
}
