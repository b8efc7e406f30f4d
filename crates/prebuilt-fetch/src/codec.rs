//! Compression codecs artifacts may be published in.

use std::fmt;
use std::io::Read;

use crate::error::DecodeError;

/// A compression format, in the order candidates are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    Brotli,
    Gzip,
}

impl Codec {
    /// Every codec, brotli first.
    pub const ALL: [Codec; 2] = [Codec::Brotli, Codec::Gzip];

    /// Codecs compiled into this build, in attempt order.
    pub fn available() -> impl Iterator<Item = Codec> {
        Self::ALL.into_iter().filter(|codec| codec.is_supported())
    }

    pub fn is_supported(self) -> bool {
        match self {
            Self::Brotli => cfg!(feature = "brotli"),
            Self::Gzip => cfg!(feature = "gzip"),
        }
    }

    /// URL suffix of an asset compressed with this codec.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Brotli => ".br",
            Self::Gzip => ".gz",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Brotli => "brotli",
            Self::Gzip => "gzip",
        }
    }

    /// Inflate a complete compressed buffer.
    pub fn decompress(self, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut reader: Box<dyn Read + '_> = match self {
            #[cfg(feature = "brotli")]
            Self::Brotli => Box::new(brotli::Decompressor::new(input, 4096)),
            #[cfg(feature = "gzip")]
            Self::Gzip => Box::new(flate2::read::GzDecoder::new(input)),
            #[allow(unreachable_patterns)]
            codec => return Err(DecodeError::Unsupported(codec)),
        };

        let mut output = Vec::new();
        reader
            .read_to_end(&mut output)
            .map_err(|source| DecodeError::Corrupt { codec: self, source })?;
        Ok(output)
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
