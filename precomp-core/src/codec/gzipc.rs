use super::{Algorithm, Compressor};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

pub const GZIP_LEVEL: u32 = 9;

/// Gzip framing around deflate. The header mtime stays zero, so equal inputs
/// give equal outputs.
pub struct GzipCompressor {
    level: Compression,
}

impl GzipCompressor {
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level),
        }
    }
}

impl Default for GzipCompressor {
    fn default() -> Self {
        Self::with_level(GZIP_LEVEL)
    }
}

impl Compressor for GzipCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Gzip
    }

    fn compress(&self, src: &mut dyn Read, dst: &mut dyn Write) -> std::io::Result<()> {
        let mut enc = GzEncoder::new(dst, self.level);
        std::io::copy(src, &mut enc)?;
        enc.finish()?;
        Ok(())
    }
}
