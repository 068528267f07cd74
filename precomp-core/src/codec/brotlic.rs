use super::{Algorithm, Compressor};
use brotli::enc::BrotliEncoderParams;
use brotli::enc::backward_references::BrotliEncoderMode;
use std::io::{Read, Write};

pub const BROTLI_QUALITY: i32 = 11;
pub const BROTLI_LGWIN: i32 = 12;

pub struct BrotliCompressor {
    quality: i32,
    lgwin: i32,
    mode: BrotliEncoderMode,
}

impl BrotliCompressor {
    fn params(&self) -> BrotliEncoderParams {
        BrotliEncoderParams {
            quality: self.quality,
            lgwin: self.lgwin,
            mode: self.mode,
            ..Default::default()
        }
    }
}

impl Default for BrotliCompressor {
    /// Max quality, 4 KiB window, tuned for UTF-8 text.
    fn default() -> Self {
        Self {
            quality: BROTLI_QUALITY,
            lgwin: BROTLI_LGWIN,
            mode: BrotliEncoderMode::BROTLI_MODE_TEXT,
        }
    }
}

impl Compressor for BrotliCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Brotli
    }

    fn compress(&self, mut src: &mut dyn Read, mut dst: &mut dyn Write) -> std::io::Result<()> {
        brotli::BrotliCompress(&mut src, &mut dst, &self.params())?;
        Ok(())
    }
}
