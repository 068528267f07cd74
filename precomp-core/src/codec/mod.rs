use serde::Serialize;
use std::fmt;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Gzip,
    Brotli,
}

impl Algorithm {
    /// Report order: each stage is compared against the one before it.
    pub const ALL: [Algorithm; 2] = [Algorithm::Gzip, Algorithm::Brotli];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Gzip => "gzip",
            Algorithm::Brotli => "brotli",
        }
    }

    /// Suffix appended to the source file name, without the dot.
    pub fn suffix(self) -> &'static str {
        match self {
            Algorithm::Gzip => "gz",
            Algorithm::Brotli => "br",
        }
    }

    /// Position in the job schedule. All brotli jobs run before any gzip job.
    pub fn schedule_rank(self) -> u8 {
        match self {
            Algorithm::Brotli => 0,
            Algorithm::Gzip => 1,
        }
    }

    /// `style.css` -> `style.css.gz`
    pub fn artifact_path(self, src: &Path) -> PathBuf {
        let mut name = src.as_os_str().to_os_string();
        name.push(".");
        name.push(self.suffix());
        PathBuf::from(name)
    }

    pub fn compressor(self) -> Box<dyn Compressor> {
        match self {
            Algorithm::Gzip => Box::new(gzipc::GzipCompressor::default()),
            Algorithm::Brotli => Box::new(brotlic::BrotliCompressor::default()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub trait Compressor: Send + Sync {
    fn algorithm(&self) -> Algorithm;
    /// Encode all of `src` into `dst`. The encoder's trailer is written before returning.
    fn compress(&self, src: &mut dyn Read, dst: &mut dyn Write) -> std::io::Result<()>;
}

pub mod brotlic;
pub mod gzipc;
