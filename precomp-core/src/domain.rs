// precomp_core/src/domain.rs
use crate::codec::Algorithm;
use crate::engine;
use crate::error::Result;
use crate::select::ExtensionSet;
use std::path::{Path, PathBuf};

/// A file picked up by the selector. `extension` keeps its leading dot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    extension: String,
}

impl FileRecord {
    pub fn new(path: PathBuf, extension: String) -> Self {
        Self { path, extension }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path relative to `root`, or the full path when it is not under `root`.
    pub fn display_relative(&self, root: &Path) -> String {
        self.path
            .strip_prefix(root)
            .unwrap_or(&self.path)
            .to_string_lossy()
            .to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactRecord {
    pub source: PathBuf,
    pub path: PathBuf,
    pub algorithm: Algorithm,
    pub bytes: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct CompressionJob<'a> {
    pub file: &'a FileRecord,
    pub algorithm: Algorithm,
}

impl<'a> CompressionJob<'a> {
    pub fn new(file: &'a FileRecord, algorithm: Algorithm) -> Self {
        Self { file, algorithm }
    }

    pub fn run(&self, extensions: &ExtensionSet) -> Result<Option<ArtifactRecord>> {
        engine::compress(self.file.path(), self.algorithm, extensions)
    }
}
