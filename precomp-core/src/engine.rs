use crate::codec::{Algorithm, Compressor};
use crate::domain::ArtifactRecord;
use crate::error::{PrecompError, Result};
use crate::select::ExtensionSet;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Passes reads and writes through, keeping the first I/O error of the wrapped
/// stream so it can be told apart from a failure inside the encoder.
struct Tagged<T> {
    inner: T,
    err: Option<io::Error>,
}

impl<T> Tagged<T> {
    fn new(inner: T) -> Self {
        Self { inner, err: None }
    }

    fn keep(&mut self, e: io::Error) -> io::Error {
        if e.kind() == ErrorKind::Interrupted {
            return e;
        }
        let relay = io::Error::new(e.kind(), e.to_string());
        self.err.get_or_insert(e);
        relay
    }
}

impl<R: Read> Read for Tagged<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).map_err(|e| self.keep(e))
    }
}

impl<W: Write> Write for Tagged<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).map_err(|e| self.keep(e))
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().map_err(|e| self.keep(e))
    }
}

/// Compress `file` into its sibling artifact (`<file>.gz` / `<file>.br`).
///
/// A file whose extension is not in `extensions` is skipped: `Ok(None)`, nothing
/// written. An existing artifact is overwritten; the source is never modified.
pub fn compress(
    file: &Path,
    algorithm: Algorithm,
    extensions: &ExtensionSet,
) -> Result<Option<ArtifactRecord>> {
    if !extensions.matches(file) {
        debug!(path = %file.display(), %algorithm, "unrecognized extension, skipped");
        return Ok(None);
    }
    compress_with(file, algorithm.compressor().as_ref()).map(Some)
}

/// Run `compressor` over `file` without an extension check.
///
/// Failures reading the source or writing the artifact are `Io`; anything the
/// encoder raises on its own is `Compression`. The artifact is flushed and
/// closed before its size is read back.
pub fn compress_with(file: &Path, compressor: &dyn Compressor) -> Result<ArtifactRecord> {
    let algorithm = compressor.algorithm();
    let out = algorithm.artifact_path(file);
    let mut src = Tagged::new(BufReader::new(File::open(file)?));
    let mut dst = Tagged::new(BufWriter::new(File::create(&out)?));

    if let Err(source) = compressor.compress(&mut src, &mut dst) {
        if let Some(e) = src.err.take().or_else(|| dst.err.take()) {
            return Err(e.into());
        }
        return Err(PrecompError::Compression {
            algorithm,
            path: file.to_path_buf(),
            source,
        });
    }
    drop(dst.inner.into_inner().map_err(|e| e.into_error())?);

    let bytes = fs::metadata(&out)?.len();
    debug!(path = %out.display(), bytes, "artifact written");
    Ok(ArtifactRecord {
        source: file.to_path_buf(),
        path: out,
        algorithm,
        bytes,
    })
}

/// Delete the artifact `algorithm` would produce for `file`, if present.
pub fn remove_artifact(file: &Path, algorithm: Algorithm) -> Result<Option<PathBuf>> {
    let out = algorithm.artifact_path(file);
    match fs::remove_file(&out) {
        Ok(()) => Ok(Some(out)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
