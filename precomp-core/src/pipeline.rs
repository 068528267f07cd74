use crate::codec::Algorithm;
use crate::domain::{CompressionJob, FileRecord};
use crate::engine;
use crate::error::{PrecompError, Result};
use crate::options::RunOptions;
use crate::report::summary::{FileSizes, Report};
use crate::select::{ExtensionSet, scan};
use crate::size::{Kilobytes, artifact_size, size_of};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Scan, compress every selected file once per enabled algorithm, and total
/// the sizes.
///
/// Jobs run one algorithm pass at a time in schedule order (brotli, then gzip).
/// With `jobs == 1` each job finishes before the next starts; with more, a pass
/// is spread over a rayon pool. `progress` advances once per finished job.
/// The first failing job aborts the run; artifacts already written stay.
pub fn run(opts: RunOptions, progress: &ProgressBar) -> Result<Report> {
    let opts = opts.validate()?;
    info!(root = %opts.root.display(), "scanning");
    let files = scan(&opts.root, &opts.extensions)?;
    info!(files = files.len(), "selected");

    let originals = files
        .iter()
        .map(|f| size_of(f.path()))
        .collect::<Result<Vec<_>>>()?;

    let pool = if opts.jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(opts.jobs)
            .build()
            .map_err(|e| PrecompError::Config(format!("thread pool: {e}")))?;
        Some(pool)
    } else {
        None
    };

    progress.set_length((files.len() * opts.algorithms.len()) as u64);
    let mut compressed: BTreeMap<Algorithm, Vec<Kilobytes>> = BTreeMap::new();
    for algorithm in opts.schedule() {
        info!(%algorithm, jobs = files.len(), "compression pass");
        let sizes = run_pass(&files, algorithm, &opts.extensions, pool.as_ref(), progress)?;
        compressed.insert(algorithm, sizes);
    }
    progress.finish_and_clear();

    let entries = files
        .iter()
        .enumerate()
        .map(|(i, f)| FileSizes {
            path: f.display_relative(&opts.root),
            original: originals[i],
            compressed: compressed
                .iter()
                .map(|(alg, sizes)| (*alg, sizes[i]))
                .collect(),
        })
        .collect();

    Ok(Report::new(opts.root, entries, &opts.algorithms))
}

/// One algorithm over every file. Results are indexed like `files`.
fn run_pass(
    files: &[FileRecord],
    algorithm: Algorithm,
    extensions: &ExtensionSet,
    pool: Option<&rayon::ThreadPool>,
    progress: &ProgressBar,
) -> Result<Vec<Kilobytes>> {
    let run_one = |file: &FileRecord| -> Result<Kilobytes> {
        let artifact = CompressionJob::new(file, algorithm).run(extensions)?;
        progress.inc(1);
        Ok(artifact_size(artifact.as_ref()))
    };
    match pool {
        Some(pool) => pool.install(|| files.par_iter().map(run_one).collect()),
        None => files.iter().map(run_one).collect(),
    }
}

/// Remove the artifacts a run with these options would write. Returns the
/// deleted paths.
pub fn clean(opts: RunOptions) -> Result<Vec<PathBuf>> {
    let opts = opts.validate()?;
    let files = scan(&opts.root, &opts.extensions)?;
    let mut removed = Vec::new();
    for f in &files {
        for &algorithm in &opts.algorithms {
            if let Some(p) = engine::remove_artifact(f.path(), algorithm)? {
                debug!(path = %p.display(), "removed");
                removed.push(p);
            }
        }
    }
    info!(removed = removed.len(), "clean finished");
    Ok(removed)
}
