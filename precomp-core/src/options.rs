use crate::codec::Algorithm;
use crate::error::{PrecompError, Result};
use crate::select::ExtensionSet;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Directory to scan.
    pub root: PathBuf,
    pub extensions: ExtensionSet,
    /// Enabled algorithms. `validate` drops duplicates and puts them in report order.
    pub algorithms: Vec<Algorithm>,
    pub show_progress: bool,
    /// 1 runs the jobs as a serialized chain; more spreads each pass over a pool.
    pub jobs: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: ExtensionSet::default(),
            algorithms: Algorithm::ALL.to_vec(),
            show_progress: true,
            jobs: 1,
        }
    }
}

impl RunOptions {
    pub fn validate(mut self) -> Result<Self> {
        if self.extensions.is_empty() {
            return Err(PrecompError::Config("no extensions to select".into()));
        }
        let mut seen = Vec::with_capacity(self.algorithms.len());
        self.algorithms.retain(|a| {
            let fresh = !seen.contains(a);
            seen.push(*a);
            fresh
        });
        // stages chain in report order regardless of how they were listed
        self.algorithms
            .sort_by_key(|a| Algorithm::ALL.iter().position(|x| x == a));
        if self.algorithms.is_empty() {
            return Err(PrecompError::Config("no algorithms enabled".into()));
        }
        if self.jobs == 0 {
            return Err(PrecompError::Config("jobs must be at least 1".into()));
        }
        if !self.root.is_dir() {
            return Err(PrecompError::Config(format!(
                "root is not a directory: {}",
                self.root.display()
            )));
        }
        Ok(self)
    }

    /// Algorithms in the order their jobs run.
    pub fn schedule(&self) -> Vec<Algorithm> {
        let mut order = self.algorithms.clone();
        order.sort_by_key(|a| a.schedule_rank());
        order
    }
}
