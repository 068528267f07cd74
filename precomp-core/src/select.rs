use crate::domain::FileRecord;
use crate::error::Result;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

pub const DEFAULT_EXTENSIONS: [&str; 9] = [
    ".js", ".css", ".json", ".html", ".xml", ".woff2", ".map", ".svg", ".csv",
];

/// Recognized extensions, stored with their leading dot. Matching is case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    /// Accepts `css` or `.css`; blank entries are dropped.
    pub fn new<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = exts
            .into_iter()
            .filter_map(|e| {
                let e = e.as_ref().trim().trim_start_matches('.');
                if e.is_empty() {
                    None
                } else {
                    Some(format!(".{e}"))
                }
            })
            .collect();
        Self(set)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, dotted: &str) -> bool {
        self.0.contains(dotted)
    }

    pub fn matches(&self, path: &Path) -> bool {
        dotted_extension(path).is_some_and(|e| self.contains(&e))
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

/// `a/b.min.js` -> `.js`; `None` for dotfiles and names without a dot.
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
}

/// Every file under `root` whose extension is recognized, in sorted depth-first order.
/// Any listing error aborts the scan with no partial result.
pub fn scan(root: &Path, extensions: &ExtensionSet) -> Result<Vec<FileRecord>> {
    let mut files = Vec::new();
    for e in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let e = e?;
        if !e.file_type().is_file() {
            continue;
        }
        let Some(ext) = dotted_extension(e.path()) else {
            continue;
        };
        if extensions.contains(&ext) {
            debug!(path = %e.path().display(), "selected");
            files.push(FileRecord::new(e.into_path(), ext));
        }
    }
    Ok(files)
}
