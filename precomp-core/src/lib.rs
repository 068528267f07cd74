#![forbid(unsafe_code)]

pub mod error;

pub mod codec;
pub mod domain;
pub mod engine;
pub mod options;
pub mod progress;
pub mod select;
pub mod size;

pub mod report {
    pub mod format;
    pub mod style;
    pub mod summary;
    pub mod table;
}

pub mod pipeline;

// Re-exports: stable API surface
pub use codec::Algorithm;
pub use options::RunOptions;
pub use pipeline::{clean, run};
pub use report::summary::{OutputFormat, Report, ReportOptions};
pub use size::Kilobytes;
