use clap::{ArgAction, Parser, ValueEnum};
use precomp_core::report::style::ColorChoice;
use precomp_core::{Algorithm, OutputFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Precompress text assets with gzip and brotli and report the savings",
    long_about = None
)]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Recognized extension (repeat or comma-separate); defaults to common text assets
    #[arg(short = 'e', long = "ext", value_delimiter = ',', env = "PRECOMP_EXTENSIONS")]
    pub extensions: Vec<String>,

    /// Algorithm to run (repeat or comma-separate); defaults to both
    #[arg(short = 'a', long = "algorithm", value_enum, value_delimiter = ',')]
    pub algorithms: Vec<AlgorithmArg>,

    /// Do not draw the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Worker threads per compression pass; 1 compresses one file at a time
    #[arg(short, long, default_value_t = 1, env = "PRECOMP_JOBS")]
    pub jobs: usize,

    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    #[arg(long, value_enum, default_value_t = FormatArg::Table)]
    pub format: FormatArg,

    /// Delete existing .gz/.br artifacts instead of compressing
    #[arg(long)]
    pub clean: bool,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG wins when set
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Gzip,
    Brotli,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Gzip => Algorithm::Gzip,
            AlgorithmArg::Brotli => Algorithm::Brotli,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(c: ColorArg) -> Self {
        match c {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
