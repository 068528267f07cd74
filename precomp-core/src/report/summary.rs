use crate::codec::Algorithm;
use crate::error::Result;
use crate::report::format::Delta;
use crate::report::style::Styler;
use crate::report::table::render_table;
use crate::size::{Kilobytes, SizeTotals, total};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Sizes for one selected file. `compressed` has an entry per enabled algorithm;
/// a skipped job shows up as zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FileSizes {
    pub path: String,
    pub original: Kilobytes,
    pub compressed: BTreeMap<Algorithm, Kilobytes>,
}

/// One compressed column: its total and the change from the column before it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stage {
    pub algorithm: Algorithm,
    pub total: Kilobytes,
    pub delta: Delta,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub root: PathBuf,
    pub files: Vec<FileSizes>,
    pub original: Kilobytes,
    pub stages: Vec<Stage>,
}

impl Report {
    /// Totals are sums of the per-file rounded sizes. Deltas chain: the first
    /// stage against the originals, each later stage against the one before.
    pub fn new(root: PathBuf, files: Vec<FileSizes>, algorithms: &[Algorithm]) -> Self {
        let original = total(files.iter().map(|f| f.original));
        let mut previous = original;
        let stages = algorithms
            .iter()
            .map(|&algorithm| {
                let stage_total = total(
                    files
                        .iter()
                        .map(|f| f.compressed.get(&algorithm).copied().unwrap_or_default()),
                );
                let delta = Delta::between(previous, stage_total);
                previous = stage_total;
                Stage {
                    algorithm,
                    total: stage_total,
                    delta,
                }
            })
            .collect();
        Self {
            root,
            files,
            original,
            stages,
        }
    }

    pub fn totals(&self) -> SizeTotals {
        SizeTotals {
            original: self.original,
            compressed: self.stages.iter().map(|s| (s.algorithm, s.total)).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// `color` is already resolved; see `ColorChoice::apply`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReportOptions {
    pub color: bool,
    pub format: OutputFormat,
}

impl ReportOptions {
    pub fn render(&self, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(render_table(report, &Styler::new(self.color))),
            OutputFormat::Json => report.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::format::Trend;

    fn file(path: &str, original: u64, gz: u64, br: u64) -> FileSizes {
        FileSizes {
            path: path.into(),
            original: Kilobytes::from_hundredths(original),
            compressed: BTreeMap::from([
                (Algorithm::Gzip, Kilobytes::from_hundredths(gz)),
                (Algorithm::Brotli, Kilobytes::from_hundredths(br)),
            ]),
        }
    }

    #[test]
    fn stages_chain_against_previous() {
        let files = vec![file("a.css", 1_000, 300, 200), file("b.js", 1_000, 100, 100)];
        let report = Report::new(PathBuf::from("."), files, &Algorithm::ALL);

        assert_eq!(report.original, Kilobytes::from_hundredths(2_000));
        let gz = &report.stages[0];
        assert_eq!(gz.algorithm, Algorithm::Gzip);
        assert_eq!(gz.total, Kilobytes::from_hundredths(400));
        assert_eq!(gz.delta.to_string(), "-80.00%");

        // brotli is compared with gzip, not with the originals
        let br = &report.stages[1];
        assert_eq!(br.total, Kilobytes::from_hundredths(300));
        assert_eq!(br.delta.to_string(), "-25.00%");
        assert_eq!(br.delta.trend, Trend::Shrank);
    }

    #[test]
    fn single_stage_and_totals() {
        let files = vec![file("a.css", 500, 250, 0)];
        let report = Report::new(PathBuf::from("."), files, &[Algorithm::Brotli]);
        assert_eq!(report.stages.len(), 1);
        assert_eq!(report.stages[0].delta.to_string(), "-100.00%");

        let totals = report.totals();
        assert_eq!(totals.original, Kilobytes::from_hundredths(500));
        assert_eq!(totals.get(Algorithm::Brotli), Some(Kilobytes::ZERO));
        assert_eq!(totals.get(Algorithm::Gzip), None);
    }

    #[test]
    fn empty_run_is_neutral() {
        let report = Report::new(PathBuf::from("."), Vec::new(), &Algorithm::ALL);
        assert_eq!(report.original, Kilobytes::ZERO);
        assert!(report.stages.iter().all(|s| s.delta.to_string() == "0.00%"));
    }

    #[test]
    fn json_shape() {
        let report = Report::new(
            PathBuf::from("site"),
            vec![file("a.css", 200, 100, 50)],
            &Algorithm::ALL,
        );
        let v: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(v["original"], 2.0);
        assert_eq!(v["files"][0]["path"], "a.css");
        assert_eq!(v["files"][0]["compressed"]["gzip"], 1.0);
        assert_eq!(v["stages"][1]["algorithm"], "brotli");
        assert_eq!(v["stages"][1]["delta"]["trend"], "shrank");
        assert_eq!(v["stages"][1]["delta"]["percent"], -50.0);
    }
}
