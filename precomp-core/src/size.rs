use crate::codec::Algorithm;
use crate::domain::ArtifactRecord;
use crate::error::Result;
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::path::Path;

/// Kilobytes with two decimals, held as hundredths of a KiB.
///
/// Sizes are rounded once per file and then summed, so totals carry each
/// file's rounding. Keeping integer hundredths makes that sum exact.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kilobytes(u64);

impl Kilobytes {
    pub const ZERO: Kilobytes = Kilobytes(0);

    pub const fn from_hundredths(h: u64) -> Self {
        Self(h)
    }

    /// `bytes / 1024`, rounded half up to two decimals.
    pub fn from_bytes(bytes: u64) -> Self {
        let h = (bytes as u128 * 100 + 512) / 1024;
        Self(h as u64)
    }

    pub const fn hundredths(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Kilobytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Kilobytes {
    type Output = Kilobytes;
    fn add(self, rhs: Kilobytes) -> Kilobytes {
        Kilobytes(self.0 + rhs.0)
    }
}

impl Sum for Kilobytes {
    fn sum<I: Iterator<Item = Kilobytes>>(iter: I) -> Kilobytes {
        iter.fold(Kilobytes::ZERO, Add::add)
    }
}

impl Serialize for Kilobytes {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_f64(self.as_f64())
    }
}

pub fn size_of(path: &Path) -> Result<Kilobytes> {
    Ok(Kilobytes::from_bytes(std::fs::metadata(path)?.len()))
}

/// Size of a job's output; a skipped job counts as zero.
pub fn artifact_size(artifact: Option<&ArtifactRecord>) -> Kilobytes {
    artifact
        .map(|a| Kilobytes::from_bytes(a.bytes))
        .unwrap_or(Kilobytes::ZERO)
}

pub fn total<I: IntoIterator<Item = Kilobytes>>(sizes: I) -> Kilobytes {
    sizes.into_iter().sum()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SizeTotals {
    pub original: Kilobytes,
    /// One entry per enabled algorithm, in report order.
    pub compressed: Vec<(Algorithm, Kilobytes)>,
}

impl SizeTotals {
    pub fn get(&self, algorithm: Algorithm) -> Option<Kilobytes> {
        self.compressed
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, kb)| *kb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn rounds_per_file_half_up() {
        assert_eq!(Kilobytes::from_bytes(0).to_string(), "0.00");
        assert_eq!(Kilobytes::from_bytes(2048).to_string(), "2.00");
        assert_eq!(Kilobytes::from_bytes(500).to_string(), "0.49");
        // 128 / 1024 = 0.125 exactly
        assert_eq!(Kilobytes::from_bytes(128).to_string(), "0.13");
        assert_eq!(Kilobytes::from_bytes(1_048_576).to_string(), "1024.00");
    }

    #[test]
    fn total_sums_rounded_values() {
        // 5 bytes is 0.0048828 KB, which rounds to 0.00 on its own
        let each = Kilobytes::from_bytes(5);
        assert_eq!(each, Kilobytes::ZERO);
        assert_eq!(total(vec![each; 10]), Kilobytes::ZERO);
        // whereas the raw 50 bytes would have been 0.05
        assert_eq!(Kilobytes::from_bytes(50).to_string(), "0.05");

        // 6 bytes rounds up to 0.01, so ten of them carry the rounding
        assert_eq!(total(vec![Kilobytes::from_bytes(6); 10]).to_string(), "0.10");
    }

    #[test]
    fn skipped_artifact_counts_zero() {
        assert_eq!(artifact_size(None), Kilobytes::ZERO);
        let art = ArtifactRecord {
            source: PathBuf::from("a.css"),
            path: PathBuf::from("a.css.gz"),
            algorithm: Algorithm::Gzip,
            bytes: 1024,
        };
        assert_eq!(artifact_size(Some(&art)), Kilobytes::from_hundredths(100));
    }

    #[test]
    fn size_of_reads_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("x.json");
        std::fs::write(&p, vec![b' '; 3072]).unwrap();
        assert_eq!(size_of(&p).unwrap().to_string(), "3.00");
        assert!(size_of(&tmp.path().join("missing")).is_err());
    }

    #[test]
    fn totals_lookup_by_algorithm() {
        let t = SizeTotals {
            original: Kilobytes::from_hundredths(500),
            compressed: vec![(Algorithm::Gzip, Kilobytes::from_hundredths(120))],
        };
        assert_eq!(t.get(Algorithm::Gzip), Some(Kilobytes::from_hundredths(120)));
        assert_eq!(t.get(Algorithm::Brotli), None);
    }
}
