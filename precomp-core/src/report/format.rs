use crate::report::style::Styler;
use crate::size::Kilobytes;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

const HUNDREDTHS_PER_MB: u128 = 1024 * 100;

/// `"512.00 KB"` below 1024 KB, `"1.50MB"` from there on.
pub fn format_size(kb: Kilobytes) -> String {
    let h = kb.hundredths() as u128;
    if h >= HUNDREDTHS_PER_MB {
        // hundredths of a MB, half up
        let mb = (h * 100 + HUNDREDTHS_PER_MB / 2) / HUNDREDTHS_PER_MB;
        format!("{}.{:02}MB", mb / 100, mb % 100)
    } else {
        format!("{kb} KB")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Shrank,
    Unchanged,
    Grew,
}

/// Percentage change from one stage to the next.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Delta {
    pub percent: f64,
    pub trend: Trend,
}

impl Delta {
    /// An empty `before` stage has no meaningful ratio and reads as unchanged.
    pub fn between(before: Kilobytes, after: Kilobytes) -> Self {
        if before == Kilobytes::ZERO {
            return Self {
                percent: 0.0,
                trend: Trend::Unchanged,
            };
        }
        let trend = match after.cmp(&before) {
            Ordering::Less => Trend::Shrank,
            Ordering::Equal => Trend::Unchanged,
            Ordering::Greater => Trend::Grew,
        };
        let b = before.hundredths() as f64;
        let a = after.hundredths() as f64;
        Self {
            percent: (a - b) / b * 100.0,
            trend,
        }
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.trend == Trend::Grew { "+" } else { "" };
        write!(f, "{sign}{}%", fixed2(self.percent))
    }
}

/// Two decimals, ties away from zero.
fn fixed2(v: f64) -> String {
    format!("{:.2}", (v * 100.0).round() / 100.0)
}

pub fn format_delta(before: Kilobytes, after: Kilobytes, styler: &Styler) -> String {
    styler.delta(&Delta::between(before, after))
}
