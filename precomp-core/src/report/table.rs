use crate::report::format::format_size;
use crate::report::style::Styler;
use crate::report::summary::Report;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ColumnConstraint, ContentArrangement, Table, Width};

const FILES_WIDTH: u16 = 70;
const SIZE_WIDTH: u16 = 30;

/// Single-row summary: the file list, the original size, then one
/// `<total>(<delta>)` cell per compressed stage.
pub fn render_table(report: &Report, styler: &Styler) -> String {
    let mut header = vec![
        styler.heading("Text files"),
        styler.heading("Size(text files)"),
    ];
    header.extend(
        report
            .stages
            .iter()
            .map(|s| styler.heading(&format!("Size({} files)", s.algorithm))),
    );

    let mut widths = vec![ColumnConstraint::Absolute(Width::Fixed(FILES_WIDTH))];
    widths.extend(
        std::iter::repeat_n(
            ColumnConstraint::Absolute(Width::Fixed(SIZE_WIDTH)),
            report.stages.len() + 1,
        ),
    );

    let paths: Vec<&str> = report.files.iter().map(|f| f.path.as_str()).collect();
    let mut row = vec![paths.join("\n"), format_size(report.original)];
    row.extend(
        report
            .stages
            .iter()
            .map(|s| format!("{}({})", format_size(s.total), styler.delta(&s.delta))),
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header)
        .set_constraints(widths)
        .add_row(row);
    table.to_string()
}
