use indicatif::{ProgressBar, ProgressStyle};

/// Bar counting finished compression jobs. Its length is set once the scan
/// knows how many jobs there are. Hidden bars still count.
pub fn job_progress(show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message("compressing");
    pb
}
