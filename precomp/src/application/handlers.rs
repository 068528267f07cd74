use precomp_core::error::Result;
use precomp_core::progress::job_progress;
use precomp_core::{OutputFormat, ReportOptions, RunOptions, clean, run};
use tracing::info;

pub fn handle_report(opts: RunOptions, output: ReportOptions) -> Result<()> {
    info!(root = %opts.root.display(), jobs = opts.jobs, "run starting");
    // JSON goes to pipes; keep the terminal quiet apart from it
    let progress = job_progress(opts.show_progress && output.format == OutputFormat::Table);
    let report = run(opts, &progress)?;
    println!("{}", output.render(&report)?);
    Ok(())
}

pub fn handle_clean(opts: RunOptions) -> Result<()> {
    let removed = clean(opts)?;
    for p in &removed {
        eprintln!("clean: removed {}", p.display());
    }
    eprintln!("clean: {} artifact(s) removed", removed.len());
    Ok(())
}
