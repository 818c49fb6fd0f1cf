//! Validate command: rebuild the calendar and print its consistency report.

use anyhow::{Result, bail};
use tracing::info_span;

use crate::cli::ValidateArgs;
use crate::generate::build_from_file;

/// Run the validate command. Fails when the report has blocking errors.
pub fn run(args: ValidateArgs) -> Result<()> {
    let _cmd = info_span!("validate").entered();

    let calendar = build_from_file(&args.config, args.year)?;
    let report = calendar.validation();

    for issue in &report.errors {
        println!("error: {issue}");
    }
    if args.warnings {
        for issue in &report.warnings {
            println!("warning: {issue}");
        }
    }
    println!(
        "{}: {} errors, {} warnings",
        calendar.year(),
        report.errors.len(),
        report.warnings.len()
    );

    if !report.valid {
        bail!("calendar {} is not valid", calendar.year());
    }
    Ok(())
}
