//! One-time rewrite of inline add-to-cart handlers in HTML files.

use std::fs;

use anyhow::{Context as _, Result};
use serde::Serialize;
use vardan_commerce::binder::migrate_markup;

use super::MigrateArgs;
use crate::context::Context;

#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    migrated: usize,
    skipped: usize,
    written: bool,
}

/// Run the migrate command.
pub fn run(args: MigrateArgs, ctx: &Context) -> Result<()> {
    let pb = ctx.output.progress(args.files.len() as u64, "Migrating");
    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let path = ctx.resolve_path(path);
        pb.set_message(path.display().to_string());

        let html = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let result = migrate_markup(&html);

        let written = result.migrated > 0 && !args.dry_run;
        if written {
            fs::write(&path, &result.html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        reports.push(FileReport {
            file: path.display().to_string(),
            migrated: result.migrated,
            skipped: result.skipped,
            written,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&reports);
        return Ok(());
    }

    let mut total = 0;
    for report in &reports {
        total += report.migrated;
        let mut line = format!("{}: {} migrated", report.file, report.migrated);
        if report.skipped > 0 {
            line.push_str(&format!(", {} left inline", report.skipped));
        }
        ctx.output.list_item(&line);
        if report.skipped > 0 {
            ctx.output
                .warn(&format!("{}: some addToCart handlers could not be parsed", report.file));
        }
    }

    if args.dry_run {
        ctx.output
            .info(&format!("Dry run: {} handler(s) would be migrated", total));
    } else {
        ctx.output.success(&format!("Migrated {} handler(s)", total));
    }
    Ok(())
}
