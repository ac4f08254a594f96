use super::LayoutArgs;
use crate::output::{print_json, rule};
use anyhow::Context;
use mdstamp_core::paths::display_relative;
use mdstamp_core::stamp::{stamp_tree, Outcome, Progress};
use std::path::Path;

pub fn run(root: &Path, layout: &LayoutArgs, dry_run: bool, json: bool) -> anyhow::Result<()> {
    if dry_run {
        println!("DRY RUN MODE - No files will be modified");
        println!("Remove --dry-run flag to actually process files");
        return Ok(());
    }

    let config = layout.config(root);
    if !json {
        println!("Scanning for markdown files in: {}", root.display());
    }
    let summary = stamp_tree(&config, |progress| match progress {
        Progress::Found(files) if !json => {
            println!(
                "\nFound {} markdown files (excluding {})",
                files.len(),
                config.exclude_dir
            );
            println!("Processing files...\n");
        }
        Progress::File(path, Ok(Outcome::Stamped(_))) if !json => {
            println!("✓ Added frontmatter to: {}", display_relative(root, path));
        }
        Progress::File(path, Err(e)) => {
            eprintln!("✗ Error processing {}: {e}", path.display())
        }
        _ => {}
    })
    .with_context(|| format!("cannot scan '{}'", root.display()))?;

    if json {
        return print_json(&summary);
    }

    println!("\n{}", rule());
    println!("PROCESSING COMPLETE");
    println!("{}", rule());
    println!("Files processed: {}", summary.processed);
    println!(
        "Files skipped (already have frontmatter): {}",
        summary.skipped
    );
    println!("Errors: {}", summary.errors);
    println!("Total files: {}", summary.total);
    Ok(())
}
