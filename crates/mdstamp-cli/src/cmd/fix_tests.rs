use crate::output::print_json;
use crate::root::under_root;
use anyhow::Context;
use mdstamp_core::patch::{fix_test_dir, DefaultParams};
use std::path::Path;

pub fn run(
    root: &Path,
    dir: &Path,
    skip: &[String],
    params: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let params = match params {
        Some(p) => {
            let p = under_root(root, p);
            DefaultParams::load(&p)
                .with_context(|| format!("failed to load params from '{}'", p.display()))?
        }
        None => DefaultParams::default(),
    };

    let dir = under_root(root, dir);
    let summary = fix_test_dir(&dir, skip, &params, |path, result| match result {
        Ok(true) if !json => println!("Fixed {}", path.display()),
        Ok(_) => {}
        Err(e) => eprintln!("Error fixing {}: {e}", path.display()),
    })
    .with_context(|| format!("cannot list tests in '{}'", dir.display()))?;

    if json {
        return print_json(&summary);
    }

    println!(
        "\nFixed {} test files ({} unchanged, {} skipped, {} errors)",
        summary.fixed, summary.unchanged, summary.skipped, summary.errors
    );
    Ok(())
}
