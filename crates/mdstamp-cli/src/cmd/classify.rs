use super::LayoutArgs;
use crate::output::{print_json, print_table};
use crate::root::from_cwd;
use anyhow::Context;
use mdstamp_core::document::Document;
use mdstamp_core::metadata::Metadata;
use mdstamp_core::paths::display_relative;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct Classified {
    path: PathBuf,
    has_header: bool,
    metadata: Metadata,
}

pub fn run(root: &Path, layout: &LayoutArgs, files: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let config = layout.config(root);

    let mut classified = Vec::with_capacity(files.len());
    for file in files {
        let path = from_cwd(file);
        let doc = Document::load(&path)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        classified.push(Classified {
            has_header: doc.has_header(),
            metadata: doc.metadata(&config),
            path,
        });
    }

    if json {
        return print_json(&classified);
    }

    let rows = classified
        .iter()
        .map(|c| {
            let md = &c.metadata;
            vec![
                display_relative(root, &c.path),
                md.doc_type.to_string(),
                md.project.clone(),
                md.category.to_string(),
                md.status.to_string(),
                md.priority.to_string(),
                md.tags.join(", "),
                if c.has_header { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    print_table(
        &[
            "FILE", "TYPE", "PROJECT", "CATEGORY", "STATUS", "PRIORITY", "TAGS", "HEADER",
        ],
        rows,
    );
    Ok(())
}
