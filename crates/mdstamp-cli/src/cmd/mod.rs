pub mod classify;
pub mod fix_tests;
pub mod stamp;

use clap::Args;
use mdstamp_core::config::StampConfig;
use mdstamp_core::paths;
use std::path::Path;

/// How a tree maps onto projects; shared by `stamp` and `classify`.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Directory whose child segment names a document's project
    #[arg(long, default_value = paths::PROJECT_MARKER)]
    pub project_marker: String,

    /// Project used when no marker segment is found
    #[arg(long, default_value = paths::DEFAULT_PROJECT)]
    pub default_project: String,

    /// Directory name never descended into
    #[arg(long = "exclude", value_name = "DIR", default_value = paths::EXCLUDED_DIR)]
    pub exclude_dir: String,
}

impl LayoutArgs {
    pub fn config(&self, root: &Path) -> StampConfig {
        StampConfig {
            root: root.to_path_buf(),
            project_marker: self.project_marker.clone(),
            default_project: self.default_project.clone(),
            exclude_dir: self.exclude_dir.clone(),
            ..StampConfig::default()
        }
    }
}
