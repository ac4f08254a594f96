//! Frontmatter inference.
//!
//! Every function here is total and pure: the same `(path, content)` always
//! yields the same record, and no input string can make classification fail.

use crate::classifier::{contains_any, Subject};
use crate::config::StampConfig;
use crate::paths;
use crate::rules::{
    TagGroup, CONTENT_TAGS, FILENAME_TAGS, PRIORITY_CASCADE, STATUS_CASCADE, TYPE_CASCADE,
};
use crate::types::{Category, DocType, Priority, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Tags kept after sorting. The cutoff is alphabetic, not by relevance.
pub const MAX_TAGS: usize = 8;
/// Characters of content inspected for content-derived tags.
pub const CONTENT_SAMPLE_CHARS: usize = 500;
/// Projects containing this are grouped under the mcp-servers category.
const SERVER_SUFFIX: &str = "mcp-server";

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "type")]
    pub doc_type: DocType,
    pub project: String,
    pub tags: Vec<String>,
    pub category: Category,
    pub status: Status,
    pub priority: Priority,
}

impl Metadata {
    /// Derive the full record for a document at `path` with `content`.
    pub fn derive(path: &Path, content: &str, config: &StampConfig) -> Self {
        let filename = paths::file_name(path);
        let project = detect_project(path, &config.project_marker, &config.default_project);
        let doc_type = infer_type(filename, content);
        let tags = extract_tags(filename, &project, content);
        let status = determine_status(content, filename);
        let priority = determine_priority(filename, doc_type);
        let category = determine_category(&project);

        Metadata {
            doc_type,
            project,
            tags,
            category,
            status,
            priority,
        }
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// The segment right after the first `marker` segment in `path`, else `fallback`.
pub fn detect_project(path: &Path, marker: &str, fallback: &str) -> String {
    let segments = paths::segments(path);
    segments
        .iter()
        .position(|s| *s == marker)
        .and_then(|i| segments.get(i + 1))
        .map(|s| s.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn determine_category(project: &str) -> Category {
    if project.contains(SERVER_SUFFIX) {
        Category::McpServers
    } else {
        Category::Tools
    }
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

/// `content` takes no part in the current rules.
pub fn infer_type(filename: &str, content: &str) -> DocType {
    TYPE_CASCADE.classify(&Subject::new(filename, content))
}

pub fn determine_status(content: &str, filename: &str) -> Status {
    STATUS_CASCADE.classify(&Subject::new(filename, content))
}

pub fn determine_priority(filename: &str, doc_type: DocType) -> Priority {
    PRIORITY_CASCADE.classify(&Subject::new(filename, "").with_type(doc_type))
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Collect tags from the project, filename and the head of the content.
///
/// Result is deduplicated, sorted and capped at [`MAX_TAGS`].
pub fn extract_tags(filename: &str, project: &str, content: &str) -> Vec<String> {
    let mut tags: BTreeSet<String> = BTreeSet::new();

    let project_lower = project.to_lowercase();
    if project_lower.contains("mcp") {
        tags.insert("MCP".to_string());
    }
    if project_lower.contains("server") {
        tags.insert("mcp-server".to_string());
    }

    let filename_lower = filename.to_lowercase();
    insert_matching(&mut tags, FILENAME_TAGS, &filename_lower);

    let sample: String = content
        .chars()
        .take(CONTENT_SAMPLE_CHARS)
        .collect::<String>()
        .to_lowercase();
    insert_matching(&mut tags, CONTENT_TAGS, &sample);

    let derived = project_tag(project);
    if !derived.is_empty() {
        tags.insert(derived);
    }

    tags.into_iter().take(MAX_TAGS).collect()
}

fn insert_matching(tags: &mut BTreeSet<String>, groups: &[TagGroup], text: &str) {
    for group in groups {
        if contains_any(text, group.keywords) {
            tags.insert(group.tag.to_string());
        }
    }
}

/// `Foo-Bar-mcp-server` → `foo-bar`; words are hyphen-joined and lowercased.
fn project_tag(project: &str) -> String {
    project
        .replace("-mcp-server", "")
        .to_lowercase()
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cfg() -> StampConfig {
        StampConfig::default()
    }

    // -- project / category -------------------------------------------------

    #[test]
    fn project_follows_marker() {
        let p = Path::new("/ws/local-instances/mcp-servers/foo-mcp-server/docs/a.md");
        assert_eq!(
            detect_project(p, "mcp-servers", "local-instances"),
            "foo-mcp-server"
        );
    }

    #[test]
    fn project_falls_back_without_marker() {
        let p = Path::new("/ws/tools/a.md");
        assert_eq!(detect_project(p, "mcp-servers", "local-instances"), "local-instances");
    }

    #[test]
    fn project_falls_back_when_marker_is_last() {
        let p = Path::new("/ws/mcp-servers");
        assert_eq!(detect_project(p, "mcp-servers", "local-instances"), "local-instances");
    }

    #[test]
    fn category_from_project() {
        assert_eq!(determine_category("foo-mcp-server"), Category::McpServers);
        assert_eq!(determine_category("local-instances"), Category::Tools);
        assert_eq!(determine_category("mcp-servers-shared"), Category::McpServers);
    }

    // -- type ---------------------------------------------------------------

    #[test]
    fn type_cascade() {
        let cases = [
            ("README.md", DocType::Readme),
            ("User-Guide.md", DocType::Guide),
            ("api-spec.md", DocType::Specification),
            ("issue-template.md", DocType::Template),
            ("workflow.md", DocType::Guide),
            ("TROUBLESHOOTING.md", DocType::Reference),
            ("installation.md", DocType::Guide),
            ("setup.md", DocType::Guide),
            ("test-plan.md", DocType::Specification),
            ("changelog.md", DocType::Reference),
        ];
        for (name, expected) in cases {
            assert_eq!(infer_type(name, ""), expected, "{name}");
        }
    }

    // -- status -------------------------------------------------------------

    #[test]
    fn draft_name_beats_everything() {
        assert_eq!(determine_status("", "draft-template.md"), Status::Draft);
        assert_eq!(determine_status("complete", "WIP-notes.md"), Status::Draft);
    }

    #[test]
    fn completion_marker_in_content() {
        assert_eq!(determine_status("Migration COMPLETED", "test-plan.md"), Status::Completed);
        assert_eq!(
            determine_status("this is production ready", "template.md"),
            Status::Completed
        );
    }

    #[test]
    fn templates_and_tests_are_in_progress() {
        assert_eq!(determine_status("", "template.md"), Status::InProgress);
        assert_eq!(determine_status("", "e2e-test.md"), Status::InProgress);
        assert_eq!(determine_status("", "Readme.md"), Status::Completed);
        assert_eq!(determine_status("", "notes.md"), Status::Completed);
    }

    // -- priority -----------------------------------------------------------

    #[test]
    fn priority_cascade() {
        assert_eq!(determine_priority("README.md", DocType::Readme), Priority::High);
        assert_eq!(determine_priority("setup.md", DocType::Reference), Priority::High);
        assert_eq!(determine_priority("troubleshooting.md", DocType::Reference), Priority::High);
        assert_eq!(determine_priority("notes.md", DocType::Guide), Priority::High);
        assert_eq!(determine_priority("notes.md", DocType::Specification), Priority::High);
        assert_eq!(determine_priority("example.md", DocType::Reference), Priority::Medium);
        assert_eq!(determine_priority("notes.md", DocType::Template), Priority::Medium);
    }

    #[test]
    fn status_and_priority_are_total() {
        for name in ["", "x", "README.MD", "wip", "💥.md", "a b c"] {
            for content in ["", "complete", "日本語"] {
                let status = determine_status(content, name);
                assert!(Status::all().contains(&status));
            }
            for t in DocType::all() {
                let priority = determine_priority(name, *t);
                assert!(Priority::all().contains(&priority));
            }
        }
    }

    // -- tags ---------------------------------------------------------------

    #[test]
    fn tags_from_all_sources() {
        let tags = extract_tags(
            "setup-guide.md",
            "foo-mcp-server",
            "Deploy the API endpoint to production.",
        );
        assert_eq!(
            tags,
            vec!["API", "MCP", "deployment", "foo", "guide", "installation", "mcp-server"]
        );
    }

    #[test]
    fn tags_are_capped_sorted_and_unique() {
        let tags = extract_tags(
            "setup-workflow-guide-spec-troubleshooting-template-testing-integration-quick-start.md",
            "big-mcp-server",
            "automation script config deploy document api workflow",
        );
        assert_eq!(tags.len(), MAX_TAGS);
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn content_tags_only_look_at_the_head() {
        let mut content = "x".repeat(CONTENT_SAMPLE_CHARS);
        content.push_str(" deploy api");
        let tags = extract_tags("notes.md", "local-instances", &content);
        assert_eq!(tags, vec!["local-instances"]);
    }

    #[test]
    fn content_sample_counts_characters_not_bytes() {
        let mut content = "é".repeat(CONTENT_SAMPLE_CHARS - 6);
        content.push_str("deploy");
        let tags = extract_tags("notes.md", "local-instances", &content);
        assert!(tags.contains(&"deployment".to_string()));
    }

    #[test]
    fn project_tag_is_normalized() {
        assert_eq!(project_tag("Foo-Bar-mcp-server"), "foo-bar");
        assert_eq!(project_tag("local-instances"), "local-instances");
        assert_eq!(project_tag("My Project"), "my-project");
        assert_eq!(project_tag("-mcp-server"), "");
    }

    // -- record ------------------------------------------------------------

    #[test]
    fn readme_with_empty_content() {
        let md = Metadata::derive(Path::new("/ws/README.md"), "", &cfg());
        assert_eq!(md.doc_type, DocType::Readme);
        assert_eq!(md.status, Status::Completed);
        assert_eq!(md.priority, Priority::High);
        assert_eq!(md.project, "local-instances");
        assert_eq!(md.category, Category::Tools);
    }

    #[test]
    fn server_setup_guide() {
        let path = PathBuf::from("/ws/mcp-servers/foo-mcp-server/setup-guide.md");
        let md = Metadata::derive(&path, "This server is production ready.", &cfg());
        assert_eq!(md.doc_type, DocType::Guide);
        assert_eq!(md.project, "foo-mcp-server");
        assert_eq!(md.category, Category::McpServers);
        assert_eq!(md.status, Status::Completed);
        assert_eq!(md.priority, Priority::High);
    }

    #[test]
    fn derive_is_deterministic() {
        let path = Path::new("/ws/mcp-servers/x-mcp-server/testing-template.md");
        let content = "Config settings and deployment scripts";
        let first = Metadata::derive(path, content, &cfg());
        for _ in 0..5 {
            assert_eq!(Metadata::derive(path, content, &cfg()), first);
        }
    }

    #[test]
    fn custom_marker_is_honoured() {
        let config = StampConfig {
            project_marker: "services".to_string(),
            default_project: "misc".to_string(),
            ..StampConfig::default()
        };
        let md = Metadata::derive(Path::new("/ws/services/billing/README.md"), "", &config);
        assert_eq!(md.project, "billing");
        let md = Metadata::derive(Path::new("/ws/other/README.md"), "", &config);
        assert_eq!(md.project, "misc");
    }
}
