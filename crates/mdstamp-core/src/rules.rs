use crate::classifier::Condition::{ContentContains, FilenameContains, FilenameIs, TypeIn};
use crate::classifier::{Cascade, Rule};
use crate::paths::README_NAME;
use crate::types::{DocType, Priority, Status};

// ---------------------------------------------------------------------------
// Helper macro for concise rule definitions
// ---------------------------------------------------------------------------

macro_rules! rule {
    ($id:literal, $cond:expr => $outcome:expr) => {
        Rule {
            id: $id,
            condition: $cond,
            outcome: $outcome,
        }
    };
}

// ---------------------------------------------------------------------------
// Type
// ---------------------------------------------------------------------------

static TYPE_RULES: &[Rule<DocType>] = &[
    rule!("readme", FilenameIs(README_NAME) => DocType::Readme),
    rule!("guide", FilenameContains(&["guide"]) => DocType::Guide),
    rule!("spec", FilenameContains(&["spec", "specification"]) => DocType::Specification),
    rule!("template", FilenameContains(&["template"]) => DocType::Template),
    rule!("workflow", FilenameContains(&["workflow"]) => DocType::Guide),
    rule!("troubleshooting", FilenameContains(&["troubleshooting"]) => DocType::Reference),
    rule!("setup", FilenameContains(&["installation", "setup"]) => DocType::Guide),
    rule!("test", FilenameContains(&["test"]) => DocType::Specification),
];

pub static TYPE_CASCADE: Cascade<DocType> = Cascade {
    rules: TYPE_RULES,
    fallback: DocType::Reference,
};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

static STATUS_RULES: &[Rule<Status>] = &[
    rule!("draft_name", FilenameContains(&["wip", "draft"]) => Status::Draft),
    rule!("complete_marker", ContentContains(&["complete", "production ready"]) => Status::Completed),
    rule!("readme", FilenameIs(README_NAME) => Status::Completed),
    rule!("unfinished_kind", FilenameContains(&["template", "test"]) => Status::InProgress),
];

pub static STATUS_CASCADE: Cascade<Status> = Cascade {
    rules: STATUS_RULES,
    fallback: Status::Completed,
};

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

static PRIORITY_RULES: &[Rule<Priority>] = &[
    rule!("readme", FilenameIs(README_NAME) => Priority::High),
    rule!("setup", FilenameContains(&["installation", "setup"]) => Priority::High),
    rule!("troubleshooting", FilenameContains(&["troubleshooting"]) => Priority::High),
    rule!("core_type", TypeIn(&[DocType::Guide, DocType::Specification]) => Priority::High),
    rule!("sample", FilenameContains(&["template", "example"]) => Priority::Medium),
];

pub static PRIORITY_CASCADE: Cascade<Priority> = Cascade {
    rules: PRIORITY_RULES,
    fallback: Priority::Medium,
};

// ---------------------------------------------------------------------------
// Tag groups
// ---------------------------------------------------------------------------

/// A canonical tag contributed when any keyword appears in the probed text.
pub struct TagGroup {
    pub tag: &'static str,
    pub keywords: &'static [&'static str],
}

/// Probed against the lowercased filename.
pub static FILENAME_TAGS: &[TagGroup] = &[
    TagGroup { tag: "installation", keywords: &["installation", "setup"] },
    TagGroup { tag: "workflow", keywords: &["workflow", "process"] },
    TagGroup { tag: "guide", keywords: &["guide", "tutorial"] },
    TagGroup { tag: "specification", keywords: &["specification", "spec"] },
    TagGroup { tag: "troubleshooting", keywords: &["troubleshooting", "debugging"] },
    TagGroup { tag: "template", keywords: &["template", "pattern"] },
    TagGroup { tag: "test", keywords: &["testing", "validation"] },
    TagGroup { tag: "integration", keywords: &["integration", "cross-server"] },
    TagGroup { tag: "verification", keywords: &["verification", "validation"] },
    TagGroup { tag: "quick", keywords: &["quick-start", "getting-started"] },
];

/// Probed against the lowercased content sample.
pub static CONTENT_TAGS: &[TagGroup] = &[
    TagGroup { tag: "automation", keywords: &["automat", "script"] },
    TagGroup { tag: "configuration", keywords: &["config", "settings"] },
    TagGroup { tag: "deployment", keywords: &["deploy", "production"] },
    TagGroup { tag: "documentation", keywords: &["document", "readme"] },
    TagGroup { tag: "API", keywords: &["api", "endpoint"] },
    TagGroup { tag: "workflow", keywords: &["workflow", "process"] },
];
