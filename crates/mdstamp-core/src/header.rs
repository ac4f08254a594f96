use crate::metadata::Metadata;

pub const HEADER_DELIMITER: &str = "---";
/// Every generated header carries the same phase.
pub const PHASE: &str = "stable";

/// True when the trimmed content opens with a header delimiter.
pub fn has_header(content: &str) -> bool {
    content.trim().starts_with(HEADER_DELIMITER)
}

/// Render the frontmatter block, including the trailing blank line.
///
/// Values are written verbatim. A project or tag containing `,`, `[`, `]` or
/// `: ` yields a header that YAML parsers will read differently.
pub fn render_header(md: &Metadata) -> String {
    format!(
        "{d}\n\
         type: {doc_type}\n\
         phase: {phase}\n\
         project: {project}\n\
         tags: [{tags}]\n\
         category: {category}\n\
         status: {status}\n\
         priority: {priority}\n\
         {d}\n\n",
        d = HEADER_DELIMITER,
        doc_type = md.doc_type,
        phase = PHASE,
        project = md.project,
        tags = md.tags.join(", "),
        category = md.category,
        status = md.status,
        priority = md.priority,
    )
}

/// Prepend the rendered header to `content`.
pub fn stamp(md: &Metadata, content: &str) -> String {
    let mut out = render_header(md);
    out.push_str(content);
    out
}
