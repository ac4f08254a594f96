//! Patching of generated TypeScript test sources.
//!
//! Two rewrites: tool-function calls that only pass `projectPath` get the
//! remaining required parameters filled in with defaults, and `expect(result.x)`
//! assertions inside success-check blocks get non-null assertions (`result.x!`).

use crate::error::{Result, StampError};
use crate::io;
use crate::paths;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Defaults table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    /// TypeScript literal inserted as-is, e.g. `'ascii'` or `true`.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefaults {
    pub function: String,
    pub params: Vec<Param>,
}

/// Ordered per-function defaults. Order is preserved in the inserted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultParams(pub Vec<FunctionDefaults>);

impl DefaultParams {
    pub fn load(path: &Path) -> Result<Self> {
        let data = io::read_text(path)?;
        Ok(serde_yaml::from_str(&data)?)
    }

    pub fn get(&self, function: &str) -> Option<&FunctionDefaults> {
        self.0.iter().find(|f| f.function == function)
    }
}

impl Default for DefaultParams {
    fn default() -> Self {
        fn entry(function: &str, params: &[(&str, &str)]) -> FunctionDefaults {
            FunctionDefaults {
                function: function.to_string(),
                params: params
                    .iter()
                    .map(|(name, value)| Param {
                        name: name.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            }
        }

        DefaultParams(vec![
            entry(
                "suggestNextSteps",
                &[("includeDetails", "false"), ("maxSuggestions", "5")],
            ),
            entry("getConversationContext", &[("contextType", "'overview'")]),
            entry(
                "generateHierarchyTree",
                &[
                    ("outputFormat", "'ascii'"),
                    ("maxDepth", "7"),
                    ("showProgress", "true"),
                    ("filterStatus", "'all'"),
                ],
            ),
            entry(
                "generateRoadmapTimeline",
                &[
                    ("outputFormat", "'mermaid'"),
                    ("groupBy", "'component'"),
                    ("showMilestones", "true"),
                    ("timeRange", "'all'"),
                ],
            ),
            entry(
                "generateProgressDashboard",
                &[
                    ("outputFormat", "'ascii'"),
                    ("includeVelocity", "true"),
                    ("includeHealth", "true"),
                ],
            ),
            entry(
                "generateDependencyGraph",
                &[
                    ("outputFormat", "'mermaid'"),
                    ("scope", "'all'"),
                    ("showCriticalPath", "true"),
                ],
            ),
            entry(
                "generateDocumentation",
                &[
                    ("format", "'markdown'"),
                    ("includeCodeExamples", "false"),
                    ("includeMetrics", "false"),
                    ("detailLevel", "'standard'"),
                ],
            ),
        ])
    }
}

// ---------------------------------------------------------------------------
// Missing parameters
// ---------------------------------------------------------------------------

const CALL_CLOSE: &str = "})";

/// Fill in defaults for every `function({ projectPath: ... })` call that lacks them.
///
/// A parameter counts as present when its name occurs anywhere in the call text.
/// Defaults go before the closing `})`, after any trailing comma is dropped.
pub fn add_missing_params(content: &str, defaults: &FunctionDefaults) -> Result<String> {
    let pattern = format!(
        r"(?s){}\(\{{\s*projectPath:.*?\}}\)",
        regex::escape(&defaults.function)
    );
    let re = Regex::new(&pattern)?;

    let patched = re.replace_all(content, |caps: &Captures| {
        let call = &caps[0];
        let missing: Vec<String> = defaults
            .params
            .iter()
            .filter(|p| !call.contains(p.name.as_str()))
            .map(|p| format!("{}: {}", p.name, p.value))
            .collect();
        if missing.is_empty() {
            return call.to_string();
        }
        let head = call.strip_suffix(CALL_CLOSE).unwrap_or(call);
        let head = head.trim_end().trim_end_matches(',');
        format!("{head}, {} {CALL_CLOSE}", missing.join(", "))
    });
    Ok(patched.into_owned())
}

// ---------------------------------------------------------------------------
// Null assertions
// ---------------------------------------------------------------------------

static RESULT_PROP_RE: OnceLock<Regex> = OnceLock::new();

fn result_prop_re() -> &'static Regex {
    RESULT_PROP_RE.get_or_init(|| Regex::new(r"result\.\w+").unwrap())
}

/// Append `!` to each `result.<prop>` that is not already followed by `.` or `!`.
fn assert_non_null(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 4);
    let mut last = 0;
    for m in result_prop_re().find_iter(line) {
        out.push_str(&line[last..m.end()]);
        if !matches!(line[m.end()..].chars().next(), Some('.') | Some('!')) {
            out.push('!');
        }
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}

/// Inside `if (result.success)` / `if (!result.success)` blocks, add non-null
/// assertions to `expect(result.…)` lines that have none yet.
///
/// A block ends at the first line that is a lone `}`.
pub fn add_null_checks(content: &str) -> String {
    let mut in_success_block = false;
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            if line.contains("if (result.success)") || line.contains("if (!result.success)") {
                in_success_block = true;
            } else if in_success_block && line.trim() == "}" {
                in_success_block = false;
            }

            if in_success_block && line.contains("expect(result.") && !line.contains('!') {
                assert_non_null(line)
            } else {
                line.to_string()
            }
        })
        .collect();
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// Apply every rewrite to `content`.
pub fn patch_source(content: &str, params: &DefaultParams) -> Result<String> {
    let mut out = content.to_string();
    for defaults in &params.0 {
        out = add_missing_params(&out, defaults)?;
    }
    Ok(add_null_checks(&out))
}

/// Patch a test file in place. Returns whether its contents changed.
pub fn fix_test_file(path: &Path, params: &DefaultParams) -> Result<bool> {
    let content = io::read_text(path)?;
    let patched = patch_source(&content, params)?;
    if patched == content {
        return Ok(false);
    }
    io::atomic_write(path, patched.as_bytes())?;
    Ok(true)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatchSummary {
    /// Files whose contents changed.
    pub fixed: usize,
    /// Files processed without changes.
    pub unchanged: usize,
    /// Files excluded by name.
    pub skipped: usize,
    pub errors: usize,
}

/// `*.test.ts` files directly inside `dir`, sorted.
pub fn find_test_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(StampError::RootNotFound(dir.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| StampError::file(dir, e))? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && paths::file_name(&path).ends_with(paths::TEST_SUFFIX) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Patch every test file in `dir` except those named in `skip`.
pub fn fix_test_dir<F>(
    dir: &Path,
    skip: &[String],
    params: &DefaultParams,
    mut on_file: F,
) -> Result<PatchSummary>
where
    F: FnMut(&Path, &Result<bool>),
{
    let mut summary = PatchSummary::default();
    for path in find_test_files(dir)? {
        if skip.iter().any(|s| s == paths::file_name(&path)) {
            tracing::debug!(path = %path.display(), "excluded from patching");
            summary.skipped += 1;
            continue;
        }
        let result = fix_test_file(&path, params);
        match &result {
            Ok(true) => summary.fixed += 1,
            Ok(false) => summary.unchanged += 1,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to patch");
                summary.errors += 1;
            }
        }
        on_file(&path, &result);
    }
    Ok(summary)
}
