use crate::types::DocType;

// ---------------------------------------------------------------------------
// Subject
// ---------------------------------------------------------------------------

/// The lowercased view of a document that rule conditions are evaluated against.
pub struct Subject {
    pub filename: String,
    pub content: String,
    pub doc_type: Option<DocType>,
}

impl Subject {
    pub fn new(filename: &str, content: &str) -> Self {
        Self {
            filename: filename.to_lowercase(),
            content: content.to_lowercase(),
            doc_type: None,
        }
    }

    pub fn with_type(mut self, doc_type: DocType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Lowercased filename equals the value.
    FilenameIs(&'static str),
    /// Lowercased filename contains any of the values.
    FilenameContains(&'static [&'static str]),
    /// Lowercased content contains any of the values.
    ContentContains(&'static [&'static str]),
    /// An already-inferred type is one of the values.
    TypeIn(&'static [DocType]),
}

impl Condition {
    pub fn holds(&self, subject: &Subject) -> bool {
        match self {
            Condition::FilenameIs(name) => subject.filename == *name,
            Condition::FilenameContains(kws) => contains_any(&subject.filename, kws),
            Condition::ContentContains(kws) => contains_any(&subject.content, kws),
            Condition::TypeIn(types) => subject.doc_type.is_some_and(|t| types.contains(&t)),
        }
    }
}

pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

// ---------------------------------------------------------------------------
// Rule / Cascade
// ---------------------------------------------------------------------------

pub struct Rule<T> {
    pub id: &'static str,
    pub condition: Condition,
    pub outcome: T,
}

/// An ordered rule list with a fallback; the first rule whose condition holds wins.
pub struct Cascade<T: 'static> {
    pub rules: &'static [Rule<T>],
    pub fallback: T,
}

impl<T: Copy + 'static> Cascade<T> {
    pub fn classify(&self, subject: &Subject) -> T {
        self.matching_rule(subject)
            .map(|r| r.outcome)
            .unwrap_or(self.fallback)
    }

    /// The rule that decided the outcome, `None` when the fallback applied.
    pub fn matching_rule(&self, subject: &Subject) -> Option<&'static Rule<T>> {
        let rules: &'static [Rule<T>] = self.rules;
        rules.iter().find(|r| r.condition.holds(subject))
    }
}
