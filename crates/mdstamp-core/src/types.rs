use crate::error::StampError;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! wire_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = StampError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(StampError::InvalidValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// DocType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    Readme,
    Guide,
    Specification,
    Template,
    Reference,
}

wire_enum!(DocType, "document type", {
    Readme => "readme",
    Guide => "guide",
    Specification => "specification",
    Template => "template",
    Reference => "reference",
});

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Draft,
    Completed,
    InProgress,
}

wire_enum!(Status, "status", {
    Draft => "draft",
    Completed => "completed",
    InProgress => "in-progress",
});

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// There is no `low` tier; nothing in the rule set demotes below medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

wire_enum!(Priority, "priority", {
    High => "high",
    Medium => "medium",
});

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    McpServers,
    Tools,
}

wire_enum!(Category, "category", {
    McpServers => "mcp-servers",
    Tools => "tools",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_parse_back() {
        for t in DocType::all() {
            assert_eq!(t.as_str().parse::<DocType>().unwrap(), *t);
        }
        for s in Status::all() {
            assert_eq!(s.as_str().parse::<Status>().unwrap(), *s);
        }
        for p in Priority::all() {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), *p);
        }
        for c in Category::all() {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), *c);
        }
    }

    #[test]
    fn serde_matches_display() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let json = serde_json::to_string(&Category::McpServers).unwrap();
        assert_eq!(json, "\"mcp-servers\"");
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = "low".parse::<Priority>().unwrap_err();
        assert!(err.to_string().contains("priority"));
    }
}
