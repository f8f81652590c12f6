//! Client-side mirrors of the backend's resources.
//!
//! Every type here is a read-only snapshot of server JSON. Views replace them
//! wholesale after a mutation; nothing is patched in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Environment variables attached to a function.
///
/// A `BTreeMap` keeps keys unique and gives a stable display order.
pub type EnvVars = BTreeMap<String, String>;

// ─────────────────────────────────────────────────────────────────────────────
// Functions & Versions
// ─────────────────────────────────────────────────────────────────────────────

/// The version currently serving traffic for a function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActiveVersion {
    pub version: u32,
    #[serde(default)]
    pub code: String,
}

/// A user-defined serverless function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub active_version: ActiveVersion,
    #[serde(default)]
    pub env_vars: EnvVars,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl Function {
    /// Description text, or `None` when absent or blank
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// `v{n}` label of the active version
    pub fn version_label(&self) -> String {
        format!("v{}", self.active_version.version)
    }
}

/// An immutable snapshot of a function's code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub version: u32,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub code: String,
}

impl Version {
    /// Whether this version is the function's active one
    pub fn is_active(&self, function: &Function) -> bool {
        self.version == function.active_version.version
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Executions
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Error,
    #[serde(other)]
    Unknown,
}

impl ExecutionStatus {
    /// Upper-case badge label
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "SUCCESS",
            ExecutionStatus::Error => "ERROR",
            ExecutionStatus::Unknown => "UNKNOWN",
        }
    }
}

/// One invocation record of a function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    pub id: String,
    pub function_id: String,
    pub status: ExecutionStatus,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub event_json: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl Execution {
    /// First eight characters of the id, as shown in headers
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    /// `{n}ms`, or `N/A` when the backend reported no duration
    pub fn duration_label(&self) -> String {
        match self.duration_ms {
            Some(ms) if ms > 0 => format!("{ms}ms"),
            _ => "N/A".to_string(),
        }
    }

    /// Input event pretty-printed as JSON, or the raw text if it does not parse
    pub fn pretty_event(&self) -> Option<String> {
        let raw = self.event_json.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => serde_json::to_string_pretty(&value).ok(),
            Err(_) => Some(raw.to_string()),
        }
    }
}

/// Severity of an execution log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// A log line emitted by a function during one execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionLog {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub execution_id: String,
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub created_at: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Diffs
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of change a diff line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    Added,
    Removed,
    Unchanged,
}

impl LineType {
    /// Gutter symbol for the line
    pub fn symbol(&self) -> char {
        match self {
            LineType::Added => '+',
            LineType::Removed => '-',
            LineType::Unchanged => ' ',
        }
    }
}

/// One line of a backend-computed diff.
///
/// Line numbers are 1-based; `0` or `null` means the side has no line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    #[serde(default)]
    pub old_line: Option<u32>,
    #[serde(default)]
    pub new_line: Option<u32>,
    pub line_type: LineType,
    #[serde(default)]
    pub content: String,
}

impl DiffLine {
    pub fn new(
        line_type: LineType,
        old_line: Option<u32>,
        new_line: Option<u32>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            old_line,
            new_line,
            line_type,
            content: content.into(),
        }
    }

    /// Old-side number to display; never shown for added lines
    pub fn old_number(&self) -> Option<u32> {
        if self.line_type == LineType::Added {
            return None;
        }
        self.old_line.filter(|n| *n > 0)
    }

    /// New-side number to display; never shown for removed lines
    pub fn new_number(&self) -> Option<u32> {
        if self.line_type == LineType::Removed {
            return None;
        }
        self.new_line.filter(|n| *n > 0)
    }

    /// Content with a single space standing in for empty lines
    pub fn display_content(&self) -> &str {
        if self.content.is_empty() {
            " "
        } else {
            &self.content
        }
    }
}

/// Diff between two versions of a function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDiff {
    pub old_version: u32,
    pub new_version: u32,
    #[serde(default)]
    pub diff: Vec<DiffLine>,
}

impl VersionDiff {
    /// (additions, deletions)
    pub fn stats(&self) -> (usize, usize) {
        self.diff.iter().fold((0, 0), |(add, del), line| match line.line_type {
            LineType::Added => (add + 1, del),
            LineType::Removed => (add, del + 1),
            LineType::Unchanged => (add, del),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// List envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// Pagination block returned alongside list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FunctionList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VersionList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<Version>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExecutionList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub executions: Vec<Execution>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub logs: Vec<ExecutionLog>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
