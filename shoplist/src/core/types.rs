//! Shared deterministic types for list mutations.
//!
//! These types describe one submitted action before and after it is applied.
//! They carry no I/O and are stable across runs.

/// A validated list mutation.
///
/// Text payloads are already trimmed and non-empty, ids already positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { text: String },
    Update { id: u64, text: String },
    Delete { id: u64 },
    Toggle { id: u64 },
    DeleteDone,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add { .. } => "add",
            Action::Update { .. } => "update",
            Action::Delete { .. } => "delete",
            Action::Toggle { .. } => "toggle",
            Action::DeleteDone => "delete_done",
        }
    }
}

/// Why a submission was absorbed without touching the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// `action` missing or not one of the known names.
    UnknownAction,
    /// `text` missing or whitespace-only.
    BlankText,
    /// `id` missing, non-numeric, or not positive.
    InvalidId,
    /// `add` with no id left to assign (largest id is `u64::MAX`).
    IdsExhausted,
}

impl NoOpReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoOpReason::UnknownAction => "unknown_action",
            NoOpReason::BlankText => "blank_text",
            NoOpReason::InvalidId => "invalid_id",
            NoOpReason::IdsExhausted => "ids_exhausted",
        }
    }
}

/// Result of applying one action to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { id: u64 },
    Updated { id: u64 },
    Deleted { id: u64 },
    Toggled { id: u64, done: bool },
    DeletedDone { removed: usize },
    /// The action was valid but matched nothing (unknown id, no done items).
    Unchanged,
    /// The submission was ignored (failed validation, or no id left to assign).
    Rejected(NoOpReason),
}

impl Outcome {
    /// True if the list content changed.
    pub fn is_mutation(&self) -> bool {
        match self {
            Outcome::Added { .. }
            | Outcome::Updated { .. }
            | Outcome::Deleted { .. }
            | Outcome::Toggled { .. } => true,
            Outcome::DeletedDone { removed } => *removed > 0,
            Outcome::Unchanged | Outcome::Rejected(_) => false,
        }
    }
}
