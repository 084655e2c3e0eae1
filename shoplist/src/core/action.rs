//! Turn a raw form submission into a validated [`Action`].
//!
//! Submissions that fail validation are not errors: they become an explicit
//! [`NoOpReason`] so callers can log them and move on.

use serde::Deserialize;

use crate::core::types::{Action, NoOpReason};

/// Raw form fields as submitted by the browser. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActionForm {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl ActionForm {
    pub fn new(action: &str) -> Self {
        Self {
            action: Some(action.to_string()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }
}

/// Parse and validate a form into an action, or the reason it is ignored.
pub fn parse_action(form: &ActionForm) -> Result<Action, NoOpReason> {
    let name = form.action.as_deref().unwrap_or("");
    match name {
        "add" => Ok(Action::Add {
            text: required_text(form)?,
        }),
        "update" => {
            let id = required_id(form)?;
            let text = required_text(form)?;
            Ok(Action::Update { id, text })
        }
        "delete" => Ok(Action::Delete {
            id: required_id(form)?,
        }),
        "toggle" => Ok(Action::Toggle {
            id: required_id(form)?,
        }),
        "delete_done" => Ok(Action::DeleteDone),
        _ => Err(NoOpReason::UnknownAction),
    }
}

fn required_text(form: &ActionForm) -> Result<String, NoOpReason> {
    let text = form.text.as_deref().map(str::trim).unwrap_or("");
    if text.is_empty() {
        return Err(NoOpReason::BlankText);
    }
    Ok(text.to_string())
}

fn required_id(form: &ActionForm) -> Result<u64, NoOpReason> {
    form.id
        .as_deref()
        .map(str::trim)
        .and_then(|raw| raw.parse::<u64>().ok())
        .filter(|id| *id > 0)
        .ok_or(NoOpReason::InvalidId)
}
