//! Apply a validated action to an in-memory list.

use crate::core::types::{Action, NoOpReason, Outcome};
use crate::list::ShoppingList;

/// Apply `action` to `list` in place.
///
/// Actions that target a missing id leave the list untouched and report
/// [`Outcome::Unchanged`].
pub fn apply(list: &mut ShoppingList, action: &Action) -> Outcome {
    match action {
        Action::Add { text } => match list.push(text.clone()) {
            Some(id) => Outcome::Added { id },
            None => Outcome::Rejected(NoOpReason::IdsExhausted),
        },
        Action::Update { id, text } => match list.get_mut(*id) {
            Some(item) => {
                item.text = text.clone();
                Outcome::Updated { id: *id }
            }
            None => Outcome::Unchanged,
        },
        Action::Delete { id } => match list.remove(*id) {
            Some(_) => Outcome::Deleted { id: *id },
            None => Outcome::Unchanged,
        },
        Action::Toggle { id } => match list.get_mut(*id) {
            Some(item) => {
                item.done = !item.done;
                Outcome::Toggled {
                    id: *id,
                    done: item.done,
                }
            }
            None => Outcome::Unchanged,
        },
        Action::DeleteDone => match list.remove_done() {
            0 => Outcome::Unchanged,
            removed => Outcome::DeletedDone { removed },
        },
    }
}
