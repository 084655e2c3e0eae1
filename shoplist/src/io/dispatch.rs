//! Store-backed request cycle: load, apply at most one action, save.

use tracing::{debug, info, warn};

use crate::core::action::{ActionForm, parse_action};
use crate::core::dispatch::apply;
use crate::core::types::Outcome;
use crate::io::list_store::{ListStore, StoreError};

/// Run one submitted form against the stored list.
///
/// The list is written back even when nothing changed, so a storage failure
/// always surfaces. Validation failures are absorbed into
/// [`Outcome::Rejected`].
pub fn dispatch(store: &ListStore, form: &ActionForm) -> Result<Outcome, StoreError> {
    let mut list = store.load()?;

    let outcome = match parse_action(form) {
        Ok(action) => {
            let outcome = apply(&mut list, &action);
            match outcome {
                Outcome::Rejected(reason) => {
                    warn!(action = action.name(), reason = reason.as_str(), "action refused");
                }
                _ if outcome.is_mutation() => {
                    info!(action = action.name(), ?outcome, "list updated");
                }
                _ => debug!(action = action.name(), "action matched nothing"),
            }
            outcome
        }
        Err(reason) => {
            debug!(
                action = form.action.as_deref().unwrap_or(""),
                reason = reason.as_str(),
                "submission ignored"
            );
            Outcome::Rejected(reason)
        }
    };

    store.save(&list)?;
    Ok(outcome)
}
