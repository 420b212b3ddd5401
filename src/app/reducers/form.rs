//! Form sub-reducer: draft edits and resets.

use tracing::debug;

use crate::action::Action;
use crate::effect::Effect;
use crate::form_state::{FieldUpdate, FormError};
use crate::messages;
use crate::state::DialogState;

/// Handles edits to the draft.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_form(state: &mut DialogState, action: &Action) -> Option<Vec<Effect>> {
    match action {
        Action::SetField(FieldUpdate::Type(ty)) => {
            change_type(state, ty);
            Some(vec![])
        }
        Action::SetField(update) => {
            if let Err(e) = state.form.set_field(update.clone()) {
                state.form.set_error(e.to_string());
            }
            Some(vec![])
        }
        Action::ChangeType(ty) => {
            change_type(state, ty);
            Some(vec![])
        }
        Action::ReplaceConfig(config) => {
            state.form.replace_config(config.clone());
            Some(vec![])
        }
        Action::ResetForm { edit_mode } => {
            state.form.reset(*edit_mode, &state.catalog);
            Some(vec![])
        }
        _ => None,
    }
}

fn change_type(state: &mut DialogState, ty: &crate::domain::ConnectionType) {
    if !state.catalog.is_empty() && !state.catalog.contains(ty) {
        debug!(%ty, "type not in catalog");
        state.form.set_error(messages::unknown_type(ty.as_str()));
        return;
    }
    match state.form.change_type(ty.clone()) {
        Ok(()) => {}
        Err(FormError::TypeLocked) => {
            debug!(%ty, "type change on locked draft");
            state.form.set_error(FormError::TypeLocked.to_string());
        }
    }
}
