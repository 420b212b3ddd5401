//! Navigation sub-reducer: opening, closing, page transitions.

use tracing::debug;

use crate::action::Action;
use crate::effect::Effect;
use crate::page::Page;
use crate::state::DialogState;

use super::helpers::begin_load;

/// Handles dialog visibility and page transitions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_navigation(state: &mut DialogState, action: &Action) -> Option<Vec<Effect>> {
    match action {
        Action::OpenDialog => {
            state.is_open = true;
            state.form.page = state.initial_page;
            debug!(page = %state.initial_page, "dialog opened");
            Some(begin_load(state))
        }
        Action::CloseDialog => {
            state.form.reset(false, &state.catalog);
            state.form.page = Page::List;
            state.is_open = false;
            Some(vec![Effect::DialogClosed])
        }
        Action::AddClick => {
            // Leftover edit drafts must not leak their id into a create
            let edit_mode = !state.form.draft.is_editing();
            state.form.reset(edit_mode, &state.catalog);
            state.form.seed_type(&state.catalog);
            state.form.page = Page::Add;
            Some(vec![])
        }
        Action::EditClick(connection) => {
            state.form.begin_edit(connection);
            Some(vec![])
        }
        Action::Back => {
            state.form.reset(false, &state.catalog);
            state.form.page = Page::List;
            Some(vec![])
        }
        _ => None,
    }
}
