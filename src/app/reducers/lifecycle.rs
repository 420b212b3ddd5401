//! Lifecycle sub-reducer: load, test, create, update, delete.

use tracing::{debug, warn};

use crate::action::Action;
use crate::domain::{ConnectionName, TypeCatalog};
use crate::effect::Effect;
use crate::error_normalizer::normalize_error;
use crate::messages;
use crate::outcome::{Operation, Outcome};
use crate::page::Page;
use crate::ports::Notification;
use crate::state::DialogState;

use super::helpers::{begin_load, ignore, reject};

/// Handles remote operations on connections and their completions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_lifecycle(state: &mut DialogState, action: &Action) -> Option<Vec<Effect>> {
    match action {
        // ===== Load =====
        Action::LoadAll => Some(begin_load(state)),
        Action::ConnectionsLoaded { connections, types } => {
            state.list.connections = connections.clone();
            state.list.loading = false;
            state.list.error = None;
            state.catalog = TypeCatalog::new(types.clone());
            state.form.seed_type(&state.catalog);
            state.outcomes.record(
                Operation::Load,
                Outcome::Succeeded(format!("{} connections loaded", connections.len())),
            );
            Some(vec![])
        }
        Action::ConnectionsLoadFailed(err) => {
            let msg = normalize_error(err, messages::LOAD_FALLBACK);
            warn!(error = %msg, "loading connections failed");
            state.list.loading = false;
            state.list.error = Some(msg.clone());
            state.outcomes.record(Operation::Load, Outcome::Failed(msg));
            Some(vec![])
        }

        // ===== Test =====
        Action::TestConnection => {
            if state.form.busy.testing {
                return Some(ignore(state, Operation::Test));
            }
            state.form.clear_feedback();
            if !state.form.draft.has_type() {
                return Some(reject(state, Operation::Test, messages::TYPE_REQUIRED));
            }
            state.form.busy.testing = true;
            state.outcomes.record(Operation::Test, Outcome::Pending);
            Some(vec![Effect::TestConnection {
                draft: state.form.draft.clone(),
            }])
        }
        Action::TestCompleted(result) => {
            state.form.busy.testing = false;
            let message = result.display_message().to_string();
            let outcome = if result.valid {
                Outcome::Succeeded(message)
            } else {
                Outcome::Failed(message)
            };
            state.form.test_result = Some(result.clone());
            state.outcomes.record(Operation::Test, outcome);
            Some(vec![])
        }
        Action::TestFailed(err) => {
            state.form.busy.testing = false;
            let msg = normalize_error(err, messages::TEST_FALLBACK);
            state.form.test_result = Some(crate::domain::TestResult::failure(msg.clone()));
            state.form.set_error(msg.clone());
            state.outcomes.record(Operation::Test, Outcome::Failed(msg));
            Some(vec![])
        }

        // ===== Create / update =====
        Action::Submit => match state.form.page {
            Page::Add => reduce_lifecycle(state, &Action::SubmitCreate),
            Page::Edit => reduce_lifecycle(state, &Action::SubmitUpdate),
            Page::List => {
                debug!("submit ignored on list page");
                Some(vec![])
            }
        },
        Action::SubmitCreate => {
            if state.form.busy.creating {
                return Some(ignore(state, Operation::Create));
            }
            if let Err(e) = ConnectionName::new(state.form.draft.name.as_str()) {
                return Some(reject(state, Operation::Create, &e.to_string()));
            }
            if !state.form.draft.has_type() {
                return Some(reject(state, Operation::Create, messages::TYPE_REQUIRED));
            }
            state.form.dialog_error = None;
            state.form.busy.creating = true;
            state.outcomes.record(Operation::Create, Outcome::Pending);

            let mut draft = state.form.draft.clone();
            draft.id = None;
            Some(vec![Effect::CreateConnection { draft }])
        }
        Action::ConnectionCreated(connection) => {
            state.form.busy.creating = false;
            let description = messages::created(&connection.name);
            state.list.upsert(connection.clone());
            finish_submit(state);
            state
                .outcomes
                .record(Operation::Create, Outcome::Succeeded(description.clone()));
            Some(vec![Effect::Notify(Notification::info(
                "Connection created",
                description,
            ))])
        }
        Action::CreateFailed(err) => {
            state.form.busy.creating = false;
            let msg = normalize_error(err, messages::CREATE_FALLBACK);
            state.form.set_error(msg.clone());
            state.outcomes.record(Operation::Create, Outcome::Failed(msg));
            Some(vec![])
        }
        Action::SubmitUpdate => {
            if state.form.busy.updating {
                return Some(ignore(state, Operation::Update));
            }
            let keys = (
                state.form.draft.id.clone(),
                state.form.draft.connection_type.clone(),
            );
            let (Some(id), Some(draft_type)) = keys else {
                return Some(reject(
                    state,
                    Operation::Update,
                    messages::UPDATE_KEYS_REQUIRED,
                ));
            };
            if id.is_empty() {
                return Some(reject(
                    state,
                    Operation::Update,
                    messages::UPDATE_KEYS_REQUIRED,
                ));
            }
            if let Err(e) = ConnectionName::new(state.form.draft.name.as_str()) {
                return Some(reject(state, Operation::Update, &e.to_string()));
            }
            let stored_type = state.list.find(&id).map(|c| c.connection_type.clone());
            if let Some(stored_type) = stored_type
                && stored_type != draft_type
            {
                warn!(%id, from = %stored_type, to = %draft_type, "type change refused");
                return Some(reject(state, Operation::Update, messages::TYPE_IMMUTABLE));
            }
            state.form.dialog_error = None;
            state.form.busy.updating = true;
            state.outcomes.record(Operation::Update, Outcome::Pending);
            Some(vec![Effect::UpdateConnection {
                id,
                draft: state.form.draft.clone(),
            }])
        }
        Action::ConnectionUpdated(connection) => {
            state.form.busy.updating = false;
            let description = messages::updated(&connection.name);
            state.list.upsert(connection.clone());
            finish_submit(state);
            state
                .outcomes
                .record(Operation::Update, Outcome::Succeeded(description.clone()));
            Some(vec![Effect::Notify(Notification::info(
                "Connection updated",
                description,
            ))])
        }
        Action::UpdateFailed(err) => {
            state.form.busy.updating = false;
            let msg = normalize_error(err, messages::UPDATE_FALLBACK);
            state.form.set_error(msg.clone());
            state.outcomes.record(Operation::Update, Outcome::Failed(msg));
            Some(vec![])
        }

        // ===== Delete =====
        Action::DeleteConnection(id) => {
            let Some(connection) = state.list.find(id) else {
                warn!(%id, "delete requested for unknown connection");
                let msg = messages::connection_not_found(id.as_str());
                state.outcomes.record(Operation::Delete, Outcome::Rejected(msg));
                return Some(vec![]);
            };
            let name = connection.name.clone();
            state.outcomes.record(Operation::Delete, Outcome::Pending);
            Some(vec![Effect::DeleteConnection {
                id: id.clone(),
                name,
            }])
        }
        Action::ConnectionDeleted { id, name, deleted } => {
            if !*deleted {
                // The backend answered but did not delete anything
                return Some(delete_failed(state, name, messages::delete_failed(name)));
            }
            state.list.remove(id);
            let description = messages::deleted(name);
            state
                .outcomes
                .record(Operation::Delete, Outcome::Succeeded(description.clone()));
            Some(vec![Effect::Notify(Notification::info(
                "Connection deleted",
                description,
            ))])
        }
        Action::DeleteFailed { id, name, error } => {
            let msg = normalize_error(error, messages::DELETE_FALLBACK);
            warn!(%id, error = %msg, "delete failed");
            Some(delete_failed(state, name, msg))
        }

        _ => None,
    }
}

fn finish_submit(state: &mut DialogState) {
    state.form.reset(false, &state.catalog);
    state.form.page = Page::List;
}

fn delete_failed(state: &mut DialogState, name: &str, outcome_msg: String) -> Vec<Effect> {
    state
        .outcomes
        .record(Operation::Delete, Outcome::Failed(outcome_msg));
    vec![Effect::Notify(Notification::destructive(
        "Delete failed",
        messages::delete_failed(name),
    ))]
}
