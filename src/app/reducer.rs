//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call the repository or the notifier
//! - Spawn async tasks
//!
//! Every remote call and notification is returned as an [`Effect`] for the
//! runner to execute, so the state machine is testable without mocks.

use crate::action::Action;
use crate::effect::Effect;
use crate::reducers::{reduce_form, reduce_lifecycle, reduce_navigation, reduce_reindex};
use crate::state::DialogState;

pub fn reduce(state: &mut DialogState, action: Action) -> Vec<Effect> {
    if let Some(effects) = reduce_navigation(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_form(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_lifecycle(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_reindex(state, &action) {
        return effects;
    }

    if !action.is_none() {
        tracing::debug!(?action, "unhandled action");
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialogConfig;
    use crate::domain::{Connection, ConnectionConfig, ConnectionId, ConnectionType};
    use crate::form_state::FieldUpdate;
    use crate::page::Page;
    use crate::ports::{Notification, RepositoryError};

    fn create_test_state() -> DialogState {
        DialogState::new(&DialogConfig::default())
    }

    fn loaded(state: &mut DialogState, connections: Vec<Connection>) {
        reduce(state, Action::OpenDialog);
        reduce(
            state,
            Action::ConnectionsLoaded {
                connections,
                types: vec![ConnectionType::new("github"), ConnectionType::new("jira")],
            },
        );
    }

    mod pure_actions {
        use super::*;

        #[test]
        fn none_returns_no_effects() {
            let mut state = create_test_state();
            assert!(reduce(&mut state, Action::None).is_empty());
        }

        #[test]
        fn load_after_failure_issues_load() {
            let mut state = create_test_state();
            reduce(&mut state, Action::OpenDialog);
            reduce(
                &mut state,
                Action::ConnectionsLoadFailed(RepositoryError::Transport("down".into())),
            );

            let effects = reduce(&mut state, Action::LoadAll);

            assert_eq!(effects, vec![Effect::LoadAll]);
            assert!(state.list.error.is_none());
        }
    }

    mod flows {
        use super::*;

        #[test]
        fn open_and_load_seeds_first_type() {
            let mut state = create_test_state();

            let effects = reduce(&mut state, Action::OpenDialog);
            assert_eq!(effects, vec![Effect::LoadAll]);
            loaded(&mut state, vec![]);

            assert_eq!(
                state.form.draft.connection_type,
                Some(ConnectionType::new("github"))
            );
            assert!(state.list.is_empty());
        }

        #[test]
        fn add_fill_submit_and_complete() {
            let mut state = create_test_state();
            loaded(&mut state, vec![]);

            reduce(&mut state, Action::AddClick);
            reduce(&mut state, Action::SetField(FieldUpdate::Name("Repo A".into())));
            let effects = reduce(&mut state, Action::Submit);
            assert!(matches!(effects.as_slice(), [Effect::CreateConnection { .. }]));

            let effects = reduce(
                &mut state,
                Action::ConnectionCreated(Connection::new(
                    "conn-1",
                    "Repo A",
                    "github",
                    ConnectionConfig::new(),
                )),
            );

            assert_eq!(state.page(), Page::List);
            assert_eq!(state.list.len(), 1);
            assert!(state.form.draft.name.is_empty());
            assert_eq!(
                effects,
                vec![Effect::Notify(Notification::info(
                    "Connection created",
                    "Repo A has been successfully created."
                ))]
            );
        }

        #[test]
        fn edit_then_type_change_is_refused() {
            let conn = Connection::new("conn-1", "Repo A", "github", ConnectionConfig::new());
            let mut state = create_test_state();
            loaded(&mut state, vec![conn.clone()]);

            reduce(&mut state, Action::EditClick(conn));
            reduce(&mut state, Action::ChangeType(ConnectionType::new("jira")));
            let effects = reduce(&mut state, Action::Submit);

            assert_eq!(
                state.form.draft.connection_type,
                Some(ConnectionType::new("github"))
            );
            assert!(matches!(
                effects.as_slice(),
                [Effect::UpdateConnection { id, .. }] if id == &ConnectionId::from("conn-1")
            ));
        }

        #[test]
        fn close_emits_dialog_closed() {
            let mut state = create_test_state();
            loaded(&mut state, vec![]);

            let effects = reduce(&mut state, Action::CloseDialog);

            assert_eq!(effects, vec![Effect::DialogClosed]);
            assert!(!state.is_open);
        }
    }
}
