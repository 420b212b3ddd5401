//! Re-index sub-reducer.
//!
//! Triggers are fire-and-forget but at most one per connection id is
//! outstanding; the tracker entry is cleared on every resolution.

use tracing::{debug, warn};

use crate::action::Action;
use crate::effect::Effect;
use crate::error_normalizer::normalize_error;
use crate::messages;
use crate::outcome::{Operation, Outcome};
use crate::ports::Notification;
use crate::state::DialogState;

use super::helpers::ignore;

pub fn reduce_reindex(state: &mut DialogState, action: &Action) -> Option<Vec<Effect>> {
    match action {
        Action::ReindexConnection(id) => {
            if !state.reindex.begin(id) {
                debug!(%id, "re-index already outstanding");
                return Some(ignore(state, Operation::Reindex));
            }
            let name = state.connection_label(id);
            state.outcomes.record(Operation::Reindex, Outcome::Pending);
            Some(vec![
                Effect::Notify(Notification::info(
                    messages::reindex_started_title(&name),
                    messages::REINDEX_STARTED_DESCRIPTION,
                )),
                Effect::ReindexConnection {
                    id: id.clone(),
                    name,
                },
            ])
        }
        Action::ReindexCompleted { id, name, response } => {
            state.reindex.finish(id);
            let description = response
                .message()
                .map_or_else(|| messages::reindex_initiated(name), str::to_string);
            state
                .outcomes
                .record(Operation::Reindex, Outcome::Succeeded(description.clone()));
            Some(vec![Effect::Notify(Notification::info(
                "Re-index initiated",
                description,
            ))])
        }
        Action::ReindexFailed { id, name, error } => {
            state.reindex.finish(id);
            let msg = normalize_error(error, messages::REINDEX_FALLBACK);
            warn!(%id, %name, error = %msg, "re-index failed");
            state
                .outcomes
                .record(Operation::Reindex, Outcome::Failed(msg.clone()));
            Some(vec![Effect::Notify(Notification::destructive(
                "Re-index failed",
                msg,
            ))])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialogConfig;
    use crate::domain::{Connection, ConnectionConfig, ConnectionId, ReindexResponse};
    use crate::ports::RepositoryError;
    use rstest::rstest;

    fn state_with_index() -> DialogState {
        let mut state = DialogState::new(&DialogConfig::default());
        state.list.upsert(Connection::new(
            "conn-1",
            "Monorepo",
            "code_index",
            ConnectionConfig::new(),
        ));
        state
    }

    fn id() -> ConnectionId {
        ConnectionId::from("conn-1")
    }

    mod trigger {
        use super::*;

        #[test]
        fn marks_in_flight_and_notifies_before_call() {
            let mut state = state_with_index();

            let effects = reduce_reindex(&mut state, &Action::ReindexConnection(id())).unwrap();

            assert!(state.reindex.is_in_flight(&id()));
            assert_eq!(
                effects,
                vec![
                    Effect::Notify(Notification::info(
                        "Re-indexing Monorepo...",
                        "Fetching latest data and updating index."
                    )),
                    Effect::ReindexConnection {
                        id: id(),
                        name: "Monorepo".to_string(),
                    },
                ]
            );
        }

        #[test]
        fn second_trigger_while_outstanding_is_noop() {
            let mut state = state_with_index();
            reduce_reindex(&mut state, &Action::ReindexConnection(id()));

            let effects = reduce_reindex(&mut state, &Action::ReindexConnection(id())).unwrap();

            assert!(effects.is_empty());
            assert_eq!(state.reindex.len(), 1);
            assert_eq!(
                state.outcomes.get(Operation::Reindex),
                Some(&Outcome::Ignored)
            );
        }

        #[test]
        fn different_ids_run_concurrently() {
            let mut state = state_with_index();
            reduce_reindex(&mut state, &Action::ReindexConnection(id()));

            let effects = reduce_reindex(
                &mut state,
                &Action::ReindexConnection(ConnectionId::from("conn-2")),
            )
            .unwrap();

            assert_eq!(effects.len(), 2);
            assert_eq!(state.reindex.len(), 2);
        }

        #[test]
        fn unknown_id_uses_id_as_label() {
            let mut state = DialogState::new(&DialogConfig::default());

            let effects = reduce_reindex(
                &mut state,
                &Action::ReindexConnection(ConnectionId::from("ghost")),
            )
            .unwrap();

            assert!(matches!(
                effects.last(),
                Some(Effect::ReindexConnection { name, .. }) if name == "ghost"
            ));
        }
    }

    mod resolution {
        use super::*;

        #[rstest]
        #[case(ReindexResponse::with_message("queued"), "queued")]
        #[case(ReindexResponse::default(), "Monorepo is being re-indexed.")]
        #[case(ReindexResponse::with_message("  "), "Monorepo is being re-indexed.")]
        fn completion_clears_tracker_and_notifies(
            #[case] response: ReindexResponse,
            #[case] expected: &str,
        ) {
            let mut state = state_with_index();
            reduce_reindex(&mut state, &Action::ReindexConnection(id()));

            let effects = reduce_reindex(
                &mut state,
                &Action::ReindexCompleted {
                    id: id(),
                    name: "Monorepo".to_string(),
                    response,
                },
            )
            .unwrap();

            assert!(state.reindex.is_empty());
            assert_eq!(
                effects,
                vec![Effect::Notify(Notification::info(
                    "Re-index initiated",
                    expected
                ))]
            );
        }

        #[test]
        fn failure_clears_tracker_and_notifies_destructively() {
            let mut state = state_with_index();
            reduce_reindex(&mut state, &Action::ReindexConnection(id()));

            let effects = reduce_reindex(
                &mut state,
                &Action::ReindexFailed {
                    id: id(),
                    name: "Monorepo".to_string(),
                    error: RepositoryError::Rejected(String::new()),
                },
            )
            .unwrap();

            assert!(!state.reindex.is_in_flight(&id()));
            assert_eq!(
                effects,
                vec![Effect::Notify(Notification::destructive(
                    "Re-index failed",
                    messages::REINDEX_FALLBACK
                ))]
            );
        }

        #[test]
        fn trigger_allowed_again_after_resolution() {
            let mut state = state_with_index();
            reduce_reindex(&mut state, &Action::ReindexConnection(id()));
            reduce_reindex(
                &mut state,
                &Action::ReindexFailed {
                    id: id(),
                    name: "Monorepo".to_string(),
                    error: RepositoryError::Transport("down".to_string()),
                },
            );

            let effects = reduce_reindex(&mut state, &Action::ReindexConnection(id())).unwrap();

            assert_eq!(effects.len(), 2);
        }
    }
}
