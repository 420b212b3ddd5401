//! Shared helper functions for sub-reducers.

use tracing::debug;

use crate::effect::Effect;
use crate::outcome::{Operation, Outcome};
use crate::state::DialogState;

/// Issues a load unless one is already running.
pub fn begin_load(state: &mut DialogState) -> Vec<Effect> {
    if state.list.loading {
        return ignore(state, Operation::Load);
    }
    state.list.loading = true;
    state.list.error = None;
    state.outcomes.record(Operation::Load, Outcome::Pending);
    vec![Effect::LoadAll]
}

/// Local precondition failure: surfaced as the dialog error, nothing is sent.
pub fn reject(state: &mut DialogState, operation: Operation, message: &str) -> Vec<Effect> {
    debug!(%operation, message, "rejected before reaching the repository");
    state.form.set_error(message);
    state
        .outcomes
        .record(operation, Outcome::Rejected(message.to_string()));
    vec![]
}

pub fn ignore(state: &mut DialogState, operation: Operation) -> Vec<Effect> {
    debug!(%operation, "already in flight, ignoring");
    state.outcomes.record(operation, Outcome::Ignored);
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialogConfig;

    #[test]
    fn begin_load_twice_emits_once() {
        let mut state = DialogState::new(&DialogConfig::default());

        let first = begin_load(&mut state);
        let second = begin_load(&mut state);

        assert_eq!(first, vec![Effect::LoadAll]);
        assert!(second.is_empty());
        assert_eq!(state.outcomes.get(Operation::Load), Some(&Outcome::Ignored));
    }

    #[test]
    fn begin_load_clears_previous_error() {
        let mut state = DialogState::new(&DialogConfig::default());
        state.list.error = Some("boom".to_string());

        begin_load(&mut state);

        assert!(state.list.error.is_none());
        assert!(state.list.loading);
    }

    #[test]
    fn reject_sets_dialog_error() {
        let mut state = DialogState::new(&DialogConfig::default());

        let effects = reject(&mut state, Operation::Create, "nope");

        assert!(effects.is_empty());
        assert_eq!(state.form.dialog_error.as_deref(), Some("nope"));
        assert_eq!(
            state.outcomes.get(Operation::Create),
            Some(&Outcome::Rejected("nope".to_string()))
        );
    }
}
