use std::collections::HashMap;
use std::fmt;

/// Operations reported at the controller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Load,
    Test,
    Create,
    Update,
    Delete,
    Reindex,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Load => "load",
            Self::Test => "test",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Reindex => "reindex",
        };
        write!(f, "{}", name)
    }
}

/// Result of the latest invocation of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Request issued, resolution not yet received.
    Pending,
    Succeeded(String),
    /// The backend (or transport) failed; message is normalized.
    Failed(String),
    /// Local precondition failed; nothing was sent.
    Rejected(String),
    /// Duplicate trigger while the same operation was in flight.
    Ignored,
}

impl Outcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(msg) | Self::Failed(msg) | Self::Rejected(msg) => Some(msg),
            Self::Pending | Self::Ignored => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Outcomes {
    latest: HashMap<Operation, Outcome>,
}

impl Outcomes {
    pub fn record(&mut self, operation: Operation, outcome: Outcome) {
        self.latest.insert(operation, outcome);
    }

    pub fn get(&self, operation: Operation) -> Option<&Outcome> {
        self.latest.get(&operation)
    }

    pub fn forget(&mut self, operation: Operation) -> Option<Outcome> {
        self.latest.remove(&operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_overwrites_previous_outcome() {
        let mut outcomes = Outcomes::default();
        outcomes.record(Operation::Create, Outcome::Pending);
        outcomes.record(Operation::Create, Outcome::Succeeded("done".to_string()));

        assert_eq!(
            outcomes.get(Operation::Create),
            Some(&Outcome::Succeeded("done".to_string()))
        );
        assert!(outcomes.get(Operation::Update).is_none());
    }

    #[test]
    fn message_is_absent_for_pending_and_ignored() {
        assert_eq!(Outcome::Pending.message(), None);
        assert_eq!(Outcome::Ignored.message(), None);
        assert_eq!(Outcome::Rejected("no".to_string()).message(), Some("no"));
    }
}
