//! Side effects returned by the reducer, executed by EffectRunner.

use crate::domain::{ConnectionDraft, ConnectionId};
use crate::ports::Notification;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetches connections and available types together
    LoadAll,
    TestConnection {
        draft: ConnectionDraft,
    },
    CreateConnection {
        draft: ConnectionDraft,
    },
    UpdateConnection {
        id: ConnectionId,
        draft: ConnectionDraft,
    },
    /// `name` is captured at trigger time for the completion notification
    DeleteConnection {
        id: ConnectionId,
        name: String,
    },
    ReindexConnection {
        id: ConnectionId,
        name: String,
    },

    Notify(Notification),
    DialogClosed,
}

impl Effect {
    /// Remote effects run as background tasks and resolve into a completion action.
    pub fn is_remote(&self) -> bool {
        !matches!(self, Effect::Notify(_) | Effect::DialogClosed)
    }
}
