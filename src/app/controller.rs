//! Facade owning the dialog state.
//!
//! Every intent goes through [`reduce`]; the effects it returns are handed to
//! the [`EffectRunner`] and completions come back on the action channel. The
//! async operations drive that loop until their own outcome is no longer
//! pending and report it.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::action::Action;
use crate::config::DialogConfig;
use crate::domain::{Connection, ConnectionConfig, ConnectionId, ConnectionType};
use crate::effect_runner::EffectRunner;
use crate::form_state::FieldUpdate;
use crate::outcome::{Operation, Outcome};
use crate::page::Page;
use crate::ports::{CloseNotifier, ConnectionRepository, Notifier};
use crate::reducer::reduce;
use crate::state::DialogState;

const ACTION_CHANNEL_CAPACITY: usize = 256;

pub struct ConnectionsDialog {
    state: DialogState,
    runner: EffectRunner,
    action_rx: mpsc::Receiver<Action>,
    in_flight: usize,
}

impl ConnectionsDialog {
    pub fn new(
        config: DialogConfig,
        repository: Arc<dyn ConnectionRepository>,
        notifier: Arc<dyn Notifier>,
        close_notifier: Arc<dyn CloseNotifier>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        Self {
            state: DialogState::new(&config),
            runner: EffectRunner::new(repository, notifier, close_notifier, action_tx),
            action_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    /// Repository calls issued but not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatch(&mut self, action: Action) {
        if action.is_completion() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        let effects = reduce(&mut self.state, action);
        self.in_flight += self.runner.run(effects);
    }

    /// Next completion, or `None` when nothing is in flight.
    pub async fn recv_completion(&mut self) -> Option<Action> {
        if self.in_flight == 0 {
            return None;
        }
        self.action_rx.recv().await
    }

    /// Like [`Self::recv_completion`] but never resolves while idle, for use
    /// as a `tokio::select!` branch.
    pub async fn next_completion(&mut self) -> Action {
        match self.recv_completion().await {
            Some(action) => action,
            None => std::future::pending().await,
        }
    }

    /// Applies completions until nothing is in flight.
    pub async fn settle(&mut self) {
        while let Some(action) = self.recv_completion().await {
            self.dispatch(action);
        }
    }

    // ===== Dialog =====

    /// Opens on the configured initial page and loads connections and types.
    pub async fn open(&mut self) -> Outcome {
        self.run_until_resolved(Action::OpenDialog, Operation::Load)
            .await
    }

    pub fn close(&mut self) {
        self.dispatch(Action::CloseDialog);
    }

    pub async fn load_all(&mut self) -> Outcome {
        self.run_until_resolved(Action::LoadAll, Operation::Load)
            .await
    }

    /// Reloads only from the list error state.
    pub async fn retry_load(&mut self) -> Outcome {
        if self.state.list.error.is_none() {
            debug!("retry requested without a load error");
            return Outcome::Ignored;
        }
        self.load_all().await
    }

    // ===== Pages =====

    pub fn add_click(&mut self) {
        self.dispatch(Action::AddClick);
    }

    pub fn edit_click(&mut self, connection: Connection) {
        self.dispatch(Action::EditClick(connection));
    }

    /// Opens the edit page for a listed connection. Returns `false` if the id
    /// is not in the list.
    pub fn edit_by_id(&mut self, id: &ConnectionId) -> bool {
        let Some(connection) = self.state.list.find(id).cloned() else {
            return false;
        };
        self.edit_click(connection);
        true
    }

    pub fn back(&mut self) {
        self.dispatch(Action::Back);
    }

    // ===== Form =====

    pub fn set_field(&mut self, update: FieldUpdate) {
        self.dispatch(Action::SetField(update));
    }

    pub fn change_type(&mut self, ty: ConnectionType) {
        self.dispatch(Action::ChangeType(ty));
    }

    pub fn replace_config(&mut self, config: ConnectionConfig) {
        self.dispatch(Action::ReplaceConfig(config));
    }

    pub fn reset(&mut self, edit_mode: bool) {
        self.dispatch(Action::ResetForm { edit_mode });
    }

    // ===== Remote operations =====

    pub async fn test(&mut self) -> Outcome {
        self.run_until_resolved(Action::TestConnection, Operation::Test)
            .await
    }

    pub async fn create(&mut self) -> Outcome {
        self.run_until_resolved(Action::SubmitCreate, Operation::Create)
            .await
    }

    pub async fn update(&mut self) -> Outcome {
        self.run_until_resolved(Action::SubmitUpdate, Operation::Update)
            .await
    }

    /// Create on the add page, update on the edit page.
    pub async fn submit(&mut self) -> Outcome {
        match self.state.page() {
            Page::Add => self.create().await,
            Page::Edit => self.update().await,
            Page::List => Outcome::Ignored,
        }
    }

    pub async fn delete(&mut self, id: &ConnectionId) -> Outcome {
        self.run_until_resolved(Action::DeleteConnection(id.clone()), Operation::Delete)
            .await
    }

    /// Fire-and-forget: returns `Pending` once triggered, or `Ignored` if a
    /// trigger for this id is still outstanding. The resolution arrives via
    /// [`Self::next_completion`].
    pub fn reindex(&mut self, id: &ConnectionId) -> Outcome {
        self.state.outcomes.forget(Operation::Reindex);
        self.dispatch(Action::ReindexConnection(id.clone()));
        self.outcome(Operation::Reindex)
    }

    fn outcome(&self, operation: Operation) -> Outcome {
        self.state
            .outcomes
            .get(operation)
            .cloned()
            .unwrap_or(Outcome::Ignored)
    }

    async fn run_until_resolved(&mut self, action: Action, operation: Operation) -> Outcome {
        self.state.outcomes.forget(operation);
        self.dispatch(action);
        while self.outcome(operation).is_pending() {
            let Some(completion) = self.recv_completion().await else {
                break;
            };
            self.dispatch(completion);
        }
        self.outcome(operation)
    }
}
