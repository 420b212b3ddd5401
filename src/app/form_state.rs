use crate::domain::{
    Connection, ConnectionConfig, ConnectionDraft, ConnectionType, TestResult, TypeCatalog,
};
use crate::messages;
use crate::page::Page;

/// One-shot flags gating the form's remote operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyFlags {
    pub testing: bool,
    pub creating: bool,
    pub updating: bool,
}

impl BusyFlags {
    pub fn any(&self) -> bool {
        self.testing || self.creating || self.updating
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A single edit to the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    /// Routed through [`ConnectionFormState::change_type`].
    Type(ConnectionType),
    Config {
        key: String,
        value: serde_json::Value,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{}", messages::TYPE_IMMUTABLE)]
    TypeLocked,
}

/// Draft, page, and transient feedback of the create/edit form.
#[derive(Debug, Clone, Default)]
pub struct ConnectionFormState {
    pub draft: ConnectionDraft,
    pub page: Page,
    pub test_result: Option<TestResult>,
    pub dialog_error: Option<String>,
    pub busy: BusyFlags,
}

impl ConnectionFormState {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Outside edit mode the draft is replaced by a fresh one preselecting the
    /// catalog's first type. In edit mode the draft is kept and only feedback
    /// and busy flags are cleared.
    pub fn reset(&mut self, edit_mode: bool, catalog: &TypeCatalog) {
        if !edit_mode {
            self.draft = ConnectionDraft::new(catalog.first().cloned());
        }
        self.clear_feedback();
        self.busy.clear();
    }

    pub fn clear_feedback(&mut self) {
        self.test_result = None;
        self.dialog_error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.dialog_error = Some(message.into());
    }

    pub fn set_field(&mut self, update: FieldUpdate) -> Result<(), FormError> {
        self.dialog_error = None;
        match update {
            FieldUpdate::Name(name) => self.draft.name = name,
            FieldUpdate::Type(ty) => self.change_type(ty)?,
            FieldUpdate::Config { key, value } => {
                self.draft.config.insert(key, value);
            }
        }
        Ok(())
    }

    pub fn replace_config(&mut self, config: ConnectionConfig) {
        self.draft.config = config;
        self.dialog_error = None;
    }

    /// Switching type invalidates the type-specific config and any test result.
    pub fn change_type(&mut self, ty: ConnectionType) -> Result<(), FormError> {
        if self.is_type_locked() {
            return Err(FormError::TypeLocked);
        }
        self.draft.connection_type = Some(ty);
        self.draft.config = ConnectionConfig::new();
        self.clear_feedback();
        Ok(())
    }

    /// Preselects the catalog's first type if the draft has none yet.
    pub fn seed_type(&mut self, catalog: &TypeCatalog) {
        if self.draft.connection_type.is_none() {
            self.draft.connection_type = catalog.first().cloned();
        }
    }

    pub fn begin_edit(&mut self, connection: &Connection) {
        self.draft = ConnectionDraft::from_connection(connection);
        self.page = Page::Edit;
        self.clear_feedback();
    }

    pub fn is_type_locked(&self) -> bool {
        self.page == Page::Edit || self.draft.is_editing()
    }

    /// Flag of the submit operation matching the current page.
    pub fn is_submitting(&self) -> bool {
        match self.page {
            Page::Edit => self.busy.updating,
            Page::Add | Page::List => self.busy.creating,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.page.is_form()
            && !self.draft.name.is_empty()
            && self.draft.has_type()
            && !self.busy.testing
            && !self.is_submitting()
    }

    pub fn can_test(&self) -> bool {
        self.draft.has_type() && !self.busy.testing
    }
}
