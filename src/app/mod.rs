//! Connection dialog state machine: actions, reducers, effects and the
//! facade that drives them.

pub use conndeck_domain as domain;

pub mod action;
pub mod config;
pub mod controller;
pub mod effect;
pub mod effect_runner;
pub mod error_normalizer;
pub mod form_state;
pub mod messages;
pub mod outcome;
pub mod page;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod reindex_tracker;
pub mod state;

pub use action::Action;
pub use config::DialogConfig;
pub use controller::ConnectionsDialog;
pub use effect::Effect;
pub use form_state::{ConnectionFormState, FieldUpdate};
pub use outcome::{Operation, Outcome};
pub use page::Page;
pub use state::DialogState;
