mod catalog;
mod connection_type;
mod draft;
mod entity;
mod id;
mod name;
mod responses;

pub use catalog::TypeCatalog;
pub use connection_type::ConnectionType;
pub use draft::ConnectionDraft;
pub use entity::{Connection, ConnectionConfig};
pub use id::ConnectionId;
pub use name::{ConnectionName, ConnectionNameError};
pub use responses::{ReindexResponse, TestResult};
