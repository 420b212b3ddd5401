pub mod connection;

pub use connection::{
    Connection, ConnectionConfig, ConnectionDraft, ConnectionId, ConnectionName,
    ConnectionNameError, ConnectionType, ReindexResponse, TestResult, TypeCatalog,
};
