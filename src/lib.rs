pub use conndeck_app as app;
pub use conndeck_domain as domain;
pub use conndeck_infra as infra;

pub mod error;
pub mod repl;
