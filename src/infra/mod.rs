pub use conndeck_app as app;
pub use conndeck_domain as domain;

pub mod adapters;
pub mod config;
