pub mod memory_repository;
pub mod tracing_notifier;

pub use memory_repository::InMemoryConnectionRepository;
pub use tracing_notifier::TracingNotifier;
