pub mod connection_repository;
pub mod notifier;

pub use connection_repository::{ConnectionRepository, RepositoryError};
pub use notifier::{CloseNotifier, Notification, NotificationVariant, Notifier};

#[cfg(any(test, feature = "test-support"))]
pub use connection_repository::MockConnectionRepository;
#[cfg(any(test, feature = "test-support"))]
pub use notifier::{MockCloseNotifier, MockNotifier};
