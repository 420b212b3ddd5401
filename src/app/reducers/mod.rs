mod form;
mod helpers;
mod lifecycle;
mod navigation;
mod reindex;

pub use form::reduce_form;
pub use lifecycle::reduce_lifecycle;
pub use navigation::reduce_navigation;
pub use reindex::reduce_reindex;
