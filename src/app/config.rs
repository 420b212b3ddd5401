use crate::page::Page;

/// Per-dialog settings supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogConfig {
    /// Page shown on every open.
    pub initial_page: Page,
}
