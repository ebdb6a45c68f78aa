//! # Device Configuration Request

/// Operating parameters requested by `dev_configure`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DevConfig {
    /// Number of models the caller intends to load
    pub nb_models: u16,
    /// Number of queue pairs the caller intends to set up
    pub nb_queue_pairs: u16,
}

impl DevConfig {
    /// Create a configuration request
    pub const fn new(nb_models: u16, nb_queue_pairs: u16) -> Self {
        Self {
            nb_models,
            nb_queue_pairs,
        }
    }
}

static_assertions::assert_impl_all!(DevConfig: Send, Sync, Copy);
