//! Service context - dependencies shared by every board

use std::sync::Arc;

use highlight_core::traits::ChannelGateway;

use super::eligibility::EligibilityFilter;

/// Service context containing shared dependencies
///
/// Cloning is cheap; all boards of one registry share the same gateway and
/// eligibility filter.
#[derive(Clone)]
pub struct ServiceContext {
    gateway: Arc<dyn ChannelGateway>,
    eligibility: Arc<EligibilityFilter>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(gateway: Arc<dyn ChannelGateway>, eligibility: EligibilityFilter) -> Self {
        Self {
            gateway,
            eligibility: Arc::new(eligibility),
        }
    }

    /// Get the channel gateway
    pub fn gateway(&self) -> &dyn ChannelGateway {
        self.gateway.as_ref()
    }

    /// Get the eligibility filter
    pub fn eligibility(&self) -> &EligibilityFilter {
        self.eligibility.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("eligibility", &self.eligibility)
            .finish_non_exhaustive()
    }
}
