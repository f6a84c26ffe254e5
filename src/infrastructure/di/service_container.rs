//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::DivinationService;
use crate::config::Settings;
use crate::domain::validate_table;
use crate::infrastructure::traits::{Clock, SystemClock};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Clock abstraction
    pub clock: Arc<dyn Clock>,
}

impl ServiceContainer {
    /// Create a new service container with the system clock chosen by settings.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let clock = Arc::new(SystemClock::new(settings.clock));
        Self::with_deps(settings, clock)
    }

    /// Create a service container with a custom clock (for testing, `--at`).
    ///
    /// Validates the trigram table once at startup.
    pub fn with_deps(settings: Settings, clock: Arc<dyn Clock>) -> InfraResult<Self> {
        validate_table().map_err(crate::application::ApplicationError::from)?;
        debug!("trigram table validated");

        Ok(Self {
            settings: Arc::new(settings),
            clock,
        })
    }

    pub fn divination_service(&self) -> DivinationService {
        DivinationService::new(Arc::clone(&self.clock))
    }
}
