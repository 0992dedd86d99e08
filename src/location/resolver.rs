//! Location resolver — one awaited request with a hard timeout.
//!
//! Flow: permission check → provider on a blocking thread → timeout → Fix or error.

use super::providers::{FixedProvider, IpProvider, LocationProvider, UnavailableProvider};
use super::types::{Fix, LocationError};
use crate::settings::{LocationSettings, ProviderKind};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::spawn_blocking;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

/// Share of the resolver's wait given to a single HTTP request. The blocking
/// thread keeps running after `timeout` fires, so the request must end first
/// or the runtime stalls on shutdown.
const REQUEST_BUDGET_FRACTION: f64 = 0.8;

fn request_budget(timeout: Duration) -> Duration {
    timeout.mul_f64(REQUEST_BUDGET_FRACTION)
}

pub struct LocationResolver {
    provider: Arc<dyn LocationProvider>,
    timeout: Duration,
    permission_granted: bool,
}

impl LocationResolver {
    pub fn new(provider: Arc<dyn LocationProvider>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            permission_granted: true,
        }
    }

    /// Build the resolver described by the location settings.
    pub fn from_settings(settings: &LocationSettings) -> Self {
        let timeout = settings.timeout();
        let provider: Arc<dyn LocationProvider> = match settings.provider {
            ProviderKind::Fixed => Arc::new(FixedProvider::new(settings.latitude, settings.longitude)),
            ProviderKind::Ip => Arc::new(IpProvider::new(request_budget(timeout))),
            ProviderKind::Unavailable => Arc::new(UnavailableProvider),
        };
        let mut resolver = Self::new(provider, timeout);
        resolver.set_permission(settings.permission_granted);
        resolver
    }

    pub fn set_permission(&mut self, granted: bool) {
        self.permission_granted = granted;
    }

    /// Ask the provider for the current position, waiting at most `self.timeout`.
    #[instrument(skip_all)]
    pub async fn obtain_current_position(&self) -> Result<Fix, LocationError> {
        if !self.permission_granted {
            warn!("location permission not granted, skipping provider");
            return Err(LocationError::PermissionDenied);
        }

        let provider = Arc::clone(&self.provider);
        let source = provider.source();
        debug!(%source, timeout_ms = self.timeout.as_millis() as u64, "requesting position");

        let task = spawn_blocking(move || provider.locate());
        let position = match timeout(self.timeout, task).await {
            Ok(Ok(result)) => result?,
            Ok(Err(join_error)) => return Err(LocationError::ServiceError(join_error.to_string())),
            Err(_) => {
                warn!("⏳ No position after {:?}", self.timeout);
                return Err(LocationError::Timeout(self.timeout));
            }
        };

        debug!(%position, "position fix");
        Ok(Fix { position, source })
    }
}
