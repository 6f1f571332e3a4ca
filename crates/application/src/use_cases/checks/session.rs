use crate::ports::NetworkElement;
use jping_domain::DomainError;
use tracing::{debug, warn};

/// Ends a host session and hands back the outcome of the work done in it.
///
/// Every use case funnels its result through here so the session is released
/// on success and on every error path alike. A failed disconnect is logged and
/// never masks the work result.
pub(crate) async fn release<T>(
    mut element: Box<dyn NetworkElement>,
    result: Result<T, DomainError>,
) -> Result<T, DomainError> {
    match element.disconnect().await {
        Ok(()) => debug!(host = element.hostname(), "Session closed"),
        Err(e) => warn!(host = element.hostname(), error = %e, "Failed to close session"),
    }
    result
}
