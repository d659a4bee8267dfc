//! Single-shot device position requests
//!
//! A request resolves exactly once: a fix, a denial, or a timeout. Nothing
//! here retries. Dropping the request future (or aborting the task from
//! [`spawn_fix_request`]) cancels it.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::domain::GeoPoint;

pub const DEFAULT_FIX_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location services unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    Fix(GeoPoint),
    Denied(LocationError),
    TimedOut,
}

impl fmt::Display for LocationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationOutcome::Fix(p) => write!(f, "position fix at ({:.6}, {:.6})", p.lat, p.lng),
            LocationOutcome::Denied(e) => write!(f, "{}", e),
            LocationOutcome::TimedOut => write!(f, "position request timed out"),
        }
    }
}

/// Anything that can produce one position on demand
pub trait PositionSource {
    fn current_position(&self) -> impl Future<Output = Result<GeoPoint, LocationError>> + Send;
}

/// Always reports the same position, optionally after a delay
#[derive(Debug, Clone)]
pub struct FixedSource {
    point: GeoPoint,
    delay: Duration,
}

impl FixedSource {
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl PositionSource for FixedSource {
    fn current_position(&self) -> impl Future<Output = Result<GeoPoint, LocationError>> + Send {
        let (point, delay) = (self.point, self.delay);
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(point)
        }
    }
}

/// A device without usable positioning
#[derive(Debug, Clone)]
pub struct UnavailableSource {
    error: LocationError,
}

impl UnavailableSource {
    pub fn new(error: LocationError) -> Self {
        Self { error }
    }
}

impl PositionSource for UnavailableSource {
    fn current_position(&self) -> impl Future<Output = Result<GeoPoint, LocationError>> + Send {
        let error = self.error;
        async move { Err(error) }
    }
}

/// Ask `source` for one position, giving up after `timeout`
pub async fn request_fix<S: PositionSource>(source: &S, timeout: Duration) -> LocationOutcome {
    match tokio::time::timeout(timeout, source.current_position()).await {
        Ok(Ok(point)) => {
            info!(lat = point.lat, lng = point.lng, "position fix acquired");
            LocationOutcome::Fix(point)
        }
        Ok(Err(e)) => {
            warn!(error = %e, "position request denied");
            LocationOutcome::Denied(e)
        }
        Err(_) => {
            warn!(timeout_ms = timeout.as_millis() as u64, "position request timed out");
            LocationOutcome::TimedOut
        }
    }
}

/// Run [`request_fix`] on the runtime; abort the handle to cancel
pub fn spawn_fix_request<S>(source: Arc<S>, timeout: Duration) -> JoinHandle<LocationOutcome>
where
    S: PositionSource + Send + Sync + 'static,
{
    tokio::spawn(async move { request_fix(source.as_ref(), timeout).await })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fix() {
        let source = FixedSource::new(GeoPoint::new(56.34, -2.80));
        let outcome = request_fix(&source, DEFAULT_FIX_TIMEOUT).await;
        assert_eq!(outcome, LocationOutcome::Fix(GeoPoint::new(56.34, -2.80)));
    }

    #[tokio::test]
    async fn test_denied() {
        let source = UnavailableSource::new(LocationError::PermissionDenied);
        let outcome = request_fix(&source, DEFAULT_FIX_TIMEOUT).await;
        assert_eq!(
            outcome,
            LocationOutcome::Denied(LocationError::PermissionDenied)
        );
        assert_eq!(outcome.to_string(), "location permission denied");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout() {
        let source =
            FixedSource::new(GeoPoint::new(0.0, 0.0)).with_delay(Duration::from_secs(30));
        let outcome = request_fix(&source, DEFAULT_FIX_TIMEOUT).await;
        assert_eq!(outcome, LocationOutcome::TimedOut);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_fix_within_timeout() {
        let source = FixedSource::new(GeoPoint::new(1.0, 2.0)).with_delay(Duration::from_secs(5));
        let outcome = request_fix(&source, DEFAULT_FIX_TIMEOUT).await;
        assert_eq!(outcome, LocationOutcome::Fix(GeoPoint::new(1.0, 2.0)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_request_can_be_cancelled() {
        let source = Arc::new(
            FixedSource::new(GeoPoint::new(0.0, 0.0)).with_delay(Duration::from_secs(5)),
        );
        let handle = spawn_fix_request(source, DEFAULT_FIX_TIMEOUT);
        handle.abort();

        let err = handle.await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_spawned_request_resolves() {
        let source = Arc::new(FixedSource::new(GeoPoint::new(3.0, 4.0)));
        let outcome = spawn_fix_request(source, DEFAULT_FIX_TIMEOUT).await.unwrap();
        assert_eq!(outcome, LocationOutcome::Fix(GeoPoint::new(3.0, 4.0)));
    }
}
