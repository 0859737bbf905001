//! Geolocation providers.
//!
//! A provider yields a single position per call, or fails when geolocation
//! is unsupported or denied.

use crate::errors::{AppError, AppResult};
use crate::models::location::Coordinates;

pub trait LocationProvider {
    fn current_position(&self) -> AppResult<Coordinates>;
}

/// Always reports the same position (from config or command line).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

impl LocationProvider for FixedLocation {
    fn current_position(&self) -> AppResult<Coordinates> {
        Ok(self.0)
    }
}

/// Provider used when no position source is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_position(&self) -> AppResult<Coordinates> {
        Err(AppError::LocationUnavailable(
            "Geolocation is not supported".to_string(),
        ))
    }
}

/// Pick a fixed provider when coordinates are known, otherwise none.
pub fn provider_for(position: Option<Coordinates>) -> Box<dyn LocationProvider> {
    match position {
        Some(c) => Box::new(FixedLocation(c)),
        None => Box::new(NoLocation),
    }
}
