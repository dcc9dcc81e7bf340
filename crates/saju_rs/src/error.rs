//! Error types for the service layer.

use saju_base::SajuError;
use saju_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error(transparent)]
    Chart(#[from] SajuError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
