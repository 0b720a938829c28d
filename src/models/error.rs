use thiserror::Error;

/// Errors from device selection.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{device} device unavailable: {reason}")]
    DeviceUnavailable { device: String, reason: String },

    #[error("invalid model configuration: {reason}")]
    InvalidConfig { reason: String },
}
