use std::fmt;
use std::str::FromStr;

use candle_core::Device;
use tracing::{info, warn};

use super::error::ModelError;

/// Requested compute device. Resolved once at startup with [`select_device`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevicePreference {
    /// First available GPU backend compiled in, else CPU.
    #[default]
    Auto,
    Cpu,
    Cuda,
    Metal,
}

impl FromStr for DevicePreference {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "cpu" => Ok(Self::Cpu),
            "cuda" => Ok(Self::Cuda),
            "metal" => Ok(Self::Metal),
            other => Err(ModelError::InvalidConfig {
                reason: format!("unknown device '{other}', expected auto, cpu, cuda or metal"),
            }),
        }
    }
}

impl fmt::Display for DevicePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Cpu => "cpu",
            Self::Cuda => "cuda",
            Self::Metal => "metal",
        };
        f.write_str(name)
    }
}

/// Resolves a [`DevicePreference`] into a candle device.
///
/// An explicit GPU preference fails when the backend is missing; `Auto` falls
/// back to CPU with a warning.
pub fn select_device(preference: DevicePreference) -> Result<Device, ModelError> {
    match preference {
        DevicePreference::Cpu => {
            info!("Using CPU device (explicitly requested)");
            Ok(Device::Cpu)
        }
        DevicePreference::Cuda => try_cuda().map_err(|reason| ModelError::DeviceUnavailable {
            device: "cuda".to_string(),
            reason,
        }),
        DevicePreference::Metal => try_metal().map_err(|reason| ModelError::DeviceUnavailable {
            device: "metal".to_string(),
            reason,
        }),
        DevicePreference::Auto => {
            let mut failures: Vec<String> = Vec::new();

            if cfg!(feature = "metal") {
                match try_metal() {
                    Ok(device) => return Ok(device),
                    Err(msg) => {
                        warn!(error = %msg, "Metal device unavailable");
                        failures.push(format!("metal failed: {msg}"));
                    }
                }
            }

            if cfg!(feature = "cuda") {
                match try_cuda() {
                    Ok(device) => return Ok(device),
                    Err(msg) => {
                        warn!(error = %msg, "CUDA device unavailable");
                        failures.push(format!("cuda failed: {msg}"));
                    }
                }
            }

            let reason = if !cfg!(any(feature = "metal", feature = "cuda")) {
                "no GPU backend compiled".to_string()
            } else if failures.is_empty() {
                "no GPU device available".to_string()
            } else {
                failures.join("; ")
            };

            warn!(reason = %reason, "Falling back to CPU device");
            Ok(Device::Cpu)
        }
    }
}

#[cfg(feature = "cuda")]
fn try_cuda() -> Result<Device, String> {
    let device = Device::new_cuda(0).map_err(|e| e.to_string())?;
    info!("Using CUDA GPU acceleration");
    Ok(device)
}

#[cfg(not(feature = "cuda"))]
fn try_cuda() -> Result<Device, String> {
    Err("binary built without the `cuda` feature".to_string())
}

#[cfg(feature = "metal")]
fn try_metal() -> Result<Device, String> {
    let device = Device::new_metal(0).map_err(|e| e.to_string())?;
    info!("Using Metal GPU acceleration");
    Ok(device)
}

#[cfg(not(feature = "metal"))]
fn try_metal() -> Result<Device, String> {
    Err("binary built without the `metal` feature".to_string())
}
