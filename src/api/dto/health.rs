//! DTOs for health check endpoint.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Result of the object store reachability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageStatus {
    Ok,
    Error,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: StorageCheck,
}

#[derive(Debug, Serialize)]
pub struct StorageCheck {
    pub status: StorageStatus,
    pub message: &'static str,
}

impl HealthResponse {
    /// Builds the response from the object store reachability check.
    pub fn from_storage(reachable: bool) -> Self {
        let (status, storage) = if reachable {
            (
                ServiceStatus::Healthy,
                StorageCheck {
                    status: StorageStatus::Ok,
                    message: "Object store reachable",
                },
            )
        } else {
            (
                ServiceStatus::Degraded,
                StorageCheck {
                    status: StorageStatus::Error,
                    message: "Object store unreachable",
                },
            )
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { storage },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_serializes_lowercase() {
        let json = serde_json::to_value(HealthResponse::from_storage(false)).unwrap();

        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["storage"]["status"], "error");
        assert_eq!(json["checks"]["storage"]["message"], "Object store unreachable");
    }
}
