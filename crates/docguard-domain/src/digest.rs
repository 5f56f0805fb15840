//! Content digest of a validation report.

use docguard_types::ValidationReport;
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the report's canonical JSON serialization.
///
/// Equal reports always produce equal digests; run timestamps live in the envelope, not the
/// report, so the digest is stable across runs.
pub fn digest(report: &ValidationReport) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(report)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
