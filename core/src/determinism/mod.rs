pub mod artifact_json;
pub mod fingerprint;
