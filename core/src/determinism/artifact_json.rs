use crate::error::CoreResult;
use serde::Serialize;

// Artifact layout:
// - UTF-8 JSON (no BOM)
// - two-space indentation
// - struct fields in declaration order, map keys in authored order
// - single trailing newline
pub fn render_artifact_json<T: Serialize + ?Sized>(value: &T) -> CoreResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}
