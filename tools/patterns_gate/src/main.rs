use patterns_core::config::PipelineConfig;
use patterns_core::determinism::fingerprint::sha256_hex;
use patterns_core::loader::DirectoryReader;
use patterns_core::pipeline::{compile, write_artifact};
use std::path::Path;

struct GateResult {
    gate_id: &'static str,
    result: &'static str, // PASS|FAIL|NOT_APPLICABLE
    message: String,
}

fn workspace_root() -> &'static Path {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(Path::parent)
        .unwrap_or(manifest)
}

fn main() {
    // Release gate: the corpus must compile, compile byte-identically twice, and
    // match the committed lib/patterns.json. Exits non-zero on any FAIL.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let config = PipelineConfig::for_workspace(workspace_root());
    let gates = run_gates(&config);

    let mut any_fail = false;
    for g in &gates {
        println!("GATE {} {} {}", g.gate_id, g.result, g.message);
        if g.result == "FAIL" {
            any_fail = true;
        }
    }
    if any_fail {
        std::process::exit(1);
    }
}

fn run_gates(config: &PipelineConfig) -> Vec<GateResult> {
    let mut out = Vec::new();

    if let Err(e) = config.validate() {
        out.push(fail("GATE.PATTERNS.COMPILE", e.to_string()));
        return out;
    }

    let reader = DirectoryReader::new(&config.data_dir);
    let first = match compile(config, &reader) {
        Ok(a) => a,
        Err(e) => {
            out.push(fail("GATE.PATTERNS.COMPILE", e.to_string()));
            return out;
        }
    };
    out.push(pass(
        "GATE.PATTERNS.COMPILE",
        format!("{} entries", first.entries.len()),
    ));

    out.push(byte_stability_gate(config, &reader, &first.bytes));
    out.push(up_to_date_gate(&config.output_path, &first.sha256));
    out
}

// Two independent builds, each persisted through the writer, must be identical.
fn byte_stability_gate(
    config: &PipelineConfig,
    reader: &DirectoryReader,
    first_bytes: &[u8],
) -> GateResult {
    let gate_id = "GATE.PATTERNS.BYTE_STABILITY";
    let tmp = match tempfile::tempdir() {
        Ok(t) => t,
        Err(e) => return fail(gate_id, format!("tempdir: {}", e)),
    };
    let second = match compile(config, reader) {
        Ok(a) => a,
        Err(e) => return fail(gate_id, format!("second build failed: {}", e)),
    };

    let a = tmp.path().join("patterns_1.json");
    let b = tmp.path().join("patterns_2.json");
    let written = write_artifact(&a, first_bytes).and_then(|_| write_artifact(&b, &second.bytes));
    if let Err(e) = written {
        return fail(gate_id, e.to_string());
    }
    match (std::fs::read(&a), std::fs::read(&b)) {
        (Ok(x), Ok(y)) => {
            let (ha, hb) = (sha256_hex(&x), sha256_hex(&y));
            if ha == hb {
                pass(gate_id, format!("sha256={}", ha))
            } else {
                fail(gate_id, format!("sha256 {} != {}", ha, hb))
            }
        }
        (Err(e), _) | (_, Err(e)) => fail(gate_id, e.to_string()),
    }
}

fn up_to_date_gate(committed: &Path, fresh_sha256: &str) -> GateResult {
    let gate_id = "GATE.PATTERNS.UP_TO_DATE";
    if !committed.exists() {
        return GateResult {
            gate_id,
            result: "NOT_APPLICABLE",
            message: format!("{} not present", committed.display()),
        };
    }
    match std::fs::read(committed) {
        Ok(bytes) => {
            let committed_sha = sha256_hex(&bytes);
            if committed_sha == fresh_sha256 {
                pass(gate_id, "ok".to_string())
            } else {
                fail(
                    gate_id,
                    format!(
                        "{} is stale (sha256 {} != {}); rebuild it",
                        committed.display(),
                        committed_sha,
                        fresh_sha256
                    ),
                )
            }
        }
        Err(e) => fail(gate_id, e.to_string()),
    }
}

fn pass(gate_id: &'static str, message: String) -> GateResult {
    GateResult {
        gate_id,
        result: "PASS",
        message,
    }
}

fn fail(gate_id: &'static str, message: String) -> GateResult {
    tracing::warn!(gate = gate_id, %message, "gate failed");
    GateResult {
        gate_id,
        result: "FAIL",
        message,
    }
}
