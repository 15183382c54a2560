use patterns_core::config::PipelineConfig;
use patterns_core::error::CoreError;
use patterns_core::pipeline;
use std::path::Path;

fn workspace_root() -> &'static Path {
    // tools/build_patterns -> workspace root
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(Path::parent)
        .unwrap_or(manifest)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let config = PipelineConfig::for_workspace(workspace_root());
    match pipeline::run(&config) {
        Ok(artifact) => {
            println!("{}", artifact.summary.one_line());
        }
        Err(e) => {
            if let CoreError::Validation(v) = &e {
                let rule = v.rule();
                tracing::error!(
                    rule = rule.check_id(),
                    expected = rule.description(),
                    "authoring rule violated"
                );
            }
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
