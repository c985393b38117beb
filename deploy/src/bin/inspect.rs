use deploy::artifact::Artifact;
use deploy::shared;
use std::path::PathBuf;
use std::process::ExitCode;

/// Prints what `deploy` would send for an artifact without touching the
/// network. Usage: `inspect [ARTIFACT_PATH]`.
fn main() -> ExitCode {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(shared::artifact_path_from_env);
    match Artifact::load(&path) {
        Ok(artifact) => {
            println!("Artifact: {}", path.display());
            println!("{}", artifact.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("load error: {}", e);
            ExitCode::FAILURE
        }
    }
}
