use crate::artifact::Artifact;
use crate::deployer::{Connector, Deployer, Deployment};
use crate::error::Result;
use crate::shared::Config;
use std::io::Write;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Loads the configured artifact and deploys it.
pub async fn run<C: Connector>(config: Config, connector: C) -> Result<Deployment> {
    tracing::info!("deploying...");
    let artifact = Artifact::load(&config.artifact_path)?;
    tracing::info!(
        path = %config.artifact_path.display(),
        contract = artifact.contract_name.as_deref().unwrap_or("<unnamed>"),
        bytecode_len = artifact.bytecode.len(),
        "loaded artifact"
    );
    Deployer::new(config, connector).deploy(&artifact).await
}

/// Runs a deployment and reports its outcome: the address on `stdout` or the
/// error on `stderr`. Returns the process exit code.
pub async fn execute<C, O, E>(config: Config, connector: C, stdout: &mut O, stderr: &mut E) -> u8
where
    C: Connector,
    O: Write,
    E: Write,
{
    match run(config, connector).await {
        Ok(deployment) => {
            tracing::info!("deployment script executed successfully");
            match writeln!(stdout, "Contract deployed at address: {}", deployment.address) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    let _ = writeln!(stderr, "Error reporting deployed address {}: {}", deployment.address, e);
                    EXIT_FAILURE
                }
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "deployment failed");
            let _ = writeln!(stderr, "Error executing deployment script: {}", e);
            EXIT_FAILURE
        }
    }
}
