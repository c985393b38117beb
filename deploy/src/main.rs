use deploy::deployer::AlloyConnector;
use deploy::logging;
use deploy::runner::{self, EXIT_FAILURE};
use deploy::shared::Config;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::initialize(logging::DEFAULT_FILTER);
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error executing deployment script: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    let code = runner::execute(
        config,
        AlloyConnector,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;
    ExitCode::from(code)
}
