use std::process::ExitCode;

use boxflow::{AppConfig, CliDriver, DriverResult, FlowError, FlowRuntime};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("boxflow: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> DriverResult<()> {
    let config = AppConfig::from_env().map_err(FlowError::from)?;
    let runtime = FlowRuntime::from_app_config(&config)?;
    CliDriver::new(runtime).run()
}
