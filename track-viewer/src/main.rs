use std::process::ExitCode;

use clap::Parser;
use snafu::ResultExt;
use track_viewer::{
    cli::Cli,
    error::{Result, error::SettingsSnafu},
    settings::Settings,
    startup::{App, init_tracer},
};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::new().context(SettingsSnafu) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracer(settings.log_level);

    match run(cli, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Failed submissions are already logged by the app.
            if e.fetch_error().is_none() && e.projection_error().is_none() {
                error!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, mut settings: Settings) -> Result<()> {
    if let Some(period) = cli.period {
        settings.marine_traffic.period = period;
    }

    let mut app = App::build(settings)?;

    app.submit(&cli.query()).await?;
    app.write(cli.output.as_deref())
}
