mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, ConsentAction, PointsAction};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let app = commands::App::open(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Launch {
            events,
            event_delay_ms,
            dwell_ms,
        } => commands::launch::run(&app, &events, event_delay_ms, dwell_ms),
        Commands::Consent { action } => match action {
            ConsentAction::Accept => commands::consent::run_accept(&app),
            ConsentAction::Reset => commands::consent::run_reset(&app),
            ConsentAction::Status => commands::consent::run_status(&app),
        },
        Commands::Points { action } => match action {
            Some(PointsAction::Show) | None => commands::points::run_show(&app),
            Some(PointsAction::SetPrimary { value }) => {
                commands::points::run_set_primary(&app, &value)
            }
            Some(PointsAction::SetSecondary { value }) => {
                commands::points::run_set_secondary(&app, &value)
            }
            Some(PointsAction::Resume { locator }) => {
                commands::points::run_resume(&app, locator.as_deref())
            }
            Some(PointsAction::Reset) => commands::points::run_reset(&app),
        },
        Commands::Meals { action } => commands::meals::run(&app, action),
        Commands::Templates { action } => commands::templates::run(&app, action),
        Commands::Status => commands::status::run(&app),
        Commands::Version => commands::version::run(),
    }
}
