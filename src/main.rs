use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wannianli::config::Config;
use wannianli::era::normalize_era_year;
use wannianli::form::{self, AWAITING_MESSAGE, FormInput, FormOutcome, INVALID_MESSAGE, ResultPanel};
use wannianli::month_view::MonthCalendarRenderer;
use wannianli::web::router;
use wannianli::web::state::AppState;
use wannianli::{DateConversionService, Mode};

#[derive(Parser)]
#[command(
    name = "wannianli",
    about = "萬年曆: convert between Gregorian and Chinese lunar dates"
)]
struct Cli {
    /// Configuration file (default: ./wannianli.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Gregorian date to lunar date (years below 1900 are 民國 years)
    ToLunar {
        year: i32,
        month: u32,
        day: u32,
        /// Also print the month calendar
        #[arg(long)]
        calendar: bool,
    },
    /// Lunar date to Gregorian date (years below 1900 are 民國 years)
    ToSolar {
        year: i32,
        month: u32,
        day: u32,
        /// The month is a leap month (閏月)
        #[arg(long)]
        leap: bool,
        /// Also print the month calendar
        #[arg(long)]
        calendar: bool,
    },
    /// Print a Gregorian month with lunar day names
    Month {
        year: i32,
        month: u32,
        /// Day to mark
        #[arg(long)]
        highlight: Option<u32>,
    },
    /// Serve the conversion form over HTTP
    Serve,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    // stdout carries command output, logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(&config.logging.filter))
        .init();

    match cli.command {
        Command::ToLunar {
            year,
            month,
            day,
            calendar,
        } => convert(FormInput {
            mode: Mode::SolarToLunar,
            year: Some(year),
            month: Some(month),
            day: Some(day),
            leap: false,
            calendar,
        }),
        Command::ToSolar {
            year,
            month,
            day,
            leap,
            calendar,
        } => convert(FormInput {
            mode: Mode::LunarToSolar,
            year: Some(year),
            month: Some(month),
            day: Some(day),
            leap,
            calendar,
        }),
        Command::Month {
            year,
            month,
            highlight,
        } => match form::check_month_bounds(year, month, highlight).and_then(|()| {
            MonthCalendarRenderer::new().render_month(normalize_era_year(year), month, highlight)
        }) {
            Ok(grid) => {
                print!("{grid}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{INVALID_MESSAGE} ({err})");
                ExitCode::FAILURE
            }
        },
        Command::Serve => match serve(config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!(%err, "server failed");
                ExitCode::FAILURE
            }
        },
    }
}

fn convert(input: FormInput) -> ExitCode {
    let service = DateConversionService::new();
    match form::evaluate(&service, &input) {
        FormOutcome::Converted(res) => {
            println!("{}", ResultPanel::from(&res));
            if input.calendar {
                let solar = res.solar();
                if let Ok(grid) = MonthCalendarRenderer::with_service(service).render_month(
                    solar.year,
                    solar.month,
                    Some(solar.day),
                ) {
                    print!("\n{grid}");
                }
            }
            ExitCode::SUCCESS
        }
        FormOutcome::Invalid(err) => {
            eprintln!("{INVALID_MESSAGE} ({err})");
            ExitCode::FAILURE
        }
        FormOutcome::AwaitingInput => {
            eprintln!("{AWAITING_MESSAGE}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let app = router::build(AppState::new(config.display.clone()));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("wannianli listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "failed to listen for ctrl-c");
        return;
    }
    info!("shutting down");
}
