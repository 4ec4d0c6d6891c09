use clap::Parser;
use orbitviz::app::AppState;
use orbitviz::config::{Settings, Theme};
use orbitviz::constants::DEFAULT_FIGURE_FILE;
use orbitviz::errors::OrbitVizError;
use orbitviz::input::Field;
use orbitviz::render::{export_csv, RasterRenderer};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orbitviz")]
#[command(about = "Draw a Keplerian conic from six classical orbital elements")]
struct Cli {
    /// Semi-major axis magnitude [km]
    #[arg(long, allow_hyphen_values = true)]
    a: String,

    /// Eccentricity
    #[arg(long, allow_hyphen_values = true)]
    e: String,

    /// Inclination [deg]
    #[arg(long, allow_hyphen_values = true)]
    i: String,

    /// Right ascension of the ascending node [deg]
    #[arg(long, allow_hyphen_values = true)]
    raan: String,

    /// Argument of perigee [deg]
    #[arg(long, allow_hyphen_values = true)]
    argp: String,

    /// True anomaly at epoch [deg] (shown in the details only)
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    nu: String,

    /// PNG file for the figure, relative to the configured output directory
    #[arg(short, long, default_value = DEFAULT_FIGURE_FILE)]
    output: PathBuf,

    /// Also write the sampled points to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// JSON settings file (defaults to the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Use the light theme
    #[arg(long)]
    light: bool,

    /// Reject a <= 0, e < 0 and non-finite elements
    #[arg(long)]
    strict: bool,

    /// Print the element summary
    #[arg(long)]
    details: bool,

    /// Print the calculation result as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Failures already reported through the state's messages come back as
/// `ExitCode::FAILURE`; anything else is returned for `main` to print.
fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    let mut settings = Settings::load(cli.settings.as_deref())?;
    if cli.light {
        settings.theme = Theme::Light;
    }

    let mut state = AppState::new(settings.theme);
    state.strict = cli.strict;

    let entries = [
        (Field::SemiMajorAxis, &cli.a),
        (Field::Eccentricity, &cli.e),
        (Field::Inclination, &cli.i),
        (Field::Raan, &cli.raan),
        (Field::ArgumentOfPerigee, &cli.argp),
        (Field::TrueAnomaly, &cli.nu),
    ];
    for (field, text) in entries {
        if !state.form.set(field, text) {
            return Err(OrbitVizError::InvalidField {
                field,
                value: text.clone(),
            }
            .into());
        }
    }

    if state.calculate().is_err() {
        println!("{}", state.error.as_deref().unwrap_or_default());
        println!("{}", state.status);
        return Ok(ExitCode::FAILURE);
    }

    if cli.details {
        println!("{}", state.details()?);
    }

    if cli.json {
        if let Some(summary) = state.summary() {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    if let (Some(csv_path), Some(path)) = (&cli.csv, &state.path) {
        export_csv(path, &settings.figure_path(csv_path))?;
    }

    let mut renderer = RasterRenderer::new(&settings);
    let figure = settings.figure_path(&cli.output);
    let saved = state.save(&mut renderer, &figure);
    if let Some(message) = &state.error {
        println!("{}", message);
    }
    println!("{}", state.status);

    Ok(if saved.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
