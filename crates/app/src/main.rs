use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{PredictionApi, PredictionConfig, PredictionService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:5000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BILLIARD_API_URL");
}

struct Args {
    config: PredictionConfig,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config = PredictionConfig::from_env();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    config = PredictionConfig::new(&value)
                        .map_err(|_| ArgsError::InvalidApiUrl { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { config })
    }
}

struct DesktopApp {
    predictions: Arc<PredictionService>,
}

impl UiApp for DesktopApp {
    fn predictions(&self) -> Arc<dyn PredictionApi> {
        Arc::clone(&self.predictions) as Arc<dyn PredictionApi>
    }
}

fn run() -> Result<(), ArgsError> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).inspect_err(|_| print_usage())?;

    let predictions = Arc::new(PredictionService::new(parsed.config));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { predictions });
    let context = build_app_context(&app);

    // Explicitly disable always-on-top so the app doesn't behave like a
    // modal window in dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Billiard Skill Forecast")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
