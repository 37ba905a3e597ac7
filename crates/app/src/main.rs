use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CatalogService, Clock, QuizLoopService};
use storage::repository::{Storage, StoreError};
use thiserror::Error;
use ui::{App, UiApp, build_app_context};

mod check;
mod logging;

const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Error)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },

    #[error("unknown argument: {0}")]
    UnknownArg(String),

    #[error("unknown subcommand: {0}")]
    UnknownCommand(String),

    #[error("invalid {flag} value: {raw:?}")]
    EmptyValue { flag: &'static str, raw: String },
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag, raw: value });
    }
    Ok(value)
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  clf-prep ui    [--data-dir <path>] [--base-url <url>] [--log-level <level>]");
    eprintln!("  clf-prep check [--data-dir <path>] [--base-url <url>] [--log-level <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data-dir {DEFAULT_DATA_DIR}");
    eprintln!("  --base-url (unset; when set, question files are fetched over HTTP)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PREP_DATA_DIR, PREP_BASE_URL, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    data_dir: PathBuf,
    base_url: Option<String>,
    log_level: Option<String>,
}

impl Args {
    /// Parse flags after the subcommand. `env` supplies defaults for unset flags.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());
        let mut data_dir = non_empty("PREP_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let mut base_url = non_empty("PREP_BASE_URL");
        let mut log_level = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" => data_dir = PathBuf::from(require_value(args, "--data-dir")?),
                "--base-url" => base_url = Some(require_value(args, "--base-url")?),
                "--log-level" => log_level = Some(require_value(args, "--log-level")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            data_dir,
            base_url,
            log_level,
        })
    }

    /// An HTTP base URL takes precedence over the data directory.
    fn storage(&self) -> Result<Storage, StoreError> {
        match &self.base_url {
            Some(base) => Storage::http(base),
            None => Ok(Storage::directory(&self.data_dir)),
        }
    }
}

fn split_command(mut argv: Vec<String>) -> Result<(Command, Vec<String>), ArgsError> {
    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => return Ok((Command::Ui, argv)),
        Some(first) if first.starts_with('-') => return Ok((Command::Ui, argv)),
        Some(first) => {
            Command::from_arg(first).ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?
        }
    };
    argv.remove(0);
    Ok((cmd, argv))
}

async fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = split_command(argv).and_then(|(cmd, rest)| {
        let mut iter = rest.into_iter();
        Args::parse(&mut iter, |key| std::env::var(key).ok()).map(|args| (cmd, args))
    });
    let (cmd, args) = parsed.inspect_err(|e| {
        eprintln!("{e}");
        print_usage();
    })?;

    logging::init_logging(args.log_level.as_deref());
    let storage = args.storage()?;
    tracing::info!(
        command = ?cmd,
        data_dir = %args.data_dir.display(),
        base_url = args.base_url.as_deref().unwrap_or("-"),
        "starting"
    );

    match cmd {
        Command::Ui => {
            let services = AppServices::new(&storage, Clock::system());
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // Some dev setups default the window to always-on-top; turn it off explicitly.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("AWS Cloud Practitioner Exam Prep")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(0)
        }
        Command::Check => {
            let catalog = CatalogService::new();
            let mut stdout = std::io::stdout();
            let failed =
                check::check_sets(storage.questions.as_ref(), &catalog, &mut stdout).await?;
            if failed > 0 {
                tracing::warn!(failed, "some question sets could not be loaded");
                Ok(1)
            } else {
                Ok(0)
            }
        }
    }
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}
