mod logging;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, AuthService, Clock, PracticeService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

struct Args {
    db_url: String,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut db_url =
            std::env::var("FOCAL_DB_URL").unwrap_or_else(|_| "sqlite:focal.sqlite3".into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--help" | "-h" => return Ok(None),
                other => return Err(ArgsError::UnknownArg(other.to_owned())),
            }
        }

        Ok(Some(Self { db_url }))
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:focal.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FOCAL_DB_URL         database URL (overridden by --db)");
    eprintln!("  FOCAL_LOG            log filter (default: info)");
    eprintln!("  FOCAL_AUTH_API_KEY   enables sign-in when set");
    eprintln!("  FOCAL_AUTH_BASE_URL  identity provider endpoint");
    eprintln!("  FOCAL_SYNC_BASE_URL  remote score mirror endpoint");
}

/// Touch the database file for plain `sqlite:` URLs so a first launch does
/// not fail on a missing file.
fn prepare_sqlite_file(db_url: &str) -> std::io::Result<()> {
    let Some(rest) = db_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let path = rest.strip_prefix("//").unwrap_or(rest);
    if path.is_empty() || path.starts_with(':') || path.starts_with("file:") {
        return Ok(());
    }
    let path = path.split('?').next().unwrap_or(path);
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn practice(&self) -> Arc<PracticeService> {
        self.services.practice()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        print_usage();
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let Some(args) = Args::parse(std::env::args().skip(1))? else {
        print_usage();
        return Ok(());
    };

    logging::init_tracing("info");

    // Open + migrate SQLite before the UI starts so the views only ever see
    // ready services.
    prepare_sqlite_file(&args.db_url)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let services = runtime.block_on(AppServices::new_sqlite(&args.db_url, Clock::system()))?;
    tracing::info!(db = %args.db_url, "storage ready");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Focal")
            .with_always_on_top(false),
    );

    // The launch call runs the window event loop and does not return; the
    // runtime stays alive behind the pool for the lifetime of the process.
    let _runtime = runtime;
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}
