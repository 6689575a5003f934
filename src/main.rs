use std::process::ExitCode;
use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::{error, info};

use gigbook::commands::Cli;
use gigbook::config::AppConfig;
use gigbook::error::ErrorCategory;
use gigbook::storage::{
    shared, FuzzySearch, JsonEventStore, JsonFeedProvider, SavedEventStore, Search, Shared,
    UpcomingEventCache, UpcomingEventStore,
};
use gigbook::tui::terminal::TerminalConsole;
use gigbook::tui::{build_app, Collaborators};
use gigbook::utils::{init_logger, ConfigPaths};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    match main_impl(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(1)
        }
    }
}

fn main_impl(cli: Cli) -> Result<ExitCode> {
    let paths = ConfigPaths::new()?;
    let config =
        AppConfig::load(&paths, &cli.overrides()).context("Failed to load configuration")?;

    // 初始化日志系统
    init_logger(config.log_level.as_deref(), &config.log_file)
        .context("Failed to initialize logging")?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        data_file = %config.data_file.display(),
        feed_file = %config.feed_file.display(),
        "Starting gigbook"
    );

    let store = JsonEventStore::open(config.data_file.clone())
        .with_context(|| format!("Failed to open {}", config.data_file.display()))?;
    let saved: Shared<dyn SavedEventStore> = shared(store);
    let upcoming: Shared<dyn UpcomingEventStore> = shared(UpcomingEventCache::new(
        JsonFeedProvider::new(config.feed_file.clone()),
    ));
    let search: Rc<dyn Search> = Rc::new(FuzzySearch::new(saved.clone(), upcoming.clone()));

    let mut app = build_app(Collaborators {
        saved,
        upcoming,
        search,
        default_city: config.default_city.clone(),
        default_state: config.default_state.clone(),
        search_max_count: config.search_max_count,
    })
    .context("Failed to assemble screens")?;

    let mut console = TerminalConsole::new();
    match app.run(&mut console) {
        Ok(()) => {
            info!("Exited from the main menu");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.category() == ErrorCategory::Shutdown => {
            info!("Input closed, shutting down");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!(error = %err, category = %err.category(), "Navigation fault");
            Err(err).context("Navigation failed")
        }
    }
}
