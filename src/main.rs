use anyhow::Result;
use clap::Parser;
use mindfulbet::cli::{print_routes, Cli, Commands};
use mindfulbet::services::Services;
use mindfulbet::styles::init_theme;
use mindfulbet::tui::Tui;
use mindfulbet::utils::get_log_dir;
use mindfulbet::{App, NavigationOutcome};
use tracing::{info, warn};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture,
            crossterm::cursor::Show
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Routes) = cli.command {
        return print_routes(&mut std::io::stdout().lock());
    }

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("mindfulbet.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, "mindfulbet.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config_path();
    let config = cli.load_config()?;
    init_theme(cli.theme_type(&config));
    info!("Starting mindfulbet with config {:?}", config_path);

    let mut app = App::new(config, Services::default()).with_config_path(config_path);
    if let Some(route) = cli.start.as_deref() {
        if app.navigate_to(route) == NavigationOutcome::UnknownRoute {
            warn!("Ignoring --start: unknown route {:?}", route);
        }
    }

    let mut tui = Tui::new()?;
    let result = app.run(&mut tui);
    drop(tui);

    drop(guard);
    result
}
