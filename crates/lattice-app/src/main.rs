mod cli;

use std::io::Read;
use std::process::ExitCode;

use lattice_common::{ConfigError, HeadlessContent, HeadlessWidgets, LatticeError, UiTask};
use lattice_config::LatticeConfig;
use tracing_subscriber::EnvFilter;

use lattice_app::script::{self, Command};
use lattice_app::LatticeApp;

type HeadlessApp = LatticeApp<HeadlessContent, HeadlessWidgets>;

fn load_config(args: &cli::Args) -> Result<LatticeConfig, ConfigError> {
    match &args.config {
        Some(path) => lattice_config::load_from_path(path),
        None => lattice_config::load_config(),
    }
}

/// `--log-level` wins, then `RUST_LOG`, then the config file.
fn init_logging(cli_level: Option<&str>, config_level: &str) {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_script(args: &cli::Args) -> Result<String, LatticeError> {
    match &args.script {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// What the browsing engine would post after the focused page followed a
/// link on its own.
fn load_report(app: &mut HeadlessApp, url: &str) -> Option<UiTask> {
    let tab_id = app.tabs().active_id()?.clone();
    if let Some(session) = app.floating().active_session(&tab_id) {
        let (surface, session) = (session.surface(), session.key().session.clone());
        app.content_mut().set_current_url(surface, url);
        return Some(UiTask::FloatingLoaded {
            tab_id,
            session,
            url: url.to_string(),
        });
    }
    let pane_id = app.active_workspace()?.active_pane().clone();
    if let Some(surface) = app.content().surface_for(&pane_id) {
        app.content_mut().set_current_url(surface, url);
    }
    Some(UiTask::PaneLoaded {
        tab_id,
        pane_id,
        url: url.to_string(),
        title: None,
    })
}

async fn execute(app: &mut HeadlessApp, command: Command) -> Result<(), LatticeError> {
    match command {
        Command::Action(action) => app.dispatch(action),
        Command::Key(binding) => match app.action_for_key(&binding) {
            Some(action) => app.dispatch(action),
            None => {
                tracing::debug!(binding = %binding, "unbound key");
                Ok(())
            }
        },
        Command::Loaded(url) => {
            let Some(task) = load_report(app, &url) else {
                return Ok(());
            };
            let poster = app.poster();
            tokio::spawn(async move { poster.post(task) })
                .await
                .map_err(|e| LatticeError::Other(format!("load report task failed: {e}")))?;
            Ok(())
        }
        Command::Tick => {
            app.frame_tick();
            Ok(())
        }
    }
}

async fn run(args: cli::Args, config: LatticeConfig) -> Result<(), LatticeError> {
    let source = read_script(&args)?;
    let commands = script::parse(&source).map_err(|e| LatticeError::Other(e.to_string()))?;
    tracing::info!(commands = commands.len(), "script parsed");

    let mut app = LatticeApp::new(config, HeadlessContent::new(), HeadlessWidgets::new());
    app.set_viewport(args.width, args.height);
    app.new_tab()?;

    for command in commands {
        if let Err(e) = execute(&mut app, command).await {
            tracing::warn!("command failed: {e}");
        }
        app.pump();
        app.frame_tick();
    }

    let snapshot = serde_json::to_string_pretty(&app.snapshot())
        .map_err(|e| LatticeError::Other(format!("failed to serialize snapshot: {e}")))?;
    println!("{snapshot}");

    app.shutdown();
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = load_config(&args);
    let config_level = match &loaded {
        Ok(config) => config.logging.level.as_filter(),
        Err(_) => "info",
    };
    init_logging(args.log_level.as_deref(), config_level);

    tracing::info!("Lattice v{} starting...", env!("CARGO_PKG_VERSION"));
    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            LatticeConfig::default()
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, config)) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
