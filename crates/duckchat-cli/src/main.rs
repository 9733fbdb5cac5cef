mod app;
mod cli;
mod render;
mod repl;

use std::process::ExitCode;

use duckchat_common::{DuckChatError, Result};
use duckchat_config::DuckChatConfig;
use duckchat_core::{ChatSession, HttpTransport};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use render::TerminalSink;

const DEFAULT_DIRECTIVE: &str = "duckchat=info";

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("Invalid log filter '{directive}', using {DEFAULT_DIRECTIVE}");
        DEFAULT_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

async fn run_once(
    config: &DuckChatConfig,
    model: Option<&str>,
    message: &str,
) -> Result<()> {
    let client = app::client_config(config, model);
    let mut chat = ChatSession::new(HttpTransport::new(&client)?, &client);
    let mut sink = TerminalSink::stdio();
    chat.send_message(message, None, &mut sink).await?;
    Ok(())
}

async fn run_interactive(config: &DuckChatConfig, model: Option<&str>) -> Result<()> {
    let client = app::client_config(config, model);
    let mut chat = ChatSession::new(HttpTransport::new(&client)?, &client);

    if let Err(e) = chat.initialize().await {
        tracing::warn!("Session initialization failed, retrying on first message: {e}");
    }

    repl::run(&mut chat).await?;
    tracing::info!(
        exchanges = chat.state().completed_exchanges(),
        "Session ended"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = duckchat_config::load_config(args.config.as_deref());

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.directive(),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    tracing::debug!("duckchat v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DuckChatConfig::default()
    });

    if args.print_config {
        println!("{}", duckchat_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let outcome = match args.one_shot() {
        Some(message) => run_once(&config, args.model.as_deref(), &message).await,
        None => run_interactive(&config, args.model.as_deref()).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        // Chat failures were already shown by the sink.
        Err(DuckChatError::Chat(message)) => {
            tracing::debug!("exiting after failed turn: {message}");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
