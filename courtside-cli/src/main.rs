use clap::{Parser, ValueEnum};
use courtside_core::agent::{ResponseAssembler, TurnOrchestrator};
use courtside_core::config::AppConfig;
use courtside_core::model::OpenAIClient;
use courtside_core::server;
use courtside_core::tools::builtin_registry;
use courtside_core::types::ChatMessage;
use std::error::Error;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "courtside",
    version,
    about = "Tennis-planning chat agent with weather, court, and friend lookups"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override `server.bind`.
    #[arg(long)]
    addr: Option<SocketAddr>,
    /// Override `provider.model`.
    #[arg(long)]
    model: Option<String>,
    #[arg(long, value_enum, default_value_t = RunMode::Rest)]
    mode: RunMode,
    #[arg(long)]
    prompt_file: Option<PathBuf>,
    prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RunMode {
    /// Serve the REST API
    Rest,
    /// Run one turn and print the reply as JSON
    Ask,
    /// Print the tool schemas offered to the model
    Tools,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    debug!(mode = ?cli.mode, config = ?cli.config, "CLI arguments parsed");

    let mut config = AppConfig::load(cli.config.as_deref())?;
    match &cli.config {
        Some(path) => info!(path = %path.display(), "Loaded configuration from file"),
        None => info!("Loaded configuration using default path or defaults"),
    }
    apply_cli_overrides(&cli, &mut config);

    let registry = Arc::new(builtin_registry(&config.tools)?);
    let provider = OpenAIClient::from_config(&config.provider);
    let orchestrator = Arc::new(TurnOrchestrator::from_config(
        provider,
        Arc::clone(&registry),
        &config,
    ));

    info!(mode = ?cli.mode, tools = registry.len(), "Running in selected mode");
    match cli.mode {
        RunMode::Rest => {
            server::serve(orchestrator, &config.server).await?;
        }
        RunMode::Ask => {
            let prompt = load_prompt(&cli)?;
            let reply = orchestrator.run_turn(&[ChatMessage::user(prompt)]).await?;
            let response = ResponseAssembler::assemble(reply);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        RunMode::Tools => {
            println!("{}", serde_json::to_string_pretty(registry.schemas())?);
        }
    }
    info!("Courtside finished");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn apply_cli_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(addr) = cli.addr {
        info!(%addr, "Overriding bind address based on CLI flag");
        config.server.bind = addr;
    }
    if let Some(model) = &cli.model {
        info!(model = model.as_str(), "Overriding model based on CLI flag");
        config.provider.model = model.clone();
    }
}

fn load_prompt(cli: &Cli) -> Result<String, Box<dyn Error>> {
    if let Some(path) = &cli.prompt_file {
        info!(path = %path.display(), "Loading prompt from file");
        let content = fs::read_to_string(path)?;
        return non_empty(content);
    }

    if !cli.prompt.is_empty() {
        return non_empty(cli.prompt.join(" "));
    }

    if !io::stdin().is_terminal() {
        info!("Reading prompt from standard input");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return non_empty(buffer);
    }

    warn!("Prompt not provided via arguments, file, or stdin");
    Err("prompt required via arguments, --prompt-file, or stdin".into())
}

fn non_empty(prompt: String) -> Result<String, Box<dyn Error>> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err("prompt is empty".into());
    }
    Ok(prompt.to_string())
}
