use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use newsreel_common::{logger, AppConfig};
use newsreel_llm::{CompletionClient, NewsPipeline, TracingReporter};
use std::path::PathBuf;
use std::sync::Arc;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
            return;
        }
    }

    // Fallback to default dotenv behavior
    dotenv::dotenv().ok();
}

#[derive(Parser)]
#[command(name = "newsreel")]
#[command(about = "Newsreel - AI news summaries and short video scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web form server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run the MCP tool server on stdio
    Mcp,

    /// Fetch news for a topic and print it
    News {
        /// Topic, keyword, or phrase
        topic: String,

        /// Also generate a video script from the news
        #[arg(long)]
        script: bool,

        /// Write the script to this file
        #[arg(long, requires = "script")]
        output: Option<PathBuf>,
    },
}

/// Build both completion clients and hand them to the pipeline
fn build_pipeline(config: &AppConfig) -> Result<NewsPipeline> {
    config.validate()?;

    let news_client = CompletionClient::new(&config.base_url, &config.api_key, &config.news_model)?;
    let script_client = CompletionClient::new(&config.base_url, &config.api_key, &config.script_model)?;

    Ok(NewsPipeline::new(Arc::new(news_client), Arc::new(script_client)))
}

async fn serve(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    // Override with CLI arguments
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }

    // Setup logging
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("Newsreel starting...");
    tracing::info!("Configuration loaded:");
    tracing::info!("  Address: {}", config.server_bind_address());
    tracing::info!("  News model: {}", config.news_model);
    tracing::info!("  Script model: {}", config.script_model);

    let pipeline = build_pipeline(&config)?;

    println!("Server listening on http://{}", config.server_bind_address());

    newsreel_server::start_server(config, pipeline).await?;
    Ok(())
}

async fn mcp(config: AppConfig) -> Result<()> {
    logger::setup_stderr_logging(&config.log_level)?;

    let pipeline = build_pipeline(&config)?;
    newsreel_mcp::run_stdio(pipeline).await?;
    Ok(())
}

async fn news(config: AppConfig, topic: String, script: bool, output: Option<PathBuf>) -> Result<()> {
    logger::setup_stderr_logging(&config.log_level)?;

    let pipeline = build_pipeline(&config)?;
    let reporter = TracingReporter;

    let Some(news) = pipeline.summarize(&topic, &reporter).await else {
        anyhow::bail!("No valid news found. Please try a different topic.");
    };

    println!("{}", news);

    if !script {
        return Ok(());
    }

    let Some(video_script) = pipeline.scriptify(Some(&news), &reporter).await else {
        anyhow::bail!("Could not generate transcription.");
    };

    println!();
    println!("{}", video_script);

    if let Some(path) = output {
        std::fs::write(&path, &video_script)
            .with_context(|| format!("Failed to write script to {}", path.display()))?;
        tracing::info!("Script saved to {}", path.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    load_dotenv_from_project_root();

    let config = AppConfig::from_env()?;

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(config, host, port).await?,
        Some(Commands::Mcp) => mcp(config).await?,
        Some(Commands::News { topic, script, output }) => news(config, topic, script, output).await?,
        // Default: start server with configured address
        None => serve(config, None, None).await?,
    }

    Ok(())
}
