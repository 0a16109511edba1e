use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio::contact::Subject;
use portfolio::form::{ContactForm, Field, SubmitOutcome};
use portfolio::relay::WebhookRelay;
use portfolio::{AppState, create_app};

/// portfolio - personal site backend
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio site backend: contact form validation and webhook relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit a contact message through a running server
    Submit {
        /// Contact endpoint to post to
        #[arg(long, default_value = "http://127.0.0.1:3000/api/contact")]
        endpoint: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long, value_enum, default_value_t = Subject::Other)]
        subject: Subject,

        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability(
        "portfolio",
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Submit {
            endpoint,
            first_name,
            last_name,
            email,
            subject,
            message,
        } => submit_command(endpoint, first_name, last_name, email, subject, message).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: portfolio::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting portfolio server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    if config.relay.webhook_url.is_none() {
        tracing::warn!("No relay webhook configured, submissions will be logged only");
    }

    let relay = WebhookRelay::new(&config.relay)?;
    let state = AppState {
        config,
        relay: Arc::new(relay),
    };

    let app = create_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(message))]
async fn submit_command(
    endpoint: String,
    first_name: String,
    last_name: String,
    email: String,
    subject: Subject,
    message: String,
) -> Result<()> {
    let mut form = ContactForm::new();
    form.update_field(Field::FirstName, first_name);
    form.update_field(Field::LastName, last_name);
    form.update_field(Field::Email, email);
    form.set_subject(subject);
    form.update_field(Field::Message, message);

    let client = reqwest::Client::new();
    match form.submit(&client, &endpoint).await {
        SubmitOutcome::Accepted { message } => {
            tracing::info!("{message}");
            Ok(())
        }
        SubmitOutcome::Rejected { status, message } => {
            anyhow::bail!("Submission rejected ({status}): {message}")
        }
        SubmitOutcome::Failed(reason) => {
            anyhow::bail!("Failed to send message: {reason}")
        }
        SubmitOutcome::Busy => {
            anyhow::bail!("A submission is already in progress")
        }
    }
}
