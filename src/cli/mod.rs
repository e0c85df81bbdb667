use crate::{
    core::{Assistant, Session, DEFAULT_MODEL},
    services::{
        chat_loop::{serve, spawn_line_reader, INPUT_QUEUE_CAPACITY},
        OpenAIClient, DEFAULT_BASE_URL,
    },
};
use clap::{value_parser, Arg, ArgMatches, Command};
use std::{env, time::Duration};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI entry point for the train-assistant tool
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // stdout carries replies only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();

    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("OPENAI_API_KEY").ok())
        .ok_or("An API key is required. Set OPENAI_API_KEY environment variable or use --api-key")?;

    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("OPENAI_BASE_URL").ok())
        .or_else(|| env::var("OPENROUTER_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let assistant = build_assistant(&matches, api_key, &base_url);

    info!("Using model: {}", assistant.model());
    info!("Base URL: {}", base_url);

    let mut session = Session::default();
    let inbox = spawn_line_reader(BufReader::new(tokio::io::stdin()), INPUT_QUEUE_CAPACITY);
    let mut stdout = tokio::io::stdout();

    let replies = serve(&assistant, &mut session, inbox, &mut stdout).await?;

    let usage = session.usage();
    info!(
        replies,
        turns = session.turns_processed(),
        total_tokens = usage.total_tokens,
        "input closed, shutting down"
    );

    Ok(())
}

/// The timeout flag bounds each HTTP attempt, so retries keep their own budget
fn build_assistant(matches: &ArgMatches, api_key: String, base_url: &str) -> Assistant {
    let model = matches
        .get_one::<String>("model")
        .map(String::as_str)
        .unwrap_or(DEFAULT_MODEL);
    let timeout = Duration::from_secs(matches.get_one::<u64>("timeout").copied().unwrap_or(120));
    let temperature = matches.get_one::<f32>("temperature").copied().unwrap_or(0.0);

    let client = OpenAIClient::new(api_key)
        .with_base_url(base_url)
        .with_timeout(timeout);
    Assistant::train_reservation(client)
        .with_model(model)
        .with_temperature(temperature)
}

fn command() -> Command {
    Command::new("train-assistant")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Chat with a train reservation assistant; one message per line on stdin")
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The chat model to use")
                .default_value(DEFAULT_MODEL),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("API key (or set OPENAI_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("API base URL (or set OPENAI_BASE_URL / OPENROUTER_BASE_URL env vars)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .value_parser(value_parser!(u64))
                .default_value("120"),
        )
        .arg(
            Arg::new("temperature")
                .long("temperature")
                .value_name("VALUE")
                .help("Sampling temperature")
                .value_parser(value_parser!(f32))
                .default_value("0"),
        )
}
