//! ollamarag - Main CLI Entry Point

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{error, info};

use ollamarag::{
    check,
    cli::{input::Input, Args, Commands, InputHandler},
    config::Config,
    logging,
    ollama::OllamaClient,
    rag::{query_and_respond, setup_collection, RagSettings, DEMO_QUESTIONS, DOCUMENTS},
    vector_db::VectorDb,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("{}: {}", "Error".red(), e);
        std::process::exit(2);
    }

    let mut config =
        Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    logging::init(args.verbosity(&config));

    let client = OllamaClient::with_config(&config.ollama_url(), config.request_timeout())
        .context("Failed to create Ollama client")?;

    match &args.command {
        Some(Commands::Check) => run_check(&client, &config.rag).await,
        Some(Commands::Chat) => run_chat(&client, &config.rag).await,
        None => run_questions(&client, &config.rag, &args.questions).await,
    }
}

/// Build the collection from the built-in corpus; fails when nothing was stored
async fn ingest(client: &OllamaClient, settings: &RagSettings) -> Result<VectorDb> {
    info!("Setting up collection...");
    let mut db = VectorDb::new();
    let report = setup_collection(&mut db, client, settings, &DOCUMENTS).await?;

    let count = db.collection(&settings.collection)?.count();
    info!("Collection contains {} documents", count);

    if count == 0 {
        error!("No documents were added to the collection");
        bail!(
            "No documents were added to the collection ({} embedding failures)",
            report.failures.len()
        );
    }

    Ok(db)
}

async fn answer_and_print(
    client: &OllamaClient,
    db: &VectorDb,
    settings: &RagSettings,
    query: &str,
) -> Result<()> {
    let collection = db.collection(&settings.collection)?;
    info!("Processing query: {}", query);
    let response = query_and_respond(collection, client, client, settings, query).await;
    println!("\nQuestion: {}\nAnswer: {}", query, response);
    Ok(())
}

async fn run_questions(
    client: &OllamaClient,
    settings: &RagSettings,
    questions: &[String],
) -> Result<()> {
    let db = ingest(client, settings).await?;

    if questions.is_empty() {
        for query in DEMO_QUESTIONS {
            answer_and_print(client, &db, settings, query).await?;
        }
    } else {
        for query in questions {
            answer_and_print(client, &db, settings, query).await?;
        }
    }

    Ok(())
}

async fn run_chat(client: &OllamaClient, settings: &RagSettings) -> Result<()> {
    let db = ingest(client, settings).await?;
    let mut input = InputHandler::new()?;

    println!("Ask about llamas. Type /exit or press Ctrl-D to quit.");

    loop {
        match input.read()? {
            Input::Question(query) => answer_and_print(client, &db, settings, &query).await?,
            Input::Empty => continue,
            Input::Exit => break,
        }
    }

    Ok(())
}

async fn run_check(client: &OllamaClient, settings: &RagSettings) -> Result<()> {
    println!("Checking Ollama at {}", client.base_url());

    let report = match check::run(client, settings).await {
        Ok(report) => report,
        Err(e) => {
            println!("  {} {}", "✗".red(), e);
            println!("  Start it with: ollama serve");
            bail!("Ollama check failed");
        }
    };

    println!("  {} Ollama {}", "✓".green(), report.version);
    for (model, installed) in [
        (&settings.embedding_model, report.embedding_model_installed),
        (&settings.chat_model, report.chat_model_installed),
    ] {
        if installed {
            println!("  {} {}", "✓".green(), model);
        } else {
            println!("  {} {} (pull with: ollama pull {})", "✗".red(), model, model);
        }
    }

    if !report.is_ready() {
        bail!("Missing models: {}", report.missing_models(settings).join(", "));
    }

    Ok(())
}
