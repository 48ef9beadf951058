//! Terminal front end: submits one prompt through the orchestrator, prints
//! each view update and saves the resulting images.

use std::{io::Write, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use websitebio_imagegen::{
    app::envy::Envy,
    generator::{
        orchestrator::Orchestrator,
        view::{Gallery, ViewModel, GALLERY_PLACEHOLDER},
    },
    settings::{models::settings::Settings, service as settings_service, store::FileStore},
    whomeai::client::WhomeAiClient,
};

#[derive(Debug, Parser)]
#[command(name = "websitebio-generate", version, about = "Generate images from a text prompt")]
struct Cli {
    /// Description of the image.
    prompt: Option<String>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    size: Option<String>,
    #[arg(long)]
    quantity: Option<u32>,
    #[arg(long)]
    seed: Option<i64>,
    /// Send requests through a proxy endpoint instead of the API.
    #[arg(long)]
    proxy: Option<String>,
    #[arg(long, default_value = ".websitebio/storage.json")]
    store: PathBuf,
    #[arg(long, default_value = "generated")]
    out: PathBuf,
    /// Print the recent prompt log and exit.
    #[arg(long)]
    history: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let envy = Envy::load().context("failed to read environment")?;
    let store = FileStore::new(&cli.store);

    if cli.history {
        for entry in settings_service::recent_prompts(&store) {
            println!("{}  {}", entry.timestamp, entry.prompt);
        }
        return Ok(());
    }

    let Some(prompt) = cli.prompt.as_deref() else {
        bail!("a prompt is required unless --history is given");
    };

    let http = reqwest::Client::new();
    let client = match &cli.proxy {
        Some(url) => WhomeAiClient::via_proxy(http, url),
        None => WhomeAiClient::direct(http, &envy.whomeai_api_endpoint, &envy.whomeai_api_key),
    };
    tracing::info!(url = client.url(), "using image endpoint");

    let mut orchestrator = Orchestrator::new(client, store);
    let saved = orchestrator.settings().clone();
    let settings = Settings {
        model: cli.model.unwrap_or_else(|| saved.model.clone()),
        size: cli.size.unwrap_or_else(|| saved.size.clone()),
        quantity: cli.quantity.unwrap_or(saved.quantity),
        seed: cli.seed.or(saved.seed),
    };
    if settings != saved {
        orchestrator.update_settings(settings)?;
    }

    let mut view = orchestrator.subscribe();
    let renderer = tokio::spawn(async move {
        while view.changed().await.is_ok() {
            let snapshot = view.borrow().clone();
            render(&snapshot);
        }
    });

    let mut result = orchestrator.generate(prompt).await;
    let mut answers = BufReader::new(tokio::io::stdin()).lines();
    while matches!(&result, Err(e) if e.is_retryable()) {
        print!("Retry? [y/N] ");
        std::io::stdout().flush()?;

        match answers.next_line().await? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                result = orchestrator.retry().await;
            }
            _ => break,
        }
    }

    let images = match result {
        Ok(images) => images,
        Err(e) => {
            drop(orchestrator);
            let _ = renderer.await;
            return Err(e.into());
        }
    };

    for image in &images {
        if let Some(path) = orchestrator.download_image(&image.id, &cli.out)? {
            println!("saved {}", path.display());
        }
    }

    drop(orchestrator);
    let _ = renderer.await;
    Ok(())
}

fn render(view: &ViewModel) {
    if view.loading {
        println!("{}", view.generate_label);
    }
    if let Some(error) = &view.error {
        if error.show_retry {
            println!("error: {} (retry available)", error.message);
        } else {
            println!("error: {}", error.message);
        }
    }
    match &view.gallery {
        Gallery::Placeholder => println!("{}", GALLERY_PLACEHOLDER),
        Gallery::Hidden => {}
        Gallery::Cards(cards) => {
            for card in cards {
                println!("[{}] {}", card.id, card.revised_prompt);
            }
        }
    }
    if let Some(toast) = &view.toast {
        println!("{}: {}", toast.kind, toast.message);
    }
}
