use genai_client::{GenAiClient, GenAiConfig};
use std::error::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SAMPLE_PROMPT: &str =
    "Write a short description of a construction and renovation company in Belgium";

#[tokio::main]
async fn main() {
    // initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("Error generating content: {}", e);
        eprintln!("Error: {}", e);
        eprintln!("{:#?}", e);

        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("Caused by: {}", cause);
            source = cause.source();
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let client = GenAiClient::new(GenAiConfig::from_env()?)?;

    // each argument is a prompt, several are sent as one combined prompt
    let prompts: Vec<String> = std::env::args().skip(1).collect();

    let (prompt, response) = match prompts.len() {
        0 => (
            SAMPLE_PROMPT.to_string(),
            client.generate_content(SAMPLE_PROMPT).await?,
        ),
        1 => (
            prompts[0].clone(),
            client.generate_content(&prompts[0]).await?,
        ),
        _ => (
            genai_client::genai::combine_prompts(prompts.as_slice()),
            client.generate_content_from_prompts(prompts.as_slice()).await?,
        ),
    };

    info!("Generated {} characters", response.len());
    println!("Prompt: {}", prompt);
    println!("Response: {}", response);

    Ok(())
}
