//! This example generates a Three.js scene script from a text description.
//!
//! It initializes an `ImagineClient` and calls the `generate_scene` method
//! with a sample description, then prints the extracted script.
//!
//! To run this example, you must have the `ANTHROPIC_API_KEY` environment
//! variable set.
//!
//! Usage: `cargo run --example text_to_scene -- "Generate a model of pine tree."`

use imagine3d::ImagineClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file if it exists.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // 1. Initialize the client.
    // The client will automatically read the `ANTHROPIC_API_KEY` environment variable.
    let client = ImagineClient::new(None)?;

    // 2. Get the description from command-line arguments or use a default.
    let description = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Generate a model of pine tree.".to_string());

    // 3. Run one generation cycle.
    println!("Generating scene for: \"{}\"...", description);
    match client.generate_scene(&description).await {
        Ok(script) => {
            if !script.tagged {
                eprintln!("Reply was not wrapped in output tags; printing it as-is.");
            }
            println!("{}", script.code);
        }
        Err(e) => {
            eprintln!("Generation failed: {}", e);
        }
    }

    Ok(())
}
