//! This example generates a Three.js scene script from a description plus a
//! reference image.
//!
//! The image argument may be an `http(s)` URL or a path to a local file; it
//! is base64-encoded and attached inline to the prompt.
//!
//! To run this example, you must have the `ANTHROPIC_API_KEY` environment
//! variable set.
//!
//! Usage: `cargo run --example image_to_scene -- "Generate a model of pine tree." https://example.com/pine.jpeg`

use imagine3d::ImagineClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = ImagineClient::new(None)?;

    let mut args = std::env::args().skip(1);
    let description = args
        .next()
        .unwrap_or_else(|| "Generate a model of pine tree.".to_string());
    let image = args.next().unwrap_or_else(|| "assets/pine.jpeg".to_string());

    println!("Generating scene for: \"{}\" with image '{}'", description, image);
    match client.generate_scene_with_image(&description, &image).await {
        Ok(script) => {
            println!("{}", script.code);
        }
        Err(e) => {
            eprintln!("Generation failed: {}", e);
        }
    }

    Ok(())
}
