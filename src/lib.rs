//! An asynchronous Rust client for Imagine3D scene generation.
//!
//! This crate sends a textual (optionally image-augmented) description of a
//! 3D object to a hosted conversational agent, asks it to produce a Three.js
//! scene script, and extracts the generated code block from the model's
//! free-form reply.
//!
//! ## Features
//! - Text-to-scene and image-to-scene generation.
//! - Asynchronous API for non-blocking operations.
//! - Incremental consumption of the agent's streamed output.
//! - Delimiter-based extraction of the generated script.
//! - Typed error handling for robust applications.
//!
//! ## Example
//!
//! ```no_run
//! # use imagine3d::ImagineClient;
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let client = ImagineClient::new(None)?;
//! let script = client.generate_scene("Generate a model of pine tree.").await?;
//! println!("{}", script.code);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod stream;
pub mod types;

pub use client::ImagineClient;
pub use error::ImagineError;
pub use extract::{
    extract_between, extract_scene_code, has_scene_output, SCENE_END_TAG, SCENE_START_TAG,
};
pub use types::{
    AgentSnapshot, ContentPart, EncodedImage, ImageSource, Message, ModelConfig, Role, SceneScript,
};
