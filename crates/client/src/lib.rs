//! Top-level client wiring the roster runtime to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Store + player directory)
//!   └─→ Frontend (UI layer - CLI, future GUI)
//! ```
//!
//! The runtime is built independently (see `client-bootstrap`) and handed to
//! the frontend, which becomes its sole owner for the rest of the process.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the runtime and frontend
/// 2. `Client::run()` transfers the runtime to the frontend
/// 3. `run()` returns when the user quits
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let result = frontend.run(runtime).await;
        if let Err(e) = &result {
            tracing::error!("Frontend exited with error: {:#}", e);
        }
        result
    }
}
