//! Glue code tying the runtime and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{Frontend, FrontendConfig, Session};
use runtime::Runtime;

use crate::config::CliConfig;
use crate::presentation::{EventLoop, terminal};

/// Terminal frontend implementing [`Frontend`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, runtime: Runtime) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let mut session = Session::new(runtime, &self.frontend_config);
        let players = session.store().len();
        if players == 0 {
            session.messages_mut().info("Welcome! Press [a] to add your first player.");
        } else {
            let plural = if players == 1 { "" } else { "s" };
            session
                .messages_mut()
                .info(format!("Loaded {players} player{plural}."));
        }

        let event_loop = EventLoop::new(
            session,
            self.frontend_config.channels.lookup_buffer,
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let session = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting with {} players", session.store().len());

        Ok(())
    }
}
