use anyhow::Result;

use crate::cli::Commands;

use super::container::Container;
use super::controller::{AskController, ChatController, ServeController};

pub struct Router<'a> {
    serve_controller: ServeController<'a>,
    ask_controller: AskController<'a>,
    chat_controller: ChatController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            serve_controller: ServeController::new(container),
            ask_controller: AskController::new(container),
            chat_controller: ChatController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Serve { .. } => self.serve_controller.serve().await,
            Commands::Ask { question, .. } => self.ask_controller.ask(question).await,
            Commands::Chat { .. } => self.chat_controller.chat().await,
        }
    }
}
