use std::sync::Arc;

use tracing::warn;

use crate::application::AssistantClient;
use crate::domain::{ChatSession, Sender};

/// Shown in place of a reply when the Answer Service cannot be reached.
pub const CONNECTION_WARNING: &str = "⚠️ Backend connection error";

/// One chat turn on the client: record the user's message in the current
/// thread, ask the Answer Service and record whatever comes back.
pub struct ConverseUseCase {
    client: Arc<dyn AssistantClient>,
}

impl ConverseUseCase {
    pub fn new(client: Arc<dyn AssistantClient>) -> Self {
        Self { client }
    }

    /// Returns the bot reply appended to the current thread.
    pub async fn send(&self, session: &mut ChatSession, message: &str) -> String {
        session.current_mut().push(Sender::User, message);

        let reply = match self.client.ask(message).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Answer service unavailable: {}", e);
                CONNECTION_WARNING.to_string()
            }
        };

        session.current_mut().push(Sender::Bot, reply.clone());
        reply
    }
}
