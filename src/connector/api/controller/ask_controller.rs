use anyhow::Result;

use crate::domain::ChatSession;

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Send one question and return the reply (or the connection warning).
    pub async fn ask(&self, question: String) -> Result<String> {
        let mut session = ChatSession::new();
        let reply = self
            .container
            .converse_use_case()
            .send(&mut session, &question)
            .await;
        Ok(reply)
    }
}
