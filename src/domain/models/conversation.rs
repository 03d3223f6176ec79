use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One conversation: a title and its messages in the order they were sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    title: String,
    messages: Vec<Message>,
}

impl Thread {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            messages: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(Message::new(sender, text));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Client-side chat state: an ordered list of threads and the index of the
/// one currently shown. There is always at least one thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    threads: Vec<Thread>,
    current: usize,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            threads: vec![Thread::new(Self::title_for(1))],
            current: 0,
        }
    }

    fn title_for(number: usize) -> String {
        format!("Chat #{}", number)
    }

    /// Append a fresh thread, select it and return its index.
    pub fn new_thread(&mut self) -> usize {
        let title = Self::title_for(self.threads.len() + 1);
        self.threads.push(Thread::new(title));
        self.current = self.threads.len() - 1;
        self.current
    }

    pub fn select(&mut self, index: usize) -> Result<(), DomainError> {
        if index >= self.threads.len() {
            return Err(DomainError::invalid_input(format!(
                "no chat at position {} ({} available)",
                index + 1,
                self.threads.len()
            )));
        }
        self.current = index;
        Ok(())
    }

    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Thread {
        &self.threads[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Thread {
        &mut self.threads[self.current]
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
