use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::domain::{ChatSession, Sender, Thread};

use super::super::Container;

const PROMPT: &str = "> ";
const HELP: &str = "Ask banking questions (e.g. What is a loan?). \
Commands: /new, /list, /switch <n>, /quit";

/// One line of user input in the interactive chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    New,
    List,
    /// Zero-based thread index.
    Switch(usize),
    Quit,
    Help,
    Message(String),
    Empty,
    Invalid(String),
}

impl ChatCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if !line.starts_with('/') {
            return Self::Message(line.to_string());
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("/new"), None) => Self::New,
            (Some("/list"), None) => Self::List,
            (Some("/quit" | "/exit"), None) => Self::Quit,
            (Some("/help"), None) => Self::Help,
            (Some("/switch"), Some(n)) => match n.parse::<usize>() {
                Ok(n) if n >= 1 => Self::Switch(n - 1),
                _ => Self::Invalid(format!("not a chat number: {}", n)),
            },
            _ => Self::Invalid(format!("unknown command: {}", line)),
        }
    }
}

pub fn render_message(sender: Sender, text: &str) -> String {
    match sender {
        Sender::User => format!("🧑 You: {}", text),
        Sender::Bot => format!("🏦 Bot: {}", text),
    }
}

pub fn render_thread(thread: &Thread) -> String {
    let mut output = format!("## {}\n", thread.title());
    for message in thread.messages() {
        output.push_str(&render_message(message.sender(), message.text()));
        output.push('\n');
    }
    output
}

pub fn render_thread_list(session: &ChatSession) -> String {
    session
        .threads()
        .iter()
        .enumerate()
        .map(|(i, thread)| {
            let marker = if i == session.current_index() { "▶" } else { " " };
            format!("{} {}. {}", marker, i + 1, thread.title())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Interactive loop on stdin/stdout.
    pub async fn chat(&self) -> Result<String> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let session = self.run(stdin, &mut stdout).await?;
        Ok(format!("Goodbye ({} chats).", session.threads().len()))
    }

    /// Drive a chat session until `/quit` or end of input and return it.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<ChatSession>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let use_case = self.container.converse_use_case();
        let mut session = ChatSession::new();
        let mut lines = input.lines();

        write_out(output, &format!("🏦 Banking ChatBot\n{}\n", HELP)).await?;
        write_out(output, PROMPT).await?;

        while let Some(line) = lines.next_line().await? {
            let text = match ChatCommand::parse(&line) {
                ChatCommand::Quit => break,
                ChatCommand::Empty => String::new(),
                ChatCommand::Help => format!("{}\n", HELP),
                ChatCommand::Invalid(reason) => format!("{}\n", reason),
                ChatCommand::New => {
                    session.new_thread();
                    render_thread(session.current())
                }
                ChatCommand::List => format!("{}\n", render_thread_list(&session)),
                ChatCommand::Switch(index) => match session.select(index) {
                    Ok(()) => render_thread(session.current()),
                    Err(e) => format!("{}\n", e),
                },
                ChatCommand::Message(message) => {
                    let reply = use_case.send(&mut session, &message).await;
                    format!("{}\n", render_message(Sender::Bot, &reply))
                }
            };
            write_out(output, &text).await?;
            write_out(output, PROMPT).await?;
        }

        write_out(output, "\n").await?;
        Ok(session)
    }
}

async fn write_out<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
