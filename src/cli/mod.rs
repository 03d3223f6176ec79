use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::connector::api::{ContainerConfig, DEFAULT_AUDIT_LOG, DEFAULT_BIND_ADDR};
use crate::connector::{DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_SERVER_URL};

#[derive(Parser)]
#[command(name = "bankqa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run the Answer Service HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, env = "BANKQA_BIND", default_value = DEFAULT_BIND_ADDR)]
        bind: String,

        /// Base URL of the Ollama server
        #[arg(long, env = "OLLAMA_URL", default_value = DEFAULT_OLLAMA_URL)]
        ollama_url: String,

        /// Model name passed to Ollama
        #[arg(long, env = "OLLAMA_MODEL", default_value = DEFAULT_OLLAMA_MODEL)]
        model: String,

        /// File receiving one line per question and per backend failure
        #[arg(long, env = "BANKQA_AUDIT_LOG", default_value = DEFAULT_AUDIT_LOG)]
        audit_log: PathBuf,
    },

    /// Ask a running Answer Service a single question
    Ask {
        question: String,

        /// Base URL of the Answer Service
        #[arg(long, env = "BANKQA_SERVER", default_value = DEFAULT_SERVER_URL)]
        server: String,
    },

    /// Interactive chat against a running Answer Service
    Chat {
        /// Base URL of the Answer Service
        #[arg(long, env = "BANKQA_SERVER", default_value = DEFAULT_SERVER_URL)]
        server: String,
    },
}

impl Commands {
    pub fn container_config(&self) -> ContainerConfig {
        let mut config = ContainerConfig::default();
        match self {
            Self::Serve {
                bind,
                ollama_url,
                model,
                audit_log,
            } => {
                config.bind_addr = bind.clone();
                config.ollama_url = ollama_url.clone();
                config.model = model.clone();
                config.audit_log = audit_log.clone();
            }
            Self::Ask { server, .. } | Self::Chat { server } => {
                config.server_url = server.clone();
            }
        }
        config
    }

    pub fn audit_log(&self) -> Option<&PathBuf> {
        match self {
            Self::Serve { audit_log, .. } => Some(audit_log),
            Self::Ask { .. } | Self::Chat { .. } => None,
        }
    }
}
