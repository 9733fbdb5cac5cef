use std::path::PathBuf;

use clap::Parser;

/// Chat with DuckDuckGo's AI chat from the terminal.
#[derive(Parser, Debug)]
#[command(name = "duckchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model id or alias (gpt, claude, llama, mixtral).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Log filter override (e.g. `duckchat=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Send this message, print the reply, and exit.
    pub message: Vec<String>,
}

impl Args {
    /// The one-shot message, if any words were given.
    pub fn one_shot(&self) -> Option<String> {
        if self.message.is_empty() {
            None
        } else {
            Some(self.message.join(" "))
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
