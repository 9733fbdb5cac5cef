//! Interactive prompt: slash commands and the read-send loop.

use std::io::Write;

use duckchat_common::Result;
use duckchat_core::{find_model, resolve_model, ChatSession, ChatTransport, Role, KNOWN_MODELS};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::render::TerminalSink;

const HELP: &str = "\
Commands:
  /model [NAME]   show or switch the model (starts a fresh conversation)
  /models         list known models and aliases
  /reset          forget the conversation
  /history        print the conversation so far
  /help           show this help
  /quit           exit (Ctrl-D works too)
Ctrl-C stops the reply being streamed.";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(String),
    Model(Option<String>),
    Models,
    Reset,
    History,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Send(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    match name.to_ascii_lowercase().as_str() {
        "model" if arg.is_empty() => Command::Model(None),
        "model" => Command::Model(Some(arg.to_string())),
        "models" => Command::Models,
        "reset" | "new" => Command::Reset,
        "history" => Command::History,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(name.to_string()),
    }
}

/// Table of known models, marking the active one.
pub fn models_listing(active: &str) -> String {
    KNOWN_MODELS
        .iter()
        .map(|m| {
            let marker = if m.id == active { '*' } else { ' ' };
            format!("{marker} {:<8} {:<24} {}", m.alias, m.label, m.id)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the prompt until `/quit` or end of input.
///
/// Turn failures are shown and the prompt continues; only a failure to
/// read stdin ends it with an error.
pub async fn run<T: ChatTransport>(chat: &mut ChatSession<T>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut sink = TerminalSink::stdio();
    println!("duckchat ({}). Type /help for commands.", chat.model());

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match parse_command(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Models => println!("{}", models_listing(chat.model())),
            Command::Model(None) => println!("Current model: {}", chat.model()),
            Command::Model(Some(name)) => {
                let id = resolve_model(&name);
                if find_model(&name).is_none() {
                    eprintln!("Unknown model '{name}', using it as given.");
                }
                match chat.change_model(id).await {
                    Ok(()) => println!("Switched to {}. Starting a fresh conversation.", chat.model()),
                    Err(e) => eprintln!(
                        "Switched to {}, but the session could not be initialized: {e}",
                        chat.model()
                    ),
                }
            }
            Command::Reset => {
                chat.reset();
                println!("Conversation cleared.");
            }
            Command::History => {
                if chat.history().is_empty() {
                    println!("(no messages yet)");
                }
                for turn in chat.history() {
                    let who = match turn.role {
                        Role::User => "you",
                        Role::Assistant => "assistant",
                    };
                    println!("[{who}] {}", turn.content);
                }
            }
            Command::Unknown(name) => eprintln!("Unknown command /{name}. Type /help."),
            Command::Send(text) => {
                let cancel = CancellationToken::new();
                let interrupt = {
                    let cancel = cancel.clone();
                    tokio::spawn(async move {
                        if tokio::signal::ctrl_c().await.is_ok() {
                            cancel.cancel();
                        }
                    })
                };
                // The sink already printed the outcome.
                let _ = chat
                    .send_message_cancellable(&text, None, &mut sink, &cancel)
                    .await;
                interrupt.abort();
            }
        }
    }
    Ok(())
}
