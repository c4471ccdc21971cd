//! REPL (Read-Eval-Print Loop) for interactive chat

use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use tutor_application::{SubmitOutcome, TutorSession};

const HISTORY_CAPACITY: usize = 1000;

/// What a slash command asks the loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: Arc<TutorSession>,
    article_title: String,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(session: Arc<TutorSession>) -> Self {
        Self {
            session,
            article_title: String::new(),
            history_file: None,
        }
    }

    /// Title shown in the welcome banner
    pub fn with_article_title(mut self, title: impl Into<String>) -> Self {
        self.article_title = title.into();
        self
    }

    /// Persist line history to `path`; `None` keeps it in memory only
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_file else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("tutor".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();
        self.session.greet();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandAction::Exit {
                            break;
                        }
                        continue;
                    }

                    if self.session.submit(line).await == SubmitOutcome::Busy {
                        println!("Still waiting for the previous answer.");
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         Article Tutor - Chat Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        if !self.article_title.is_empty() {
            println!("Article:  {}", self.article_title);
        }
        println!("Mode:     {}", self.session.mode());
        if !self.session.mode().is_dummy() {
            println!("Proxy:    {}", self.session.endpoint());
        }
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /session  - Show the proxy session id");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands.
    pub fn handle_command(&self, cmd: &str) -> CommandAction {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandAction::Exit
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /session         - Show the proxy session id");
                println!("  /mode            - Show the exchange mode");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                CommandAction::Continue
            }
            "/session" => {
                match self.session.session_id() {
                    Some(id) => println!("Session: {}", id),
                    None => println!("No session yet."),
                }
                CommandAction::Continue
            }
            "/mode" => {
                println!("Mode: {}", self.session.mode());
                CommandAction::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandAction::Continue
            }
        }
    }
}
