//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;
use tutor_domain::{ExchangeMode, RenderStyle};

/// CLI arguments for article-tutor
#[derive(Parser, Debug)]
#[command(name = "article-tutor")]
#[command(author, version, about = "Ask questions about a technical blog article")]
#[command(long_about = r#"
Article Tutor answers questions about one article through a chat-completion
proxy. The article text is extracted from the page's content region and sent
along with each question.

Exchange modes:
  stateless   Every request carries the full article text (default)
  session     The proxy keeps the conversation; article travels as metadata
  dummy       No backend call, replies locally

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tutor.toml        Project-level config
3. ~/.config/article-tutor/config.toml   Global config

ARTICLE_TUTOR_API_BASE overrides the proxy base URL from any file.

Example:
  article-tutor --article post.html "What problem does this solve?"
  article-tutor --article https://blog.example/post --chat --mode session
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Article page to study, a local HTML file or an http(s) URL
    #[arg(short, long, value_name = "PATH|URL")]
    pub article: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Exchange mode: stateless, session or dummy
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<ExchangeMode>,

    /// Answer rendering: immediate or incremental
    #[arg(short, long, value_name = "STYLE")]
    pub render: Option<RenderStyle>,

    /// Proxy base URL (`/v1/chat/completions` is appended)
    #[arg(short, long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Write a JSONL transcript to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators and status lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
