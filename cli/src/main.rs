//! CLI entrypoint for Article Tutor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tutor_application::{
    ArticleSource, StaticArticleSource, SubmitOutcome, TranscriptView, TutorSession,
};
use tutor_infrastructure::{
    ConfigLoader, FileConfig, HtmlArticleSource, HttpProxyTransport, JsonlConversationLogger,
    load_article,
};
use tutor_presentation::{ChatRepl, Cli, ConsoleTranscriptView};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting Article Tutor");

    // === Configuration ===
    let loaded = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    };
    let mut config = loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    // === Dependency Injection ===
    let (source, title) = article_source(&cli, &config).await?;
    let transport = Arc::new(HttpProxyTransport::new(
        &config.proxy.base_url,
        config.proxy.timeout(),
    )?);
    let view = Arc::new(
        ConsoleTranscriptView::stdout()
            .quiet(cli.quiet)
            .with_user_echo(!cli.chat),
    );

    let mut session = TutorSession::new(
        source,
        transport,
        view.clone() as Arc<dyn TranscriptView>,
        config.tutor_config(),
    );
    if let Some(path) = &config.logging.transcript {
        let path = expand_home(path);
        match JsonlConversationLogger::open(&path) {
            Ok(logger) => {
                info!("Writing transcript to {}", logger.path().display());
                session = session.with_conversation_logger(Arc::new(logger));
            }
            Err(e) => warn!("Could not open transcript {}: {}", path.display(), e),
        }
    }
    info!("Mode: {}, proxy: {}", session.mode(), session.endpoint());

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(Arc::new(session)).with_article_title(title);
        if let Some(path) = &config.repl.history_file {
            repl = repl.with_history_file(Some(expand_home(path)));
        }
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single question mode - question is required
    let Some(question) = cli.question else {
        bail!("Question is required. Use --chat for interactive mode.");
    };

    let outcome = session.submit(&question).await;
    view.finish();

    one_shot_exit(outcome)
}

/// A failed request has already been shown in the transcript.
fn one_shot_exit(outcome: SubmitOutcome) -> Result<ExitCode> {
    match outcome {
        SubmitOutcome::Answered { .. } | SubmitOutcome::Stub => Ok(ExitCode::SUCCESS),
        SubmitOutcome::Ignored => bail!("Question is empty."),
        SubmitOutcome::Busy => bail!("Tutor is busy."),
        SubmitOutcome::Failed(_) => Ok(ExitCode::FAILURE),
    }
}

/// Install the tracing subscriber. The guard must live until exit so the
/// log file is flushed.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // stdout carries the transcript, so logs never go there
    let Some(path) = &cli.log_file else {
        subscriber.with_writer(std::io::stderr).init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    subscriber.with_writer(writer).with_ansi(false).init();
    Ok(Some(guard))
}

/// Command-line flags win over every configuration source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(mode) = cli.mode {
        config.tutor.mode = mode;
    }
    if let Some(style) = cli.render {
        config.render.mode = style;
    }
    if let Some(proxy) = &cli.proxy {
        config.proxy.base_url = proxy.clone();
    }
    if let Some(path) = &cli.transcript {
        config.logging.transcript = Some(path.display().to_string());
    }
}

/// Load the article page and build its extractor. Without `--article` the
/// tutor runs with an empty context.
async fn article_source(
    cli: &Cli,
    config: &FileConfig,
) -> Result<(Arc<dyn ArticleSource>, String)> {
    let Some(location) = &cli.article else {
        warn!("No --article given; questions are sent without article context");
        return Ok((Arc::new(StaticArticleSource::default()), String::new()));
    };

    let document = load_article(&reqwest::Client::new(), location)
        .await
        .with_context(|| format!("Could not load article {}", location))?;
    let source = HtmlArticleSource::new(
        document.html,
        document.url,
        &config.tutor.content_selector,
    )?
    .with_max_chars(config.tutor.max_context_chars);

    let context = source.extract();
    if !context.has_body() {
        warn!(
            "No `{}` region found in {}; article context is empty",
            config.tutor.content_selector, location
        );
    }
    info!(
        "Article: {:?} ({} chars)",
        context.title(),
        context.body_chars()
    );

    Ok((Arc::new(source), context.title().to_string()))
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
