//! Ask Article use case.
//!
//! A [`TutorSession`] is one tutor instance: it owns the proxy session id,
//! the transcript and the busy flag, and runs the pipeline for each
//! submission:
//!
//! 1. Ignore blank input
//! 2. Refuse while another submission is in flight
//! 3. Extract the article, build the payload, send it
//! 4. Adopt any new session id, render the answer
//! 5. On failure, show a single `Request failed: ...` entry
//!
//! Separate instances share nothing, so several tutors can coexist in one
//! process (and in tests).

use crate::config::TutorConfig;
use crate::ports::article_source::ArticleSource;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::proxy_transport::{CHAT_COMPLETIONS_PATH, ProxyTransport, TransportError};
use crate::ports::transcript_view::TranscriptView;
use crate::use_cases::render_answer::ResponseRenderer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};
use tutor_domain::core::string::truncate;
use tutor_domain::{
    ConversationLog, ConversationTurn, DUMMY_GREETING, DUMMY_REPLY, ExchangeMode, Question,
    READY_GREETING, RequestBuilder, Role, SessionState,
};

/// What a call to [`TutorSession::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing happened.
    Ignored,
    /// Another submission is still in flight; nothing happened.
    Busy,
    /// Dummy mode replied locally.
    Stub,
    /// The proxy answered (possibly with the placeholder text).
    Answered {
        answer: String,
        session_id: Option<String>,
    },
    /// The request failed; the error is already on screen.
    Failed(TransportError),
}

/// One tutor instance and its conversation
pub struct TutorSession {
    source: Arc<dyn ArticleSource>,
    transport: Arc<dyn ProxyTransport>,
    view: Arc<dyn TranscriptView>,
    conversation_logger: Arc<dyn ConversationLogger>,
    mode: ExchangeMode,
    ready_status: &'static str,
    builder: Option<RequestBuilder>,
    renderer: ResponseRenderer,
    state: Mutex<SessionState>,
    log: Mutex<ConversationLog>,
    busy: AtomicBool,
}

impl TutorSession {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        transport: Arc<dyn ProxyTransport>,
        view: Arc<dyn TranscriptView>,
        config: TutorConfig,
    ) -> Self {
        let builder = config.mode.payload_shape().map(|shape| {
            let builder = RequestBuilder::new(shape);
            match config.instructions {
                Some(ref instructions) => builder.with_instructions(instructions.clone()),
                None => builder,
            }
        });

        Self {
            source,
            transport,
            view,
            conversation_logger: Arc::new(NoConversationLogger),
            mode: config.mode,
            ready_status: config.ready_status(),
            builder,
            renderer: ResponseRenderer::new(config.render),
            state: Mutex::new(SessionState::new()),
            log: Mutex::new(ConversationLog::new()),
            busy: AtomicBool::new(false),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn mode(&self) -> ExchangeMode {
        self.mode
    }

    /// Where requests go, for display.
    pub fn endpoint(&self) -> String {
        self.transport.endpoint()
    }

    /// Current proxy session id, if one has been handed out.
    pub fn session_id(&self) -> Option<String> {
        lock(&self.state).current().id().map(str::to_string)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Vec<ConversationTurn> {
        lock(&self.log).turns().to_vec()
    }

    /// Show the greeting and the ready status.
    pub fn greet(&self) {
        let turn = if self.mode.is_dummy() {
            ConversationTurn::system(DUMMY_GREETING)
        } else {
            ConversationTurn::assistant(READY_GREETING)
        };
        self.show(turn);
        self.view.set_status(self.ready_status);
    }

    /// Run one question through the pipeline.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let Some(question) = Question::try_new(input) else {
            return SubmitOutcome::Ignored;
        };

        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Submission ignored: a request is already in flight");
            return SubmitOutcome::Busy;
        }
        self.view.set_submit_enabled(false);
        let _in_flight = InFlight { session: self };

        self.exchange(question).await
    }

    async fn exchange(&self, question: Question) -> SubmitOutcome {
        info!(
            "Question ({} mode): {}",
            self.mode,
            truncate(question.content(), 100)
        );
        self.show(ConversationTurn::user(question.content()));

        let Some(builder) = &self.builder else {
            self.show(ConversationTurn::system(DUMMY_REPLY));
            return SubmitOutcome::Stub;
        };

        self.view
            .set_status(&format!("Calling {} ...", CHAT_COMPLETIONS_PATH));

        let context = self.source.extract();
        let session = lock(&self.state).current().clone();
        let payload = builder.build(&question, &context, &session);
        debug!(
            "Payload: {} messages, {} content chars, article {} chars, session {:?}",
            payload.messages.len(),
            payload.content_chars(),
            context.body_chars(),
            session.id()
        );

        match self.transport.send(&payload).await {
            Ok(envelope) => {
                let session_id = {
                    let mut state = lock(&self.state);
                    if state.update(&envelope) {
                        debug!("Proxy session id is now {:?}", state.current().id());
                    }
                    state.current().id().map(str::to_string)
                };

                if envelope.answer().is_none() {
                    warn!("Proxy reply carried no assistant content");
                }
                let answer = envelope.answer_or_placeholder().to_string();

                let steps = self
                    .renderer
                    .render(self.view.as_ref(), Role::Assistant, &answer)
                    .await;
                debug!("Rendered answer in {} steps", steps);
                self.record(ConversationTurn::assistant(answer.clone()));
                self.view.set_status("Done.");

                SubmitOutcome::Answered { answer, session_id }
            }
            Err(error) => {
                warn!("Request failed: {}", error);
                self.show(ConversationTurn::assistant(format!(
                    "Request failed: {}",
                    error
                )));
                self.conversation_logger.log(ConversationEvent::new(
                    "request_failed",
                    serde_json::json!({ "error": error.to_string() }),
                ));
                self.view.set_status("Error calling API.");

                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Display a turn as a whole entry and record it.
    fn show(&self, turn: ConversationTurn) {
        self.view.append_entry(turn.role, &turn.content);
        self.view.scroll_to_end();
        self.record(turn);
    }

    fn record(&self, turn: ConversationTurn) {
        self.conversation_logger.log(ConversationEvent::new(
            "turn",
            serde_json::json!({
                "role": turn.role.as_str(),
                "mode": self.mode.as_str(),
                "bytes": turn.content.len(),
                "text": turn.content,
            }),
        ));
        lock(&self.log).push(turn);
    }
}

/// Clears the busy flag and re-enables submit when a submission ends,
/// including when its future is dropped mid-flight.
struct InFlight<'a> {
    session: &'a TutorSession,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.session.busy.store(false, Ordering::SeqCst);
        self.session.view.set_submit_enabled(true);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
