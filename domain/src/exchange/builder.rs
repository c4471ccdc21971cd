//! Request builder.

use super::mode::PayloadShape;
use super::payload::{
    ChatMessage, DEFAULT_TEMPERATURE, PROXY_MODEL_TAG, PayloadMetadata, RequestPayload,
};
use super::prompt::TUTOR_INSTRUCTIONS;
use crate::article::ArticleContext;
use crate::core::question::Question;
use crate::session::state::SessionHandle;

/// Composes [`RequestPayload`]s for one payload shape
///
/// Taking a [`Question`] rather than a raw string means blank input is
/// rejected before a builder is ever reached.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    shape: PayloadShape,
    instructions: String,
}

impl RequestBuilder {
    pub fn new(shape: PayloadShape) -> Self {
        Self {
            shape,
            instructions: TUTOR_INSTRUCTIONS.to_string(),
        }
    }

    /// Replace the tutor instructions used in stateless requests.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn build(
        &self,
        question: &Question,
        context: &ArticleContext,
        session: &SessionHandle,
    ) -> RequestPayload {
        let (messages, metadata) = match self.shape {
            PayloadShape::Stateless => (
                vec![ChatMessage::user(self.stateless_content(question, context))],
                None,
            ),
            PayloadShape::Session => (
                vec![ChatMessage::user(question.content())],
                Some(PayloadMetadata {
                    session_id: session.id().map(str::to_string),
                    article_url: context.url().to_string(),
                    article_title: context.title().to_string(),
                    article_context: context.body().to_string(),
                }),
            ),
        };

        RequestPayload {
            model: PROXY_MODEL_TAG.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            messages,
            metadata,
        }
    }

    fn stateless_content(&self, question: &Question, context: &ArticleContext) -> String {
        let mut content = String::with_capacity(
            self.instructions.len() + context.body().len() + question.content().len() + 128,
        );
        if !self.instructions.is_empty() {
            content.push_str(&self.instructions);
            content.push_str("\n\n");
        }
        content.push_str("Article title: ");
        content.push_str(context.title());
        content.push_str("\nArticle URL: ");
        content.push_str(context.url());
        content.push_str("\n\nArticle full context:\n");
        content.push_str(context.body());
        content.push_str("\n\nUser question:\n");
        content.push_str(question.content());
        content
    }
}
