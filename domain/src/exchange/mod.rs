//! Request side of the proxy exchange.
//!
//! - [`mode::ExchangeMode`] — stateless, session-based, or dummy
//! - [`payload::RequestPayload`] — the JSON body posted to the proxy
//! - [`builder::RequestBuilder`] — turns a question plus context into a payload

pub mod builder;
pub mod mode;
pub mod payload;
pub mod prompt;
