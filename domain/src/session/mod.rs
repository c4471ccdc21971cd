//! Proxy session domain.
//!
//! - [`envelope::ResponseEnvelope`] — the parts of a proxy reply we care about
//! - [`state::SessionState`] — the last session id the proxy handed back

pub mod envelope;
pub mod state;
