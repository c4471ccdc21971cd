//! Fixed prompt text.

/// Tutor instructions placed ahead of the article in stateless requests.
pub const TUTOR_INSTRUCTIONS: &str = "You are an expert tutor for technical blog articles. \
Only use the article context provided by the user. If missing info, say so clearly.";

/// Greeting shown when a networked tutor starts.
pub const READY_GREETING: &str = "Tutor ready. Ask anything about this article.";

/// Greeting shown when the dummy tutor starts.
pub const DUMMY_GREETING: &str = "Terminal ready. Dummy mode only.";

/// Reply to every question in dummy mode.
pub const DUMMY_REPLY: &str = "Dummy mode enabled. No backend call configured.";
