//! Use cases (application services)

pub mod ask_article;
pub mod render_answer;
