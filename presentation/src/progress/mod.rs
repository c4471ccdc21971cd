//! Progress display

pub mod reporter;

pub use reporter::StatusSpinner;
