//! Command-line presentation shell: collects form values and renders results.

pub mod form;
pub mod prompt;
pub mod render;
