pub mod handlers;
pub mod prompts;
pub mod quiz;
pub mod scoring;
