pub mod fallback;
pub mod generate;
pub mod handlers;
pub mod models;
pub mod prompts;
