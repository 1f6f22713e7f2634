pub mod handlers;
pub mod skills;
