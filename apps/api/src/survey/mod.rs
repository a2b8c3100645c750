// Survey intake: scoring, payload handling, persistence and HTTP handlers.

pub mod client_ip;
pub mod handlers;
pub mod scoring;
pub mod store;
pub mod submission;
