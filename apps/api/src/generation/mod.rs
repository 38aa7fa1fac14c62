// Document assembly: validation, sequential per-type loop, deterministic
// fallback. All backend calls go through llm_client — nothing here talks to
// the completion API directly.

pub mod generator;
pub mod handlers;
