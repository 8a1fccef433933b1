// HTTP facade modules
pub mod handlers;
pub mod models;
pub mod routes;

// Built-in prompts
pub mod prompts;

// LLM engine layer
pub mod llm;
