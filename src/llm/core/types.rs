//! Shared request type passed from the engine to a provider

/// A single-turn completion request
///
/// Built by the engine for each `run` call: one user prompt, optionally
/// preceded by a system prompt. Providers map this onto their own wire
/// format.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The user prompt, sent verbatim
    pub prompt: String,
    /// Optional system prompt attached ahead of the user turn
    pub system: Option<String>,
}

impl CompletionRequest {
    /// Create a request with no system prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
        }
    }

    /// Attach a system prompt
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}
