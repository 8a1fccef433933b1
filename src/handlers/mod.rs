// Handlers module

use std::sync::Arc;

use crate::llm::Engine;

pub mod health;
pub mod run;

pub use health::{health_handler, root_handler};
pub use run::{fibonacci_handler, run_prompt_handler};

/// Process-wide engine handle shared by all request handlers
///
/// Holds `None` when construction failed at startup (Degraded); the
/// /run-family handlers answer 503 until the process is restarted with
/// working configuration. The handle is only ever read after startup.
pub type SharedEngine = Arc<Option<Engine>>;
