//! Built-in prompts

/// System prompt attached to every engine the facade and demos build,
/// compiled in from soul.md
pub const SYSTEM_PROMPT: &str = include_str!("soul.md");

/// Fixed prompt served by GET /fibonacci
pub const FIBONACCI_PROMPT: &str = "What is the 10th number in the Fibonacci sequence?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_compiled_in() {
        assert!(SYSTEM_PROMPT.contains("Alfred"));
    }

    #[test]
    fn test_fibonacci_prompt_literal() {
        assert_eq!(
            FIBONACCI_PROMPT,
            "What is the 10th number in the Fibonacci sequence?"
        );
    }
}
