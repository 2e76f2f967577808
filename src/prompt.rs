/// Input used when the request carries no `user_input`
pub const DEFAULT_USER_INPUT: &str = "Hello from AWS Workshop!";

/// Instruction placed in front of every user input
pub const PROMPT_PREFIX: &str =
    "You are a helpful AWS assistant. Respond briefly and friendly to: ";

/// Builds the single-turn prompt sent to the model
#[must_use]
pub fn build_prompt(user_input: &str) -> String {
    format!("{PROMPT_PREFIX}{user_input}")
}
