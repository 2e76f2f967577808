use workshop::prompt::{DEFAULT_USER_INPUT, PROMPT_PREFIX, build_prompt};

#[test]
fn test_prompt_embeds_input() {
    assert_eq!(
        build_prompt("What is Lambda?"),
        "You are a helpful AWS assistant. Respond briefly and friendly to: What is Lambda?"
    );
}

#[test]
fn test_prompt_keeps_input_verbatim() {
    let input = "  multi\nline {{ braces }}  ";
    let prompt = build_prompt(input);
    assert!(prompt.starts_with(PROMPT_PREFIX));
    assert!(prompt.ends_with(input));
}

#[test]
fn test_default_input() {
    assert_eq!(DEFAULT_USER_INPUT, "Hello from AWS Workshop!");
}
