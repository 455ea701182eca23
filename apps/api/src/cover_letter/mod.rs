// Cover letters: prompt construction, generation through llm_client, and
// recovery of the letter structure from generated text.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
