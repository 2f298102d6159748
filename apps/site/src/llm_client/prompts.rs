// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it and pulls cross-cutting pieces from here.

/// Instruction appended to any user prompt that expects a JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str = "Only output valid JSON.";

/// Temperature for extraction tasks, where determinism matters more than variety.
pub const EXTRACTION_TEMPERATURE: f32 = 0.2;
