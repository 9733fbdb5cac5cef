//! Models offered by the chat service.

/// Model used when none has been selected.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Identifier sent upstream in the `model` field.
    pub id: &'static str,
    /// Short name accepted on the command line.
    pub alias: &'static str,
    pub label: &'static str,
}

pub const KNOWN_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "gpt-4o-mini",
        alias: "gpt",
        label: "GPT-4o mini",
    },
    ModelInfo {
        id: "claude-3-haiku-20240307",
        alias: "claude",
        label: "Claude 3 Haiku",
    },
    ModelInfo {
        id: "meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo",
        alias: "llama",
        label: "Llama 3.1 70B",
    },
    ModelInfo {
        id: "mistralai/Mixtral-8x7B-Instruct-v0.1",
        alias: "mixtral",
        label: "Mixtral 8x7B",
    },
];

/// Look up a known model by id or alias (case-insensitive).
pub fn find_model(name: &str) -> Option<&'static ModelInfo> {
    let name = name.trim();
    KNOWN_MODELS
        .iter()
        .find(|m| m.id.eq_ignore_ascii_case(name) || m.alias.eq_ignore_ascii_case(name))
}

/// Map an alias to its model id; unknown names pass through unchanged.
pub fn resolve_model(name: &str) -> String {
    match find_model(name) {
        Some(model) => model.id.to_string(),
        None => name.trim().to_string(),
    }
}
