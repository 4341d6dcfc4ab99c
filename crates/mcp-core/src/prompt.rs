//! Prompt Registry
//!
//! Static prompt templates served over `prompts/list` and `prompts/get`.

use std::collections::HashMap;

/// A named, parameterless prompt template
#[derive(Clone, Debug)]
pub struct PromptDefinition {
    /// Unique prompt identifier
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Template text returned verbatim
    pub text: String,
}

impl PromptDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            text: text.into(),
        }
    }
}

/// Registry for available prompts
#[derive(Default)]
pub struct PromptRegistry {
    prompts: HashMap<String, PromptDefinition>,
}

impl PromptRegistry {
    pub fn new() -> Self {
        Self {
            prompts: HashMap::new(),
        }
    }

    /// Register a new prompt
    pub fn register(&mut self, prompt: PromptDefinition) {
        self.prompts.insert(prompt.name.clone(), prompt);
    }

    /// Get a prompt by name
    pub fn get(&self, name: &str) -> Option<&PromptDefinition> {
        self.prompts.get(name)
    }

    /// All registered prompts
    pub fn list(&self) -> Vec<&PromptDefinition> {
        self.prompts.values().collect()
    }

    /// Number of registered prompts
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = PromptRegistry::new();
        registry.register(PromptDefinition::new("greet", "A greeting", "Hello!"));

        assert_eq!(registry.len(), 1);
        let prompt = registry.get("greet").unwrap();
        assert_eq!(prompt.text, "Hello!");
        assert!(registry.get("unknown").is_none());
    }
}
