use anyhow::Context;
use serde::{Deserialize, Serialize};

// ==============================================================================
// Catalog Types
// ==============================================================================

/// Closed set of LLM vendors the engine knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelProvider {
    #[serde(rename = "Anthropic")]
    Anthropic,
    #[serde(rename = "DeepSeek")]
    DeepSeek,
    #[serde(rename = "Gemini")]
    Gemini,
    #[serde(rename = "Groq")]
    Groq,
    #[serde(rename = "OpenAI")]
    OpenAi,
}

impl ModelProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelProvider::Anthropic => "Anthropic",
            ModelProvider::DeepSeek => "DeepSeek",
            ModelProvider::Gemini => "Gemini",
            ModelProvider::Groq => "Groq",
            ModelProvider::OpenAi => "OpenAI",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub display_name: String,
    pub model_name: String,
    pub provider: ModelProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalystDescriptor {
    pub key: String,
    pub display_name: String,
    pub order: i32,
}

// Shapes the list endpoints expose to the frontends.
#[derive(Debug, Clone, Serialize)]
pub struct ModelEntry {
    pub label: String,
    pub value: String,
    pub provider: ModelProvider,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalystEntry {
    pub key: String,
    pub name: String,
    pub order: i32,
}

// ==============================================================================
// Catalog
// ==============================================================================

/// Process-wide model and analyst data. Loaded once at startup and shared
/// read-only across request handlers; never mutated after load.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    models: Vec<ModelDescriptor>,
    analysts: Vec<AnalystDescriptor>,
}

impl Catalog {
    /// Loads the catalog from the JSON file named by `CATALOG_FILE`, falling
    /// back to the shipped data when the variable is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var("CATALOG_FILE") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read catalog file {path}"))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse catalog file {path}"))
            }
            Err(_) => Ok(Self::builtin()),
        }
    }

    pub fn new(models: Vec<ModelDescriptor>, analysts: Vec<AnalystDescriptor>) -> Self {
        Self { models, analysts }
    }

    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    pub fn analysts(&self) -> &[AnalystDescriptor] {
        &self.analysts
    }

    /// First exact match on `model_name`, `None` when the model is unknown.
    pub fn find_model_provider(&self, model_name: &str) -> Option<ModelProvider> {
        self.models
            .iter()
            .find(|m| m.model_name == model_name)
            .map(|m| m.provider)
    }

    /// Models in the catalog's declared order, shaped for the UI dropdown.
    pub fn list_models(&self) -> Vec<ModelEntry> {
        self.models
            .iter()
            .map(|m| ModelEntry {
                label: m.display_name.clone(),
                value: m.model_name.clone(),
                provider: m.provider,
            })
            .collect()
    }

    /// Analysts sorted ascending by `order`. The sort is stable, so entries
    /// sharing an order keep their declared relative position.
    pub fn list_analysts(&self) -> Vec<AnalystEntry> {
        let mut analysts: Vec<AnalystEntry> = self
            .analysts
            .iter()
            .map(|a| AnalystEntry {
                key: a.key.clone(),
                name: a.display_name.clone(),
                order: a.order,
            })
            .collect();
        analysts.sort_by_key(|a| a.order);
        analysts
    }

    /// The model and analyst data shipped with the service.
    pub fn builtin() -> Self {
        fn model(display_name: &str, model_name: &str, provider: ModelProvider) -> ModelDescriptor {
            ModelDescriptor {
                display_name: display_name.to_string(),
                model_name: model_name.to_string(),
                provider,
            }
        }
        fn analyst(key: &str, display_name: &str, order: i32) -> AnalystDescriptor {
            AnalystDescriptor {
                key: key.to_string(),
                display_name: display_name.to_string(),
                order,
            }
        }

        let models = vec![
            model("[anthropic] claude-3.5-haiku", "claude-3-5-haiku-latest", ModelProvider::Anthropic),
            model("[anthropic] claude-3.5-sonnet", "claude-3-5-sonnet-latest", ModelProvider::Anthropic),
            model("[anthropic] claude-3.7-sonnet", "claude-3-7-sonnet-latest", ModelProvider::Anthropic),
            model("[deepseek] deepseek-r1", "deepseek-reasoner", ModelProvider::DeepSeek),
            model("[deepseek] deepseek-v3", "deepseek-chat", ModelProvider::DeepSeek),
            model("[gemini] gemini-2.0-flash", "gemini-2.0-flash", ModelProvider::Gemini),
            model("[gemini] gemini-2.5-pro", "gemini-2.5-pro-exp-03-25", ModelProvider::Gemini),
            model("[groq] llama-3.3 70b", "llama-3.3-70b-versatile", ModelProvider::Groq),
            model("[openai] gpt-4.5", "gpt-4.5-preview", ModelProvider::OpenAi),
            model("[openai] gpt-4o", "gpt-4o", ModelProvider::OpenAi),
            model("[openai] o1", "o1", ModelProvider::OpenAi),
            model("[openai] o3-mini", "o3-mini", ModelProvider::OpenAi),
        ];

        let analysts = vec![
            analyst("ben_graham", "Ben Graham", 0),
            analyst("bill_ackman", "Bill Ackman", 1),
            analyst("cathie_wood", "Cathie Wood", 2),
            analyst("charlie_munger", "Charlie Munger", 3),
            analyst("michael_burry", "Michael Burry", 4),
            analyst("peter_lynch", "Peter Lynch", 5),
            analyst("phil_fisher", "Phil Fisher", 6),
            analyst("stanley_druckenmiller", "Stanley Druckenmiller", 7),
            analyst("warren_buffett", "Warren Buffett", 8),
            analyst("technical_analyst", "Technical Analyst", 9),
            analyst("fundamentals_analyst", "Fundamentals Analyst", 10),
            analyst("sentiment_analyst", "Sentiment Analyst", 11),
            analyst("valuation_analyst", "Valuation Analyst", 12),
        ];

        Self::new(models, analysts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_model_provider_exact_match() {
        let catalog = Catalog::builtin();

        assert_eq!(
            catalog.find_model_provider("gpt-4o"),
            Some(ModelProvider::OpenAi)
        );
        assert_eq!(
            catalog.find_model_provider("claude-3-5-sonnet-latest"),
            Some(ModelProvider::Anthropic)
        );
    }

    #[test]
    fn test_find_model_provider_unknown_is_none() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.find_model_provider("gpt-4"), None);
        assert_eq!(catalog.find_model_provider(""), None);
    }

    #[test]
    fn test_list_models_keeps_declared_order() {
        let catalog = Catalog::new(
            vec![
                ModelDescriptor {
                    display_name: "B".into(),
                    model_name: "model-b".into(),
                    provider: ModelProvider::Groq,
                },
                ModelDescriptor {
                    display_name: "A".into(),
                    model_name: "model-a".into(),
                    provider: ModelProvider::OpenAi,
                },
            ],
            vec![],
        );

        let listed = catalog.list_models();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].value, "model-b");
        assert_eq!(listed[1].value, "model-a");
        assert_eq!(listed[0].label, "B");
    }

    #[test]
    fn test_list_analysts_sorted_by_order() {
        let catalog = Catalog::new(
            vec![],
            vec![
                AnalystDescriptor {
                    key: "a".into(),
                    display_name: "A".into(),
                    order: 2,
                },
                AnalystDescriptor {
                    key: "b".into(),
                    display_name: "B".into(),
                    order: 1,
                },
            ],
        );

        let listed = catalog.list_analysts();
        assert_eq!(listed[0].key, "b");
        assert_eq!(listed[0].name, "B");
        assert_eq!(listed[0].order, 1);
        assert_eq!(listed[1].key, "a");
    }

    #[test]
    fn test_list_analysts_stable_on_equal_order() {
        let catalog = Catalog::new(
            vec![],
            vec![
                AnalystDescriptor {
                    key: "first".into(),
                    display_name: "First".into(),
                    order: 5,
                },
                AnalystDescriptor {
                    key: "second".into(),
                    display_name: "Second".into(),
                    order: 5,
                },
                AnalystDescriptor {
                    key: "earlier".into(),
                    display_name: "Earlier".into(),
                    order: 1,
                },
            ],
        );

        let listed = catalog.list_analysts();
        assert_eq!(listed[0].key, "earlier");
        assert_eq!(listed[1].key, "first");
        assert_eq!(listed[2].key, "second");
    }

    #[test]
    fn test_provider_serializes_to_display_string() {
        assert_eq!(
            serde_json::to_value(ModelProvider::OpenAi).unwrap(),
            serde_json::json!("OpenAI")
        );
        assert_eq!(
            serde_json::to_value(ModelProvider::DeepSeek).unwrap(),
            serde_json::json!("DeepSeek")
        );
    }
}
