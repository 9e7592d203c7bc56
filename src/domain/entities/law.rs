//! Law entry from the legal code listing.

use serde::{Deserialize, Serialize};

/// A single article of the legal code.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Law {
    pub id: u64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "conteudo")]
    pub content: String,
}

impl Law {
    /// Minimum query length accepted by [`Law::matches`] callers.
    pub const MIN_QUERY_LEN: usize = 3;

    /// Case-insensitive match on title or content.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.content.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn robbery() -> Law {
        Law {
            id: 2,
            category: "Código Penal".to_string(),
            title: "Artigo 2 - Roubo".to_string(),
            content: "Pena: 45 meses de prisão e multa de $10,000".to_string(),
        }
    }

    #[test]
    fn test_matches_title_and_content() {
        let law = robbery();
        assert!(law.matches("roubo"));
        assert!(law.matches("PRISÃO"));
        assert!(!law.matches("furto"));
    }

    #[test]
    fn test_wire_names() {
        let law: Law = serde_json::from_str(
            r#"{"id":2,"categoria":"Código Penal","titulo":"Artigo 2 - Roubo","conteudo":"Pena"}"#,
        )
        .unwrap();
        assert_eq!(law.title, "Artigo 2 - Roubo");
    }
}
