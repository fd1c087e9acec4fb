//! TOML catalog seeds
//!
//! A seed lists categories (with their fixed ids) and questions (without
//! ids; the store assigns them on insert).

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use trivia_domain::{Category, CategoryId, DomainError, NewQuestion};

const BUILTIN_SEED: &str = include_str!("../../data/seed.toml");

/// Errors that can occur while reading or validating a seed
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Could not read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse seed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Category {0} is declared twice")]
    DuplicateCategory(CategoryId),

    #[error("Seed question #{index} refers to unknown category {category}")]
    UnknownCategory { index: usize, category: CategoryId },

    #[error("Seed question #{index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// A question as written in a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

/// Categories and questions to load into a store
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSeed {
    pub categories: Vec<Category>,
    pub questions: Vec<SeedQuestion>,
}

impl CatalogSeed {
    /// The catalog shipped with the service
    pub fn builtin() -> Result<Self, SeedError> {
        Self::parse(BUILTIN_SEED)
    }

    pub fn parse(content: &str) -> Result<Self, SeedError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Validate the questions against the given categories plus the seed's own
    ///
    /// `known` holds categories already present in the target store.
    pub fn validated_questions(
        &self,
        known: &HashSet<CategoryId>,
    ) -> Result<Vec<NewQuestion>, SeedError> {
        let mut categories = known.clone();
        for category in &self.categories {
            if !categories.insert(category.id) {
                return Err(SeedError::DuplicateCategory(category.id));
            }
        }

        self.questions
            .iter()
            .enumerate()
            .map(|(index, q)| {
                if !categories.contains(&q.category) {
                    return Err(SeedError::UnknownCategory {
                        index,
                        category: q.category,
                    });
                }
                NewQuestion::new(&q.question, &q.answer, q.category, q.difficulty)
                    .map_err(|source| SeedError::InvalidQuestion { index, source })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_seed_is_valid() {
        let seed = CatalogSeed::builtin().unwrap();
        assert_eq!(seed.categories.len(), 6);
        assert_eq!(seed.categories[0].name, "Science");
        let questions = seed.validated_questions(&HashSet::new()).unwrap();
        assert_eq!(questions.len(), seed.questions.len());
        assert!(questions.len() > 10);
    }

    #[test]
    fn test_string_category_ids_are_normalized() {
        let seed = CatalogSeed::parse(
            r#"
[[categories]]
id = 7
type = "Music"

[[questions]]
question = "Who wrote the Goldberg Variations?"
answer = "Bach"
category = "7"
difficulty = 3
"#,
        )
        .unwrap();
        let questions = seed.validated_questions(&HashSet::new()).unwrap();
        assert_eq!(questions[0].category(), CategoryId::new(7));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let seed = CatalogSeed::parse(
            r#"
[[questions]]
question = "Orphan?"
answer = "Yes"
category = 42
difficulty = 1
"#,
        )
        .unwrap();
        let err = seed.validated_questions(&HashSet::new()).unwrap_err();
        assert!(matches!(err, SeedError::UnknownCategory { index: 0, .. }));

        let known: HashSet<CategoryId> = [CategoryId::new(42)].into_iter().collect();
        assert!(seed.validated_questions(&known).is_ok());
    }

    #[test]
    fn test_duplicate_category_is_rejected() {
        let seed = CatalogSeed::parse(
            r#"
[[categories]]
id = 1
type = "Science"
"#,
        )
        .unwrap();
        let known: HashSet<CategoryId> = [CategoryId::new(1)].into_iter().collect();
        assert!(matches!(
            seed.validated_questions(&known),
            Err(SeedError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_invalid_difficulty_is_rejected() {
        let seed = CatalogSeed::parse(
            r#"
[[categories]]
id = 1
type = "Science"

[[questions]]
question = "Too hard?"
answer = "Yes"
category = 1
difficulty = 11
"#,
        )
        .unwrap();
        assert!(matches!(
            seed.validated_questions(&HashSet::new()),
            Err(SeedError::InvalidQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[categories]]\nid = 9\ntype = \"Music\"").unwrap();
        let seed = CatalogSeed::from_file(file.path()).unwrap();
        assert_eq!(seed.categories, vec![Category::new(9, "Music")]);
    }

    #[test]
    fn test_from_missing_file() {
        let err = CatalogSeed::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}
