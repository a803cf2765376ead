use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::{DomainError, Scenario};

/// Feature: título, origen opcional, tags y escenarios en orden de declaración.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    title: String,
    file: Option<PathBuf>,
    tags: Vec<String>,
    scenarios: Vec<Scenario>,
}

impl Feature {
    pub fn new(title: &str, scenarios: Vec<Scenario>) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation("feature title must not be empty".to_string()));
        }
        Ok(Feature { title: title.to_string(),
                     file: None,
                     tags: Vec::new(),
                     scenarios })
    }
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
    pub fn title(&self) -> &str { &self.title }
    pub fn file(&self) -> Option<&PathBuf> { self.file.as_ref() }
    pub fn tags(&self) -> &[String] { &self.tags }
    pub fn has_tag(&self, tag: &str) -> bool { self.tags.iter().any(|t| t == tag) }
    pub fn scenarios(&self) -> &[Scenario] { &self.scenarios }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(path) => write!(f, "<feature: {}, {}>", self.title, path.display()),
            None => write!(f, "<feature: {}>", self.title),
        }
    }
}
