use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::AppError;
use crate::pattern::PathPattern;
use crate::query::QueryParamValue;

/// HTML that is rendered without sanitization.
///
/// Only content shipped with the application (the bundled catalog) may be
/// wrapped in this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn from_trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Route pattern plus the example values used to pre-fill the builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSpec {
    pub pattern: String,
    #[serde(default)]
    pub named_params: BTreeMap<String, String>,
    #[serde(default)]
    pub query_params: BTreeMap<String, QueryParamValue>,
}

/// One example badge of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleDefinition {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<TrustedHtml>,
    pub example: ExampleSpec,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl ExampleDefinition {
    pub fn has_query_params(&self) -> bool {
        !self.example.query_params.is_empty()
    }

    /// The example path with every named parameter filled in.
    pub fn example_path(&self) -> Result<String, AppError> {
        let pattern = PathPattern::parse(&self.example.pattern)?;
        Ok(pattern.construct_path(&self.example.named_params).path)
    }

    /// Case-insensitive match against title and keywords.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(&needle))
    }
}

/// A badge service and its examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub name: String,
    pub category: String,
    pub examples: Vec<ExampleDefinition>,
}

/// Every service known to the application.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub services: Vec<ServiceDefinition>,
}

/// An example together with the service it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry<'a> {
    pub service: &'a ServiceDefinition,
    pub example: &'a ExampleDefinition,
}

impl Catalog {
    /// Parse catalog JSON and check that every example pattern parses.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        for service in &catalog.services {
            for example in &service.examples {
                PathPattern::parse(&example.example.pattern).map_err(|e| {
                    AppError::invalid_catalog(format!(
                        "{} / {}: {}",
                        service.name, example.title, e.message
                    ))
                })?;
            }
        }
        Ok(catalog)
    }

    /// Categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for service in &self.services {
            if !categories.contains(&service.category.as_str()) {
                categories.push(&service.category);
            }
        }
        categories
    }

    /// Examples matching `query` by title, keyword, service name or category.
    pub fn search(&self, query: &str) -> Vec<CatalogEntry<'_>> {
        let needle = query.trim().to_lowercase();
        self.services
            .iter()
            .flat_map(|service| {
                let service_hit = service.name.to_lowercase().contains(&needle)
                    || service.category.to_lowercase().contains(&needle);
                let needle = needle.clone();
                service
                    .examples
                    .iter()
                    .filter(move |example| service_hit || example.matches(&needle))
                    .map(move |example| CatalogEntry { service, example })
            })
            .collect()
    }
}
