// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration: which fields to index, how to derive an id, and
//! the optional boost knobs the scorer reads.
//!
//! Immutable once built ([`EngineConfig`]), assembled through
//! [`EngineConfigBuilder`].

use std::collections::HashMap;

use crate::error::ConfigError;

/// Immutable configuration for a [`crate::SearchEngine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub(crate) fields: Vec<String>,
    pub(crate) id_field: String,
    pub(crate) custom_boost_factor_field: Option<String>,
    pub(crate) boost: HashMap<String, f64>,
    pub(crate) specific_document_boosts: HashMap<String, f64>,
    pub(crate) initial_results: Vec<String>,
}

impl EngineConfig {
    /// Start building a configuration.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// The configured searchable fields, in iteration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The field whose value becomes a document's id.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// The field, if any, whose numeric value additively boosts scores.
    pub fn custom_boost_factor_field(&self) -> Option<&str> {
        self.custom_boost_factor_field.as_deref()
    }

    /// Per-field multiplicative boost, if configured for `field`.
    pub fn field_boost(&self, field: &str) -> Option<f64> {
        self.boost.get(field).copied()
    }

    /// Per-document multiplicative boost, if configured for `id`.
    pub fn document_boost(&self, id: &str) -> Option<f64> {
        self.specific_document_boosts.get(id).copied()
    }

    /// The ordered document ids returned for the wildcard query `"*"`.
    pub fn initial_results(&self) -> &[String] {
        &self.initial_results
    }
}

/// Builder for [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    fields: Vec<String>,
    id_field: Option<String>,
    custom_boost_factor_field: Option<String>,
    boost: HashMap<String, f64>,
    specific_document_boosts: HashMap<String, f64>,
    initial_results: Vec<String>,
}

impl EngineConfigBuilder {
    /// Append a field to the searchable-fields list.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Replace the searchable-fields list.
    #[must_use]
    pub fn fields(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the id field.
    #[must_use]
    pub fn id_field(mut self, name: impl Into<String>) -> Self {
        self.id_field = Some(name.into());
        self
    }

    /// Configure a numeric field whose value additively boosts scores.
    #[must_use]
    pub fn custom_boost_factor_field(mut self, name: impl Into<String>) -> Self {
        self.custom_boost_factor_field = Some(name.into());
        self
    }

    /// Set a multiplicative boost for every match against `field`.
    #[must_use]
    pub fn boost(mut self, field: impl Into<String>, factor: f64) -> Self {
        self.boost.insert(field.into(), factor);
        self
    }

    /// Set a multiplicative boost for every match against document `id`.
    #[must_use]
    pub fn document_boost(mut self, id: impl Into<String>, factor: f64) -> Self {
        self.specific_document_boosts.insert(id.into(), factor);
        self
    }

    /// Set the ordered document ids returned for the wildcard query.
    #[must_use]
    pub fn initial_results(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.initial_results = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingIdField`] if [`EngineConfigBuilder::id_field`]
    /// was never called, or [`ConfigError::NoFields`] if no searchable
    /// fields were configured.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let id_field = self.id_field.ok_or(ConfigError::MissingIdField)?;
        if self.fields.is_empty() {
            return Err(ConfigError::NoFields);
        }

        Ok(EngineConfig {
            fields: self.fields,
            id_field,
            custom_boost_factor_field: self.custom_boost_factor_field,
            boost: self.boost,
            specific_document_boosts: self.specific_document_boosts,
            initial_results: self.initial_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_id_field() {
        let err = EngineConfig::builder().field("title").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingIdField);
    }

    #[test]
    fn build_requires_at_least_one_field() {
        let err = EngineConfig::builder().id_field("path").build().unwrap_err();
        assert_eq!(err, ConfigError::NoFields);
    }

    #[test]
    fn build_succeeds_with_id_field_and_fields() {
        let config = EngineConfig::builder()
            .id_field("path")
            .field("title")
            .field("body")
            .boost("title", 2.0)
            .document_boost("/a", 20.0)
            .initial_results(["/a", "/b"])
            .build()
            .unwrap();

        assert_eq!(config.id_field(), "path");
        assert_eq!(config.fields(), &["title".to_string(), "body".to_string()]);
        assert_eq!(config.field_boost("title"), Some(2.0));
        assert_eq!(config.field_boost("body"), None);
        assert_eq!(config.document_boost("/a"), Some(20.0));
        assert_eq!(config.initial_results(), &["/a".to_string(), "/b".to_string()]);
    }
}
