// src/domain/choices.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

/// Human readable, translatable text attached to a field or a choice.
///
/// The wrapped string is the message id handed to whatever catalog the host
/// application uses; without a catalog it is displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(Cow<'static, str>);

impl Label {
    pub const fn new(msgid: &'static str) -> Self {
        Self(Cow::Borrowed(msgid))
    }

    pub fn msgid(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Label {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

/// Ordered token to label table used as the allowed values of a choice field.
///
/// Looking a token up returns the token itself, so callers compare stored
/// values against `choices.token("PUBLIC")?` rather than against labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices {
    entries: Vec<(String, Label)>,
}

impl Choices {
    /// Builds the table in declaration order. A repeated token keeps its first
    /// position and takes the last label given for it.
    pub fn new<I, K, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<Label>,
    {
        let mut choices = Self::default();
        for (token, label) in entries {
            choices.insert(token.into(), label.into());
        }
        choices
    }

    fn insert(&mut self, token: String, label: Label) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == token) {
            Some(entry) => entry.1 = label,
            None => self.entries.push((token, label)),
        }
    }

    /// Returns the declared token, or `UnknownChoice` naming the missing one.
    pub fn token(&self, key: &str) -> DomainResult<&str> {
        self.entries
            .iter()
            .find(|(token, _)| token == key)
            .map(|(token, _)| token.as_str())
            .ok_or_else(|| DomainError::UnknownChoice(key.to_string()))
    }

    pub fn label(&self, key: &str) -> Option<&Label> {
        self.entries
            .iter()
            .find(|(token, _)| token == key)
            .map(|(_, label)| label)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(token, _)| token == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Label)> {
        self.entries
            .iter()
            .map(|(token, label)| (token.as_str(), label))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(token, _)| token.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field-validator form of `contains`.
    pub fn validate(&self, value: &str) -> DomainResult<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "value {value:?} is not a valid choice"
            )))
        }
    }
}

impl<'a> IntoIterator for &'a Choices {
    type Item = (&'a str, &'a Label);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Label)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<K, L> FromIterator<(K, L)> for Choices
where
    K: Into<String>,
    L: Into<Label>,
{
    fn from_iter<T: IntoIterator<Item = (K, L)>>(iter: T) -> Self {
        Self::new(iter)
    }
}
