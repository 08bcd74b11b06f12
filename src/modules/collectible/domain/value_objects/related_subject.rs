//! Series/category labels attached to a collectible.

use serde::{Deserialize, Serialize};

/// Who assigned a related subject. By convention at most one entry of each
/// kind exists per item; a new user selection replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    AiClassified,
    UserSelectionPrimary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RelatedSubject {
    pub url: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<SubjectKind>,
}

impl RelatedSubject {
    pub fn classified(name: impl Into<String>) -> Self {
        Self {
            url: None,
            name: Some(name.into()),
            kind: Some(SubjectKind::AiClassified),
        }
    }

    pub fn user_selection(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            url,
            name: Some(name.into()),
            kind: Some(SubjectKind::UserSelectionPrimary),
        }
    }
}
