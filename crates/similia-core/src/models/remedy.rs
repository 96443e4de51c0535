use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A modality value in the source corpus is either a single string or a
/// list of strings. Untagged so both JSON shapes deserialize directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModalityValue {
    Single(String),
    Many(Vec<String>),
}

impl ModalityValue {
    /// Render the value as a single comma-joined line for display.
    pub fn display(&self) -> String {
        match self {
            ModalityValue::Single(s) => s.clone(),
            ModalityValue::Many(items) => items.join(", "),
        }
    }
}

/// One corpus entry: a remedy and its descriptive text.
///
/// Immutable after load. Position in the loaded corpus is the identity used
/// for index alignment; `id` and `name` come from the source and are for
/// provenance and display. Every field defaults so a partially malformed
/// record loads with empty values instead of failing the whole corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Remedy {
    pub id: String,
    pub name: String,
    pub full_text: String,
    pub source: String,
    /// Short diagnostic phrases matched as case-insensitive substrings of
    /// the raw query for score boosting.
    pub rubrics: Vec<String>,
    pub key_characteristics: Vec<String>,
    pub key_characteristics_desc: Option<String>,
    pub physical_symptoms: Vec<String>,
    pub physical_symptoms_desc: Option<String>,
    pub mental_symptoms: Vec<String>,
    pub mental_symptoms_desc: Option<String>,
    pub thermal: String,
    pub thermal_desc: Option<String>,
    pub modalities: BTreeMap<String, ModalityValue>,
}

impl Remedy {
    /// Word count of the full text, floored at 1 so lexical scoring never
    /// divides by zero.
    pub fn word_count(&self) -> usize {
        self.full_text.split_whitespace().count().max(1)
    }

    /// Key characteristics as display text: the prose variant when present,
    /// otherwise the list joined line by line.
    pub fn characteristics_display(&self) -> String {
        Self::prose_or_list(&self.key_characteristics_desc, &self.key_characteristics)
    }

    pub fn physical_display(&self) -> String {
        Self::prose_or_list(&self.physical_symptoms_desc, &self.physical_symptoms)
    }

    pub fn mental_display(&self) -> String {
        Self::prose_or_list(&self.mental_symptoms_desc, &self.mental_symptoms)
    }

    /// Thermal description: prose variant when present, raw field otherwise.
    pub fn thermal_display(&self) -> &str {
        match &self.thermal_desc {
            Some(desc) if !desc.is_empty() => desc,
            _ => &self.thermal,
        }
    }

    fn prose_or_list(desc: &Option<String>, items: &[String]) -> String {
        match desc {
            Some(desc) if !desc.is_empty() => desc.clone(),
            _ => items.join("\n"),
        }
    }
}
