//! The identifiers offered by the control.

use serde::{Deserialize, Serialize};
use crate::registry::SchemeRegistry;

/// A scheme identifier with the label to show when the identifier is
/// not in the registry.  Serialized as a pair `[value, label]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Choice { value: value.into(), label: label.into() }
    }
}

impl From<(String, String)> for Choice {
    fn from((value, label): (String, String)) -> Self { Choice { value, label } }
}

impl From<Choice> for (String, String) {
    fn from(c: Choice) -> Self { (c.value, c.label) }
}

/// Ordered list of [`Choice`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceList(Vec<Choice>);

impl ChoiceList {
    pub fn new() -> Self { Self::default() }

    /// One choice per scheme of `registry`, labeled with the scheme
    /// label.
    pub fn from_registry(registry: &SchemeRegistry) -> Self {
        registry.iter().map(|s| Choice::new(&s.id, &s.label)).collect()
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Choice> { self.0.iter() }
}

impl FromIterator<Choice> for ChoiceList {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        ChoiceList(iter.into_iter().collect())
    }
}

impl<V, L> FromIterator<(V, L)> for ChoiceList
where V: Into<String>, L: Into<String> {
    fn from_iter<I: IntoIterator<Item = (V, L)>>(iter: I) -> Self {
        iter.into_iter().map(|(v, l)| Choice::new(v, l)).collect()
    }
}

impl<'a> IntoIterator for &'a ChoiceList {
    type Item = &'a Choice;
    type IntoIter = std::slice::Iter<'a, Choice>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}
