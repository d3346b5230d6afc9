use serde::{Deserialize, Serialize};

/// List payload as returned by the API's collection routes.
///
/// Some routes answer with a bare array, others wrap it in an object
/// (`{"notifications": [...]}`, `{"items": [...]}`, `{"data": [...]}`).
/// Both shapes decode into the same list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped(WrappedList<T>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WrappedList<T> {
    #[serde(
        alias = "items",
        alias = "data",
        alias = "results",
        alias = "transactions",
        alias = "connections",
        alias = "notifications"
    )]
    pub list: Vec<T>,
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped(wrapped) => wrapped.list,
        }
    }
}
