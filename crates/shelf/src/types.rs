//! Core domain types for the shelf.
//!
//! - `Item`: payload accepted by the create and update endpoints
//! - `ItemRecord`: one entry of the fixed item list
//! - `ModelName`: closed enumeration of the known model names

use serde::{Deserialize, Serialize};
use std::fmt;

/// An item as submitted by a client.
///
/// Items are constructed transiently from request bodies and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

/// One entry of the fixed item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub item_name: String,
}

impl ItemRecord {
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
        }
    }
}

/// The known model names.
///
/// The enumeration is closed: a path parameter outside these three values
/// is rejected by the extractor layer and never reaches a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    /// Get the wire representation of the model name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "alexnet",
            ModelName::Resnet => "resnet",
            ModelName::Lenet => "lenet",
        }
    }

    /// Message shown for each model; `Resnet` carries the fallback text.
    pub fn message(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "Deep Learning FTW!",
            ModelName::Lenet => "LeCnn all the images",
            ModelName::Resnet => "Have some residuals",
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
