//! Product metadata returned by the lookup endpoint

use serde::{Deserialize, Serialize};

/// Structured product metadata from one successful lookup.
///
/// Every field is optional on the wire; absent fields deserialize to
/// empty strings so the renderer needs a single non-empty predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Lookup status as reported by the endpoint ("active" for hits)
    #[serde(default)]
    pub status: String,

    /// Product image URL
    #[serde(default)]
    pub image_url: String,

    /// Product classification (wire name `class`)
    #[serde(default, rename = "class")]
    pub classification: String,

    /// The barcode as the endpoint echoes it back
    #[serde(default)]
    pub code: String,

    /// Manufacturer or brand owner
    #[serde(default)]
    pub company: String,

    /// Free-text product description
    #[serde(default)]
    pub description: String,

    /// Package size
    #[serde(default)]
    pub size: String,
}

impl ProductRecord {
    /// Whether the endpoint reported this barcode as an active product
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }

    /// Labeled textual rows in display order, skipping empty fields.
    ///
    /// One emptiness predicate for every field; the image URL is not a
    /// row (it always renders, in its own fixed slot).
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("Class", self.classification.as_str()),
            ("Code", self.code.as_str()),
            ("Company", self.company.as_str()),
            ("Description", self.description.as_str()),
            ("Size", self.size.as_str()),
            ("Status", self.status.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}
