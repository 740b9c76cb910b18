//! The pending submission form.

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult};

/// Form fields, in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Price,
    Description,
    Image,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Price,
        DraftField::Description,
        DraftField::Image,
    ];

    /// Placeholder text shown for the field.
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Product Name",
            DraftField::Price => "Price",
            DraftField::Description => "Description",
            DraftField::Image => "Image URL (optional)",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, DraftField::Image)
    }
}

/// An unsaved product submission. Everything stays free text until the
/// service parses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
            image: image.into(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Price => &self.price,
            DraftField::Description => &self.description,
            DraftField::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Price => self.price = value,
            DraftField::Description => self.description = value,
            DraftField::Image => self.image = value,
        }
    }

    /// True when every field is empty (the state after a successful create).
    pub fn is_blank(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Required fields that are empty, in form order. Whitespace counts as
    /// content.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    /// Presence check only; price format and the like belong to the service.
    pub fn ensure_complete(&self) -> DomainResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        Err(missing_fields_error(&missing))
    }
}

/// Validation error naming the empty required fields.
pub fn missing_fields_error(missing: &[DraftField]) -> DomainError {
    let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    DomainError::validation(format!("required fields are empty: {}", names.join(", ")))
}
