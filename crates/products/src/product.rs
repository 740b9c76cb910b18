use serde::{Deserialize, Deserializer, Serialize};

use catalog_core::{Entity, ProductId};

/// Product price as returned by the service.
///
/// The service owns validation; the client only needs to show it. Decimal
/// columns are often serialized as strings, so both shapes are kept verbatim.
/// A missing or `null` price renders as nothing rather than failing the whole
/// listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
    #[default]
    Missing,
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Price::Number(n) => core::fmt::Display::fmt(n, f),
            Price::Text(s) => f.write_str(s),
            Price::Missing => Ok(()),
        }
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price::Number(value.into())
    }
}

/// A catalog item (read model, matches the service response shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Image URL worth rendering, if any. Blank strings count as no image.
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_service_response() {
        let product: Product = serde_json::from_value(json!({
            "id": 2,
            "name": "Pen",
            "price": 2,
            "description": "blue",
            "image": ""
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::Numeric(2));
        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, Price::from(2));
        assert_eq!(product.description, "blue");
        assert_eq!(product.image.as_deref(), Some(""));
        assert_eq!(product.image_url(), None);
    }

    #[test]
    fn tolerates_string_price_null_description_and_extra_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": "a1",
            "name": "Mug",
            "price": "10.50",
            "description": null,
            "image": "https://img.example/mug.png",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(product.price, Price::Text("10.50".to_string()));
        assert_eq!(product.price.to_string(), "10.50");
        assert_eq!(product.description, "");
        assert_eq!(product.image_url(), Some("https://img.example/mug.png"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let product: Product =
            serde_json::from_value(json!({ "id": 1, "name": "Mug", "price": 10 })).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.image, None);
    }

    #[test]
    fn response_without_id_is_rejected() {
        let res = serde_json::from_value::<Product>(json!({ "name": "Pen", "price": 2 }));
        assert!(res.is_err());
    }

    #[test]
    fn null_price_and_name_still_decode() {
        let products: Vec<Product> = serde_json::from_value(json!([
            { "id": 1, "name": null, "price": null },
            { "id": 2, "name": "Pen" },
            { "id": 3, "name": "Mug", "price": 4 }
        ]))
        .unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "");
        assert_eq!(products[0].price, Price::Missing);
        assert_eq!(products[0].price.to_string(), "");
        assert_eq!(products[1].price, Price::Missing);
        assert_eq!(products[2].price, Price::from(4));
    }

    #[test]
    fn decimal_price_renders_verbatim() {
        let product: Product =
            serde_json::from_value(json!({ "id": 1, "name": "Mug", "price": 9.99 })).unwrap();
        assert_eq!(product.price.to_string(), "9.99");
    }

    #[test]
    fn entity_identity_uses_product_id() {
        let product: Product =
            serde_json::from_value(json!({ "id": 5, "name": "Cup", "price": 1 })).unwrap();
        assert!(product.is_identified_by(&ProductId::text("5")));
        assert!(!product.is_identified_by(&ProductId::Numeric(6)));
    }
}
