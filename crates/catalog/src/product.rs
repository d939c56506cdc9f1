use serde::{Deserialize, Serialize};

use fibertech_core::{FieldErrors, ProductId};

/// A named specification row shown on the product detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

/// A downloadable document attached to a product (datasheet, manual).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub name: String,
    pub url: String,
}

/// Catalog record.
///
/// Serialized field names are camelCase to match the persisted catalog
/// document; optional collections are omitted when empty so the stored
/// JSON stays byte-compatible with documents written by earlier versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub code: String,
    pub description: String,
    pub image_url: String,
    /// One of the ids in [`crate::category::CATEGORIES`]; not validated.
    pub category: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specifications: Vec<Specification>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentLink>,
}

/// Admin form input for creating a product.
///
/// Carries no id; `CatalogStore::add` assigns one on append. New records
/// start unpublished unless the form says otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub title: String,
    pub code: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub published: bool,
    pub full_description: Option<String>,
    pub specifications: Vec<Specification>,
    pub features: Vec<String>,
    pub documents: Vec<DocumentLink>,
}

impl ProductDraft {
    /// Required-field checks the admin form runs before submit.
    ///
    /// CSV import deliberately does not enforce `code`; only the form does.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", "Product title", &self.title);
        errors.require("code", "Product code", &self.code);
        errors.require("description", "Product description", &self.description);
        errors.into_result()
    }

    /// Turn validated form input into a catalog record with no id yet.
    pub fn into_product(self) -> Result<Product, FieldErrors> {
        self.validate()?;
        Ok(Product {
            id: ProductId::unassigned(),
            title: self.title,
            code: self.code,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            published: self.published,
            full_description: self.full_description,
            specifications: self.specifications,
            features: self.features,
            documents: self.documents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            title: "Single-Mode Fiber Cable".to_string(),
            code: "FC-SM-1000".to_string(),
            description: "Premium single-mode fiber optic cable.".to_string(),
            image_url: "https://example.com/cable.jpg".to_string(),
            category: "fiber-cables".to_string(),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn valid_draft_becomes_unassigned_product() {
        let product = draft().into_product().unwrap();
        assert!(product.id.is_unassigned());
        assert!(!product.published);
        assert_eq!(product.title, "Single-Mode Fiber Cable");
    }

    #[test]
    fn blank_required_fields_are_reported_per_field() {
        let mut input = draft();
        input.title = String::new();
        input.code = "  ".to_string();

        let errors = input.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 2);
        assert_eq!(
            errors.message_for("title"),
            Some("Product title is required")
        );
        assert_eq!(errors.message_for("code"), Some("Product code is required"));
        assert_eq!(errors.message_for("description"), None);
    }

    #[test]
    fn json_uses_camel_case_and_omits_empty_collections() {
        let product = Product {
            id: ProductId::from("odf-rack-24"),
            title: "ODF Rack 24 Ports".to_string(),
            code: "ODF-R24".to_string(),
            description: "24-port optical distribution frame rack.".to_string(),
            image_url: "https://example.com/odf.jpg".to_string(),
            category: "odf".to_string(),
            published: true,
            full_description: None,
            specifications: Vec::new(),
            features: Vec::new(),
            documents: Vec::new(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/odf.jpg");
        assert!(json.get("image_url").is_none());
        assert!(json.get("fullDescription").is_none());
        assert!(json.get("specifications").is_none());
    }

    #[test]
    fn documents_without_published_flag_deserialize_as_unpublished() {
        // Catalog documents written before the publish workflow existed
        // have no `published` key at all.
        let json = r#"{
            "id": "fiber-splice-kit",
            "title": "Fiber Splicing Kit",
            "code": "FSK-PRO",
            "description": "Complete professional fiber splicing kit.",
            "imageUrl": "https://example.com/kit.jpg",
            "category": "accessories"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.published);
        assert!(product.features.is_empty());
    }

    #[test]
    fn rich_fields_round_trip_through_json() {
        let product = Product {
            id: ProductId::from("otdr-tester"),
            title: "OTDR Fiber Tester".to_string(),
            code: "OTDR-T2000".to_string(),
            description: "Optical Time Domain Reflectometer.".to_string(),
            image_url: String::new(),
            category: "testing-equipment".to_string(),
            published: false,
            full_description: Some("Field unit with 2km dead zone.".to_string()),
            specifications: vec![Specification {
                name: "Wavelength".to_string(),
                value: "1310/1550nm".to_string(),
            }],
            features: vec!["Touchscreen".to_string()],
            documents: vec![DocumentLink {
                name: "Datasheet".to_string(),
                url: "https://example.com/otdr.pdf".to_string(),
            }],
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
