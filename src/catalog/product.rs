//! Product record
//!
//! Field names serialize in camelCase so catalog files written for the
//! storefront load unchanged.

use serde::{Deserialize, Serialize};

use super::errors::{CatalogError, CatalogResult};

/// Highest rating a product can carry
pub const MAX_RATING: f64 = 5.0;

/// Auxiliary page metadata. Carried through, never queried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,

    /// Price in rupees. Absent for most of the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Average rating, 0 to 5
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind the rating
    #[serde(default)]
    pub reviews: u32,

    /// Free-form size label such as "800ml" or "3 Pieces"
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Search keywords
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_specialty: bool,

    #[serde(default)]
    pub seo: SeoMeta,
}

impl Product {
    /// Creates a product with only the required fields set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            subcategory: String::new(),
            price: None,
            rating: 0.0,
            reviews: 0,
            size: String::new(),
            material: String::new(),
            dimensions: String::new(),
            weight: String::new(),
            colors: Vec::new(),
            features: Vec::new(),
            tags: Vec::new(),
            img: None,
            images: Vec::new(),
            in_stock: false,
            is_popular: false,
            is_best_seller: false,
            is_premium: false,
            is_specialty: false,
            seo: SeoMeta::default(),
        }
    }

    /// Numeric magnitude embedded in the size label.
    ///
    /// Reads the first run of ASCII digits: "800ml" is 800, "3 Pieces" is 3.
    /// Labels without digits, or with a run too long to fit, read as 0.
    pub fn size_magnitude(&self) -> u64 {
        let digits: String = self
            .size
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }

    /// True when the product should appear in "popular" listings
    pub fn is_featured(&self) -> bool {
        self.is_popular || self.is_best_seller
    }

    /// Checks field constraints that serde cannot express
    pub fn validate(&self) -> CatalogResult<()> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::invalid(&self.name, "id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid(&self.id, "name must not be empty"));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CatalogError::invalid(
                &self.id,
                format!("rating {} outside 0..={}", self.rating, MAX_RATING),
            ));
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(CatalogError::invalid(
                    &self.id,
                    format!("price {} must be finite and non-negative", price),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sized(size: &str) -> Product {
        let mut p = Product::new("p", "P");
        p.size = size.to_string();
        p
    }

    #[test]
    fn test_size_magnitude() {
        assert_eq!(sized("800ml").size_magnitude(), 800);
        assert_eq!(sized("3 Pieces").size_magnitude(), 3);
        assert_eq!(sized("Large").size_magnitude(), 0);
        assert_eq!(sized("").size_magnitude(), 0);
        // Only the first run counts
        assert_eq!(sized("2 x 500ml").size_magnitude(), 2);
    }

    #[test]
    fn test_deserialize_camel_case_flags() {
        let p: Product = serde_json::from_value(json!({
            "id": "ff-set-3pc",
            "name": "Feel Fresh 3-Piece Container Set",
            "isBestSeller": true,
            "isPremium": true,
            "inStock": true
        }))
        .unwrap();

        assert!(p.is_best_seller);
        assert!(p.is_premium);
        assert!(p.in_stock);
        assert!(!p.is_popular);
        assert!(p.price.is_none());
        assert!(p.tags.is_empty());
    }

    #[test]
    fn test_is_featured() {
        let mut p = Product::new("a", "A");
        assert!(!p.is_featured());
        p.is_best_seller = true;
        assert!(p.is_featured());
    }

    #[test]
    fn test_validate_rating_range() {
        let mut p = Product::new("a", "A");
        p.rating = 5.1;
        assert!(p.validate().is_err());
        p.rating = 5.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_price() {
        let mut p = Product::new("a", "A");
        p.price = Some(-1.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_empty_name() {
        let p = Product::new("a", "  ");
        assert!(p.validate().is_err());
    }
}
