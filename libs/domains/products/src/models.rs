use chrono::{DateTime, SubsecRound, Utc};
use entity_id::EntityId;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{ProductError, ProductResult};

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Build a product with a fresh id and creation time, then validate it.
    pub fn new(name: impl Into<String>, price: i64) -> ProductResult<Self> {
        let product = Self {
            id: EntityId::new(),
            name: name.into(),
            price,
            // Storage keeps microseconds; truncate so a stored row reads back equal
            created_at: Utc::now().trunc_subsecs(6),
        };
        product.validate()?;
        Ok(product)
    }

    /// Checks run in a fixed order and stop at the first failure.
    pub fn validate(&self) -> ProductResult<()> {
        if self.id.is_nil() {
            return Err(ProductError::IdRequired);
        }
        EntityId::parse(&self.id.to_string())
            .map_err(|e| ProductError::InvalidId(e.0))?;
        if self.name.is_empty() {
            return Err(ProductError::NameRequired);
        }
        check_price(self.price)
    }

    /// Apply the supplied fields of `changes`; the product is left untouched on error.
    pub fn apply_update(&mut self, changes: UpdateProduct) -> ProductResult<()> {
        changes.validate()?;
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        Ok(())
    }
}

fn check_price(price: i64) -> ProductResult<()> {
    match price {
        0 => Err(ProductError::PriceRequired),
        p if p < 0 => Err(ProductError::InvalidPrice),
        _ => Ok(()),
    }
}

/// Body of `POST /products`.
///
/// Missing fields default to their zero value and then fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateProduct {
    pub name: String,
    pub price: i64,
}

/// Body of `PUT /products/{id}`: absent or null fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<i64>,
}

impl UpdateProduct {
    /// Present fields must satisfy the same rules as on creation.
    pub fn validate(&self) -> ProductResult<()> {
        if matches!(self.name.as_deref(), Some("")) {
            return Err(ProductError::NameRequired);
        }
        match self.price {
            Some(price) => check_price(price),
            None => Ok(()),
        }
    }
}

/// Listing direction over `created_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Exactly `"asc"` or `"desc"`; anything else, including empty, is ascending.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

/// Raw query string of `GET /products`.
///
/// Kept as strings so that unparsable values degrade instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

/// Normalized listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductQuery {
    /// 1-based page; 0 disables pagination
    pub page: u64,
    /// Page size; 0 disables pagination
    pub limit: u64,
    pub sort: SortOrder,
}

impl ProductQuery {
    pub fn new(page: u64, limit: u64, sort: SortOrder) -> Self {
        Self { page, limit, sort }
    }

    /// `(offset, limit)` when both page and limit are non-zero
    pub fn window(&self) -> Option<(u64, u64)> {
        if self.page == 0 || self.limit == 0 {
            return None;
        }
        Some(((self.page - 1).saturating_mul(self.limit), self.limit))
    }
}

impl From<ListParams> for ProductQuery {
    fn from(params: ListParams) -> Self {
        fn number(raw: Option<&str>) -> u64 {
            raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
        }

        Self {
            page: number(params.page.as_deref()),
            limit: number(params.limit.as_deref()),
            sort: SortOrder::parse_lenient(params.sort.as_deref().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_is_valid() {
        let product = Product::new("Desk", 10).unwrap();
        assert!(!product.id.is_nil());
        assert_eq!(product.name, "Desk");
        assert_eq!(product.price, 10);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_new_product_price_rules() {
        assert!(matches!(
            Product::new("Desk", 0),
            Err(ProductError::PriceRequired)
        ));
        assert!(matches!(
            Product::new("Desk", -10),
            Err(ProductError::InvalidPrice)
        ));
    }

    #[test]
    fn test_name_checked_before_price() {
        for price in [-1, 0, 1] {
            assert!(matches!(
                Product::new("", price),
                Err(ProductError::NameRequired)
            ));
        }
    }

    #[test]
    fn test_validate_rejects_nil_id() {
        let mut product = Product::new("Desk", 10).unwrap();
        product.id = uuid::Uuid::nil().into();
        assert!(matches!(product.validate(), Err(ProductError::IdRequired)));
    }

    #[test]
    fn test_apply_update_only_touches_present_fields() {
        let mut product = Product::new("Desk", 10).unwrap();
        let before = product.clone();

        product
            .apply_update(UpdateProduct {
                name: None,
                price: Some(25),
            })
            .unwrap();

        assert_eq!(product.name, before.name);
        assert_eq!(product.price, 25);
        assert_eq!(product.created_at, before.created_at);
    }

    #[test]
    fn test_apply_update_rejects_zero_price_without_side_effects() {
        let mut product = Product::new("Desk", 10).unwrap();
        let err = product
            .apply_update(UpdateProduct {
                name: Some("Table".into()),
                price: Some(0),
            })
            .unwrap_err();

        assert!(matches!(err, ProductError::PriceRequired));
        assert_eq!(product.name, "Desk");
    }

    #[test]
    fn test_update_body_null_means_absent() {
        let changes: UpdateProduct = serde_json::from_str(r#"{"name":null,"price":5}"#).unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.price, Some(5));

        let empty: UpdateProduct = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, UpdateProduct::default());
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!(SortOrder::parse_lenient("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(""), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient("DESC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient("random"), SortOrder::Asc);
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }

    #[test]
    fn test_query_from_params() {
        let query = ProductQuery::from(ListParams {
            page: Some("2".into()),
            limit: Some("5".into()),
            sort: Some("desc".into()),
        });
        assert_eq!(query, ProductQuery::new(2, 5, SortOrder::Desc));
        assert_eq!(query.window(), Some((5, 5)));
    }

    #[test]
    fn test_unparsable_numbers_disable_pagination() {
        let query = ProductQuery::from(ListParams {
            page: Some("two".into()),
            limit: Some("-5".into()),
            sort: None,
        });
        assert_eq!(query, ProductQuery::default());
        assert_eq!(query.window(), None);

        assert_eq!(ProductQuery::new(3, 0, SortOrder::Asc).window(), None);
        assert_eq!(ProductQuery::new(0, 3, SortOrder::Asc).window(), None);
    }
}
