use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use vitrina_shared::TenantId;

use crate::pricing::parse_price_bound;
use crate::product::{is_listable, CatalogEntry};

/// Category value meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "Todas";

/// Raw listing query parameters: `q`, `cat`, `min`, `max`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterParams {
    pub q: Option<String>,
    pub cat: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Validated listing criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub text: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid price bound '{field}': '{value}' is not a number")]
    InvalidPriceBound { field: &'static str, value: String },
}

impl FilterCriteria {
    /// Validate raw parameters. Malformed price bounds are reported, never ignored.
    pub fn from_params(params: &FilterParams) -> Result<Self, FilterError> {
        Ok(Self {
            text: non_blank(params.q.as_deref()),
            category: params
                .cat
                .clone()
                .filter(|c| !c.is_empty() && c != ALL_CATEGORIES),
            min_price: parse_price_bound("min", params.min.as_deref())?,
            max_price: parse_price_bound("max", params.max.as_deref())?,
        })
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.text.is_none()
            && self.category_filter().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| *c != ALL_CATEGORIES)
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Compound text / category / price filtering over a tenant catalog.
pub struct SearchFilterEngine;

impl SearchFilterEngine {
    /// Return the entries of `tenant`'s active catalog that satisfy `criteria`,
    /// newest first with id as the final tie-break.
    pub fn filter<T>(tenant: TenantId, products: &[T], criteria: &FilterCriteria) -> Vec<T>
    where
        T: CatalogEntry + Clone,
    {
        let needle = criteria.text.as_deref().map(str::to_lowercase);

        let mut matched: Vec<T> = products
            .iter()
            .filter(|entry| is_listable(tenant, *entry))
            .filter(|entry| Self::matches(*entry, needle.as_deref(), criteria))
            .cloned()
            .collect();

        Self::sort_newest_first(&mut matched);
        matched
    }

    pub fn sort_newest_first<T: CatalogEntry>(entries: &mut [T]) {
        entries.sort_by(|a, b| newest_first(a, b));
    }

    fn matches<T: CatalogEntry>(entry: &T, needle: Option<&str>, criteria: &FilterCriteria) -> bool {
        let product = entry.product();

        if let Some(needle) = needle {
            if !product.name.to_lowercase().contains(needle) {
                return false;
            }
        }

        if let Some(category) = criteria.category_filter() {
            if product.category.as_deref() != Some(category) {
                return false;
            }
        }

        if criteria.min_price.is_none() && criteria.max_price.is_none() {
            return true;
        }

        // Unpriced products never satisfy a price bound.
        let Some(price) = entry.effective_price() else {
            return false;
        };

        if let Some(min) = criteria.min_price {
            if price < min {
                return false;
            }
        }
        if let Some(max) = criteria.max_price {
            if price > max {
                return false;
            }
        }

        true
    }
}

fn newest_first<T: CatalogEntry>(a: &T, b: &T) -> Ordering {
    let (a, b) = (a.product(), b.product());
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.id.cmp(&b.id))
}
