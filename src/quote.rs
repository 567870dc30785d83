//! Quote (orçamento) totals.

use crate::error::{BrdocsError, BrdocsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One line of a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    #[serde(alias = "quantidade")]
    pub quantity: f64,

    #[serde(alias = "valor_unitario")]
    pub unit_price: f64,

    /// Flat discount subtracted from the line total
    #[serde(default, alias = "desconto")]
    pub discount: Option<f64>,
}

impl QuoteItem {
    pub fn new(quantity: f64, unit_price: f64) -> Self {
        Self {
            quantity,
            unit_price,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// `quantity * unit_price - discount`
    pub fn total(&self) -> f64 {
        self.quantity * self.unit_price - self.discount.unwrap_or(0.0)
    }
}

/// Sum of every line total. An empty quote totals zero.
pub fn quote_total(items: &[QuoteItem]) -> f64 {
    items.iter().map(QuoteItem::total).sum()
}

/// Parses quote items from a JSON array.
pub fn parse_items(json: &str) -> BrdocsResult<Vec<QuoteItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads quote items from a JSON file.
pub fn load_items(path: &Path) -> BrdocsResult<Vec<QuoteItem>> {
    let json = std::fs::read_to_string(path).map_err(|source| BrdocsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_items(&json)
}
