//! Aggregate price statistics over the extracted record sequence.
//!
//! Pure functions; independent of the download pool and safe to run
//! before, after, or alongside it.

use crate::error::CatalogError;
use crate::record::ProductRecord;

/// Record with the minimum price. Ties go to the first record in document
/// order (stable min).
pub fn cheapest(products: &[ProductRecord]) -> Result<&ProductRecord, CatalogError> {
    products
        .iter()
        .reduce(|best, p| if p.price < best.price { p } else { best })
        .ok_or(CatalogError::EmptyCatalog)
}

/// Record with the maximum price. Ties go to the first record in document
/// order (stable max).
pub fn most_expensive(products: &[ProductRecord]) -> Result<&ProductRecord, CatalogError> {
    products
        .iter()
        .reduce(|best, p| if p.price > best.price { p } else { best })
        .ok_or(CatalogError::EmptyCatalog)
}

/// Mean price with floor integer division (`sum / count`), kept for
/// compatibility with the original aggregate's truncation.
pub fn average_price(products: &[ProductRecord]) -> Result<u64, CatalogError> {
    if products.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    let sum: u64 = products.iter().map(|p| p.price).sum();
    Ok(sum / products.len() as u64)
}

/// `"Most cheapest - {name} - {price}"`. The wording is part of the
/// reporting surface and is kept verbatim.
pub fn cheapest_line(products: &[ProductRecord]) -> Result<String, CatalogError> {
    let p = cheapest(products)?;
    Ok(format!("Most cheapest - {} - {}", p.name, p.price))
}

/// `"Most expensive - {name} - {price}"`.
pub fn most_expensive_line(products: &[ProductRecord]) -> Result<String, CatalogError> {
    let p = most_expensive(products)?;
    Ok(format!("Most expensive - {} - {}", p.name, p.price))
}
