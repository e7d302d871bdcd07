//! Listing-page extraction: parsed HTML into ordered product records.

use anyhow::{anyhow, Context, Result};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::record::{parse_price, ProductRecord};

/// Extracts product records from a listing page, in document order.
///
/// Each `ul.catalog li` node contributes one record. A missing sub-field
/// degrades to an empty name / zero price / empty image URL instead of
/// aborting the batch. Relative image references are resolved against
/// `page_url`; absolute ones pass through unchanged.
///
/// The result is built once into a plain `Vec`; there is no lazy caching.
/// Errors only on an unparseable `page_url` or an invalid structural
/// selector, never on malformed documents.
pub fn extract_products(html: &str, page_url: &str) -> Result<Vec<ProductRecord>> {
    let page = Url::parse(page_url).with_context(|| format!("invalid page URL: {}", page_url))?;

    let listing = selector("ul.catalog li")?;
    let name_sel = selector(".info .ttle > a")?;
    let image_sel = selector(".img-box a div img")?;
    let price_sel = selector(".price span.orng")?;

    let doc = Html::parse_document(html);
    let mut products = Vec::new();
    for node in doc.select(&listing) {
        let name = text_of(&node, &name_sel);
        let price = parse_price(&text_of(&node, &price_sel));
        let image_url = node
            .select(&image_sel)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|src| resolve_image_url(&page, src))
            .unwrap_or_default();
        products.push(ProductRecord {
            name,
            price,
            image_url,
        });
    }
    tracing::debug!("extracted {} product(s) from listing page", products.len());
    Ok(products)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector {:?}: {}", css, e))
}

/// Text content of the first match, trimmed; empty string when absent.
fn text_of(node: &ElementRef, sel: &Selector) -> String {
    node.select(sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Resolves a possibly-relative image reference against the listing page URL.
/// Unresolvable references are kept as-is so the download step can report them.
fn resolve_image_url(page: &Url, src: &str) -> String {
    match page.join(src) {
        Ok(abs) => abs.to_string(),
        Err(_) => src.to_string(),
    }
}
