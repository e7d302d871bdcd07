//! Product record value type, filename derivation, and price coercion.

/// One extracted product: display name, integer price, absolute image URL.
/// Immutable once constructed; built in document order by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub name: String,
    pub price: u64,
    pub image_url: String,
}

impl ProductRecord {
    /// On-disk file stem for this record (see [`file_stem`]).
    pub fn file_stem(&self) -> String {
        file_stem(&self.name)
    }
}

/// Derives the deterministic on-disk file stem from a product name.
///
/// The name splits at the first whitespace into a leading word and a trailing
/// id portion; both are lower-cased. Inside the id portion, whitespace runs
/// join with `_` and `/`/`-` become `_`:
/// `"Fridge ABC-123"` → `"fridge-abc_123"`.
/// A name without whitespace degrades to just the lower-cased word.
///
/// Identical names produce identical stems and therefore collide on disk;
/// the dedup filter treats such a collision as "already downloaded".
pub fn file_stem(name: &str) -> String {
    let trimmed = name.trim();
    let Some((head, id)) = trimmed.split_once(char::is_whitespace) else {
        return trimmed.to_lowercase();
    };
    let id = id
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
        .replace(['/', '-'], "_");
    format!("{}-{}", head.to_lowercase(), id)
}

/// Best-effort price coercion: every non-digit character is discarded and the
/// remainder parsed as an integer. No digits at all → 0.
pub fn parse_price(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
