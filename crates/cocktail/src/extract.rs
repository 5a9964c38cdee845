use std::collections::BTreeSet;

use tracing::warn;

use crate::types::Cocktail;

/// Extract the distinct ingredient vocabulary from a cocktail collection.
///
/// Returns every distinct, non-empty ingredient name across all entries of
/// all records, lexicographically sorted ascending. Names are deduplicated
/// by exact (case-sensitive) value: "Gin" and "gin" are two vocabulary
/// items. Records without a usable ingredients array are skipped.
pub fn extract_unique_ingredients(cocktails: &[Cocktail]) -> Vec<String> {
    let mut names = BTreeSet::new();

    for (index, cocktail) in cocktails.iter().enumerate() {
        let Some(ingredients) = &cocktail.ingredients else {
            warn!(
                index,
                cocktail = %cocktail.name,
                "skipping cocktail with missing or malformed ingredients"
            );
            continue;
        };

        for entry in ingredients {
            if let Some(name) = entry.name() {
                names.insert(name.to_string());
            }
        }
    }

    names.into_iter().collect()
}
