use std::collections::HashSet;

use crate::types::Cocktail;

/// Match Service
///
/// Stateless domain service filtering cocktails by ingredient membership
/// and the ingredient vocabulary by free-text query. All matching is
/// case-insensitive substring containment unless noted; entries without a
/// name never match anything.
pub struct MatchService;

impl MatchService {
    /// Cocktails containing ALL of the target ingredients.
    ///
    /// A cocktail qualifies only if every target is a case-insensitive
    /// substring of at least one of its entry names. An empty target list
    /// returns the full input unfiltered.
    pub fn find_with_all_ingredients(cocktails: &[Cocktail], targets: &[String]) -> Vec<Cocktail> {
        if targets.is_empty() {
            return cocktails.to_vec();
        }

        let targets = lowercase_all(targets);

        cocktails
            .iter()
            .filter(|cocktail| {
                let names = entry_names_lowercase(cocktail);
                targets
                    .iter()
                    .all(|target| names.iter().any(|name| name.contains(target)))
            })
            .cloned()
            .collect()
    }

    /// Cocktails containing ANY of the target ingredients.
    ///
    /// Same containment rule and empty-target identity as
    /// [`Self::find_with_all_ingredients`], but a single satisfied target
    /// is enough.
    pub fn find_with_any_ingredient(cocktails: &[Cocktail], targets: &[String]) -> Vec<Cocktail> {
        if targets.is_empty() {
            return cocktails.to_vec();
        }

        let targets = lowercase_all(targets);

        cocktails
            .iter()
            .filter(|cocktail| {
                let names = entry_names_lowercase(cocktail);
                targets
                    .iter()
                    .any(|target| names.iter().any(|name| name.contains(target)))
            })
            .cloned()
            .collect()
    }

    /// Cocktails whose entry names equal (case-insensitively, no substring
    /// matching) any of the target names. An empty target list matches
    /// nothing here, unlike the substring finders.
    pub fn find_with_exact_ingredients(
        cocktails: &[Cocktail],
        targets: &[String],
    ) -> Vec<Cocktail> {
        let targets: HashSet<String> = targets.iter().map(|t| t.to_lowercase()).collect();

        cocktails
            .iter()
            .filter(|cocktail| {
                cocktail.entries().iter().any(|entry| {
                    entry
                        .name()
                        .is_some_and(|name| targets.contains(&name.to_lowercase()))
                })
            })
            .cloned()
            .collect()
    }

    /// Filter the ingredient vocabulary by a free-text query,
    /// case-insensitive substring containment. An empty or whitespace-only
    /// query returns the full input unfiltered.
    pub fn filter_by_query(ingredients: &[String], query: &str) -> Vec<String> {
        let query = query.trim();
        if query.is_empty() {
            return ingredients.to_vec();
        }

        let query = query.to_lowercase();

        ingredients
            .iter()
            .filter(|ingredient| ingredient.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

fn lowercase_all(targets: &[String]) -> Vec<String> {
    targets.iter().map(|target| target.to_lowercase()).collect()
}

fn entry_names_lowercase(cocktail: &Cocktail) -> Vec<String> {
    cocktail
        .entries()
        .iter()
        .filter_map(|entry| entry.name())
        .map(str::to_lowercase)
        .collect()
}
