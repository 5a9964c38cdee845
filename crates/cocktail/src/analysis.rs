use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::warn;

use crate::types::{AmountShape, Cocktail, Ingredient};

/// How many well-formed records contribute a structure sample.
pub const STRUCTURE_SAMPLE_LIMIT: usize = 10;

/// Field layout of one ingredient entry, kept for schema discovery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryStructure {
    /// Sorted names of the fields present on the entry.
    pub structure: Vec<&'static str>,
    /// The entry itself, as the literal example of that layout.
    pub example: Ingredient,
}

/// Structure sample for one cocktail: its display name plus the field
/// layout of each of its ingredient entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureSample {
    pub cocktail_name: String,
    pub ingredients: Vec<EntryStructure>,
}

/// Occurrence count for one distinct ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub ingredient: String,
    pub count: u32,
}

/// Aggregate counts over a cocktail collection, rebuilt wholesale on every
/// analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientStats {
    /// Every ingredient entry processed, special-only entries included.
    pub total_ingredients: u32,
    /// `total_ingredients` divided by the original record count. NaN for an
    /// empty collection; callers displaying this must guard themselves.
    pub average_ingredients_per_cocktail: f64,
    /// Entry counts per exact ingredient name, in first-seen order. A
    /// record listing the same name twice increments that name twice.
    pub ingredient_frequency: Vec<FrequencyEntry>,
    /// Distinct non-empty unit strings, in first-seen order.
    pub unit_types: Vec<String>,
    /// Distinct amount shapes observed, in first-seen order.
    pub amount_types: Vec<AmountShape>,
}

impl IngredientStats {
    /// Count recorded for `name`, zero when never seen.
    pub fn frequency_of(&self, name: &str) -> u32 {
        self.ingredient_frequency
            .iter()
            .find(|entry| entry.ingredient == name)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

/// Full structural analysis of a cocktail collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAnalysis {
    /// Distinct ingredient names, sorted ascending.
    pub unique_ingredients: Vec<String>,
    pub total_unique_ingredients: usize,
    /// Structure samples for up to the first 10 well-formed records.
    pub ingredient_structures: Vec<StructureSample>,
    pub stats: IngredientStats,
}

/// Ingredient Analysis Service
///
/// Stateless domain service that walks a cocktail collection once and
/// builds the distinct vocabulary, structure samples and aggregate
/// statistics. All accumulation is local to the call; nothing is cached
/// across runs.
pub struct AnalysisService;

impl AnalysisService {
    /// Analyze a cocktail collection.
    ///
    /// Records whose `ingredients` field was missing or malformed are
    /// skipped with a warning naming their position; analysis continues
    /// over the remaining records.
    pub fn analyze(cocktails: &[Cocktail]) -> IngredientAnalysis {
        let mut unique: BTreeSet<String> = BTreeSet::new();
        let mut structures: Vec<StructureSample> = Vec::new();
        let mut total_ingredients = 0u32;
        let mut frequency: Vec<FrequencyEntry> = Vec::new();
        let mut frequency_index: HashMap<String, usize> = HashMap::new();
        let mut unit_types: Vec<String> = Vec::new();
        let mut amount_types: Vec<AmountShape> = Vec::new();

        for (index, cocktail) in cocktails.iter().enumerate() {
            let Some(ingredients) = &cocktail.ingredients else {
                warn!(
                    index,
                    cocktail = %cocktail.name,
                    "skipping cocktail with missing or malformed ingredients"
                );
                continue;
            };

            if structures.len() < STRUCTURE_SAMPLE_LIMIT {
                structures.push(StructureSample {
                    cocktail_name: cocktail.name.clone(),
                    ingredients: ingredients
                        .iter()
                        .map(|entry| EntryStructure {
                            structure: entry.field_names(),
                            example: entry.clone(),
                        })
                        .collect(),
                });
            }

            for entry in ingredients {
                total_ingredients += 1;

                if let Some(name) = entry.name() {
                    unique.insert(name.to_string());

                    match frequency_index.get(name) {
                        Some(&slot) => frequency[slot].count += 1,
                        None => {
                            frequency_index.insert(name.to_string(), frequency.len());
                            frequency.push(FrequencyEntry {
                                ingredient: name.to_string(),
                                count: 1,
                            });
                        }
                    }
                }

                if let Some(unit) = entry.unit.as_deref().filter(|unit| !unit.is_empty()) {
                    if !unit_types.iter().any(|seen| seen == unit) {
                        unit_types.push(unit.to_string());
                    }
                }

                if let Some(shape) = entry.amount.as_ref().and_then(|amount| amount.shape()) {
                    if !amount_types.contains(&shape) {
                        amount_types.push(shape);
                    }
                }

                // `special` registers its own shape even when the entry
                // also carries an amount.
                if entry.special.is_some() && !amount_types.contains(&AmountShape::Special) {
                    amount_types.push(AmountShape::Special);
                }
            }
        }

        let average_ingredients_per_cocktail =
            f64::from(total_ingredients) / cocktails.len() as f64;

        let unique_ingredients: Vec<String> = unique.into_iter().collect();
        let total_unique_ingredients = unique_ingredients.len();

        IngredientAnalysis {
            unique_ingredients,
            total_unique_ingredients,
            ingredient_structures: structures,
            stats: IngredientStats {
                total_ingredients,
                average_ingredients_per_cocktail,
                ingredient_frequency: frequency,
                unit_types,
                amount_types,
            },
        }
    }
}
