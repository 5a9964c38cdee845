use serde::Serialize;

use crate::analysis::{AnalysisService, FrequencyEntry, IngredientStats, StructureSample};
use crate::categorization::{CategorizationService, CategorizedIngredients};
use crate::types::Cocktail;

/// Default top-N cut for [`most_common_ingredients`].
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Top-N cut used by the batch report.
pub const REPORT_TOP_LIMIT: usize = 20;

/// The composed analysis report: summary counts, vocabulary, buckets,
/// top-N frequencies, raw statistics and structure samples. Serializes to
/// the batch report artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteAnalysis {
    pub total_cocktails: usize,
    pub total_unique_ingredients: usize,
    pub unique_ingredients: Vec<String>,
    pub categorized_ingredients: CategorizedIngredients,
    pub most_common_ingredients: Vec<FrequencyEntry>,
    pub statistics: IngredientStats,
    pub sample_structures: Vec<StructureSample>,
}

/// The `limit` most frequent ingredient names, descending by count.
///
/// The underlying sort is stable, so names with equal counts keep their
/// first-seen order and the output is deterministic.
pub fn most_common_ingredients(cocktails: &[Cocktail], limit: usize) -> Vec<FrequencyEntry> {
    let analysis = AnalysisService::analyze(cocktails);
    top_frequencies(analysis.stats.ingredient_frequency, limit)
}

/// Run the full analysis pipeline and assemble the report.
///
/// Pure composition of [`AnalysisService::analyze`],
/// [`CategorizationService::categorize_all`] and the top-`limit`
/// frequency derivation; no logic of its own beyond assembly.
pub fn complete_analysis(cocktails: &[Cocktail], limit: usize) -> CompleteAnalysis {
    let analysis = AnalysisService::analyze(cocktails);
    let categorized = CategorizationService::categorize_all(&analysis.unique_ingredients);
    let most_common = top_frequencies(analysis.stats.ingredient_frequency.clone(), limit);

    CompleteAnalysis {
        total_cocktails: cocktails.len(),
        total_unique_ingredients: analysis.total_unique_ingredients,
        unique_ingredients: analysis.unique_ingredients,
        categorized_ingredients: categorized,
        most_common_ingredients: most_common,
        statistics: analysis.stats,
        sample_structures: analysis.ingredient_structures,
    }
}

fn top_frequencies(mut entries: Vec<FrequencyEntry>, limit: usize) -> Vec<FrequencyEntry> {
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}
