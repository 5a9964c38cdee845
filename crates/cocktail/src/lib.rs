pub mod analysis;
pub mod categorization;
pub mod error;
pub mod extract;
pub mod matching;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use analysis::{
    AnalysisService, EntryStructure, FrequencyEntry, IngredientAnalysis, IngredientStats,
    StructureSample, STRUCTURE_SAMPLE_LIMIT,
};
pub use categorization::{CategorizationService, CategorizedIngredients, Category};
pub use error::{CocktailError, CocktailResult};
pub use extract::extract_unique_ingredients;
pub use matching::MatchService;
pub use report::{
    complete_analysis, most_common_ingredients, CompleteAnalysis, DEFAULT_TOP_LIMIT,
    REPORT_TOP_LIMIT,
};
pub use types::{parse_cocktails, Amount, AmountShape, Cocktail, Colors, Ingredient, IngredientDisplay};
