use serde::Serialize;
use strum::{AsRefStr, Display, VariantArray};

/// Semantic bucket an ingredient name is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, VariantArray, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Spirits,
    Liqueurs,
    Juices,
    Syrups,
    Bitters,
    Garnishes,
    Mixers,
    Other,
}

/// Ingredient names grouped by bucket, each bucket preserving the relative
/// order of the input it was built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategorizedIngredients {
    pub spirits: Vec<String>,
    pub liqueurs: Vec<String>,
    pub juices: Vec<String>,
    pub syrups: Vec<String>,
    pub bitters: Vec<String>,
    pub garnishes: Vec<String>,
    pub mixers: Vec<String>,
    pub other: Vec<String>,
}

impl CategorizedIngredients {
    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Spirits => &self.spirits,
            Category::Liqueurs => &self.liqueurs,
            Category::Juices => &self.juices,
            Category::Syrups => &self.syrups,
            Category::Bitters => &self.bitters,
            Category::Garnishes => &self.garnishes,
            Category::Mixers => &self.mixers,
            Category::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Spirits => &mut self.spirits,
            Category::Liqueurs => &mut self.liqueurs,
            Category::Juices => &mut self.juices,
            Category::Syrups => &mut self.syrups,
            Category::Bitters => &mut self.bitters,
            Category::Garnishes => &mut self.garnishes,
            Category::Mixers => &mut self.mixers,
            Category::Other => &mut self.other,
        }
    }

    /// Iterate the buckets in their fixed declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::VARIANTS
            .iter()
            .map(|&category| (category, self.bucket(category)))
    }

    /// Total number of names across all buckets.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, names)| names.len()).sum()
    }
}

const SPIRIT_KEYWORDS: [&str; 12] = [
    "vodka", "gin", "rum", "whiskey", "tequila", "cognac", "brandy", "bourbon", "scotch", "pisco",
    "cachaca", "absinthe",
];

const LIQUEUR_KEYWORDS: [&str; 15] = [
    "liqueur",
    "sec",
    "curaçao",
    "cointreau",
    "drambuie",
    "disaronno",
    "galliano",
    "kahlúa",
    "baileys",
    "créme",
    "crème",
    "maraschino",
    "aperol",
    "campari",
    "bénédictine",
];

const JUICE_KEYWORDS: [&str; 2] = ["juice", "puree"];

const SYRUP_KEYWORDS: [&str; 3] = ["syrup", "nectar", "honey"];

const GARNISH_KEYWORDS: [&str; 6] = ["twist", "slice", "wedge", "cherry", "olive", "mint"];

const MIXER_KEYWORDS: [&str; 12] = [
    "soda",
    "water",
    "cola",
    "beer",
    "ale",
    "champagne",
    "prosecco",
    "wine",
    "cream",
    "milk",
    "coffee",
    "tea",
];

/// Categorization Service
///
/// Stateless domain service that maps ingredient names to semantic buckets
/// using ordered keyword rules. The first matching rule wins, so an
/// ingredient always lands in exactly one bucket; names matching no rule
/// fall through to `Other`.
pub struct CategorizationService;

impl CategorizationService {
    /// Categorize a single ingredient name.
    ///
    /// Matching is case-insensitive substring containment against the
    /// keyword groups, tested in bucket order.
    pub fn categorize(ingredient_name: &str) -> Category {
        let normalized = ingredient_name.trim().to_lowercase();

        if Self::is_spirit(&normalized) {
            return Category::Spirits;
        }

        if Self::is_liqueur(&normalized) {
            return Category::Liqueurs;
        }

        if Self::is_juice(&normalized) {
            return Category::Juices;
        }

        if Self::is_syrup(&normalized) {
            return Category::Syrups;
        }

        if Self::is_bitters(&normalized) {
            return Category::Bitters;
        }

        if Self::is_garnish(&normalized) {
            return Category::Garnishes;
        }

        if Self::is_mixer(&normalized) {
            return Category::Mixers;
        }

        Category::Other
    }

    /// Partition a list of ingredient names into buckets, preserving each
    /// name's relative position within its bucket.
    pub fn categorize_all(ingredient_names: &[String]) -> CategorizedIngredients {
        let mut categorized = CategorizedIngredients::default();

        for name in ingredient_names {
            categorized
                .bucket_mut(Self::categorize(name))
                .push(name.clone());
        }

        categorized
    }

    fn is_spirit(name: &str) -> bool {
        SPIRIT_KEYWORDS.iter().any(|keyword| name.contains(keyword))
    }

    fn is_liqueur(name: &str) -> bool {
        LIQUEUR_KEYWORDS
            .iter()
            .any(|keyword| name.contains(keyword))
    }

    fn is_juice(name: &str) -> bool {
        JUICE_KEYWORDS.iter().any(|keyword| name.contains(keyword))
    }

    fn is_syrup(name: &str) -> bool {
        SYRUP_KEYWORDS.iter().any(|keyword| name.contains(keyword))
    }

    fn is_bitters(name: &str) -> bool {
        name.contains("bitters")
    }

    // "lime" only counts as a garnish when the name is not a juice;
    // the exclusion applies to the lime test alone, not the other
    // garnish keywords.
    fn is_garnish(name: &str) -> bool {
        GARNISH_KEYWORDS
            .iter()
            .any(|keyword| name.contains(keyword))
            || (name.contains("lime") && !name.contains("juice"))
    }

    fn is_mixer(name: &str) -> bool {
        MIXER_KEYWORDS.iter().any(|keyword| name.contains(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_spirits() {
        assert_eq!(CategorizationService::categorize("Gin"), Category::Spirits);
        assert_eq!(
            CategorizationService::categorize("Vodka"),
            Category::Spirits
        );
        assert_eq!(
            CategorizationService::categorize("White rum"),
            Category::Spirits
        );
        assert_eq!(
            CategorizationService::categorize("Rye whiskey"),
            Category::Spirits
        );
    }

    #[test]
    fn test_categorize_liqueurs() {
        assert_eq!(
            CategorizationService::categorize("Coffee liqueur"),
            Category::Liqueurs
        );
        assert_eq!(
            CategorizationService::categorize("Triple Sec"),
            Category::Liqueurs
        );
        assert_eq!(
            CategorizationService::categorize("Campari"),
            Category::Liqueurs
        );
    }

    #[test]
    fn test_categorize_juices_and_syrups() {
        assert_eq!(
            CategorizationService::categorize("Orange juice"),
            Category::Juices
        );
        assert_eq!(
            CategorizationService::categorize("Peach puree"),
            Category::Juices
        );
        assert_eq!(
            CategorizationService::categorize("Sugar syrup"),
            Category::Syrups
        );
        assert_eq!(
            CategorizationService::categorize("Honey"),
            Category::Syrups
        );
    }

    #[test]
    fn test_categorize_bitters_and_mixers() {
        assert_eq!(
            CategorizationService::categorize("Angostura bitters"),
            Category::Bitters
        );
        assert_eq!(
            CategorizationService::categorize("Soda water"),
            Category::Mixers
        );
        assert_eq!(
            CategorizationService::categorize("Tonic water"),
            Category::Mixers
        );
    }

    #[test]
    fn test_lime_is_garnish_unless_juice() {
        assert_eq!(CategorizationService::categorize("Lime"), Category::Garnishes);
        assert_eq!(
            CategorizationService::categorize("Lime juice"),
            Category::Juices
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // contains both "rum" and "liqueur"; the spirits rule runs first
        assert_eq!(
            CategorizationService::categorize("Rum liqueur"),
            Category::Spirits
        );
        // substring matching means "Ginger beer" hits the "gin" keyword
        // before the mixer rule ever runs
        assert_eq!(
            CategorizationService::categorize("Ginger beer"),
            Category::Spirits
        );
    }

    #[test]
    fn test_unmatched_names_fall_through_to_other() {
        assert_eq!(
            CategorizationService::categorize("Dry Vermouth"),
            Category::Other
        );
        assert_eq!(CategorizationService::categorize("Sugar"), Category::Other);
    }

    #[test]
    fn test_categorize_all_partitions_exhaustively() {
        let names: Vec<String> = ["Gin", "Orange juice", "Dry Vermouth", "Lime", "Cola"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let categorized = CategorizationService::categorize_all(&names);

        assert_eq!(categorized.total(), names.len());

        let mut all: Vec<&String> = categorized
            .iter()
            .flat_map(|(_, bucket)| bucket.iter())
            .collect();
        all.sort();
        let mut expected: Vec<&String> = names.iter().collect();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_categorize_all_preserves_input_order() {
        let names: Vec<String> = ["Vodka", "Gin", "White rum"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let categorized = CategorizationService::categorize_all(&names);
        assert_eq!(categorized.spirits, names);
    }
}
