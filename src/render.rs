use std::fmt;

use cocktail::CompleteAnalysis;

/// How many structure samples the text report prints.
const RENDERED_SAMPLE_LIMIT: usize = 5;

/// Text rendering of a [`CompleteAnalysis`], section by section, for the
/// batch `analyze` command.
pub struct TextReport<'a>(pub &'a CompleteAnalysis);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;

        writeln!(f, "=== COCKTAIL INGREDIENTS ANALYSIS ===")?;
        writeln!(f)?;

        writeln!(f, "1. BASIC STATISTICS:")?;
        writeln!(f, "   Total cocktails: {}", analysis.total_cocktails)?;
        writeln!(
            f,
            "   Total unique ingredients: {}",
            analysis.total_unique_ingredients
        )?;
        writeln!(
            f,
            "   Average ingredients per cocktail: {:.2}",
            analysis.statistics.average_ingredients_per_cocktail
        )?;
        writeln!(
            f,
            "   Total ingredient instances: {}",
            analysis.statistics.total_ingredients
        )?;

        writeln!(f)?;
        writeln!(f, "2. INGREDIENT STRUCTURE ANALYSIS:")?;
        writeln!(
            f,
            "   Unit types found: {}",
            analysis.statistics.unit_types.join(", ")
        )?;
        writeln!(
            f,
            "   Amount types found: {}",
            join_display(&analysis.statistics.amount_types)
        )?;

        writeln!(f)?;
        writeln!(f, "   Sample ingredient structures:")?;
        for sample in analysis.sample_structures.iter().take(RENDERED_SAMPLE_LIMIT) {
            writeln!(f, "   {}:", sample.cocktail_name)?;
            for (idx, entry) in sample.ingredients.iter().enumerate() {
                writeln!(
                    f,
                    "     {}. Fields: [{}]",
                    idx + 1,
                    entry.structure.join(", ")
                )?;
                let example = serde_json::to_string(&entry.example).map_err(|_| fmt::Error)?;
                writeln!(f, "        Example: {example}")?;
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "3. MOST COMMON INGREDIENTS (Top {}):",
            analysis.most_common_ingredients.len()
        )?;
        for (idx, entry) in analysis.most_common_ingredients.iter().enumerate() {
            writeln!(
                f,
                "   {}. {} ({} entries)",
                idx + 1,
                entry.ingredient,
                entry.count
            )?;
        }

        writeln!(f)?;
        writeln!(f, "4. INGREDIENTS BY CATEGORY:")?;
        for (category, names) in analysis.categorized_ingredients.iter() {
            writeln!(
                f,
                "   {} ({}):",
                category.as_ref().to_uppercase(),
                names.len()
            )?;
            for name in names {
                writeln!(f, "     - {name}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "5. COMPLETE LIST OF UNIQUE INGREDIENTS:")?;
        for (idx, name) in analysis.unique_ingredients.iter().enumerate() {
            writeln!(f, "   {}. {}", idx + 1, name)?;
        }

        Ok(())
    }
}

fn join_display<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
