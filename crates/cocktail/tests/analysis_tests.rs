use cocktail::types::{AmountShape, Cocktail};
use cocktail::{extract_unique_ingredients, AnalysisService, STRUCTURE_SAMPLE_LIMIT};

fn cocktail(name: &str, ingredients: serde_json::Value) -> Cocktail {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "ingredients": ingredients,
    }))
    .unwrap()
}

fn martini_and_screwdriver() -> Vec<Cocktail> {
    vec![
        cocktail(
            "Martini",
            serde_json::json!([
                { "ingredient": "Gin", "unit": "cl", "amount": 6 },
                { "ingredient": "Dry Vermouth", "unit": "cl", "amount": 1 },
            ]),
        ),
        cocktail(
            "Screwdriver",
            serde_json::json!([
                { "ingredient": "Vodka", "unit": "cl", "amount": 5 },
                { "ingredient": "Orange juice", "unit": "cl", "amount": 10 },
            ]),
        ),
    ]
}

#[test]
fn test_extraction_is_sorted_and_deduplicated() {
    let cocktails = martini_and_screwdriver();
    let names = extract_unique_ingredients(&cocktails);

    assert_eq!(names, vec!["Dry Vermouth", "Gin", "Orange juice", "Vodka"]);
}

#[test]
fn test_extraction_skips_special_only_entries() {
    let cocktails = vec![cocktail(
        "Sazerac",
        serde_json::json!([
            { "ingredient": "Cognac", "unit": "cl", "amount": 5 },
            { "special": "Few dashes plain water" },
        ]),
    )];

    assert_eq!(extract_unique_ingredients(&cocktails), vec!["Cognac"]);
}

#[test]
fn test_extraction_skips_malformed_records() {
    let cocktails: Vec<Cocktail> = serde_json::from_value(serde_json::json!([
        { "name": "Broken", "ingredients": 42 },
        { "name": "Missing" },
        { "name": "Fine", "ingredients": [{ "ingredient": "Gin" }] },
    ]))
    .unwrap();

    assert_eq!(extract_unique_ingredients(&cocktails), vec!["Gin"]);
}

#[test]
fn test_case_sensitive_vocabulary() {
    let cocktails = vec![cocktail(
        "Odd",
        serde_json::json!([
            { "ingredient": "Gin" },
            { "ingredient": "gin" },
        ]),
    )];

    assert_eq!(extract_unique_ingredients(&cocktails), vec!["Gin", "gin"]);
}

#[test]
fn test_frequency_counts_entries_not_records() {
    let mut cocktails = vec![
        cocktail("A", serde_json::json!([{ "ingredient": "Gin" }])),
        cocktail("B", serde_json::json!([{ "ingredient": "Gin" }])),
        cocktail("C", serde_json::json!([{ "ingredient": "Gin" }])),
    ];

    let analysis = AnalysisService::analyze(&cocktails);
    assert_eq!(analysis.stats.frequency_of("Gin"), 3);

    // listing the same name twice in one record increments twice
    cocktails[0] = cocktail(
        "A",
        serde_json::json!([{ "ingredient": "Gin" }, { "ingredient": "Gin" }]),
    );
    let analysis = AnalysisService::analyze(&cocktails);
    assert_eq!(analysis.stats.frequency_of("Gin"), 4);
}

#[test]
fn test_total_counts_special_only_entries() {
    let cocktails = vec![cocktail(
        "Sazerac",
        serde_json::json!([
            { "ingredient": "Cognac", "unit": "cl", "amount": 5 },
            { "special": "Few dashes plain water" },
        ]),
    )];

    let analysis = AnalysisService::analyze(&cocktails);
    assert_eq!(analysis.stats.total_ingredients, 2);
    assert_eq!(analysis.stats.average_ingredients_per_cocktail, 2.0);
}

#[test]
fn test_average_uses_original_record_count() {
    let cocktails: Vec<Cocktail> = serde_json::from_value(serde_json::json!([
        { "name": "Fine", "ingredients": [{ "ingredient": "Gin" }, { "ingredient": "Tonic water" }] },
        { "name": "Broken", "ingredients": "nope" },
    ]))
    .unwrap();

    // 2 entries / 2 input records, the malformed one still counts
    let analysis = AnalysisService::analyze(&cocktails);
    assert_eq!(analysis.stats.average_ingredients_per_cocktail, 1.0);
}

#[test]
fn test_empty_collection_yields_non_finite_average() {
    let analysis = AnalysisService::analyze(&[]);
    assert!(analysis.stats.average_ingredients_per_cocktail.is_nan());
    assert_eq!(analysis.total_unique_ingredients, 0);
}

#[test]
fn test_unit_types_first_seen_order() {
    let cocktails = vec![cocktail(
        "Mojito",
        serde_json::json!([
            { "ingredient": "White rum", "unit": "cl", "amount": 4 },
            { "ingredient": "Sugar", "unit": "teaspoons", "amount": 2 },
            { "ingredient": "Soda water", "unit": "cl", "amount": 6 },
            { "ingredient": "Mint", "amount": "6" },
        ]),
    )];

    let analysis = AnalysisService::analyze(&cocktails);
    assert_eq!(analysis.stats.unit_types, vec!["cl", "teaspoons"]);
}

#[test]
fn test_amount_shape_tracking() {
    let cocktails = vec![cocktail(
        "Shapes",
        serde_json::json!([
            { "ingredient": "Gin", "amount": 4.5 },
            { "ingredient": "Bitters", "amount": "2 dashes" },
            { "ingredient": "Water", "special": "Top up", "amount": 1 },
        ]),
    )];

    let analysis = AnalysisService::analyze(&cocktails);
    assert_eq!(
        analysis.stats.amount_types,
        vec![AmountShape::Number, AmountShape::Text, AmountShape::Special]
    );
}

#[test]
fn test_falsy_amounts_register_no_shape() {
    let cocktails = vec![cocktail(
        "Quirks",
        serde_json::json!([
            { "ingredient": "X", "amount": 0 },
            { "ingredient": "Y", "amount": "" },
        ]),
    )];

    let analysis = AnalysisService::analyze(&cocktails);
    assert!(analysis.stats.amount_types.is_empty());

    // "0" is a non-empty string and does register a shape
    let cocktails = vec![cocktail(
        "Quirks",
        serde_json::json!([{ "ingredient": "Y", "amount": "0" }]),
    )];
    let analysis = AnalysisService::analyze(&cocktails);
    assert_eq!(analysis.stats.amount_types, vec![AmountShape::Text]);
}

#[test]
fn test_structure_samples_capped_at_ten() {
    let cocktails: Vec<Cocktail> = (0..15)
        .map(|i| {
            cocktail(
                &format!("Cocktail {i}"),
                serde_json::json!([{ "ingredient": "Gin", "unit": "cl", "amount": 4 }]),
            )
        })
        .collect();

    let analysis = AnalysisService::analyze(&cocktails);
    assert_eq!(analysis.ingredient_structures.len(), STRUCTURE_SAMPLE_LIMIT);
}

#[test]
fn test_structure_sample_fields_sorted() {
    let cocktails = vec![cocktail(
        "Manhattan",
        serde_json::json!([
            { "unit": "cl", "amount": 2, "ingredient": "Vermouth", "label": "Sweet red vermouth" },
        ]),
    )];

    let analysis = AnalysisService::analyze(&cocktails);
    let sample = &analysis.ingredient_structures[0];
    assert_eq!(sample.cocktail_name, "Manhattan");
    assert_eq!(
        sample.ingredients[0].structure,
        vec!["amount", "ingredient", "label", "unit"]
    );
}

#[test]
fn test_malformed_records_skip_structure_samples() {
    let cocktails: Vec<Cocktail> = serde_json::from_value(serde_json::json!([
        { "name": "Broken", "ingredients": "nope" },
        { "name": "Fine", "ingredients": [{ "ingredient": "Gin" }] },
    ]))
    .unwrap();

    let analysis = AnalysisService::analyze(&cocktails);
    assert_eq!(analysis.ingredient_structures.len(), 1);
    assert_eq!(analysis.ingredient_structures[0].cocktail_name, "Fine");
}
