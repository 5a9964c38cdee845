use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, VariantArray};

use crate::error::{CocktailError, CocktailResult};

/// One line item in a cocktail's ingredient list.
///
/// The source data is heterogeneous: most entries name an ingredient with a
/// unit and an amount, some carry a display label ("Sweet red vermouth"),
/// and a few are pure free-text instructions ("Few dashes plain water")
/// stored in `special` with no ingredient name at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
}

impl Ingredient {
    /// Ingredient name used for vocabulary extraction and matching.
    ///
    /// Trimmed; `None` when the entry has no name or a blank one
    /// (special-only entries).
    pub fn name(&self) -> Option<&str> {
        self.ingredient
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// How this entry should be displayed. `special` takes precedence over
    /// name + label; entries with neither render nothing.
    pub fn display(&self) -> Option<IngredientDisplay<'_>> {
        if let Some(special) = self.special.as_deref() {
            return Some(IngredientDisplay::Special(special));
        }

        self.name().map(|name| IngredientDisplay::Named {
            name,
            label: self.label.as_deref(),
        })
    }

    /// Sorted list of the field names present on this entry, for schema
    /// discovery in structure samples.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.amount.is_some() {
            fields.push("amount");
        }
        if self.ingredient.is_some() {
            fields.push("ingredient");
        }
        if self.label.is_some() {
            fields.push("label");
        }
        if self.special.is_some() {
            fields.push("special");
        }
        if self.unit.is_some() {
            fields.push("unit");
        }
        fields
    }
}

/// Display form of an ingredient entry, with the precedence rule made
/// explicit: a `special` instruction replaces unit, amount and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientDisplay<'a> {
    Special(&'a str),
    Named {
        name: &'a str,
        label: Option<&'a str>,
    },
}

/// An ingredient amount as found in the data: either numeric (`4.5`) or
/// free text (`"2 dashes"`). The original literal is kept; no coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// Shape tag recorded by the statistics aggregator.
    ///
    /// An amount of `0` or `""` registers no shape at all, matching the
    /// source data's convention that those mean "no amount". `"0"` is a
    /// non-empty string and does register [`AmountShape::Text`].
    pub fn shape(&self) -> Option<AmountShape> {
        match self {
            Amount::Number(n) if *n != 0.0 => Some(AmountShape::Number),
            Amount::Number(_) => None,
            Amount::Text(s) if s.is_empty() => None,
            Amount::Text(_) => Some(AmountShape::Text),
        }
    }
}

/// Closed set of amount shapes the statistics can report.
///
/// `Special` is recorded whenever an entry carries a `special` instruction,
/// independently of whether it also has an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, VariantArray, Serialize)]
pub enum AmountShape {
    #[strum(serialize = "number")]
    #[serde(rename = "number")]
    Number,
    #[strum(serialize = "string")]
    #[serde(rename = "string")]
    Text,
    #[strum(serialize = "special")]
    #[serde(rename = "special")]
    Special,
}

/// Cocktail colors appear as either a single string or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Colors {
    One(String),
    Many(Vec<String>),
}

impl Default for Colors {
    fn default() -> Self {
        Colors::Many(Vec::new())
    }
}

/// One cocktail record. Everything except `name` and `ingredients` is
/// descriptive metadata the analysis passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cocktail {
    #[serde(default)]
    pub iba: bool,
    pub name: String,
    #[serde(default)]
    pub colors: Colors,
    #[serde(default)]
    pub glass: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// `None` when the source record had a missing or malformed (non-array)
    /// ingredients field; such records are skipped with a warning instead
    /// of failing the whole collection.
    #[serde(default, deserialize_with = "lenient_ingredients")]
    pub ingredients: Option<Vec<Ingredient>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garnish: Option<String>,
    #[serde(default)]
    pub preparation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl Cocktail {
    /// The record's ingredient entries, empty when missing or malformed.
    pub fn entries(&self) -> &[Ingredient] {
        self.ingredients.as_deref().unwrap_or_default()
    }
}

fn lenient_ingredients<'de, D>(deserializer: D) -> Result<Option<Vec<Ingredient>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// Parse a cocktail collection from its JSON document.
///
/// The document must be a JSON array of cocktail objects; anything else is
/// rejected outright, no partial parse is attempted.
pub fn parse_cocktails(json: &str) -> CocktailResult<Vec<Cocktail>> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(CocktailError::NotACollection);
    }

    Ok(serde_json::from_value(value)?)
}
