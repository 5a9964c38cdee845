use thiserror::Error;

pub type CocktailResult<T> = Result<T, CocktailError>;

#[derive(Error, Debug)]
pub enum CocktailError {
    #[error("Cocktail collection must be a JSON array")]
    NotACollection,

    #[error("Failed to parse cocktails JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
