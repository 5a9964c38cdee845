use anyhow::{Context, Result};
use barshelf::config::Config;
use barshelf::render::TextReport;
use clap::{Parser, Subcommand};
use cocktail::{
    complete_analysis, extract_unique_ingredients, parse_cocktails, Cocktail, MatchService,
};

/// barshelf - cocktail ingredient analysis
#[derive(Parser)]
#[command(name = "barshelf")]
#[command(about = "Cocktail ingredient analysis and reporting", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Input cocktails JSON (overrides config file)
    #[arg(long, global = true)]
    input: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis, print the report and write the JSON artifact
    Analyze {
        /// Artifact output path (overrides config file)
        #[arg(long)]
        output: Option<String>,

        /// How many top ingredients to list (overrides config file)
        #[arg(long)]
        top: Option<usize>,
    },
    /// Print the distinct ingredient vocabulary
    Ingredients {
        /// Case-insensitive substring filter
        #[arg(long)]
        query: Option<String>,
    },
    /// Find cocktails containing the given ingredients
    Find {
        /// Ingredient names, matched as case-insensitive substrings
        names: Vec<String>,

        /// Match cocktails containing any of the names instead of all
        #[arg(long)]
        any: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    barshelf::observability::init_observability("barshelf", &config.observability.log_level)?;

    let input = cli.input.unwrap_or_else(|| config.data.cocktails_path.clone());

    match cli.command {
        Commands::Analyze { output, top } => analyze_command(&config, &input, output, top),
        Commands::Ingredients { query } => ingredients_command(&input, query.as_deref()),
        Commands::Find { names, any } => find_command(&input, &names, any),
    }
}

fn load_cocktails(path: &str) -> Result<Vec<Cocktail>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cocktails data from {path}"))?;
    let cocktails = parse_cocktails(&data)?;

    tracing::info!(path, count = cocktails.len(), "cocktail collection loaded");

    Ok(cocktails)
}

fn analyze_command(
    config: &Config,
    input: &str,
    output: Option<String>,
    top: Option<usize>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| config.report.output_path.clone());
    let top = top.unwrap_or(config.report.top_limit);

    let cocktails = load_cocktails(input)?;
    let report = complete_analysis(&cocktails, top);

    print!("{}", TextReport(&report));

    let artifact = serde_json::to_string_pretty(&report)?;
    std::fs::write(&output, artifact)
        .with_context(|| format!("Failed to write analysis artifact to {output}"))?;

    println!("\nDetailed analysis saved to: {output}");

    Ok(())
}

fn ingredients_command(input: &str, query: Option<&str>) -> Result<()> {
    let cocktails = load_cocktails(input)?;
    let vocabulary = extract_unique_ingredients(&cocktails);
    let filtered = MatchService::filter_by_query(&vocabulary, query.unwrap_or(""));

    if filtered.is_empty() {
        println!("No ingredients match the query.");
        return Ok(());
    }

    for (idx, name) in filtered.iter().enumerate() {
        println!("{}. {}", idx + 1, name);
    }

    Ok(())
}

fn find_command(input: &str, names: &[String], any: bool) -> Result<()> {
    let cocktails = load_cocktails(input)?;

    let found = if any {
        MatchService::find_with_any_ingredient(&cocktails, names)
    } else {
        MatchService::find_with_all_ingredients(&cocktails, names)
    };

    if found.is_empty() {
        if names.is_empty() {
            println!("The collection contains no cocktails.");
        } else {
            println!("No cocktails contain the selected ingredients.");
        }
        return Ok(());
    }

    for cocktail in &found {
        println!("- {} ({} ingredients)", cocktail.name, cocktail.entries().len());
    }

    Ok(())
}
