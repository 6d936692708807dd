use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use search_hints_lib::shared::utils::logger::{init_logger, init_tracing};
use search_hints_lib::{
    CatalogSnapshot, SearchHintsConfig, SearchHintsRequest, SearchHintsResult, SearchService,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Plain,
}

/// Rank catalog entries against a partially typed phrase
#[derive(Parser, Debug)]
#[command(name = "search-hints", version, about)]
struct CliArgs {
    /// Phrase to search for
    search_term: String,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "JSON catalog to search (default: SEARCH_HINTS_CATALOG_PATH)"
    )]
    catalog: Option<PathBuf>,

    #[arg(short, long, value_name = "ID", help = "Search on behalf of this account")]
    user: Option<String>,

    #[arg(short, long, value_name = "ID", help = "Restrict the search to this folder")]
    parent: Option<String>,

    #[arg(long, value_name = "N", help = "Skip the first N ranked hints")]
    start: Option<usize>,

    #[arg(short, long, value_name = "N", help = "Return at most N hints")]
    limit: Option<usize>,

    #[arg(long)]
    genres: bool,
    #[arg(long)]
    people: bool,
    #[arg(long)]
    studios: bool,
    #[arg(long)]
    artists: bool,
    #[arg(long, help = "Search media entries only")]
    media: bool,

    #[arg(long = "include-type", value_name = "KIND", value_delimiter = ',')]
    include_types: Vec<String>,

    #[arg(long = "exclude-type", value_name = "KIND", value_delimiter = ',')]
    exclude_types: Vec<String>,

    #[arg(long = "media-type", value_name = "TYPE", value_delimiter = ',')]
    media_types: Vec<String>,

    #[arg(long)]
    kids: Option<bool>,
    #[arg(long)]
    movie: Option<bool>,
    #[arg(long)]
    news: Option<bool>,
    #[arg(long)]
    series: Option<bool>,
    #[arg(long)]
    sports: Option<bool>,

    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,
}

impl CliArgs {
    fn to_request(&self) -> SearchHintsRequest {
        SearchHintsRequest {
            search_term: self.search_term.clone(),
            user_id: self.user.clone(),
            parent_id: self.parent.clone(),
            start_index: self.start,
            limit: self.limit,
            include_genres: self.genres,
            include_people: self.people,
            include_studios: self.studios,
            include_artists: self.artists,
            include_media: self.media,
            include_item_types: self.include_types.clone(),
            exclude_item_types: self.exclude_types.clone(),
            media_types: self.media_types.clone(),
            is_kids: self.kids,
            is_movie: self.movie,
            is_news: self.news,
            is_series: self.series,
            is_sports: self.sports,
        }
    }
}

fn print_plain(result: &SearchHintsResult) {
    for hint in &result.items {
        println!(
            "{}\t{}\t{}",
            hint.item.name,
            hint.item.kind,
            hint.matched_term.as_deref().unwrap_or("-")
        );
    }
    println!("({} of {})", result.items.len(), result.total_record_count);
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger().context("failed to install logger")?;
    init_tracing().map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))?;

    let cli = CliArgs::parse();
    let config = SearchHintsConfig::from_env().context("invalid configuration")?;

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog_path.clone())
        .context("no catalog given: pass --catalog or set SEARCH_HINTS_CATALOG_PATH")?;

    let (catalog, users) = CatalogSnapshot::from_json_file(&catalog_path)?.into_repositories();
    let service = SearchService::new(Arc::new(catalog), Arc::new(users), config);

    let result = service.get_search_hints_for_request(cli.to_request()).await?;

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Plain => print_plain(&result),
    }

    Ok(())
}
