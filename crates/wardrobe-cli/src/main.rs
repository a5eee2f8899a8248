mod config;
mod logging;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use wardrobe_core::{ClothingItem, DEFAULT_TABLE, SerializeMode};
use wardrobe_generate::{
    ClothesFactory, GenerationError, IdGenerator, ItemFields, random_seed, seeded_rng,
};
use wardrobe_store::{ItemStore, MySqlStore, StoreError, bootstrap, validate_identifier};

use config::{Config, ConfigError};
use logging::{LogFormat, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("record error: {0}")]
    Record(#[from] wardrobe_core::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("no item with id {0}")]
    NotFound(i64),
}

#[derive(Parser, Debug)]
#[command(name = "wardrobe", version, about = "Wardrobe clothing item CLI")]
struct Cli {
    /// Path to the JSON or TOML config file.
    #[arg(long, global = true, default_value = "config.json")]
    config: PathBuf,
    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the database and table, insert one random item, print all rows.
    Run,
    /// Create the database and table when missing.
    Init,
    /// Print insert statements for random items.
    Generate(GenerateArgs),
    /// Build one item from explicit fields and print its insert statement.
    Create(CreateArgs),
    /// Print the row with the given id.
    Show { id: i64 },
    /// Print every row.
    List,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Column mapping used when rendering statements.
    #[arg(long, value_enum, default_value_t = ModeArg::SetAttributes)]
    mode: ModeArg,
    /// Table name in rendered statements (defaults to the configured table).
    #[arg(long)]
    table: Option<String>,
    /// Execute the statements against the configured database.
    #[arg(long, default_value_t = false)]
    execute: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of items to generate.
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// One of Top, Footwear, Headwear, Bottoms.
    category: String,
    #[arg(long)]
    size: Option<i32>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    price: Option<f64>,
    #[arg(long)]
    material: Option<String>,
    /// Tops only.
    #[arg(long)]
    sleeves: Option<bool>,
    /// Headwear only.
    #[arg(long)]
    style: Option<String>,
    /// Bottoms only.
    #[arg(long)]
    length: Option<String>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    SetAttributes,
    FixedColumns,
}

impl From<ModeArg> for SerializeMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::SetAttributes => SerializeMode::SetAttributes,
            ModeArg::FixedColumns => SerializeMode::FixedColumns,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format).map_err(CliError::Logging)?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run_default(&cli.config).await,
        Command::Init => run_init(&cli.config).await,
        Command::Generate(args) => run_generate(&cli.config, args).await,
        Command::Create(args) => run_create(&cli.config, args).await,
        Command::Show { id } => run_show(&cli.config, id).await,
        Command::List => run_list(&cli.config).await,
    }
}

fn load_config(path: &Path) -> Result<Config, CliError> {
    let config = Config::load(path)?;
    tracing::info!(event = "config_loaded", path = %path.display());
    Ok(config)
}

fn factory_for(config: Option<&Config>) -> ClothesFactory {
    let unique_ticks = config.is_some_and(|config| config.unique_ticks);
    ClothesFactory::with_ids(IdGenerator::new().unique_ticks(unique_ticks))
}

async fn connect(config: &Config) -> Result<MySqlStore, CliError> {
    connect_to(config, config.table()).await
}

async fn connect_to(config: &Config, table: &str) -> Result<MySqlStore, CliError> {
    let mut options = config.connection_options();
    options.table = table.to_string();
    Ok(MySqlStore::connect(&options).await?)
}

async fn run_default(config_path: &Path) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let options = config.connection_options();

    bootstrap(&options).await?;
    let store = connect(&config).await?;

    let seed = random_seed();
    let item = factory_for(Some(&config)).create_random(&mut seeded_rng(seed))?;
    tracing::info!(event = "item_generated", id = item.id, category = %item.category(), seed);

    let statement = item.to_insert(config.table(), SerializeMode::default());
    store.execute_query(&statement.to_string()).await?;
    tracing::info!(event = "item_written", table = %config.table());

    let rows = store.fetch_all_data().await?;
    tracing::info!(event = "rows_fetched", rows = rows.len());
    print_json(&rows)?;

    store.close().await;
    Ok(())
}

async fn run_init(config_path: &Path) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    bootstrap(&config.connection_options()).await?;
    tracing::info!(event = "bootstrap_finished", database = %config.database());
    Ok(())
}

async fn run_generate(config_path: &Path, args: GenerateArgs) -> Result<(), CliError> {
    let config = Config::load_optional(config_path)?;
    let factory = factory_for(config.as_ref());

    let seed = args.seed.unwrap_or_else(random_seed);
    let items = factory.create_random_batch(args.count, &mut seeded_rng(seed))?;
    tracing::info!(event = "items_generated", count = items.len(), seed);

    emit(config_path, config.as_ref(), &items, &args.output).await
}

async fn run_create(config_path: &Path, args: CreateArgs) -> Result<(), CliError> {
    let config = Config::load_optional(config_path)?;
    let factory = factory_for(config.as_ref());

    let fields = ItemFields {
        size: args.size,
        color: args.color,
        price: args.price,
        material: args.material,
        sleeves: args.sleeves,
        style: args.style,
        length: args.length,
    };
    let item = factory.create(&args.category, fields)?;

    emit(config_path, config.as_ref(), std::slice::from_ref(&item), &args.output).await
}

/// Print the statements for `items`, executing them first when asked to.
async fn emit(
    config_path: &Path,
    config: Option<&Config>,
    items: &[ClothingItem],
    output: &OutputArgs,
) -> Result<(), CliError> {
    let table = output
        .table
        .as_deref()
        .or(config.map(Config::table))
        .unwrap_or(DEFAULT_TABLE);
    let mode = SerializeMode::from(output.mode);
    let statements: Vec<String> = items
        .iter()
        .map(|item| item.to_insert(table, mode).to_string())
        .collect();

    if output.execute {
        // Executed statements splice the table name in unquoted.
        validate_identifier(table)?;
        let config = match config {
            Some(config) => config.clone(),
            None => load_config(config_path)?,
        };
        let store = connect_to(&config, table).await?;
        for statement in &statements {
            store.execute_query(statement).await?;
        }
        tracing::info!(event = "statements_executed", count = statements.len(), table = %table);
        store.close().await;
    }

    for statement in statements {
        println!("{statement};");
    }
    Ok(())
}

async fn run_show(config_path: &Path, id: i64) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let store = connect(&config).await?;
    let record = store
        .fetch_item_by_id(id)
        .await?
        .ok_or(CliError::NotFound(id))?;
    let item = ClothingItem::try_from(record)?;
    print_json(&item)?;
    store.close().await;
    Ok(())
}

async fn run_list(config_path: &Path) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let store = connect(&config).await?;
    let rows = store.fetch_all_data().await?;
    tracing::info!(event = "rows_fetched", rows = rows.len());
    print_json(&rows)?;
    store.close().await;
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
