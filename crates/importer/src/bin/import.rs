use clap::{Parser, Subcommand};
use importer::{
    ApiConfig, CourseSource, CoursesPerTerm, GolfCourseApiClient, ImportConfig, ImportPipeline,
    ImportSummary, ImporterError, ProgressEvent, SearchTerm,
    config::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_DELAY_MS},
    transformer::CourseTransformer, validator::DetailValidator,
};
use std::time::Duration;
use storage::{CourseStore, Database, RestStore};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "golf-import")]
#[command(about = "Golf course database populator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the fixed term list and insert the top courses of each term
    Populate {
        #[command(flatten)]
        api: ApiArgs,

        #[command(flatten)]
        store: StoreArgs,

        #[arg(long, default_value_t = CoursesPerTerm::default())]
        max_per_term: CoursesPerTerm,

        #[arg(long, default_value_t = DEFAULT_REQUEST_DELAY_MS)]
        delay_ms: u64,

        #[arg(long = "term")]
        terms: Vec<SearchTerm>,
    },
    /// List the fixed search terms
    Terms,
    /// Fetch one course and print the rows it would produce
    Inspect {
        course_id: i64,

        #[command(flatten)]
        api: ApiArgs,
    },
    /// Apply the SQL migrations to a Postgres database
    Migrate {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
}

#[derive(clap::Args)]
struct ApiArgs {
    #[arg(long, env = "GOLF_COURSE_API_KEY", hide_env_values = true)]
    api_key: String,

    #[arg(long, env = "GOLF_COURSE_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,
}

#[derive(clap::Args)]
struct StoreArgs {
    #[arg(long, env = "STORE_URL")]
    store_url: Option<String>,

    #[arg(long, env = "STORE_KEY", hide_env_values = true)]
    store_key: Option<String>,

    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "golf_import={},importer={},storage={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Populate {
            api,
            store,
            max_per_term,
            delay_ms,
            terms,
        } => {
            let config = ImportConfig::new(max_per_term)
                .with_request_delay(Duration::from_millis(delay_ms))
                .with_terms(terms);
            handle_populate(api, store, config).await?;
        }
        Commands::Terms => list_terms(),
        Commands::Inspect { course_id, api } => {
            handle_inspect(course_id, api).await?;
        }
        Commands::Migrate { database_url } => {
            tracing::info!("Connecting to database...");
            let database = Database::new(&database_url).await?;
            database.run_migrations().await?;
            tracing::info!("✓ Migrations applied");
        }
    }

    Ok(())
}

async fn handle_populate(
    api: ApiArgs,
    store: StoreArgs,
    config: ImportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Checking credentials...");
    let client = GolfCourseApiClient::new(&ApiConfig::new(api.api_base_url, api.api_key)?)?;

    let summary = match (store.store_url, store.database_url) {
        (Some(store_url), _) => {
            let store_key = store.store_key.ok_or_else(|| {
                ImporterError::ConfigError("--store-key is required with --store-url".to_string())
            })?;
            let rest = RestStore::new(store_url, store_key)?;
            run_import(&client, &rest, config).await
        }
        (None, Some(database_url)) => {
            tracing::info!("Connecting to database...");
            let database = Database::new(&database_url).await?;
            run_import(&client, &database.courses(), config).await
        }
        (None, None) => {
            return Err(ImporterError::ConfigError(
                "Either --store-url/--store-key or --database-url is required".to_string(),
            )
            .into());
        }
    };

    tracing::info!(
        "Summary: {} courses, {} holes ({} terms searched, {} details requested, {} failures)",
        summary.courses_added,
        summary.holes_added,
        summary.terms_searched,
        summary.details_requested,
        summary.failures
    );

    Ok(())
}

async fn run_import<C, S>(source: &C, store: &S, config: ImportConfig) -> ImportSummary
where
    C: CourseSource + ?Sized,
    S: CourseStore + ?Sized,
{
    tracing::info!(
        "Importing up to {} courses from {} into {}",
        config.max_courses(),
        source.name(),
        store.name()
    );

    let pipeline = ImportPipeline::new(source, store, config);
    let (tx, mut rx) = mpsc::unbounded_channel::<ProgressEvent>();

    // The sender is dropped when the run ends, which closes the printer.
    let run = async move {
        let mut tx = tx;
        pipeline.run(&mut tx).await
    };
    let print = async move {
        while let Some(event) = rx.recv().await {
            println!("{}", event);
        }
    };

    let (summary, ()) = tokio::join!(run, print);
    summary
}

async fn handle_inspect(course_id: i64, api: ApiArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = GolfCourseApiClient::new(&ApiConfig::new(api.api_base_url, api.api_key)?)?;

    tracing::info!("Fetching course {}...", course_id);
    let detail = client.fetch_course(course_id).await?;

    let report = DetailValidator::validate(&detail)?;
    report.log_warnings();

    let transformer = CourseTransformer::new();
    let course = transformer.course_row(&detail);
    let holes = transformer.hole_rows(course.id, detail.main_holes());

    let output = serde_json::json!({
        "course": course,
        "holes": holes,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn list_terms() {
    tracing::info!("Fixed search terms:");
    for term in SearchTerm::all() {
        tracing::info!("  - {}", term);
    }
}
