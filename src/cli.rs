use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;

use workspace_permissions::auth::{
    ActorState, MessageCatalog, PermissionChecker, default_registry,
};
use workspace_permissions::auth::permissions::parse_permission_objects;
use workspace_permissions::fields::{
    CellValue, DurationFormat, Field, Row, SortOrder, ViewSort, default_field_types, sort_rows,
};
use workspace_permissions::{Config, utils};

#[derive(Parser)]
#[command(name = "permcheck")]
#[command(about = "Evaluate workspace permissions and preview field sorting")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, env = "PERMCHECK_CONFIG", help = "Path to a YAML config file")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decide whether an operation is allowed
    Check {
        #[arg(long, help = "JSON file with the workspace's permission objects")]
        permissions: PathBuf,

        #[arg(long, help = "Operation name, e.g. update_workspace")]
        operation: String,

        #[arg(long, help = "Context object as inline JSON")]
        context: Option<String>,

        #[arg(long, help = "Evaluate as instance staff")]
        staff: bool,
    },

    /// Print the role labels of every permission manager
    Roles,

    /// Sort rows by one field the way a view would
    Sort {
        #[arg(help = "JSON file with an array of rows")]
        rows: PathBuf,

        #[arg(long, help = "Field name to sort by")]
        field: String,

        #[arg(long, default_value = "duration", help = "Field type key")]
        field_type: String,

        #[arg(long, value_enum, default_value_t = Direction::Asc)]
        order: Direction,

        #[arg(long, help = "Duration display format, e.g. h:mm:ss")]
        format: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for SortOrder {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => SortOrder::Asc,
            Direction::Desc => SortOrder::Desc,
        }
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::from_env()?,
    };
    utils::init_logging(config.logging())?;
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Check {
            permissions,
            operation,
            context,
            staff,
        } => check(&config, &permissions, &operation, context.as_deref(), staff).await,
        Commands::Roles => roles(&config).await,
        Commands::Sort {
            rows,
            field,
            field_type,
            order,
            format,
        } => sort(&rows, field, field_type, order.into(), format.as_deref()).await,
    }
}

async fn check(
    config: &Config,
    permissions: &Path,
    operation: &str,
    context: Option<&str>,
    staff: bool,
) -> Result<()> {
    let content = tokio::fs::read_to_string(permissions)
        .await
        .with_context(|| format!("Failed to read {}", permissions.display()))?;
    let objects = parse_permission_objects(&content)?;
    let context: Option<serde_json::Value> = context
        .map(serde_json::from_str)
        .transpose()
        .context("Invalid --context JSON")?;

    let checker = PermissionChecker::new(config.permissions().clone());
    let actor = ActorState { is_staff: staff };
    let outcome = checker.evaluate(&objects, operation, context.as_ref(), &actor)?;

    match outcome.decided_by {
        Some(manager) => println!("{}: {} (decided by {})", operation, outcome.decision, manager),
        None => println!("{}: {} (no manager had an opinion)", operation, outcome.decision),
    }
    Ok(())
}

async fn roles(config: &Config) -> Result<()> {
    let catalog = MessageCatalog::from_config(config.locale()).await?;
    let roles = default_registry().roles_translations(&catalog);

    println!("{}", serde_json::to_string_pretty(&roles)?);
    Ok(())
}

async fn sort(
    rows_path: &Path,
    field: String,
    field_type: String,
    order: SortOrder,
    format: Option<&str>,
) -> Result<()> {
    let content = tokio::fs::read_to_string(rows_path)
        .await
        .with_context(|| format!("Failed to read {}", rows_path.display()))?;
    let mut rows: Vec<Row> = serde_json::from_str(&content).context("Invalid rows JSON")?;

    let options = Field {
        duration_format: format
            .map(str::parse::<DurationFormat>)
            .transpose()?
            .unwrap_or_default(),
    };
    let renderer = default_field_types().get(&field_type)?;

    let sorts = [ViewSort {
        field: field.clone(),
        field_type,
        order,
        options: options.clone(),
    }];
    sort_rows(&mut rows, &sorts, default_field_types())?;

    for row in &rows {
        let value = row.value(&field);
        let display = renderer
            .format_value(value, &options)
            .unwrap_or_else(|| match value {
                CellValue::Null => String::new(),
                other => other.to_string(),
            });
        println!("{}\t{}\t{}", row.id, value, display);
    }
    Ok(())
}
