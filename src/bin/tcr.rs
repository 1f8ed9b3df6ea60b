use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tcr::Result;
use tcr::analyzer::{analyze_workflows, collect_usage, list_workflows_by_type};
use tcr::client::{CloudUsageClient, WorkflowHttpClient};
use tcr::config::{DateRange, OutputFormat, resolve_api_key};
use tcr::constants::{
    DEFAULT_ACTION_PRICE, DEFAULT_ACTIVE_STORAGE_PRICE, DEFAULT_RETAINED_STORAGE_PRICE,
    DEFAULT_WORKFLOW_LIMIT,
};
use tcr::output::{render_usage_table, render_workflow_table, to_json};
use tcr::types::Pricing;

/// Temporal Cloud cost report.
///
/// Without a subcommand, reports usage and estimated cost per namespace.
#[derive(Parser, Debug)]
#[command(name = "tcr", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start date (YYYY-MM-DD); defaults to the first day of this month
    #[arg(long)]
    start_date: Option<String>,

    /// End date (YYYY-MM-DD, inclusive); defaults to today
    #[arg(long)]
    end_date: Option<String>,

    /// Price per million actions (USD)
    #[arg(long, default_value_t = DEFAULT_ACTION_PRICE)]
    action_price: f64,

    /// Price per GB-hour of active storage (USD)
    #[arg(long, default_value_t = DEFAULT_ACTIVE_STORAGE_PRICE)]
    active_storage_price: f64,

    /// Price per GB-hour of retained storage (USD)
    #[arg(long, default_value_t = DEFAULT_RETAINED_STORAGE_PRICE)]
    retained_storage_price: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Cloud API key
    #[arg(long, env = "TEMPORAL_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the cost of one workflow type from a sample of closed executions
    WorkflowCost(WorkflowCostArgs),
}

#[derive(Args, Debug)]
struct WorkflowCostArgs {
    /// Workflow type to analyze
    #[arg(long = "type")]
    workflow_type: String,

    /// Namespace the workflows run in
    #[arg(long)]
    namespace: String,

    /// HTTP API address of the namespace (e.g. my-ns.a1b2c.tmprl.cloud:7243)
    #[arg(long)]
    address: String,

    /// API key for the namespace
    #[arg(long, env = "TEMPORAL_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Price per million actions (USD)
    #[arg(long, default_value_t = DEFAULT_ACTION_PRICE)]
    action_price: f64,

    /// Maximum number of executions to sample
    #[arg(long, default_value_t = DEFAULT_WORKFLOW_LIMIT)]
    limit: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

/// Log to stderr so stdout carries only the report
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tcr={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::WorkflowCost(ref args)) => run_workflow_cost(args).await,
        None => run_usage_report(&cli).await,
    }
}

async fn run_usage_report(cli: &Cli) -> Result<()> {
    let range = DateRange::resolve_now(cli.start_date.as_deref(), cli.end_date.as_deref())?;
    let api_key = resolve_api_key(cli.api_key.as_deref())?;
    let pricing = Pricing {
        action_price_per_million: cli.action_price,
        active_storage_price_per_gbh: cli.active_storage_price,
        retained_storage_price_per_gbh: cli.retained_storage_price,
    };

    let client = CloudUsageClient::new(&api_key)?;
    let report = collect_usage(
        &client,
        &range.start_rfc3339(),
        &range.end_rfc3339(),
        pricing,
        range.display_period(),
    )
    .await?;

    match cli.format {
        OutputFormat::Json => println!("{}", to_json(&report)?),
        OutputFormat::Table => print!("{}", render_usage_table(&report)),
    }
    Ok(())
}

async fn run_workflow_cost(args: &WorkflowCostArgs) -> Result<()> {
    let api_key = resolve_api_key(args.api_key.as_deref())?;
    let client = WorkflowHttpClient::new(&args.address, &args.namespace, &api_key)?;

    info!("Fetching workflows of type '{}'...", args.workflow_type);
    let executions = list_workflows_by_type(&client, &args.workflow_type, args.limit).await?;

    if executions.is_empty() {
        info!("No completed workflows found");
    } else {
        info!("Found {} workflows, analyzing histories...", executions.len());
    }

    let analyzed = analyze_workflows(&client, executions).await?;
    let report = tcr::project(
        &args.workflow_type,
        client.namespace(),
        &analyzed,
        args.action_price,
    );

    match args.format {
        OutputFormat::Json => println!("{}", to_json(&report)?),
        OutputFormat::Table => print!("{}", render_workflow_table(&report)),
    }
    Ok(())
}
