use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use benefit_screener::config::AppConfig;
use benefit_screener::error::AppError;
use benefit_screener::screening::{
    is_valid_state_code, AssessmentEngine, AssessmentResults, HouseholdInput, ImmigrationStatus,
    TaxFilingStatus,
};
use benefit_screener::telemetry;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    engine: Arc<AssessmentEngine>,
}

#[derive(Parser, Debug)]
#[command(
    name = "Benefit Screener",
    about = "Estimate household eligibility for U.S. public assistance programs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run a single eligibility assessment and print the results
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Two-letter state code (50 states + DC)
    #[arg(long, value_parser = parse_state_code)]
    state: String,
    /// Total people in the household
    #[arg(long, default_value_t = 1)]
    household_size: u32,
    /// Children under 18 in the household
    #[arg(long, default_value_t = 0)]
    children: u32,
    /// Children under 5 (subset of --children)
    #[arg(long, default_value_t = 0)]
    children_under5: u32,
    /// Household members aged 60+
    #[arg(long, default_value_t = 0)]
    elderly: u32,
    /// Gross household income per month, in dollars
    #[arg(long)]
    gross_monthly_income: f64,
    /// Monthly rent or mortgage payment, in dollars
    #[arg(long)]
    monthly_housing_cost: Option<f64>,
    /// Anyone in the household currently pregnant
    #[arg(long)]
    pregnant: bool,
    /// Primary applicant status: citizen, lpr_5_plus, lpr_less_5,
    /// other_documented, or undocumented
    #[arg(long, default_value = "citizen", value_parser = parse_immigration_status)]
    immigration_status: ImmigrationStatus,
    /// Anyone in the household with a qualifying disability
    #[arg(long)]
    disability: bool,
    /// Monthly income from employment or self-employment, in dollars
    #[arg(long, default_value_t = 0.0)]
    monthly_earned_income: f64,
    /// Tax filing status: single, married_joint, head_of_household, or other
    #[arg(long, default_value = "single", value_parser = parse_filing_status)]
    filing_status: TaxFilingStatus,
    /// Emit the raw assessment as JSON instead of the rendered report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assess(args) => run_assess(args),
    }
}

fn parse_state_code(raw: &str) -> Result<String, String> {
    let code = raw.trim().to_ascii_uppercase();
    if is_valid_state_code(&code) {
        Ok(code)
    } else {
        Err(format!("'{raw}' is not a recognized state code"))
    }
}

fn parse_immigration_status(raw: &str) -> Result<ImmigrationStatus, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "citizen" => Ok(ImmigrationStatus::Citizen),
        "lpr_5_plus" => Ok(ImmigrationStatus::LprFivePlus),
        "lpr_less_5" => Ok(ImmigrationStatus::LprLessFive),
        "other_documented" => Ok(ImmigrationStatus::OtherDocumented),
        "undocumented" => Ok(ImmigrationStatus::Undocumented),
        other => Err(format!("unknown immigration status '{other}'")),
    }
}

fn parse_filing_status(raw: &str) -> Result<TaxFilingStatus, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "single" => Ok(TaxFilingStatus::Single),
        "married_joint" => Ok(TaxFilingStatus::MarriedJoint),
        "head_of_household" => Ok(TaxFilingStatus::HeadOfHousehold),
        "other" => Ok(TaxFilingStatus::Other),
        unknown => Err(format!("unknown tax filing status '{unknown}'")),
    }
}

fn build_engine(config: &AppConfig) -> Result<AssessmentEngine, AppError> {
    let engine = match &config.guidelines_path {
        Some(path) => {
            let tables = benefit_screener::screening::GuidelineTables::from_path(path)?;
            info!(guideline_year = tables.guideline_year, "loaded guideline tables override");
            AssessmentEngine::new(tables)
        }
        None => AssessmentEngine::with_defaults(),
    };
    Ok(engine)
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let engine = Arc::new(build_engine(&config)?);
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        engine,
    };

    let app = app_router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "benefit screener ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config)?;

    let monthly_earned_income = args.monthly_earned_income.max(0.0);
    let input = HouseholdInput {
        state: args.state,
        zip_code: None,
        household_size: args.household_size,
        children_count: args.children,
        children_under5_count: args.children_under5,
        elderly_count: args.elderly,
        gross_monthly_income: args.gross_monthly_income,
        net_monthly_income: None,
        monthly_housing_cost: args.monthly_housing_cost,
        childcare_cost: None,
        is_pregnant: args.pregnant,
        immigration_status: args.immigration_status,
        has_disability: args.disability,
        has_earned_income: monthly_earned_income > 0.0,
        monthly_earned_income,
        tax_filing_status: args.filing_status,
    };

    let results = engine.assess(input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        render_assessment(&results);
    }

    Ok(())
}

fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment", post(assessment_endpoint))
        .with_state(state)
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn assessment_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<HouseholdInput>,
) -> Result<Json<AssessmentResults>, AppError> {
    let results = handle_assessment(&state.engine, payload)?;
    Ok(Json(results))
}

/// Boundary check plus engine invocation, shared by the endpoint and tests.
/// The engine itself would quietly fall back to the contiguous FPL tier for a
/// bad state code; the API rejects it instead.
fn handle_assessment(
    engine: &AssessmentEngine,
    payload: HouseholdInput,
) -> Result<AssessmentResults, AppError> {
    if !is_valid_state_code(&payload.state) {
        return Err(AppError::InvalidInput(format!(
            "'{}' is not a recognized state code",
            payload.state
        )));
    }
    Ok(engine.assess(payload))
}

fn render_assessment(results: &AssessmentResults) {
    println!("Benefit screening report");
    println!(
        "Household of {} in {}, gross monthly income ${:.2}",
        results.input.household_size, results.input.state, results.input.gross_monthly_income
    );
    println!(
        "Income is approximately {:.1}% of the Federal Poverty Level",
        results.fpl_percentage
    );
    println!("Generated {}", results.timestamp.to_rfc3339());

    for program in &results.programs {
        println!("\n{} [{}]", program.program_name, program.status.label());
        for reason in &program.reasons {
            println!("- {reason}");
        }
        if !program.key_factors.is_empty() {
            println!("Key factors: {}", program.key_factors.join("; "));
        }
        println!("Learn more: {}", program.learn_more_url);
    }

    println!(
        "\nThis is an educational estimate, not a determination. Only the administering \
         agency can decide eligibility."
    );
}
