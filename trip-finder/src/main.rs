use anyhow::Context;
use clap::Parser;
use tracing::info;

use trip_finder::cache::CacheConfig;
use trip_finder::cli::{Cli, Command, Format, SearchArgs, ServeArgs};
use trip_finder::logging::init_tracing;
use trip_finder::planner::find_trips;
use trip_finder::report::{render_text, to_json};
use trip_finder::table::FlightTable;
use trip_finder::web::{AppState, create_router};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Search(args) => search(args),
        Command::Serve(args) => serve(args),
    }
}

fn search(args: SearchArgs) -> anyhow::Result<()> {
    let table = FlightTable::from_path(&args.flights)
        .with_context(|| format!("loading flights from {}", args.flights.display()))?;

    let params = args.to_params();
    let config = args.config.to_config();
    let report = find_trips(table.flights(), &params, &config).context("trip search failed")?;

    info!(
        flights = table.len(),
        itineraries = report.itineraries_found,
        results = report.results.len(),
        branches_explored = report.branches_explored,
        "search finished"
    );

    match args.format {
        Format::Json => println!("{}", to_json(&report.results)?),
        Format::Text => print!("{}", render_text(&params, table.len(), &report.results)),
    }

    Ok(())
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?
        .block_on(run_server(args))
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let table = FlightTable::from_path(&args.flights)
        .with_context(|| format!("loading flights from {}", args.flights.display()))?;
    info!(flights = table.len(), path = %args.flights.display(), "loaded flight table");

    let state = AppState::new(
        table.into_flights(),
        args.config.to_config(),
        &CacheConfig::default(),
    );
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("binding {}", args.addr))?;
    info!(addr = %args.addr, "trip finder listening");
    info!("endpoints: GET /health, GET /flights, GET /search");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
