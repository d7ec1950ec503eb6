//! asteria: command-line front end for the Asteria Local proximity engine.

use asteria_cli::output::{format_count, format_duration, format_rating, Status};
use asteria_core::config::{Config, ConfigSchema};
use asteria_core::error::exit_codes;
use asteria_core::Error;
use asteria_geo::business::parse_businesses;
use asteria_geo::links::{self, MapApp};
use asteria_geo::pins::{aggregate_pins, PinFilter};
use asteria_geo::position::{PositionOptions, StaticPosition};
use asteria_geo::{
    distance, estimate_time, format_coordinates, format_distance, is_within_tampico_area, resolve_position,
    search_within_radius, Business, City, Coordinate, PositionError, TravelMode, TAMPICO_AREA,
};
use asteria_telemetry::{metrics, TelemetryConfig, Timer};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "asteria")]
#[command(about = "Nearby-business search and map helpers for Asteria Local")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to .asteria.toml if present)
    #[arg(long, global = true, env = "ASTERIA_CONFIG")]
    config: Option<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print collected metrics as JSON to stderr on exit
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Distance and travel time between two points
    Distance {
        /// Starting point as lat,lng
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        /// Destination as lat,lng
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
        /// Travel mode: driving, walking or transit
        #[arg(long)]
        mode: Option<String>,
    },
    /// Businesses within a radius, closest first
    Nearby(NearbyArgs),
    /// Travel time for a distance in kilometers
    Eta {
        distance_km: f64,
        /// Travel mode: driving, walking or transit
        #[arg(long)]
        mode: Option<String>,
    },
    /// Check whether a point lies in the Tampico metropolitan area
    Area {
        /// Point as lat,lng
        #[arg(allow_hyphen_values = true)]
        point: Coordinate,
    },
    /// Aggregate businesses into map pins
    Pins {
        /// JSON array of businesses, or - for stdin
        file: PathBuf,
        #[arg(long)]
        category: Option<String>,
        /// Tampico, Ciudad Madero or Altamira
        #[arg(long)]
        city: Option<City>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Map links and share text for a location
    Links(LinksArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
struct NearbyArgs {
    /// JSON array of businesses, or - for stdin
    file: PathBuf,
    /// Search origin as lat,lng (defaults to [origin] in config)
    #[arg(long, allow_hyphen_values = true)]
    origin: Option<Coordinate>,
    /// Search radius in kilometers
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<f64>,
    /// Show at most this many results
    #[arg(long)]
    limit: Option<usize>,
    /// Travel mode used for time estimates
    #[arg(long)]
    mode: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct LinksArgs {
    /// Location as lat,lng
    #[arg(allow_hyphen_values = true)]
    point: Coordinate,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    address: Option<String>,
    /// google, apple or waze
    #[arg(long)]
    app: Option<String>,
    /// Directions origin as lat,lng (defaults to the device location)
    #[arg(long, allow_hyphen_values = true)]
    from: Option<Coordinate>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        Status::error(&format!("{:#}", err));
        if let Some(report) = err
            .downcast_ref::<Error>()
            .and_then(|e| serde_json::to_string(&e.to_report()).ok())
        {
            tracing::debug!(%report, "Command failed");
        }
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Error>()
        .map_or(exit_codes::FAILURE, |e| exit_codes::for_code(e.code))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let level = match cli.verbose {
        0 => config.schema.telemetry.log_level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    asteria_telemetry::init_with_config(TelemetryConfig::with_level(level))?;

    let schema = &config.schema;
    let result = match cli.command {
        Commands::Distance { from, to, mode } => distance_cmd(&from, &to, resolve_mode(mode.as_deref(), schema)),
        Commands::Nearby(args) => nearby(args, schema),
        Commands::Eta { distance_km, mode } => eta(distance_km, resolve_mode(mode.as_deref(), schema)),
        Commands::Area { point } => {
            area(&point);
            Ok(())
        }
        Commands::Pins { file, category, city, json } => pins(&file, PinFilter { category, city }, json),
        Commands::Links(args) => links_cmd(args),
        Commands::Config => show_config(&config),
    };

    if cli.metrics {
        eprintln!("{}", serde_json::to_string_pretty(&metrics().export_json())?);
    }

    result
}

fn resolve_mode(flag: Option<&str>, schema: &ConfigSchema) -> TravelMode {
    flag.map(TravelMode::from).unwrap_or(schema.travel.mode)
}

fn distance_cmd(from: &Coordinate, to: &Coordinate, mode: TravelMode) -> anyhow::Result<()> {
    let km = distance(from, to);

    Status::header("Distance");
    Status::field("From", &format_coordinates(from.latitude, from.longitude));
    Status::field("To", &format_coordinates(to.latitude, to.longitude));
    Status::field("Distance", &format_distance(km));
    Status::field("Travel", &format!("{} {}", estimate_time(km, mode), mode));
    Ok(())
}

fn eta(distance_km: f64, mode: TravelMode) -> anyhow::Result<()> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(Error::input(format!("Distance must be zero or more kilometers, got {}", distance_km)).into());
    }
    println!("{}", estimate_time(distance_km, mode));
    Ok(())
}

fn area(point: &Coordinate) {
    let coords = format_coordinates(point.latitude, point.longitude);
    if is_within_tampico_area(point.latitude, point.longitude) {
        Status::success(&format!("{} is inside the {} metro area", coords, TAMPICO_AREA.name));
    } else {
        Status::warning(&format!("{} is outside the {} metro area", coords, TAMPICO_AREA.name));
    }
}

/// Reads a business listing from a file, or stdin for `-`.
fn read_businesses(path: &Path) -> asteria_core::Result<Vec<Business>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(path),
            _ => Error::from(e).with_context(format!("Reading {}", path.display())),
        })?
    };

    let mut businesses = parse_businesses(&content)
        .map_err(|e| Error::from(e).with_context(format!("Parsing {}", path.display())))?;

    // A stale distance from a previous run would collide with the new one
    for business in &mut businesses {
        business.extra.remove("distance");
    }

    tracing::debug!(count = businesses.len(), path = %path.display(), "Loaded businesses");
    Ok(businesses)
}

fn nearby(args: NearbyArgs, schema: &ConfigSchema) -> anyhow::Result<()> {
    let radius = args.radius.unwrap_or(schema.search.radius_km);
    if !radius.is_finite() || radius < 0.0 {
        return Err(Error::invalid_radius(radius).into());
    }
    let mode = resolve_mode(args.mode.as_deref(), schema);

    let source = match args.origin.or(schema.origin) {
        Some(origin) => StaticPosition::at(origin),
        None => StaticPosition::failing(PositionError::Unsupported),
    };
    let position = resolve_position(&source, &PositionOptions::default());
    if let Some(reason) = position.fallback {
        Status::warning(&format!("{}; searching from downtown Tampico", reason));
    }

    let mut businesses = read_businesses(&args.file)?;
    businesses.retain(|b| b.is_active);

    let timer = Timer::start("nearby.search_ms");
    let mut search = search_within_radius(&position.coordinate, &businesses, radius);
    let elapsed = timer.stop();

    metrics().increment("nearby.searches");
    metrics().increment_by("nearby.excluded", search.excluded as u64);

    if let Some(limit) = args.limit.or(schema.search.max_results) {
        search.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&search.results)?);
        return Ok(());
    }

    Status::header(&format!(
        "{} within {} of {}",
        format_count(search.len(), "business", "businesses"),
        format_distance(radius),
        format_coordinates(position.coordinate.latitude, position.coordinate.longitude)
    ));

    for result in &search.results {
        let business = &result.entity;
        println!(
            "  {:>7}  {}  ·  {}  ·  {}  ·  {}",
            format_distance(result.distance),
            business.name,
            business.category,
            format_rating(business.rating_average, business.total_reviews),
            estimate_time(result.distance, mode)
        );
    }

    if search.excluded > 0 {
        Status::warning(&format!(
            "{} skipped: no location on record",
            format_count(search.excluded, "business", "businesses")
        ));
    }

    Status::info(&format!(
        "Searched {} in {}",
        format_count(businesses.len(), "business", "businesses"),
        format_duration(elapsed)
    ));

    Ok(())
}

fn pins(file: &Path, filter: PinFilter, json: bool) -> anyhow::Result<()> {
    let businesses = read_businesses(file)?;

    let pins = {
        asteria_telemetry::timed_span!("pins.aggregate");
        aggregate_pins(&businesses, &filter)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&pins)?);
        return Ok(());
    }

    Status::header(&format_count(pins.len(), "pin", "pins"));
    for pin in &pins {
        println!(
            "  #{:<3} {}  ·  {}  ·  {}  ({})",
            pin.id,
            pin.category,
            pin.neighborhood,
            format_count(pin.count, "business", "businesses"),
            format_coordinates(pin.lat, pin.lng)
        );
    }
    Ok(())
}

fn links_cmd(args: LinksArgs) -> anyhow::Result<()> {
    let name = args.name.as_deref();
    let label = name.unwrap_or("Ubicación");

    let view = links::google_maps_url(&args.point, name);
    let directions = links::directions_url(&args.point, name, args.from.as_ref());
    let app = args
        .app
        .as_deref()
        .map(|app| links::map_app_url(MapApp::from(app), &args.point, label));
    let share = links::share_message(&args.point, label, args.address.as_deref());

    if args.json {
        let out = serde_json::json!({
            "view": view,
            "directions": directions,
            "app": app,
            "share": share,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    Status::header(label);
    Status::field("View", &view);
    Status::field("Directions", &directions);
    if let Some(app) = &app {
        Status::field("App", app);
    }
    println!();
    println!("{}", share.text);
    Ok(())
}

fn show_config(config: &Config) -> anyhow::Result<()> {
    match &config.path {
        Some(path) => Status::info(&format!("Loaded from {}", path.display())),
        None => Status::info("No configuration file found, showing defaults"),
    }
    println!("{}", toml::to_string_pretty(&config.schema)?);
    Ok(())
}
