use clap::Parser;
use lagrange::config::{FieldGridSettings, SearchSettings};
use lagrange::constants::OUTPUT_DIR;
use lagrange::equilibrium::LagrangeLocator;
use lagrange::errors::LagrangeError;
use lagrange::models::BinarySystem;
use lagrange::output::{self, FieldGrid};
use std::path::PathBuf;
use std::process;

/// Locates the Lagrange points of a two-body system and exports the
/// potential field for plotting.
#[derive(Parser, Debug)]
#[command(name = "lagrange", allow_negative_numbers = true)]
struct Args {
    /// Mass of the first body (solar masses)
    m1: f64,

    /// Mass of the second body (solar masses)
    m2: f64,

    /// Separation between the bodies (AU)
    d: f64,

    /// Bisection tolerance (AU)
    #[arg(long, default_value_t = SearchSettings::TOLERANCE)]
    tolerance: f64,

    /// Distance kept from the masses and the mass axis when bracketing (AU)
    #[arg(long, default_value_t = SearchSettings::OFFSET)]
    offset: f64,

    /// Field samples per grid axis
    #[arg(long, default_value_t = FieldGridSettings::RESOLUTION)]
    grid_resolution: usize,

    /// Directory for the exported CSV files
    #[arg(short, long, default_value = OUTPUT_DIR)]
    output: PathBuf,

    /// Only print the Lagrange points
    #[arg(long)]
    no_export: bool,
}

fn run(args: &Args) -> Result<(), LagrangeError> {
    // Validate everything before any computation
    let system = BinarySystem::from_masses(args.m1, args.m2, args.d)?;
    let search = SearchSettings::new(args.offset, args.tolerance, SearchSettings::EXTENT_FACTOR)?;
    let grid_settings = FieldGridSettings::new(args.grid_resolution)?;

    tracing::info!(
        "m = {}, omega^2 = {}, x1 = {}, x2 = {}",
        system.total_mass,
        system.omega_sq,
        system.x1,
        system.x2
    );

    let points = LagrangeLocator::new(search).locate(&system)?;
    println!("{}", output::format_report(&system, &points));

    if args.no_export {
        return Ok(());
    }

    let grid = FieldGrid::sample(&system, &grid_settings);
    let markers = output::markers(&system, &points);
    let files = output::export(&args.output, &grid, &markers)?;

    println!(
        "Field data has been written to {} and {}",
        files.field_grid.display(),
        files.markers.display()
    );

    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
