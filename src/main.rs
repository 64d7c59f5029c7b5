use clap::Parser;

mod ascii;
mod blob;
mod edges;
mod error;
mod export;
mod grid;
mod island;
mod seeds;
mod tiles;

use island::generate_island;
use seeds::IslandSeeds;
use tiles::{TileMapping, INTERIOR_TILE, SEA_TILE};

#[derive(Parser, Debug)]
#[command(name = "island_tiler")]
#[command(about = "Generate procedural island tile layouts")]
struct Args {
    /// Width of the land grid in cells
    #[arg(short = 'W', long, default_value = "24")]
    width: usize,

    /// Height of the land grid in cells
    #[arg(short = 'H', long, default_value = "24")]
    height: usize,

    /// Target number of land cells (saturates at width*height)
    #[arg(short, long, default_value = "220")]
    mass: usize,

    /// Shape roundedness (reserved, currently inert)
    #[arg(short, long, default_value = "5.0")]
    roundedness: f32,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Export the layout as a PNG image (output path)
    #[arg(long)]
    export_png: Option<String>,

    /// Pixels per tile in the PNG export
    #[arg(long, default_value = "8")]
    cell_size: u32,

    /// Export the layout as JSON for the placement step (output path)
    #[arg(long)]
    export_json: Option<String>,

    /// Export ASCII views to a text file (output path)
    #[arg(long)]
    export_ascii: Option<String>,

    /// Skip printing the ASCII preview to stdout
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let seeds = IslandSeeds::from_master(seed);

    println!("Generating island with seed: {}", seed);
    println!("Land grid: {}x{}, target mass: {}", args.width, args.height, args.mass);

    // Built once and shared read-only across every generation.
    let mapping = match TileMapping::build() {
        Ok(mapping) => mapping,
        Err(e) => {
            eprintln!("Tile table error: {}", e);
            std::process::exit(1);
        }
    };
    println!("Tile table: {} canonical entries", mapping.len());

    let island = match generate_island(
        args.width,
        args.height,
        args.mass,
        args.roundedness,
        seeds,
        &mapping,
    ) {
        Ok(island) => island,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    let capacity = args.width * args.height;
    let land_cells = island.land_cell_count();
    println!(
        "Land cells: {} ({:.1}% of grid)",
        land_cells,
        100.0 * land_cells as f64 / capacity as f64
    );

    let mut sea = 0usize;
    let mut coast = 0usize;
    let mut interior = 0usize;
    for (_, _, t) in island.tiles.iter() {
        match t.base_tile {
            SEA_TILE => sea += 1,
            INTERIOR_TILE => interior += 1,
            _ => coast += 1,
        }
    }
    println!(
        "Tiles: {}x{} ({} sea, {} coast, {} interior)",
        island.tiles.width, island.tiles.height, sea, coast, interior
    );

    if !args.quiet {
        print!("{}", ascii::render_tiles(&island.tiles));
    }

    if let Some(ref path) = args.export_ascii {
        match ascii::export_ascii(&island, path) {
            Ok(()) => println!("ASCII export saved to: {}", path),
            Err(e) => eprintln!("Failed to export ASCII: {}", e),
        }
    }

    if let Some(ref path) = args.export_png {
        match export::export_layout_png(&island.tiles, args.cell_size, path) {
            Ok(()) => println!("PNG export saved to: {}", path),
            Err(e) => eprintln!("Failed to export PNG: {}", e),
        }
    }

    if let Some(ref path) = args.export_json {
        match export::export_layout_json(&island.tiles, seed, path) {
            Ok(()) => println!("JSON export saved to: {}", path),
            Err(e) => eprintln!("Failed to export JSON: {}", e),
        }
    }
}
