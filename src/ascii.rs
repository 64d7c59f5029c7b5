//! ASCII rendering and export for island layouts
//!
//! Quick terminal-friendly views of the land mask and the tile grid, plus
//! text-file export for sharing generation results.

use std::fs::File;
use std::io::{self, Write};

use chrono::Local;

use crate::blob::LAND;
use crate::grid::Grid;
use crate::island::Island;
use crate::tiles::{TileDescriptor, INTERIOR_TILE, SEA_TILE};

/// Character for a land-mask cell.
pub fn land_char(cell: u8) -> char {
    if cell == LAND {
        '#'
    } else {
        '~'
    }
}

/// Character for a tile descriptor, by shape class.
pub fn tile_char(tile: &TileDescriptor) -> char {
    match tile.base_tile {
        SEA_TILE => '~',
        INTERIOR_TILE => '#',
        321 | 323 | 451 => '.',    // single corner
        839 | 847 | 975 => '=',    // straight coast
        1385 | 1387 | 1535 => 'x', // diagonal crossing
        1903 | 1919 | 2047 => 'o', // inner bend
        _ => '?',
    }
}

/// Render the land mask as lines of text.
pub fn render_land(land: &Grid<u8>) -> String {
    let mut out = String::with_capacity((land.width + 1) * land.height);
    for y in 0..land.height {
        for x in 0..land.width {
            out.push(land_char(*land.get(x, y)));
        }
        out.push('\n');
    }
    out
}

/// Render the tile grid as lines of text.
pub fn render_tiles(tiles: &Grid<TileDescriptor>) -> String {
    let mut out = String::with_capacity((tiles.width + 1) * tiles.height);
    for y in 0..tiles.height {
        for x in 0..tiles.width {
            out.push(tile_char(tiles.get(x, y)));
        }
        out.push('\n');
    }
    out
}

/// Export both views of an island to a text file.
pub fn export_ascii(island: &Island, path: &str) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Island layout")?;
    writeln!(
        file,
        "Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(file, "Seeds: {}", island.seeds)?;
    writeln!(
        file,
        "Land grid: {}x{}, {} land cells",
        island.land.width,
        island.land.height,
        island.land_cell_count()
    )?;
    writeln!(file)?;
    writeln!(file, "Land mask:")?;
    file.write_all(render_land(&island.land).as_bytes())?;
    writeln!(file)?;
    writeln!(
        file,
        "Tiles ({}x{}):",
        island.tiles.width, island.tiles.height
    )?;
    file.write_all(render_tiles(&island.tiles).as_bytes())?;

    Ok(())
}
