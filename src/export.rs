//! PNG and JSON export for island layouts
//!
//! The PNG view paints one flat-colored square per tile for quick visual
//! inspection. The JSON export carries the raw tile descriptors for the
//! placement step that turns them into positioned assets.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::tiles::{TileDescriptor, INTERIOR_TILE, SEA_TILE};

/// Fill color per tile shape class.
fn tile_color(tile: &TileDescriptor) -> Rgb<u8> {
    match tile.base_tile {
        SEA_TILE => Rgb([38, 70, 120]),
        INTERIOR_TILE => Rgb([70, 130, 70]),
        321 | 323 | 451 => Rgb([200, 182, 132]),
        839 | 847 | 975 => Rgb([176, 164, 110]),
        1385 | 1387 | 1535 => Rgb([150, 148, 100]),
        1903 | 1919 | 2047 => Rgb([110, 140, 86]),
        _ => Rgb([255, 0, 255]),
    }
}

/// Render the tile grid as a flat-color image, `cell_px` pixels per tile.
///
/// Mirrored tiles get a darkened top-left corner pixel and the rotation
/// count is marked along the top edge, so transform bugs show up in the
/// picture rather than only in the data.
pub fn render_layout_image(tiles: &Grid<TileDescriptor>, cell_px: u32) -> RgbImage {
    let cell_px = cell_px.max(1);
    let mut img = RgbImage::new(
        tiles.width as u32 * cell_px,
        tiles.height as u32 * cell_px,
    );

    for (x, y, tile) in tiles.iter() {
        let color = tile_color(tile);
        let x0 = x as u32 * cell_px;
        let y0 = y as u32 * cell_px;
        for dy in 0..cell_px {
            for dx in 0..cell_px {
                img.put_pixel(x0 + dx, y0 + dy, color);
            }
        }

        if cell_px >= 4 && tile.base_tile != SEA_TILE && tile.base_tile != INTERIOR_TILE {
            let Rgb([r, g, b]) = color;
            let dark = Rgb([r / 2, g / 2, b / 2]);
            if tile.flip {
                img.put_pixel(x0, y0, dark);
            }
            for step in 0..tile.rotation as u32 {
                img.put_pixel(x0 + 1 + step, y0, dark);
            }
        }
    }

    img
}

/// Render and save the layout as a PNG file.
pub fn export_layout_png(
    tiles: &Grid<TileDescriptor>,
    cell_px: u32,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    render_layout_image(tiles, cell_px).save(path)?;
    Ok(())
}

/// Serialized form of a layout, row-major tile order.
#[derive(Serialize, Deserialize)]
pub struct LayoutJson {
    pub width: usize,
    pub height: usize,
    pub master_seed: u64,
    pub tiles: Vec<TileDescriptor>,
}

impl LayoutJson {
    pub fn from_grid(tiles: &Grid<TileDescriptor>, master_seed: u64) -> Self {
        Self {
            width: tiles.width,
            height: tiles.height,
            master_seed,
            tiles: tiles.iter().map(|(_, _, t)| *t).collect(),
        }
    }
}

/// Save the layout as JSON for the external placement step.
pub fn export_layout_json(
    tiles: &Grid<TileDescriptor>,
    master_seed: u64,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &LayoutJson::from_grid(tiles, master_seed))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::island::generate_with_seed;
    use crate::tiles::TileMapping;

    #[test]
    fn test_image_dimensions() {
        let mapping = TileMapping::build().unwrap();
        let tiles = generate_with_seed(6, 4, 12, 5.0, 31, &mapping).unwrap();
        let img = render_layout_image(&tiles, 8);
        assert_eq!(img.width(), 7 * 8);
        assert_eq!(img.height(), 5 * 8);
    }

    #[test]
    fn test_no_unknown_tile_colors() {
        let mapping = TileMapping::build().unwrap();
        let tiles = generate_with_seed(12, 12, 60, 5.0, 17, &mapping).unwrap();
        let img = render_layout_image(&tiles, 1);
        assert!(img.pixels().all(|&p| p != Rgb([255, 0, 255])));
    }

    #[test]
    fn test_layout_json_roundtrip() {
        let mapping = TileMapping::build().unwrap();
        let tiles = generate_with_seed(5, 5, 9, 5.0, 23, &mapping).unwrap();
        let json = serde_json::to_string(&LayoutJson::from_grid(&tiles, 23)).unwrap();
        let back: LayoutJson = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width, 6);
        assert_eq!(back.height, 6);
        assert_eq!(back.tiles.len(), 36);
        assert_eq!(back.tiles[0], *tiles.get(0, 0));
    }
}
