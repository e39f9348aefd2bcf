//! A sparse tilemap.
//!
//! Only tiles which differ from the default are stored, so memory is `O(n)` on the number of non-default tiles and
//! the map is effectively unbounded within the `u16` coordinate space.
use std::collections::HashMap;

use raykin_physics::V2;

use crate::{BasicTile, TileTrait, TilemapError};

#[derive(Default)]
pub struct Tilemap<T: TileTrait> {
    tiles: HashMap<V2<u16>, T>,
    default_tile: T,
}

impl<T: TileTrait> Tilemap<T> {
    pub fn new(default_tile: T) -> Tilemap<T> {
        Tilemap {
            tiles: Default::default(),
            default_tile,
        }
    }

    /// Get a tile from this tilemap, returning the default tile if no value was set.
    pub fn get(&self, coordinate: V2<u16>) -> &T {
        self.tiles.get(&coordinate).unwrap_or(&self.default_tile)
    }

    /// Set a tile in this tilemap.
    pub fn set(&mut self, coordinate: V2<u16>, tile: T) {
        if tile == self.default_tile {
            self.tiles.remove(&coordinate);
        } else {
            self.tiles.insert(coordinate, tile);
        }
    }

    /// Iterate over all non-default tiles in this tilemap in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (V2<u16>, &T)> {
        self.tiles.iter().map(|(x, y)| (*x, y))
    }
}

impl Tilemap<BasicTile> {
    /// Parse a level drawn as text.
    ///
    /// The last line is `y = 0` and the first column is `x = 0`.  `#` is solid, `=` is a one-way platform, a digit
    /// is a trigger on that layer, and `.` or a space is empty.
    pub fn from_ascii(level: &str) -> Result<Tilemap<BasicTile>, TilemapError> {
        let lines = level.lines().collect::<Vec<_>>();
        let height = u16::try_from(lines.len()).map_err(|_| TilemapError::TooLarge)?;
        let mut map = Tilemap::new(BasicTile::Empty);

        for (line_index, line) in lines.iter().enumerate() {
            // Fits: line_index < height.
            let y = height - 1 - line_index as u16;
            for (column, ch) in line.chars().enumerate() {
                let tile = match ch {
                    '#' => BasicTile::Solid,
                    '=' => BasicTile::OneWayPlatform,
                    '.' | ' ' => BasicTile::Empty,
                    d if d.is_ascii_digit() => BasicTile::Trigger {
                        layer: d as u8 - b'0',
                    },
                    _ => {
                        return Err(TilemapError::UnknownTile {
                            ch,
                            line: line_index,
                            column,
                        })
                    }
                };
                let x = u16::try_from(column).map_err(|_| TilemapError::TooLarge)?;
                map.set(V2::new(x, y), tile);
            }
        }

        Ok(map)
    }
}
