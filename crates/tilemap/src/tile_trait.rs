use raykin_physics::LayerMask;

/// A valid tile type.
///
/// This trait is so named because other things may wish to use tiles.
///
/// Tiles must be `Eq` and `Hash`.  Practically, this can be done in two ways: no use of floating point types or
/// (carefully!) excluding floats from the Eq and Hash implementations.  In practice, avoiding floats and instead using
/// e.g. u16 on a fixed scale is by far the easiest option.  Even with internment, it is important to keep tiles small.
pub trait TileTrait: std::cmp::Eq + std::hash::Hash + Send + Sync + 'static {}

/// A tile which takes part in collision.
///
/// Every tile occupies exactly one unit square.  Tiles with no layers are empty space.
pub trait CollisionTile: TileTrait {
    fn layers(&self) -> LayerMask;

    /// One-way platforms only block movers coming from above.
    fn is_one_way(&self) -> bool {
        false
    }
}

/// The tile kinds most platformer levels need.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BasicTile {
    #[default]
    Empty,
    Solid,
    OneWayPlatform,
    /// Doesn't block anything.  Movers report overlapping it, e.g. for pickups and hazards.
    ///
    /// `layer` must be below 32.
    Trigger { layer: u8 },
}

impl TileTrait for BasicTile {}

impl CollisionTile for BasicTile {
    fn layers(&self) -> LayerMask {
        match self {
            BasicTile::Empty => LayerMask::NONE,
            BasicTile::Solid | BasicTile::OneWayPlatform => LayerMask::DEFAULT,
            BasicTile::Trigger { layer } => LayerMask::layer(u32::from(*layer)),
        }
    }

    fn is_one_way(&self) -> bool {
        matches!(self, BasicTile::OneWayPlatform)
    }
}
