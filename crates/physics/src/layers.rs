//! Layer masks and object identifiers shared by every geometry provider.
use derive_more::{BitAnd, BitOr, Display, From, Not};

/// A set of up to 32 collision layers.
///
/// Colliders carry the layers they live on; queries carry the layers they are interested in.  A collider matches a
/// query when the two masks share at least one bit.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    BitAnd,
    BitOr,
    Not,
    Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[display(fmt = "{:#010x}", _0)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    /// Layer 0, which is where colliders go unless told otherwise.
    pub const DEFAULT: LayerMask = LayerMask(1);

    /// The mask containing only the given layer.
    ///
    /// # Panics
    ///
    /// If `layer >= 32`.
    pub const fn layer(layer: u32) -> LayerMask {
        assert!(layer < 32, "Only 32 layers are supported");
        LayerMask(1 << layer)
    }

    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Identifies an object to the caller of a geometry query.
///
/// Providers choose how to assign these; the only requirement is that an id is stable for as long as the object
/// exists.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Display,
    From,
    serde::Serialize,
    serde::Deserialize,
)]
#[display(fmt = "#{}", _0)]
#[serde(transparent)]
pub struct ObjectId(u64);

impl ObjectId {
    pub const fn new(id: u64) -> ObjectId {
        ObjectId(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}
