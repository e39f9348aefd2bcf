//! The demo level: walled-in ground with a ramp up to a plateau, a one-way ledge, a coin and a lift.
use anyhow::Result;

use raykin_paths::{FollowPath, FollowType, PathDefinition};
use raykin_physics::*;

const COIN_LAYER: u32 = 2;
const RAMP_DEGREES: f64 = 30.0;
const RAMP_LENGTH: f64 = 6.0;
const LIFT_SIZE: V2 = V2 { x: 2.0, y: 0.3 };

pub struct Level {
    pub world: GeometryWorld,
    coin: Option<ObjectId>,
    lift: ObjectId,
    lift_path: FollowPath,
}

fn boxed(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Aabb> {
    Ok(Aabb::from_points(V2::new(x1, y1), V2::new(x2, y2))?)
}

fn lift_box(center: V2) -> Result<Aabb> {
    Ok(Aabb::from_center_half_extents(center, LIFT_SIZE / 2.0)?)
}

impl Level {
    pub fn new() -> Result<Level> {
        let mut world = GeometryWorld::new();

        world.insert(Collider::new(boxed(-31.0, -1.0, -30.0, 10.0)?));
        world.insert(Collider::new(boxed(-30.0, -1.0, 5.0, 0.0)?));

        let (sin, cos) = RAMP_DEGREES.to_radians().sin_cos();
        let top = V2::new(5.0 + RAMP_LENGTH * cos, RAMP_LENGTH * sin);
        world.insert(Collider::new(Segment::new(V2::new(5.0, 0.0), top)?));
        world.insert(Collider::new(boxed(top.x, -1.0, 20.0, top.y)?));
        world.insert(Collider::new(boxed(20.0, -1.0, 21.0, 10.0)?));

        world.insert(Collider::new(boxed(13.0, 5.5, 17.0, 5.8)?).one_way(true));

        let coin = world.insert(
            Collider::new(boxed(2.0, 0.2, 2.5, 0.8)?).layers(LayerMask::layer(COIN_LAYER)),
        );

        let path = PathDefinition::new(vec![V2::new(-8.0, 1.0), V2::new(-8.0, 4.0), V2::new(-12.0, 4.0)]);
        let lift_path = FollowPath::new(path, FollowType::MoveTowards, 1.5, 0.05)?;
        let lift = world.insert(Collider::new(lift_box(lift_path.position())?).one_way(true));

        log::info!("Built level with {} colliders", world.len());
        Ok(Level {
            world,
            coin: Some(coin),
            lift,
            lift_path,
        })
    }

    /// Move the scripted parts of the level forward by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> Result<()> {
        let center = self.lift_path.update(dt);
        self.world.set_shape(self.lift, lift_box(center)?)?;
        Ok(())
    }

    pub fn coin(&self) -> Option<ObjectId> {
        self.coin
    }

    /// Take the coin out of the level, if it is still there.
    pub fn collect_coin(&mut self) -> Result<()> {
        if let Some(coin) = self.coin.take() {
            self.world.remove(coin)?;
            log::info!("Collected coin {}", coin);
        }
        Ok(())
    }

    pub fn lift_position(&self) -> V2 {
        self.lift_path.position()
    }
}
