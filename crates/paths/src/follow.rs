use raykin_physics::V2;

use crate::definition::Cursor;
use crate::*;

/// How a [FollowPath] closes the gap to its current target.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FollowType {
    /// Constant speed, in units per second.  Never overshoots the target.
    #[default]
    MoveTowards,
    /// Cover a fraction `dt * speed` of the remaining distance every update, easing into each point.
    Lerp,
}

/// Moves a position along the bouncing walk of a path.
///
/// The position starts at the first point.  Every update moves it toward the current target, and once it is within
/// `max_distance_to_goal` the next point of the walk becomes the target.
#[derive(Clone, Debug)]
pub struct FollowPath {
    path: PathDefinition,
    cursor: Cursor,
    follow_type: FollowType,
    speed: f64,
    max_distance_to_goal: f64,
    position: V2,
}

impl FollowPath {
    pub fn new(
        path: PathDefinition,
        follow_type: FollowType,
        speed: f64,
        max_distance_to_goal: f64,
    ) -> Result<FollowPath, PathError> {
        let start = *path.points.first().ok_or(PathError::EmptyPath)?;

        if let Some(index) = path.points.iter().position(|p| !p.is_finite()) {
            return Err(PathError::NonFinitePoint { index });
        }

        if !speed.is_finite() || speed < 0.0 {
            return Err(PathError::InvalidSpeed(speed));
        }

        if !max_distance_to_goal.is_finite() || max_distance_to_goal <= 0.0 {
            return Err(PathError::InvalidGoalDistance(max_distance_to_goal));
        }

        Ok(FollowPath {
            path,
            cursor: Cursor::default(),
            follow_type,
            speed,
            max_distance_to_goal,
            position: start,
        })
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn update(&mut self, dt: f64) -> V2 {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Ignoring path update with invalid time step {}", dt);
            return self.position;
        }

        let target = self.target();
        self.position = match self.follow_type {
            FollowType::MoveTowards => self.position.move_towards(target, dt * self.speed),
            FollowType::Lerp => self.position.lerp(target, dt * self.speed),
        };

        if self.position.distance_squared(&target) < self.max_distance_to_goal * self.max_distance_to_goal {
            self.cursor.advance(self.path.len());
            log::trace!(
                "Path reached {:?}, next target is point {}",
                target,
                self.cursor.index
            );
        }

        self.position
    }

    pub fn position(&self) -> V2 {
        self.position
    }

    /// The point currently being moved toward.
    pub fn target(&self) -> V2 {
        // new() refuses empty paths and the cursor never leaves the point range.
        self.path.points[self.cursor.index]
    }

    pub fn target_index(&self) -> usize {
        self.cursor.index
    }

    pub fn follow_type(&self) -> FollowType {
        self.follow_type
    }

    pub fn path(&self) -> &PathDefinition {
        &self.path
    }
}
