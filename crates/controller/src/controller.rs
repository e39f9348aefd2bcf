//! The character controller and its builder.
use raykin_physics::{GeometryQuery, ObjectId, Overlap, V2};
use smallvec::SmallVec;

use crate::overlap::OverlapTracker;
use crate::sweep::*;
use crate::*;

/// A kinematic box which moves through level geometry by raycasting.
///
/// Callers set velocity through the force setters, then call [CharacterController::step] once per tick to resolve
/// the movement.  Setters never move the box.
#[derive(Debug)]
pub struct CharacterController {
    position: V2,
    scale: V2,
    collider_size: V2,
    parameters: ControllerParameters,
    settings: RaycastSettings,

    velocity: V2,
    state: ControllerState,
    standing_on: Option<ObjectId>,
    /// Where the ground object was at the end of the last step, for following it if it moves.
    ground_anchor: Option<(ObjectId, V2)>,
    time_since_jump: f64,

    /// One-way platforms overlapping the box at the end of the last step.
    inside_platforms: SmallVec<[ObjectId; 4]>,
    triggers: OverlapTracker,
    overlap_scratch: Vec<Overlap>,
}

#[derive(Debug, Default)]
pub struct ControllerBuilder {
    position: Option<V2>,
    scale: Option<V2>,
    collider_size: Option<V2>,
    parameters: Option<ControllerParameters>,
    settings: Option<RaycastSettings>,
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Center of the box.  Defaults to the origin.
    pub fn position(mut self, position: V2) -> Self {
        self.position = Some(position);
        self
    }

    /// Defaults to `(1, 1)`.
    pub fn scale(mut self, scale: V2) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Size of the box before scaling.  Required.
    pub fn collider_size(mut self, size: V2) -> Self {
        self.collider_size = Some(size);
        self
    }

    pub fn parameters(mut self, parameters: ControllerParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn raycast_settings(mut self, settings: RaycastSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn build(self) -> Result<CharacterController> {
        let collider_size = self.collider_size.ok_or(ConfigError::MissingCollider)?;
        let position = self.position.unwrap_or_default();
        let scale = self.scale.unwrap_or_else(|| V2::new(1.0, 1.0));
        let parameters = self.parameters.unwrap_or_default();
        let settings = self.settings.unwrap_or_default();

        parameters.validate()?;
        settings.validate()?;
        let bounds = BoundingBox::new(position, collider_size, scale, settings.skin_width)?;

        log::debug!(
            "Built controller at {:?} with half extents {:?}",
            position,
            bounds.get_half_extents()
        );

        Ok(CharacterController {
            position,
            scale,
            collider_size,
            parameters,
            settings,
            velocity: V2::ZERO,
            state: Default::default(),
            standing_on: None,
            ground_anchor: None,
            time_since_jump: f64::INFINITY,
            inside_platforms: Default::default(),
            triggers: Default::default(),
            overlap_scratch: vec![],
        })
    }
}

impl CharacterController {
    /// Advance the controller by `dt` seconds: apply gravity, then sweep the resulting displacement through `world`.
    ///
    /// Overlaps with objects outside the platform mask are reported to `listener`.  On error, nothing moves.
    pub fn step<G: GeometryQuery + ?Sized>(
        &mut self,
        dt: f64,
        world: &G,
        listener: &mut impl OverlapListener,
    ) -> Result<()> {
        if !(dt >= 0.0 && dt.is_finite()) {
            return Err(Error::InvalidTimeStep(dt));
        }

        let mut bounds = match self.bounds() {
            Ok(b) => b,
            Err(e) => {
                log::warn!("Controller at {:?} can't move: {}", self.position, e);
                return Err(e);
            }
        };

        // Ride whatever we were standing on.  The carry isn't swept, so a platform can push the box into geometry.
        if let Some(delta) = self.ground_delta(world) {
            log::trace!("Carried {:?} by platform {:?}", delta, self.standing_on);
            bounds = bounds.translate(delta);
        }

        let gravity_step = self.parameters.gravity * dt;
        let max = self.parameters.max_velocity;
        let mut velocity = self.velocity;
        velocity.y += gravity_step;
        velocity.x = velocity.x.clamp(-max.x, max.x);
        velocity.y = velocity.y.clamp(-max.y, max.y);

        let was_grounded = self.state.is_grounded();
        let mut motion = Motion {
            displacement: velocity * dt,
            velocity,
            state: Default::default(),
            standing_on: None,
        };

        let ctx = SweepContext {
            world,
            origins: bounds.ray_origins(),
            settings: &self.settings,
            parameters: &self.parameters,
            inside_platforms: &self.inside_platforms[..],
        };

        if was_grounded && motion.displacement.y < 0.0 && motion.displacement.x != 0.0 {
            handle_vertical_slope(&ctx, &mut motion);
        }

        if motion.displacement.x != 0.0 {
            move_horizontally(&ctx, &mut motion);
        }

        if !(motion.displacement.y == 0.0 && gravity_step == 0.0) {
            move_vertically(&ctx, &mut motion);
        }

        let moved = bounds.translate(motion.displacement);
        self.update_overlaps(world, &moved, listener)?;

        if motion.state.colliding_below && !was_grounded {
            log::debug!("Landed on {:?} at {:?}", motion.standing_on, moved.get_center());
        }
        if motion.state.colliding_above && !self.state.colliding_above {
            log::debug!("Hit ceiling at {:?}", moved.get_center());
        }

        self.position = moved.get_center();
        self.velocity = motion.velocity;
        self.state = motion.state;
        self.standing_on = motion.standing_on;
        self.ground_anchor = motion
            .standing_on
            .and_then(|id| world.object_position(id).map(|p| (id, p)));
        self.time_since_jump += dt;
        Ok(())
    }

    /// How far the ground object moved since the end of the last step.
    fn ground_delta<G: GeometryQuery + ?Sized>(&self, world: &G) -> Option<V2> {
        let (id, anchor) = self.ground_anchor?;
        let delta = world.object_position(id)? - anchor;
        if delta == V2::ZERO || !delta.is_finite() {
            return None;
        }
        Some(delta)
    }

    fn update_overlaps<G: GeometryQuery + ?Sized>(
        &mut self,
        world: &G,
        moved: &BoundingBox,
        listener: &mut impl OverlapListener,
    ) -> Result<()> {
        let mask = self.settings.platform_mask;

        // The inner box, so that standing on a platform, or having sunk into it by less than the skin width, doesn't
        // count as being inside it.
        self.overlap_scratch.clear();
        world.overlapping(&moved.to_inner_aabb()?, mask, &mut self.overlap_scratch);
        self.inside_platforms.clear();
        self.inside_platforms.extend(
            self.overlap_scratch
                .iter()
                .filter(|o| o.one_way)
                .map(|o| o.object),
        );

        self.overlap_scratch.clear();
        world.overlapping(&moved.to_aabb()?, !mask, &mut self.overlap_scratch);
        let triggers = self
            .overlap_scratch
            .iter()
            .filter(|o| !o.layers.intersects(mask))
            .map(|o| o.object);
        self.triggers.update(triggers, listener);
        Ok(())
    }

    pub fn can_jump(&self) -> bool {
        self.parameters
            .jump_behavior
            .allows_jump(self.state.is_grounded())
    }

    /// Jump with the configured magnitude.  Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        self.jump_with(self.parameters.jump_magnitude)
    }

    /// Jump by setting vertical velocity to `impulse`.  Returns whether the jump happened.
    ///
    /// Jumps are refused when the jump behavior doesn't allow one, or when the last jump was less than the jump
    /// frequency ago.
    pub fn jump_with(&mut self, impulse: f64) -> bool {
        if !self.can_jump() {
            log::debug!("Jump refused: {:?} while {}", self.parameters.jump_behavior, self.state);
            return false;
        }

        if self.time_since_jump < self.parameters.jump_frequency {
            log::debug!(
                "Jump refused: only {}s since the last one",
                self.time_since_jump
            );
            return false;
        }

        self.velocity.y = impulse;
        self.time_since_jump = 0.0;
        self.state.colliding_below = false;
        log::debug!("Jumped with impulse {}", impulse);
        true
    }

    pub fn add_force(&mut self, force: V2) {
        self.velocity += force;
    }

    pub fn set_force(&mut self, force: V2) {
        self.velocity = force;
    }

    pub fn set_horizontal_force(&mut self, x: f64) {
        self.velocity.x = x;
    }

    pub fn set_vertical_force(&mut self, y: f64) {
        self.velocity.y = y;
    }

    pub fn velocity(&self) -> V2 {
        self.velocity
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// What the box landed on during the last step, if anything.
    pub fn standing_on(&self) -> Option<ObjectId> {
        self.standing_on
    }

    pub fn position(&self) -> V2 {
        self.position
    }

    /// Teleport the box.  Collision is not checked until the next step.
    pub fn set_position(&mut self, position: V2) {
        self.position = position;
        self.ground_anchor = None;
    }

    pub fn scale(&self) -> V2 {
        self.scale
    }

    /// Rescale the box, e.g. to flip a sprite.  Takes effect on the next step.
    pub fn set_scale(&mut self, scale: V2) {
        self.scale = scale;
    }

    pub fn collider_size(&self) -> V2 {
        self.collider_size
    }

    pub fn parameters(&self) -> &ControllerParameters {
        &self.parameters
    }

    /// Takes effect on the next step.
    pub fn set_parameters(&mut self, parameters: ControllerParameters) -> Result<()> {
        parameters.validate()?;
        self.parameters = parameters;
        Ok(())
    }

    pub fn raycast_settings(&self) -> &RaycastSettings {
        &self.settings
    }

    /// The box as of the current position and scale.
    pub fn bounds(&self) -> Result<BoundingBox> {
        Ok(BoundingBox::new(
            self.position,
            self.collider_size,
            self.scale,
            self.settings.skin_width,
        )?)
    }

    pub fn ray_origins(&self) -> Result<RayOrigins> {
        Ok(self.bounds()?.ray_origins())
    }

    /// Objects outside the platform mask which the box overlapped at the end of the last step.
    pub fn overlapping(&self) -> &[ObjectId] {
        self.triggers.current()
    }
}
