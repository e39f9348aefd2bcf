use raykin_controller::CharacterController;
use raykin_physics::V2;

/// What the player is asking for this frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Input {
    /// -1, 0 or 1.
    pub horizontal: f64,
    pub jump: bool,
}

/// Turns input into forces on a controller, easing horizontal speed in and out.
#[derive(Debug)]
pub struct Player {
    pub max_speed: f64,
    pub acceleration_on_ground: f64,
    pub acceleration_in_air: f64,
    facing_right: bool,
}

impl Player {
    pub fn new(controller: &CharacterController) -> Player {
        Player {
            max_speed: 8.0,
            acceleration_on_ground: 10.0,
            acceleration_in_air: 5.0,
            facing_right: controller.scale().x > 0.0,
        }
    }

    pub fn update(&mut self, controller: &mut CharacterController, input: Input, dt: f64) {
        if (input.horizontal > 0.0 && !self.facing_right) || (input.horizontal < 0.0 && self.facing_right) {
            self.flip(controller);
        }

        if input.jump && controller.can_jump() {
            controller.jump();
        }

        let factor = if controller.state().is_grounded() {
            self.acceleration_on_ground
        } else {
            self.acceleration_in_air
        };
        let vx = controller.velocity().x;
        let target = input.horizontal * self.max_speed;
        let t = (dt * factor).clamp(0.0, 1.0);
        controller.set_horizontal_force(vx + (target - vx) * t);
    }

    fn flip(&mut self, controller: &mut CharacterController) {
        let scale = controller.scale();
        controller.set_scale(V2::new(-scale.x, scale.y));
        self.facing_right = controller.scale().x > 0.0;
    }

    pub fn is_facing_right(&self) -> bool {
        self.facing_right
    }
}

/// The canned inputs the sandbox plays back, by simulated time.
pub fn script(time: f64) -> Input {
    match time {
        t if t < 6.0 => Input {
            horizontal: 1.0,
            jump: false,
        },
        t if t < 7.0 => Input {
            horizontal: 1.0,
            jump: true,
        },
        t if t < 12.0 => Input {
            horizontal: -1.0,
            jump: (9.0..9.5).contains(&t),
        },
        _ => Input::default(),
    }
}
