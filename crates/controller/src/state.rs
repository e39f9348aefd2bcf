use serde::Serialize;

/// What the controller ran into during the last step.
///
/// Rebuilt from scratch every step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct ControllerState {
    pub colliding_left: bool,
    pub colliding_right: bool,
    pub colliding_above: bool,
    pub colliding_below: bool,
    pub moving_up_slope: bool,
    pub moving_down_slope: bool,
    /// In degrees.  Only meaningful when one of the slope flags is set.
    pub slope_angle: f64,
}

impl ControllerState {
    pub fn reset(&mut self) {
        *self = Default::default();
    }

    pub fn is_grounded(&self) -> bool {
        self.colliding_below
    }

    pub fn has_collisions(&self) -> bool {
        self.colliding_left || self.colliding_right || self.colliding_above || self.colliding_below
    }

    pub fn is_on_slope(&self) -> bool {
        self.moving_up_slope || self.moving_down_slope
    }
}

impl std::fmt::Display for ControllerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(Controller: r:{} l:{} a:{} b:{} down-slope:{} up-slope:{} angle:{})",
            self.colliding_right,
            self.colliding_left,
            self.colliding_above,
            self.colliding_below,
            self.moving_down_slope,
            self.moving_up_slope,
            self.slope_angle
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    prop_compose! {
        fn any_state()(
            flags in proptest::collection::vec(any::<bool>(), 6),
            slope_angle in 0.0..90.0f64,
        ) -> ControllerState {
            ControllerState {
                colliding_left: flags[0],
                colliding_right: flags[1],
                colliding_above: flags[2],
                colliding_below: flags[3],
                moving_up_slope: flags[4],
                moving_down_slope: flags[5],
                slope_angle,
            }
        }
    }

    proptest! {
        #[test]
        fn test_reset_idempotent(mut state in any_state()) {
            state.reset();
            let once = state;
            state.reset();
            prop_assert_eq!(state, once);
            prop_assert_eq!(state, ControllerState::default());
            prop_assert!(!state.has_collisions());
            prop_assert!(!state.is_on_slope());
        }
    }

    #[test]
    fn test_derived_flags() {
        let state = ControllerState {
            colliding_below: true,
            ..Default::default()
        };
        assert!(state.is_grounded());
        assert!(state.has_collisions());

        let state = ControllerState {
            moving_up_slope: true,
            slope_angle: 20.0,
            ..Default::default()
        };
        assert!(!state.has_collisions());
        assert!(state.is_on_slope());
    }

    #[test]
    fn test_display() {
        let state = ControllerState {
            colliding_right: true,
            colliding_below: true,
            slope_angle: 12.5,
            ..Default::default()
        };
        assert_eq!(
            state.to_string(),
            "(Controller: r:true l:false a:false b:true down-slope:false up-slope:false angle:12.5)"
        );
    }
}
