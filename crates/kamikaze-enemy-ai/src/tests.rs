#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use kamikaze_core::constants::*;
    use kamikaze_core::enums::SteeringMode;
    use kamikaze_core::params::EnemyAiParams;
    use kamikaze_core::types::Vector2D;

    use crate::pursuit::{in_firing_range, misalignment, steering_signal, PursuitContext};

    fn make_context(rotation: f64, target: Vector2D) -> PursuitContext {
        PursuitContext {
            position: Vector2D::ZERO,
            rotation,
            target,
        }
    }

    fn ternary() -> EnemyAiParams {
        EnemyAiParams {
            steering: SteeringMode::Ternary,
            ..Default::default()
        }
    }

    #[test]
    fn test_aimed_at_target_stops_turning() {
        // Facing right, target straight ahead.
        let ctx = make_context(RIGHT, Vector2D::new(100.0, 0.0));
        assert_abs_diff_eq!(misalignment(&ctx), 0.0, epsilon = 1e-12);
        assert_eq!(steering_signal(&ctx, &EnemyAiParams::default()), 0.0);
    }

    #[test]
    fn test_inside_deadband_is_zero() {
        // Target just under π/20 off the nose.
        let angle = ENEMY_AIM_DEADBAND * 0.9;
        let ctx = make_context(RIGHT, Vector2D::from_angle(angle) * 200.0);
        assert_eq!(steering_signal(&ctx, &EnemyAiParams::default()), 0.0);
        assert_eq!(steering_signal(&ctx, &ternary()), 0.0);
    }

    #[test]
    fn test_proportional_passes_angle_through() {
        // Target straight below: +90° (clockwise on screen).
        let ctx = make_context(RIGHT, Vector2D::new(0.0, 100.0));
        let signal = steering_signal(&ctx, &EnemyAiParams::default());
        assert_abs_diff_eq!(signal, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ternary_clamps_to_sign() {
        let below = make_context(RIGHT, Vector2D::new(0.0, 100.0));
        assert_eq!(steering_signal(&below, &ternary()), 1.0);

        let above = make_context(RIGHT, Vector2D::new(0.0, -100.0));
        assert_eq!(steering_signal(&above, &ternary()), -1.0);
    }

    #[test]
    fn test_target_behind_turns_full_half_circle() {
        let ctx = make_context(RIGHT, Vector2D::new(-100.0, 0.0));
        assert_abs_diff_eq!(misalignment(&ctx), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_target_on_top_of_enemy() {
        // Zero-length direction: angle_to a zero vector is 0, so no turning.
        let ctx = make_context(UP, Vector2D::ZERO);
        assert_eq!(steering_signal(&ctx, &EnemyAiParams::default()), 0.0);
    }

    #[test]
    fn test_firing_range_is_strict() {
        let params = EnemyAiParams::default();
        let origin = Vector2D::ZERO;
        assert!(in_firing_range(&origin, &Vector2D::new(250.0, 0.0), &params));
        assert!(!in_firing_range(&origin, &Vector2D::new(350.0, 0.0), &params));
        assert!(!in_firing_range(
            &origin,
            &Vector2D::new(ENEMY_MAX_SHOOTING_DISTANCE, 0.0),
            &params
        ));
    }
}
