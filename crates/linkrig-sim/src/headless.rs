//! Headless full-stack smoke tests.
//!
//! Verifies that the mechanism, the three IK solvers, the mode-dispatching
//! driver, and the statistics layer run together tick after tick with no
//! window or renderer attached.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use crate::config::MechanismConfig;
    use crate::driver::{HeadlessSimulation, SimulationMode};
    use crate::mechanism::Mechanism;

    fn simulation(config: MechanismConfig) -> HeadlessSimulation {
        HeadlessSimulation::new(Mechanism::new(config).unwrap())
    }

    #[test]
    fn full_stack_mode_cycle() {
        let mut sim = simulation(MechanismConfig::default());

        // Idle warm-up.
        for _ in 0..10 {
            sim.step(0.016);
        }
        assert_eq!(sim.stats().ticks, 10);
        assert_eq!(sim.stats().failed_solves, 0);

        // Scripted motion.
        sim.set_mode(SimulationMode::SimulateMotion);
        for _ in 0..100 {
            sim.step(0.016);
        }
        assert!(sim.mechanism().orientation().norm() > 0.0);

        // Target tracking.
        sim.set_mode(SimulationMode::TrackTarget);
        sim.set_target_position(Vector3::new(4.0, 1.0, 2.5));
        for _ in 0..200 {
            sim.step(0.016);
        }

        let expected_yaw = 1.0_f64.atan2(4.0);
        assert_relative_eq!(sim.mechanism().orientation().z, expected_yaw, epsilon = 1e-4);
        assert_eq!(sim.stats().ticks, 310);
        assert_eq!(sim.stats().solves, 310);
        assert_eq!(sim.stats().failed_solves, 0);

        // Yaw searches ran and stayed within the solver's error budget.
        let worst = sim.stats().worst_yaw_error.unwrap();
        assert!(worst.is_finite());
    }

    #[test]
    fn whole_run_is_deterministic() {
        let run = || {
            let mut sim = simulation(MechanismConfig::default());
            sim.set_mode(SimulationMode::SimulateMotion);
            for _ in 0..60 {
                sim.step(0.02);
            }
            sim.set_mode(SimulationMode::TrackTarget);
            sim.set_target_position(Vector3::new(3.0, -2.0, 1.5));
            for _ in 0..60 {
                sim.step(0.02);
            }
            sim.mechanism().joint_angles()
        };

        let a = run();
        let b = run();
        assert_eq!(a.left.to_bits(), b.left.to_bits());
        assert_eq!(a.right.to_bits(), b.right.to_bits());
        assert_eq!(a.yaw.to_bits(), b.yaw.to_bits());
    }

    #[test]
    fn custom_search_budget_is_respected() {
        let mut config = MechanismConfig::default();
        config.search.samples = 20;
        config.search.max_iterations = 3;

        let mut sim = simulation(config);
        sim.set_mode(SimulationMode::SimulateMotion);
        for _ in 0..50 {
            sim.step(0.016);
        }

        let yaw = sim.mechanism().last_yaw_solve().unwrap();
        assert!(yaw.iterations <= 3);
    }
}
