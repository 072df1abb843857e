//! Property tests for pool bookkeeping driven through the manager

use crate::test_utils::manager_with;
use dronefleet_core::{DeliveryPolicy, StrategyKind};
use dronefleet_fleet::{Drone, FleetDrone, FleetError, FleetManager, Mission};
use proptest::prelude::*;
use std::rc::Rc;

#[derive(Debug, Clone)]
enum Step {
    Assign,
    Release(usize),
    Preload,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Assign),
        3 => (0usize..8).prop_map(Step::Release),
        1 => Just(Step::Preload),
    ]
}

fn strategy_kind() -> impl Strategy<Value = StrategyKind> {
    prop_oneof![Just(StrategyKind::Simple), Just(StrategyKind::Priority)]
}

fn mission(fm: &FleetManager, priority: i64) -> Mission {
    fm.create_mission("Patrol")
        .add_waypoint("P1")
        .duration(10)
        .priority(priority)
        .payload("Camera")
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_pool_totals_bounded(
        capacity in 1usize..6,
        kind in strategy_kind(),
        priority in 1i64..6,
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut fm = manager_with(capacity, kind, DeliveryPolicy::FailFast);
        let mission = mission(&fm, priority);
        let mut held: Vec<Rc<Drone>> = Vec::new();

        for step in steps {
            match step {
                Step::Assign => match fm.assign_mission_to_drone(&mission) {
                    Ok(drone) => {
                        let active = drone.active_mission();
                        prop_assert_eq!(active.as_ref(), Some(&mission));
                        held.push(drone);
                    }
                    Err(err) => {
                        prop_assert_eq!(err, FleetError::NoDronesAvailable);
                        prop_assert_eq!(fm.pool_stats().available, 0);
                    }
                },
                Step::Release(i) => {
                    if held.is_empty() {
                        continue;
                    }
                    let drone = held.remove(i % held.len());
                    prop_assert!(fm.release_drone(&drone).unwrap());
                    prop_assert!(drone.active_mission().is_none());
                    // A second release of the same drone is a no-op.
                    prop_assert!(!fm.release_drone(&drone).unwrap());
                }
                Step::Preload => fm.preload_drones().unwrap(),
            }

            let stats = fm.pool_stats();
            prop_assert!(stats.total() <= capacity);
            prop_assert_eq!(stats.in_use, held.len());
        }
    }

    #[test]
    fn prop_held_drones_are_distinct(
        capacity in 1usize..6,
        assigns in 0usize..8,
    ) {
        let mut fm = manager_with(capacity, StrategyKind::Simple, DeliveryPolicy::FailFast);
        fm.preload_drones().unwrap();
        let mission = mission(&fm, 3);

        let held: Vec<Rc<Drone>> = (0..assigns)
            .filter_map(|_| fm.assign_mission_to_drone(&mission).ok())
            .collect();

        for (i, a) in held.iter().enumerate() {
            for b in &held[i + 1..] {
                prop_assert!(!Rc::ptr_eq(a, b));
            }
        }
        prop_assert_eq!(held.len(), assigns.min(capacity.min(3)));
    }
}
