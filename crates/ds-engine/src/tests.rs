//! Unit and property tests for ds-engine.

use ds_core::{Algorithm, Cylinder, Direction};

use crate::SimulationBuilder;

// ── Helpers ───────────────────────────────────────────────────────────────────

const CLASSIC_QUEUE: [f64; 8] = [95.0, 180.0, 34.0, 119.0, 11.0, 123.0, 62.0, 64.0];

fn classic(algorithm: Algorithm) -> ds_core::Simulation {
    SimulationBuilder::new(199)
        .head_start(50)
        .direction(Direction::Increasing)
        .algorithm(algorithm)
        .requests(CLASSIC_QUEUE)
        .build()
}

fn sorted(mut v: Vec<Cylinder>) -> Vec<Cylinder> {
    v.sort_unstable();
    v
}

// ── sanitize ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sanitize_tests {
    use crate::sanitize;

    #[test]
    fn keeps_order_and_duplicates() {
        assert_eq!(sanitize(&[5.0, 3.0, 5.0, 0.0], 10), vec![5, 3, 5, 0]);
    }

    #[test]
    fn floors_fractions() {
        assert_eq!(sanitize(&[3.9, 0.2, 10.99], 10), vec![3, 0, 10]);
    }

    #[test]
    fn drops_invalid_values() {
        let raw = [f64::NAN, -5.0, 500.0, f64::INFINITY, f64::NEG_INFINITY, -0.5, 7.0];
        assert_eq!(sanitize(&raw, 199), vec![7]);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(sanitize(&[0.0, 199.0, 199.5, 200.0], 199), vec![0, 199, 199]);
    }

    #[test]
    fn empty_input() {
        assert!(sanitize(&[], 199).is_empty());
    }
}

// ── input coercion ────────────────────────────────────────────────────────────

#[cfg(test)]
mod input_tests {
    use ds_core::{Algorithm, Direction};

    use crate::{
        coerce_algorithm, coerce_direction, coerce_disk_max, coerce_head_start, parse_number,
        parse_request_list,
    };

    #[test]
    fn parse_number_rules() {
        assert_eq!(parse_number(" 42 "), 42.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("-1.5"), -1.5);
        assert!(parse_number("x").is_nan());
    }

    #[test]
    fn request_list_skips_empty_tokens() {
        let parsed = parse_request_list(" 95, 180,,34 ,");
        assert_eq!(parsed, vec![95.0, 180.0, 34.0]);
    }

    #[test]
    fn request_list_keeps_garbage_as_nan() {
        let parsed = parse_request_list("1,x,2");
        assert_eq!(parsed.len(), 3);
        assert!(parsed[1].is_nan());
    }

    #[test]
    fn disk_max_defaults_and_floor() {
        assert_eq!(coerce_disk_max(""), 199);
        assert_eq!(coerce_disk_max("abc"), 199);
        assert_eq!(coerce_disk_max("0"), 199);
        assert_eq!(coerce_disk_max("0.5"), 1);
        assert_eq!(coerce_disk_max("-20"), 1);
        assert_eq!(coerce_disk_max("4999.9"), 4999);
    }

    #[test]
    fn head_start_clamped() {
        assert_eq!(coerce_head_start("50", 199), 50);
        assert_eq!(coerce_head_start("500", 199), 199);
        assert_eq!(coerce_head_start("-3", 199), 0);
        assert_eq!(coerce_head_start("nope", 199), 0);
        assert_eq!(coerce_head_start("12.7", 199), 12);
    }

    #[test]
    fn direction_defaults_to_increasing() {
        assert_eq!(coerce_direction("-1"), Direction::Decreasing);
        assert_eq!(coerce_direction("1"), Direction::Increasing);
        assert_eq!(coerce_direction("-2"), Direction::Increasing);
        assert_eq!(coerce_direction("left"), Direction::Increasing);
    }

    #[test]
    fn algorithm_falls_back_to_cscan() {
        assert_eq!(coerce_algorithm("scan"), Algorithm::Scan);
        assert_eq!(coerce_algorithm(" SCAN "), Algorithm::Scan);
        assert_eq!(coerce_algorithm("cscan"), Algorithm::CScan);
        assert_eq!(coerce_algorithm("look"), Algorithm::CScan);
    }
}

// ── ordering policies ─────────────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use super::*;
    use crate::{cscan, ordering_fn, scan};

    #[test]
    fn scan_increasing_classic() {
        let sim = classic(Algorithm::Scan);
        assert_eq!(sim.service_order(), &[62, 64, 95, 119, 123, 180, 34, 11]);
    }

    #[test]
    fn cscan_increasing_classic() {
        let sim = classic(Algorithm::CScan);
        assert_eq!(sim.service_order(), &[62, 64, 95, 119, 123, 180, 11, 34]);
    }

    #[test]
    fn scan_decreasing() {
        let order = scan(&[95, 180, 34, 119, 11, 123, 62, 64], 50, Direction::Decreasing, 199);
        assert_eq!(order, vec![34, 11, 62, 64, 95, 119, 123, 180]);
    }

    #[test]
    fn cscan_decreasing() {
        let order = cscan(&[95, 180, 34, 119, 11, 123, 62, 64], 50, Direction::Decreasing, 199);
        assert_eq!(order, vec![34, 11, 180, 123, 119, 95, 64, 62]);
    }

    #[test]
    fn request_at_head_goes_first_pass() {
        // Decreasing: the head's own cylinder is in the ascending second pass.
        assert_eq!(scan(&[10, 20, 30], 20, Direction::Decreasing, 99), vec![10, 20, 30]);
        // Increasing: it is serviced immediately.
        assert_eq!(scan(&[10, 20, 30], 20, Direction::Increasing, 99), vec![20, 30, 10]);
        assert_eq!(cscan(&[10, 20, 30], 20, Direction::Increasing, 99), vec![20, 30, 10]);
        assert_eq!(cscan(&[10, 20, 30], 20, Direction::Decreasing, 99), vec![10, 30, 20]);
    }

    #[test]
    fn decreasing_from_zero_has_nothing_below() {
        let requests = [40, 7, 99, 7];
        assert_eq!(scan(&requests, 0, Direction::Decreasing, 99), vec![7, 7, 40, 99]);
        assert_eq!(cscan(&requests, 0, Direction::Decreasing, 99), vec![99, 40, 7, 7]);
    }

    #[test]
    fn lookup_table_dispatches_by_variant() {
        let requests = [95, 180, 34, 11];
        for alg in Algorithm::ALL {
            let direct = match alg {
                Algorithm::Scan => scan(&requests, 50, Direction::Increasing, 199),
                Algorithm::CScan => cscan(&requests, 50, Direction::Increasing, 199),
            };
            assert_eq!(ordering_fn(alg)(&requests, 50, Direction::Increasing, 199), direct);
        }
    }
}

// ── metrics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics_tests {
    use super::*;
    use crate::compute_metrics;

    #[test]
    fn scan_classic_movement() {
        let sim = classic(Algorithm::Scan);
        // 50→180 sweeping up (130), 180→34 (146), 34→11 (23).
        assert_eq!(sim.total_head_movement(), 299);
        assert_eq!(sim.positions()[0], 50);
        assert_eq!(sim.positions().len(), 9);
        assert_eq!(sim.waiting_movements(), &[12, 14, 45, 69, 73, 130, 276, 299]);
        assert!((sim.average_seek() - 299.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn cscan_classic_wrap_segment() {
        let sim = classic(Algorithm::CScan);
        let p = sim.positions();
        // The wrap is the step from 180 straight to 11.
        assert_eq!((p[6], p[7]), (180, 11));
        assert_eq!(sim.waiting_movements()[6] - sim.waiting_movements()[5], 169);
        assert_eq!(sim.total_head_movement(), 130 + 169 + 23);
    }

    #[test]
    fn empty_order_zeroed() {
        let m = compute_metrics(42, vec![]);
        assert_eq!(m.positions, vec![42]);
        assert_eq!(m.total_head_movement, 0);
        assert_eq!(m.average_seek, 0.0);
        assert!(m.waiting_movements.is_empty());
    }

    #[test]
    fn duplicates_cost_nothing() {
        let m = compute_metrics(10, vec![10, 10, 15]);
        assert_eq!(m.waiting_movements, vec![0, 0, 5]);
        assert_eq!(m.total_head_movement, 5);
    }
}

// ── builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::RawInput;

    #[test]
    fn all_invalid_requests_yield_empty_simulation() {
        let raw = RawInput {
            disk_max:   "199".into(),
            head_start: "50".into(),
            direction:  "1".into(),
            algorithm:  "scan".into(),
            requests:   "x, -5, 500".into(),
        };
        let sim = SimulationBuilder::from_raw(&raw).build();
        assert!(sim.is_empty());
        assert_eq!(sim.total_head_movement(), 0);
        assert_eq!(sim.average_seek(), 0.0);
        assert_eq!(sim.positions(), &[50]);
    }

    #[test]
    fn no_requests_at_all() {
        let sim = SimulationBuilder::new(199).head_start(10).build();
        assert!(sim.is_empty());
        assert_eq!(sim.average_seek(), 0.0);
    }

    #[test]
    fn from_raw_matches_typed_builder() {
        let raw = RawInput {
            disk_max:   "199".into(),
            head_start: "50".into(),
            direction:  "+1".into(),
            algorithm:  "cscan".into(),
            requests:   "95,180,34,119,11,123,62,64".into(),
        };
        assert_eq!(SimulationBuilder::from_raw(&raw).build(), classic(Algorithm::CScan));
    }

    #[test]
    fn head_start_clamped_to_disk() {
        let sim = SimulationBuilder::new(99).head_start(500).cylinders(&[10, 150]).build();
        assert_eq!(sim.head_start(), 99);
        assert_eq!(sim.service_order(), &[10]);
    }

    #[test]
    fn disk_max_at_least_one() {
        let sim = SimulationBuilder::new(0).cylinders(&[0, 1, 2]).build();
        assert_eq!(sim.disk_max(), 1);
        assert_eq!(sim.service_order(), &[0, 1]);
    }

    #[test]
    fn records_parameters() {
        let sim = SimulationBuilder::new(199)
            .direction(Direction::Decreasing)
            .algorithm(Algorithm::CScan)
            .build();
        assert_eq!(sim.direction(), Direction::Decreasing);
        assert_eq!(sim.algorithm(), Algorithm::CScan);
    }
}

// ── properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{compute_metrics, service_order};

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Increasing), Just(Direction::Decreasing)]
    }

    fn algorithm() -> impl Strategy<Value = Algorithm> {
        prop_oneof![Just(Algorithm::Scan), Just(Algorithm::CScan)]
    }

    proptest! {
        #[test]
        fn order_is_permutation(
            requests in prop::collection::vec(0u32..=500, 0..64),
            head in 0u32..=500,
            dir in direction(),
            alg in algorithm(),
        ) {
            let order = service_order(alg, &requests, head, dir, 500);
            prop_assert_eq!(sorted(order), sorted(requests));
        }

        #[test]
        fn total_matches_recomputed_sum(
            requests in prop::collection::vec(0u32..=500, 0..64),
            head in 0u32..=500,
            dir in direction(),
            alg in algorithm(),
        ) {
            let order = service_order(alg, &requests, head, dir, 500);
            let m = compute_metrics(head, order);
            let recomputed: u64 = m
                .positions
                .windows(2)
                .map(|w| (w[1] as i64 - w[0] as i64).unsigned_abs())
                .sum();
            prop_assert_eq!(m.total_head_movement, recomputed);
            prop_assert_eq!(m.positions.len(), m.service_order.len() + 1);
        }

        #[test]
        fn waiting_non_decreasing_and_ends_at_total(
            requests in prop::collection::vec(0u32..=500, 1..64),
            head in 0u32..=500,
            dir in direction(),
            alg in algorithm(),
        ) {
            let order = service_order(alg, &requests, head, dir, 500);
            let m = compute_metrics(head, order);
            prop_assert!(m.waiting_movements.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(m.waiting_movements.last().copied(), Some(m.total_head_movement));
            prop_assert_eq!(m.waiting_movements.len(), m.service_order.len());
        }

        #[test]
        fn built_values_stay_on_disk(
            raw in prop::collection::vec(-1_000.0f64..1_000.0, 0..64),
            disk_max in 1u32..=600,
            head in 0u32..=600,
            dir in direction(),
            alg in algorithm(),
        ) {
            let sim = SimulationBuilder::new(disk_max)
                .head_start(head)
                .direction(dir)
                .algorithm(alg)
                .requests(raw)
                .build();
            prop_assert!(sim.positions().iter().all(|&p| p <= disk_max));
            prop_assert!(sim.average_seek().is_finite());
        }
    }
}
