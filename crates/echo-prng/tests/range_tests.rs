// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bounded integer draws: ordered, swapped and degenerate bounds.

use echo_prng::Generator;

#[test]
fn ordered_bounds_hold() {
    let mut rng = Generator::new(777);
    for _ in 0..100_000 {
        let v = rng.rand_range(10, 50);
        assert!((10..50).contains(&v), "{v} out of [10, 50)");
    }
}

#[test]
fn swapped_bounds_stay_between_inputs() {
    let mut rng = Generator::new(555);
    for _ in 0..1000 {
        let v = rng.rand_range(100, 10);
        assert!((10..100).contains(&v), "{v} out of [10, 100)");
    }
}

#[test]
fn swapped_bounds_match_ordered_call() {
    let mut ordered = Generator::new(31);
    let mut swapped = Generator::new(31);
    for _ in 0..1000 {
        assert_eq!(ordered.rand_range(-20, 20), swapped.rand_range(20, -20));
    }
}

#[test]
fn equal_bounds_always_return_bound() {
    let mut rng = Generator::new(333);
    for k in [42, 0, -7, i32::MIN, i32::MAX] {
        for _ in 0..100 {
            assert_eq!(rng.rand_range(k, k), k);
        }
    }
}

#[test]
fn unit_span_always_returns_lower() {
    let mut rng = Generator::new(8);
    for _ in 0..1000 {
        assert_eq!(rng.rand_range(-3, -2), -3);
        assert_eq!(rng.rand_range(-2, -3), -3);
    }
}

#[test]
fn extreme_bounds_never_escape() {
    let mut rng = Generator::new(-99);
    for _ in 0..10_000 {
        let v = rng.rand_range(i32::MAX, i32::MIN);
        assert!(v < i32::MAX);
        let w = rng.rand_range(i32::MAX - 1, i32::MAX);
        assert_eq!(w, i32::MAX - 1);
        let x = rng.rand_range(i32::MIN, i32::MIN + 2);
        assert!(x == i32::MIN || x == i32::MIN + 1);
    }
}

#[test]
fn range_edges_are_reachable() {
    let mut rng = Generator::new(4242);
    let (mut low_seen, mut high_seen) = (false, false);
    for _ in 0..10_000 {
        match rng.rand_range(-5, 5) {
            -5 => low_seen = true,
            4 => high_seen = true,
            _ => {}
        }
    }
    assert!(low_seen && high_seen);
}
