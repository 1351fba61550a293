//! Statistical checks of which parts a targeting graph hands out.

use std::collections::HashMap;

use mk_targeting::TargetingGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn hit_shares(
    graph: &TargetingGraph<&'static str>,
    samples: u32,
    seed: u64,
) -> HashMap<&'static str, f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts: HashMap<&'static str, u32> = HashMap::new();
    for _ in 0..samples {
        let value: f64 = rng.random_range(0.0..1.0);
        let hit = *graph.select(0.0, 1.0, value, &mut rng);
        *counts.entry(hit).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(part, count)| (part, f64::from(count) / f64::from(samples)))
        .collect()
}

fn assert_share(shares: &HashMap<&'static str, f64>, part: &str, expected: f64, tolerance: f64) {
    let actual = shares.get(part).copied().unwrap_or(0.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{part}: expected {expected:.4} +/- {tolerance}, got {actual:.4}"
    );
}

#[test]
fn heavy_root_with_single_child() {
    let graph = TargetingGraph::generate(
        "root",
        &["root", "child"],
        |_| "root",
        |p| if *p == "root" { 2.0 } else { 1.0 },
    )
    .unwrap();
    let shares = hit_shares(&graph, 100_000, 42);
    assert_share(&shares, "root", 2.0 / 3.0, 0.025);
    assert_share(&shares, "child", 1.0 / 3.0, 0.025);
}

#[test]
fn root_with_two_equal_children() {
    let graph = TargetingGraph::generate(
        "root",
        &["root", "left", "right"],
        |_| "root",
        |_| 1.0,
    )
    .unwrap();
    let shares = hit_shares(&graph, 100_000, 7);
    assert_share(&shares, "root", 0.50, 0.025);
    assert_share(&shares, "left", 0.25, 0.025);
    assert_share(&shares, "right", 0.25, 0.025);
}

#[test]
fn ancestors_are_credited_on_deep_paths() {
    // chain: root(1) <- mid(1) <- tip(2); every path is the whole chain
    let graph = TargetingGraph::generate(
        "root",
        &["root", "mid", "tip"],
        |p| if *p == "tip" { "mid" } else { "root" },
        |p| if *p == "tip" { 2.0 } else { 1.0 },
    )
    .unwrap();
    let shares = hit_shares(&graph, 100_000, 99);
    assert_share(&shares, "root", 0.25, 0.01);
    assert_share(&shares, "mid", 0.25, 0.01);
    assert_share(&shares, "tip", 0.50, 0.01);
}

fn human_connection(part: &&'static str) -> &'static str {
    match *part {
        "head" | "arm_l" | "arm_r" | "leg_l" | "leg_r" => "torso",
        "eyes" | "mouth" => "head",
        "hand_l" => "arm_l",
        "hand_r" => "arm_r",
        "foot_l" => "leg_l",
        "foot_r" => "leg_r",
        _ => "torso",
    }
}

fn human_weight(part: &&'static str) -> f64 {
    match *part {
        "torso" => 36.0,
        "head" => 4.0,
        "arm_l" | "arm_r" | "leg_l" | "leg_r" => 13.0,
        "hand_l" | "hand_r" => 1.5,
        "foot_l" | "foot_r" => 2.0,
        "eyes" | "mouth" => 0.5,
        _ => 0.0,
    }
}

#[test]
fn human_anatomy_hit_shares() {
    let parts = [
        "torso", "head", "eyes", "mouth", "arm_l", "arm_r", "hand_l", "hand_r", "leg_l", "leg_r",
        "foot_l", "foot_r",
    ];
    let graph =
        TargetingGraph::generate("torso", &parts, human_connection, human_weight).unwrap();
    assert_eq!(graph.part_count(), parts.len());

    let shares = hit_shares(&graph, 1_000_000, 1234);
    let tolerance = 0.005;
    assert_share(&shares, "torso", 0.722, tolerance);
    assert_share(&shares, "arm_l", 0.060, tolerance);
    assert_share(&shares, "arm_r", 0.060, tolerance);
    assert_share(&shares, "leg_l", 0.059, tolerance);
    assert_share(&shares, "leg_r", 0.059, tolerance);
    assert_share(&shares, "head", 0.007, tolerance);
    assert_share(&shares, "hand_l", 0.007, tolerance);
    assert_share(&shares, "hand_r", 0.007, tolerance);
    assert_share(&shares, "foot_l", 0.009, tolerance);
    assert_share(&shares, "foot_r", 0.009, tolerance);
    assert_share(&shares, "eyes", 0.0004, tolerance);
    assert_share(&shares, "mouth", 0.0004, tolerance);
}

#[test]
fn identical_values_strike_different_parts() {
    let graph = TargetingGraph::generate(
        "root",
        &["root", "left", "right"],
        |_| "root",
        |_| 1.0,
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = HashMap::new();
    for _ in 0..200 {
        *seen.entry(*graph.select(0.0, 1.0, 0.9, &mut rng)).or_insert(0u32) += 1;
    }
    assert!(seen.contains_key("left"));
    assert!(seen.contains_key("right"));
}

#[test]
fn range_ends_pin_root_and_leaves() {
    let parts = [
        "torso", "head", "eyes", "mouth", "arm_l", "arm_r", "hand_l", "hand_r", "leg_l", "leg_r",
        "foot_l", "foot_r",
    ];
    let graph =
        TargetingGraph::generate("torso", &parts, human_connection, human_weight).unwrap();
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..1_000 {
        assert_eq!(*graph.select(-0.5, 1.5, -0.5, &mut rng), "torso");
        let leaf = graph.select(-0.5, 1.5, 1.5, &mut rng);
        assert!(graph.get(leaf).unwrap().is_leaf(), "{leaf} is not a leaf");
    }
}
