//! Statistical checks of the aim roll.

use mk_ballistics::{AccuracyLadder, DispersionSources, roll};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn mean_missed_by(sources: &DispersionSources, samples: u32, rng: &mut StdRng) -> f64 {
    let total: f64 = (0..samples)
        .map(|_| roll(sources, 10.0, 0.5, rng).missed_by)
        .sum();
    total / f64::from(samples)
}

#[test]
fn zero_dispersion_never_misses() {
    let mut rng = StdRng::seed_from_u64(42);
    let sources = DispersionSources::default().add_multiplier(3.0);
    for range in [0.5, 1.0, 4.0, 20.0, 60.0] {
        for size in [0.05, 0.5, 1.0, 3.0] {
            let aim = roll(&sources, range, size, &mut rng);
            assert!(aim.missed_by.abs() < f64::EPSILON, "range {range} size {size}");
        }
    }
}

#[test]
fn mean_miss_grows_with_dispersion() {
    let mut rng = StdRng::seed_from_u64(2024);
    let means: Vec<f64> = [0.0, 50.0, 100.0, 200.0, 400.0, 800.0]
        .into_iter()
        .map(|d| mean_missed_by(&DispersionSources::new(d), 5_000, &mut rng))
        .collect();
    for pair in means.windows(2) {
        assert!(pair[0] < pair[1], "means not increasing: {means:?}");
    }
}

#[test]
fn linear_and_normal_sources_feed_the_same_roll() {
    // sqrt(300^2 + 400^2) = 500, and 500 linear; both aggregate to the same total
    let quadrature = DispersionSources::new(300.0).add_normal(400.0);
    let linear = DispersionSources::default().add_range(500.0);
    let a = roll(&quadrature, 10.0, 0.5, &mut StdRng::seed_from_u64(5));
    let b = roll(&linear, 10.0, 0.5, &mut StdRng::seed_from_u64(5));
    assert!((a.dispersion - b.dispersion).abs() < 1e-9);
    assert!((a.missed_by - b.missed_by).abs() < 1e-9);
}

#[test]
fn standard_hit_rate_matches_baseline() {
    // 500' at 10 tiles on a 0.5 tile target; recorded baseline is ~0.170
    let ladder = AccuracyLadder::default();
    let sources = DispersionSources::new(500.0);
    let mut rng = StdRng::seed_from_u64(1);
    let samples = 10_000;
    let hits = (0..samples)
        .filter(|_| roll(&sources, 10.0, 0.5, &mut rng).missed_by < ladder.standard)
        .count();
    let rate = hits as f64 / f64::from(samples);
    assert!((0.155..=0.185).contains(&rate), "standard hit rate {rate}");
}
