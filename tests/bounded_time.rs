// tests/bounded_time.rs
use lsystem_turtle::{
    DerivationConfig, GrammarTable, LSystemConfig, RunError, generate, generate_with_timeout,
    preset_config,
};
use std::time::{Duration, Instant};

fn explosive() -> LSystemConfig {
    let rules = GrammarTable::from_pairs([('F', "F[+F]F[-F]F")]).unwrap();
    LSystemConfig::new("F", rules, 40, 1.0, 90.0, 25.7).unwrap()
}

#[tokio::test]
async fn test_completes_within_budget() {
    let config = preset_config("fractal_plant").unwrap();
    let expected = generate(&config).unwrap();

    let generation =
        generate_with_timeout(config, DerivationConfig::default(), Duration::from_secs(30))
            .await
            .unwrap();
    assert_eq!(generation, expected);
}

#[tokio::test]
async fn test_timeout_is_distinguishable() {
    let start = Instant::now();
    let result = generate_with_timeout(
        explosive(),
        DerivationConfig {
            max_length: 5_000_000,
        },
        Duration::ZERO,
    )
    .await;

    assert!(matches!(result, Err(RunError::TimedOut(d)) if d == Duration::ZERO));
    // The caller is released without waiting for the abandoned worker.
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_truncation_rides_along() {
    let generation = generate_with_timeout(
        explosive(),
        DerivationConfig { max_length: 10_000 },
        Duration::from_secs(30),
    )
    .await
    .unwrap();

    assert!(generation.truncated);
    assert!(generation.sequence.len() <= 10_000);
    assert!(generation.trace.is_well_formed());
}

#[tokio::test]
async fn test_parallel_runs_are_independent() {
    let a = preset_config("koch_curve").unwrap();
    let b = preset_config("dragon_curve").unwrap();
    let (ra, rb) = tokio::join!(
        generate_with_timeout(a.clone(), DerivationConfig::default(), Duration::from_secs(30)),
        generate_with_timeout(b.clone(), DerivationConfig::default(), Duration::from_secs(30)),
    );
    assert_eq!(ra.unwrap(), generate(&a).unwrap());
    assert_eq!(rb.unwrap(), generate(&b).unwrap());
}
