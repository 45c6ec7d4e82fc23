use cache_aware::Error;
use cache_aware::Variant;
use cache_aware::runner::{BenchConfig, BenchReport, VariantTiming, run};

#[test]
fn test_naive_always_runs_first() {
    let mut config = BenchConfig::new(16);
    config.variants = vec![Variant::Combined, Variant::LoopOrder, Variant::Combined];
    assert_eq!(
        config.schedule(),
        vec![Variant::Naive, Variant::LoopOrder, Variant::Combined]
    );

    config.variants.clear();
    assert_eq!(config.schedule(), vec![Variant::Naive]);
}

#[test]
fn test_run_all_variants_with_verify() {
    let config = BenchConfig {
        n: 45,
        block: 10,
        variants: Variant::OPTIMIZED.to_vec(),
        seed: Some(42),
        verify: true,
    };
    let report = run(&config).unwrap();

    assert_eq!(report.n, 45);
    let order: Vec<Variant> = report.timings.iter().map(|t| t.variant).collect();
    assert_eq!(order, Variant::ALL.to_vec());
}

#[test]
fn test_invalid_config() {
    assert_eq!(run(&BenchConfig::new(0)), Err(Error::InvalidDimension));

    let mut config = BenchConfig::new(8);
    config.block = 0;
    assert_eq!(run(&config), Err(Error::InvalidTile));
}

#[test]
fn test_speedup_and_report_text() {
    let report = BenchReport {
        n: 100,
        timings: vec![
            VariantTiming {
                variant: Variant::Naive,
                micros: 900,
            },
            VariantTiming {
                variant: Variant::LoopOrder,
                micros: 300,
            },
            VariantTiming {
                variant: Variant::Tiled,
                micros: 0,
            },
        ],
    };

    assert_eq!(report.speedup(&report.timings[1]), Some(3.0));
    assert_eq!(report.speedup(&report.timings[2]), None);

    let text = report.to_string();
    assert_eq!(
        text,
        "Naive matmul: 900 microseconds\n\n\
         Loop-optimized matmul: 300 microseconds\nSpeedup: 3.0000\n\n\
         Tiled matmul: 0 microseconds\nSpeedup: N/A (tiled time = 0)\n\n"
    );
}
