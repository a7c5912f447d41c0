use brookes_delta::{
    compare, compute, interpret, FrequencyDistribution, InvalidDistributionError, Label,
    Thresholds,
};
use pretty_assertions::assert_eq;
use proptest::collection::vec;
use proptest::{prop_assert, prop_assert_eq, prop_assume, proptest};

fn labelled(counts: &[(&'static str, i64)]) -> FrequencyDistribution<&'static str> {
    FrequencyDistribution::from_counts(counts.iter().copied()).unwrap()
}

fn uniform(n: usize, per_category: u64) -> FrequencyDistribution<usize> {
    FrequencyDistribution::from_counts((0..n).map(|i| (i, per_category))).unwrap()
}

#[test]
fn test_concentrated_scenario() {
    let result = compute(&labelled(&[("A", 90), ("B", 5), ("C", 5)])).unwrap();
    assert_eq!(result.total, 100);
    assert_eq!(result.categories, 3);
    assert!(result.delta > 0.7);
    assert_eq!(interpret(result.delta).unwrap(), Label::HighlyConcentrated);
}

#[test]
fn test_dispersed_scenario() {
    let result = compute(&labelled(&[("A", 34), ("B", 33), ("C", 33)])).unwrap();
    assert!(result.delta < 0.4);
    assert_eq!(interpret(result.delta).unwrap(), Label::HighlyDispersed);
    assert_eq!(
        result.label(&Thresholds::new(0.3, 0.7).unwrap()),
        Label::Balanced
    );
}

#[test]
fn test_computational_linguistics_fields() {
    let result = compute(&labelled(&[
        ("NLP Applications", 280),
        ("Semantics", 220),
        ("Resources", 180),
        ("Syntax", 120),
        ("Discourse", 100),
        ("Morphology", 70),
        ("Phonology", 30),
    ]))
    .unwrap();
    assert_eq!(result.total, 1000);
    assert_eq!(result.categories, 7);
    // (280² + 220² + 180² + 120² + 100² + 70² + 30²) / 1000²
    assert!((result.delta - 0.1894).abs() < 1e-12);
    assert!((result.rank_mean - 5.13).abs() < 1e-12);
    assert_eq!(interpret(result.delta).unwrap(), Label::HighlyDispersed);
    let top = &result.proportions[0];
    assert_eq!((top.category, top.rank), ("NLP Applications", 1));
    assert!((top.percentage() - 28.0).abs() < 1e-12);
}

#[test]
fn test_uniform_strictly_decreasing() {
    let mut previous = compute(&uniform(1, 3)).unwrap().delta;
    assert_eq!(previous, 1.0);
    for n in 2..=1000 {
        let delta = compute(&uniform(n, 3)).unwrap().delta;
        assert!(delta < previous, "n = {n}: {delta} >= {previous}");
        previous = delta;
    }
}

#[test]
fn test_invalid_inputs() {
    assert_eq!(
        compute(&FrequencyDistribution::<&str>::from_assignments([])).unwrap_err(),
        InvalidDistributionError::Empty
    );
    assert_eq!(
        compute(&labelled(&[("A", 0), ("B", 0)])).unwrap_err(),
        InvalidDistributionError::AllZero { categories: 2 }
    );
    assert!(matches!(
        compute(&labelled(&[("A", 3), ("B", -2)])),
        Err(InvalidDistributionError::NegativeCount { .. })
    ));
}

#[test]
fn test_interpret_bounds() {
    assert_eq!(interpret(1.0).unwrap(), Label::HighlyConcentrated);
    assert!(interpret(1.5).is_err());
}

#[test]
fn test_compare_scenario() {
    let cmp = compare(&[
        labelled(&[("A", 90), ("B", 10)]),
        labelled(&[("X", 50), ("Y", 50)]),
    ])
    .unwrap();
    assert_eq!(cmp.ranking, vec![0, 1]);
    assert_eq!(cmp.difference(0, 0), 0.0);
    assert_eq!(cmp.difference(1, 1), 0.0);
    assert_eq!(cmp.difference(0, 1), cmp.difference(1, 0));
    assert!(cmp.difference(0, 1) > 0.0);
}

#[test]
fn test_result_field_names() {
    let result = compute(&labelled(&[("A", 3), ("B", 1)])).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    for key in [
        "delta",
        "categories",
        "total",
        "proportions",
        "effective_categories",
        "rank_mean",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["proportions"][0]["category"], "A");
    assert_eq!(json["proportions"][0]["rank"], 1);
}

proptest! {
    #[test]
    fn prop_delta_in_unit_interval(counts in vec(0u32..1_000_000, 1..200)) {
        prop_assume!(counts.iter().any(|&c| c > 0));
        let dist = FrequencyDistribution::from_counts(counts.iter().copied().enumerate()).unwrap();
        let result = compute(&dist).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.delta));
        // Δ is bounded below by an even spread over the occupied categories.
        prop_assert!(result.delta * result.categories as f64 >= 1.0 - 1e-12);
        prop_assert!(interpret(result.delta).is_ok());
    }

    #[test]
    fn prop_deterministic(counts in vec(1u64..1_000_000_000, 1..100)) {
        let dist = FrequencyDistribution::from_counts(counts.iter().copied().enumerate()).unwrap();
        let first = compute(&dist).unwrap();
        let second = compute(&dist.clone()).unwrap();
        prop_assert_eq!(first.delta.to_bits(), second.delta.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_single_category_is_one(count in 1u64..=u64::MAX, zeros in 0usize..20) {
        let dist = FrequencyDistribution::from_counts(
            std::iter::once((0usize, count)).chain((1..=zeros).map(|i| (i, 0))),
        )
        .unwrap();
        prop_assert_eq!(compute(&dist).unwrap().delta, 1.0);
    }

    #[test]
    fn prop_ranking_descending(
        dists in vec(vec(0u16..500, 1..30), 2..10),
    ) {
        prop_assume!(dists.iter().all(|d| d.iter().any(|&c| c > 0)));
        let dists: Vec<_> = dists
            .iter()
            .map(|d| FrequencyDistribution::from_counts(d.iter().copied().enumerate()).unwrap())
            .collect();
        let cmp = compare(&dists).unwrap();
        prop_assert_eq!(cmp.ranking.len(), dists.len());
        for pair in cmp.ranking.windows(2) {
            let (a, b) = (cmp.delta(pair[0]), cmp.delta(pair[1]));
            prop_assert!(a > b || (a == b && pair[0] < pair[1]));
        }
    }
}
