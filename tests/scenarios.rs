//! End-to-end scenarios: records in, frontier and scores out.

use std::collections::HashMap;

use u_pareto::criteria::{Criterion, CriterionSpec, Direction};
use u_pareto::engine::{calculate_pareto, pareto_frontier, EngineConfig, ParetoRequest};
use u_pareto::matrix::ItemRecord;
use u_pareto::normalize::{min_max, normalize_attributes};
use u_pareto::source::{JsonRecordSource, RecordSource};

fn product(price: i64, rating: f64) -> ItemRecord {
    ItemRecord::new().with("price", price).with("rating", rating)
}

#[test]
fn test_cheaper_and_better_rated_wins() {
    let items = vec![product(10, 4.0), product(8, 4.0), product(8, 5.0)];
    let criteria = vec![Criterion::minimize("price"), Criterion::maximize("rating")];

    let result = pareto_frontier(&items, &criteria);

    assert_eq!(result.pareto_indices, vec![2]);
    assert_eq!(result.dominated_indices, vec![0, 1]);
}

#[test]
fn test_strict_dominance_places_items() {
    let items = vec![product(20, 2.0), product(5, 4.5), product(12, 3.0)];
    let criteria = vec![Criterion::minimize("price"), Criterion::maximize("rating")];

    let result = pareto_frontier(&items, &criteria);

    assert!(result.is_pareto_optimal(1));
    assert!(!result.is_pareto_optimal(0));
    assert!(!result.is_pareto_optimal(2));
}

#[test]
fn test_trade_off_frontier() {
    // cheap-but-mediocre vs expensive-but-excellent, plus one dominated item
    let items = vec![
        product(100, 3.0),
        product(400, 4.9),
        product(250, 4.0),
        product(300, 3.5),
    ];
    let criteria = vec![Criterion::minimize("price"), Criterion::maximize("rating")];

    let result = pareto_frontier(&items, &criteria);

    assert_eq!(result.pareto_indices, vec![0, 1, 2]);
    assert_eq!(result.dominated_indices, vec![3]);
}

#[test]
fn test_column_extremes() {
    let items = vec![product(10, 1.0), product(30, 5.0), product(20, 3.0)];
    let criteria = vec![
        Criterion::minimize("price").with_weight(4.0),
        Criterion::maximize("rating").with_weight(2.0),
    ];

    let scores = pareto_frontier(&items, &criteria).normalized_scores;

    assert!((scores[&0]["price"] - 4.0).abs() < 1e-10);
    assert!(scores[&1]["price"].abs() < 1e-10);
    assert!((scores[&2]["price"] - 2.0).abs() < 1e-10);

    assert!(scores[&0]["rating"].abs() < 1e-10);
    assert!((scores[&1]["rating"] - 2.0).abs() < 1e-10);
    assert!((scores[&2]["rating"] - 1.0).abs() < 1e-10);
}

#[test]
fn test_single_item() {
    let criteria = vec![
        Criterion::minimize("price").with_weight(0.7),
        Criterion::maximize("rating").with_weight(1.3),
    ];

    let result = pareto_frontier(&[product(42, 4.2)], &criteria);

    assert_eq!(result.pareto_indices, vec![0]);
    assert!(result.dominated_indices.is_empty());
    assert_eq!(result.normalized_scores[&0]["price"], 0.7);
    assert_eq!(result.normalized_scores[&0]["rating"], 0.0);
}

#[test]
fn test_empty_items() {
    let result = pareto_frontier(&[], &[Criterion::maximize("rating")]);

    assert!(result.pareto_indices.is_empty());
    assert!(result.dominated_indices.is_empty());
    assert!(result.normalized_scores.is_empty());
}

#[test]
fn test_degenerate_constants_differ() {
    let items = vec![product(5, 3.0), product(5, 3.0)];

    let scores = pareto_frontier(&items, &[Criterion::maximize("price")]).normalized_scores;
    assert_eq!(scores[&0]["price"], 0.0);

    assert_eq!(min_max(&[5.0, 5.0], false), vec![0.5, 0.5]);

    let batch = normalize_attributes(&items, &["price"], &HashMap::new());
    assert_eq!(batch[0]["price"], 0.5);
}

#[test]
fn test_source_to_engine() {
    let document = r#"[
        {"name": "A", "price": 10, "attributes": {"rating": 4}},
        {"name": "B", "price": 8, "attributes": {"rating": 4}},
        {"name": "C", "price": 8, "attributes": {"rating": 5}},
        "garbage"
    ]"#;
    let source = JsonRecordSource::new().with_attributes_key("attributes");
    let products = source.extract(document).unwrap();
    assert_eq!(products.len(), 3);

    let request = ParetoRequest {
        products,
        criteria: vec![
            CriterionSpec::new("price").with_direction("minimize"),
            CriterionSpec::new("rating").with_direction(Direction::Maximize.as_str()),
        ],
    };

    let result = calculate_pareto(&request, &EngineConfig::default()).unwrap();
    assert_eq!(result.pareto_indices, vec![2]);
    assert_eq!(result.dominated_indices, vec![0, 1]);

    let ranking = result.ranking(&[Criterion::minimize("price"), Criterion::maximize("rating")]);
    assert_eq!(ranking[0].0, 2);
}
