// Property tests for the assignment engine

mod common;

use book_assign::core::{build_cost_matrix, solve};
use book_assign::models::{Matrix, ScoringPolicy};
use common::{brute_force_min, is_partial_bijection};
use proptest::prelude::*;

/// Matrix of small integer-valued cells, `rows x cols` within the given bounds
fn matrix(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Matrix> {
    (1..=max_rows, 1..=max_cols).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0i32..50, cols), rows)
            .prop_map(|cells| {
                Matrix::from_rows(
                    cells
                        .into_iter()
                        .map(|row| row.into_iter().map(f64::from).collect())
                        .collect(),
                )
                .unwrap()
            })
    })
}

/// Square matrix with all-distinct cells
fn distinct_square(max_n: usize) -> impl Strategy<Value = Matrix> {
    (1..=max_n).prop_flat_map(|n| {
        Just((0..n * n).map(|v| v as f64).collect::<Vec<f64>>())
            .prop_shuffle()
            .prop_map(move |cells| Matrix::from_fn(n, n, |r, c| cells[r * n + c]).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_optimal_on_distinct_square(cost in distinct_square(8)) {
        let assignment = solve(&cost).unwrap();

        prop_assert_eq!(assignment.len(), cost.rows());
        prop_assert!((assignment.total_cost(&cost) - brute_force_min(&cost)).abs() < 1e-9);
    }

    #[test]
    fn prop_rectangular_shape_and_optimality(cost in matrix(7, 7)) {
        let assignment = solve(&cost).unwrap();
        let expected = cost.rows().min(cost.cols());

        prop_assert_eq!(assignment.len(), expected);
        prop_assert!(is_partial_bijection(assignment.pairs()));
        prop_assert!(assignment.pairs().iter().all(|&(r, c)| r < cost.rows() && c < cost.cols()));
        prop_assert!((assignment.total_cost(&cost) - brute_force_min(&cost)).abs() < 1e-9);
    }

    #[test]
    fn prop_repeated_solves_agree(cost in matrix(6, 6)) {
        let first = solve(&cost).unwrap();
        let second = solve(&cost).unwrap();

        prop_assert_eq!(first.total_cost(&cost), second.total_cost(&cost));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_standard_policy_reverses_order(scores in matrix(5, 5)) {
        let cost = build_cost_matrix(&scores, ScoringPolicy::Standard, None).unwrap();

        for a in 0..scores.rows() * scores.cols() {
            for b in 0..scores.rows() * scores.cols() {
                let (ra, ca) = (a / scores.cols(), a % scores.cols());
                let (rb, cb) = (b / scores.cols(), b % scores.cols());
                if scores.get(ra, ca) > scores.get(rb, cb) {
                    prop_assert!(cost.get(ra, ca) < cost.get(rb, cb));
                }
            }
        }
    }

    #[test]
    fn prop_all_equal_scores_cost_nothing(rows in 1usize..8, cols in 1usize..8, value in 0i32..11) {
        let scores = Matrix::filled(rows, cols, f64::from(value)).unwrap();
        let cost = build_cost_matrix(&scores, ScoringPolicy::Standard, None).unwrap();

        let assignment = solve(&cost).unwrap();

        prop_assert_eq!(&cost, &Matrix::filled(rows, cols, 0.0).unwrap());
        prop_assert_eq!(assignment.len(), rows.min(cols));
        prop_assert_eq!(assignment.total_cost(&cost), 0.0);
    }
}
