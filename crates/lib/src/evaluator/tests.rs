use crate::error::{Error, ErrorKind};
use crate::grid::{Direction, Grid, GridExt, Matrix};

use super::{combination_count, combinations, max_product, validate};

const SAMPLE: [[i32; 10]; 10] = [
    [8, 2, 22, 97, 38, 15, 0, 40, 0, 75],
    [49, 49, 99, 40, 17, 81, 18, 57, 60, 87],
    [81, 49, 31, 73, 55, 79, 14, 29, 93, 71],
    [52, 70, 95, 23, 4, 60, 11, 42, 69, 24],
    [22, 31, 16, 71, 51, 67, 63, 89, 41, 92],
    [24, 47, 32, 60, 99, 3, 45, 2, 44, 75],
    [32, 98, 81, 28, 64, 23, 67, 10, 26, 38],
    [67, 26, 20, 68, 2, 62, 12, 20, 95, 63],
    [24, 55, 58, 5, 66, 73, 99, 26, 97, 17],
    [21, 36, 23, 9, 75, 0, 76, 44, 20, 45],
];

/// Products of every horizontal, vertical and diagonal run of `k`, computed
/// the slow way.
fn brute_force(grid: &[Vec<i64>], k: usize) -> Vec<i64> {
    let rows = grid.len();
    let columns = grid[0].len();
    let mut out = Vec::new();

    for row in grid {
        for window in row.windows(k) {
            out.push(window.iter().product());
        }
    }

    for c in 0..columns {
        let column = grid.iter().map(|row| row[c]).collect::<Vec<_>>();

        for window in column.windows(k) {
            out.push(window.iter().product());
        }
    }

    for r in 0..rows {
        for c in 0..columns {
            if r + k <= rows && c + k <= columns {
                out.push((0..k).map(|n| grid[r + n][c + n]).product());
            }

            if r + k <= rows && c + 1 >= k {
                out.push((0..k).map(|n| grid[r + n][c - n]).product());
            }
        }
    }

    out
}

/// Deterministic pseudo-random grid with values in `-9..=9`.
fn generate(rows: usize, columns: usize, seed: u64) -> Vec<Vec<i64>> {
    let mut state = seed;

    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % 19) as i64 - 9
    };

    (0..rows)
        .map(|_| (0..columns).map(|_| next()).collect())
        .collect()
}

#[test]
fn test_minimal() {
    assert_eq!(max_product(&[[1]], 1).unwrap(), 1);
    assert_eq!(combination_count(&[[1]], 1).unwrap(), 4);
}

#[test]
fn test_horizontal() {
    assert_eq!(max_product(&[[1, 2, 3], [7, 8, 9], [4, 5, 6]], 3).unwrap(), 504);
    assert_eq!(max_product(&[[1, 2, 3], [9, 8, 7], [4, 5, 6]], 3).unwrap(), 504);
}

#[test]
fn test_vertical() {
    assert_eq!(max_product(&[[1, 7, 4], [2, 8, 5], [3, 9, 6]], 3).unwrap(), 504);
    assert_eq!(max_product(&[[1, 9, 4], [2, 8, 5], [3, 7, 6]], 3).unwrap(), 504);
}

#[test]
fn test_diagonal() {
    assert_eq!(max_product(&[[7, 2, 1], [4, 8, 3], [6, 5, 9]], 3).unwrap(), 504);
    assert_eq!(max_product(&[[1, 2, 9], [3, 8, 5], [7, 4, 6]], 3).unwrap(), 504);
}

#[test]
fn test_negative_cells() {
    // Best run is the bottom row, (-3) * (-4).
    assert_eq!(max_product(&[[-1, -2], [-3, -4]], 2).unwrap(), 12);
    // A single negative cell is still a valid maximum.
    assert_eq!(max_product(&[[-5]], 1).unwrap(), -5);
    assert_eq!(max_product(&[[-5, -7]], 1).unwrap(), -5);
}

#[test]
fn test_sample() {
    assert_eq!(max_product(&SAMPLE, 3).unwrap(), 667755);
    assert_eq!(combination_count(&SAMPLE, 3).unwrap(), 288);
}

#[test]
fn test_large() {
    let (m, n) = (100, 1000);

    let grid = (0..m)
        .map(|i| (0..n).map(|j| (i + j) as i64).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    assert_eq!(max_product(&grid, 4).unwrap(), 1445551740720);
}

#[test]
fn test_length_longer_than_one_dimension() {
    // Only horizontal runs fit.
    let grid = [[1, 2, 3, 4, 5]];
    assert_eq!(max_product(&grid, 5).unwrap(), 120);
    assert_eq!(combination_count(&grid, 5).unwrap(), 1);
    assert_eq!(combination_count(&grid, 3).unwrap(), 3);

    // Only vertical runs fit.
    let grid = [[2], [3], [4], [5]];
    assert_eq!(max_product(&grid, 3).unwrap(), 60);
    assert_eq!(combination_count(&grid, 3).unwrap(), 2);

    let grid = [[1, 2, 3], [4, 5, 6]];
    assert_eq!(max_product(&grid, 3).unwrap(), 120);
    assert_eq!(combination_count(&grid, 3).unwrap(), 2);
}

#[test]
fn test_combination_count() {
    assert_eq!(combination_count(&[[1, 2, 3], [4, 5, 6]], 2).unwrap(), 11);
    assert_eq!(combination_count(&[[1, 2], [3, 4]], 1).unwrap(), 16);
}

#[test]
fn test_against_brute_force() {
    for (seed, (rows, columns)) in [(1, 7), (5, 5), (6, 3), (2, 9), (8, 8)]
        .into_iter()
        .enumerate()
    {
        let grid = generate(rows, columns, seed as u64);

        for k in 1..=rows.max(columns) {
            let products = brute_force(&grid, k);

            assert_eq!(
                combination_count(&grid, k).unwrap(),
                products.len(),
                "{rows}x{columns}, k = {k}"
            );

            assert_eq!(
                max_product(&grid, k).unwrap(),
                products.iter().copied().max().unwrap(),
                "{rows}x{columns}, k = {k}"
            );
        }
    }
}

#[test]
fn test_combinations_agree_with_count() {
    let grid = generate(6, 4, 42);

    for k in 1..=6 {
        let all = combinations(&grid, k).unwrap().collect::<Vec<_>>();
        assert_eq!(all.len(), combination_count(&grid, k).unwrap());

        let max = all
            .iter()
            .map(|c| c.product(&grid).unwrap())
            .max()
            .unwrap();

        assert_eq!(max, max_product(&grid, k).unwrap());
    }
}

#[test]
fn test_combinations_scan_order() {
    let grid = [[1, 2], [3, 4]];

    let all = combinations(&grid, 2)
        .unwrap()
        .map(|c| (c.row, c.column, c.direction))
        .collect::<Vec<_>>();

    assert_eq!(
        all,
        [
            (0, 0, Direction::Right),
            (0, 0, Direction::Down),
            (0, 0, Direction::DownRight),
            (0, 1, Direction::Down),
            (0, 1, Direction::DownLeft),
            (1, 0, Direction::Right),
        ]
    );

    let cells = combinations(&grid, 2)
        .unwrap()
        .find(|c| c.direction == Direction::DownLeft)
        .unwrap()
        .cells()
        .collect::<Vec<_>>();

    assert_eq!(cells, [(0, 1), (1, 0)]);
}

#[test]
fn test_idempotent() {
    let grid = generate(5, 7, 3);
    let a = (max_product(&grid, 3).unwrap(), combination_count(&grid, 3).unwrap());
    let b = (max_product(&grid, 3).unwrap(), combination_count(&grid, 3).unwrap());
    assert_eq!(a, b);
}

#[test]
fn test_grid_views_agree() {
    let rows = SAMPLE.iter().map(|row| row.to_vec()).collect::<Vec<_>>();
    let flat = rows.concat();
    let matrix = Matrix::try_from(rows.clone()).unwrap();

    let expected = max_product(&SAMPLE, 4).unwrap();
    assert_eq!(max_product(&rows, 4).unwrap(), expected);
    assert_eq!(max_product(&rows[..], 4).unwrap(), expected);
    assert_eq!(max_product(&flat.as_grid(10), 4).unwrap(), expected);
    assert_eq!(max_product(&matrix, 4).unwrap(), expected);
    assert_eq!(max_product(&matrix.as_grid(), 4).unwrap(), expected);
}

#[test]
fn test_overflow() {
    let grid = [[i32::MAX, 2]];
    let error = max_product(&grid, 2).unwrap_err();
    assert!(matches!(error, Error::Overflow { row: 0, column: 0, direction: Direction::Right, len: 2 }));
    assert_eq!(error.kind(), ErrorKind::Value);

    // Wider cells hold the same product.
    assert_eq!(max_product(&[[i32::MAX as i64, 2]], 2).unwrap(), 2 * i32::MAX as i64);

    let error = combinations(&grid, 2).unwrap().next().unwrap().product(&grid).unwrap_err();
    assert!(matches!(error, Error::Overflow { .. }));
}

#[test]
fn test_overflowing_runs_which_do_not_win() {
    // The top row overflows downwards, but the maximum is 4.
    let grid = vec![vec![-(1i64 << 62), 4], vec![1, 1]];
    assert_eq!(max_product(&grid, 2).unwrap(), 4);

    // Partial product overflows before reaching the zero.
    assert_eq!(max_product(&vec![vec![i64::MAX, 2, 0]], 3).unwrap(), 0);

    // Partial product overflows `i128` before reaching the zero.
    assert_eq!(max_product(&[[i64::MAX, i64::MAX, i64::MAX, 0]], 4).unwrap(), 0);

    // Negative runs beyond `i128` never win.
    let grid = [[i64::MIN; 3], [1, 1, 1], [1, 1, 1]];
    assert_eq!(max_product(&grid, 3).unwrap(), 1);
}

#[test]
fn test_unsigned_cells() {
    let grid = [[u64::MAX, 1], [0, 0]];
    assert_eq!(max_product(&grid, 2).unwrap(), u64::MAX);

    let grid = [[u128::MAX, 2], [0, 0]];
    assert!(matches!(max_product(&grid, 2), Err(Error::Overflow { .. })));
}

#[test]
fn test_empty() {
    let grid: Vec<Vec<i32>> = Vec::new();
    assert!(matches!(max_product(&grid, 1), Err(Error::EmptyGrid)));

    let grid: Vec<Vec<i32>> = vec![vec![]];
    assert!(matches!(max_product(&grid, 1), Err(Error::EmptyRow)));
    assert!(matches!(combination_count(&grid, 1), Err(Error::EmptyRow)));
}

#[test]
fn test_different_row_lengths() {
    let grid = vec![vec![1, 2], vec![1]];
    let error = max_product(&grid, 1).unwrap_err();

    assert!(matches!(
        error,
        Error::RaggedRow {
            row: 1,
            expected: 2,
            actual: 1
        }
    ));

    assert_eq!(error.kind(), ErrorKind::Value);
    assert!(matches!(combination_count(&grid, 1), Err(Error::RaggedRow { .. })));
    assert!(Matrix::try_from(grid).is_err());
}

#[test]
fn test_non_positive_contiguous_integers() {
    let error = max_product(&[[2]], 0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Value);
    assert!(matches!(combination_count(&[[2]], 0), Err(Error::NonPositiveLength(0))));
}

#[test]
fn test_contiguous_integers_bigger_than_rows_and_columns() {
    let error = max_product(&[[1]], 20).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Value);

    assert!(matches!(
        combination_count(&[[1, 2], [3, 4]], 3),
        Err(Error::LengthOutOfBounds {
            k: 3,
            rows: 2,
            columns: 2
        })
    ));

    assert!(combinations(&[[1]], 2).is_err());
}

#[test]
fn test_validate() {
    assert!(validate(&[[1, 2, 3]], 3).is_ok());
    assert!(validate(&[[1, 2, 3]], 4).is_err());

    let grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
    assert_eq!(grid.rows_len(), 2);
    assert_eq!(grid.columns_len(), 3);
    assert!(validate(&grid, 3).is_ok());
}
