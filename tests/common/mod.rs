#![allow(dead_code)]

use book_assign::Matrix;

/// Exact minimum over all matchings of size min(rows, cols)
///
/// Bitmask DP over the larger side; fine up to ~16 on that side.
pub fn brute_force_min(cost: &Matrix) -> f64 {
    let (rows, cols) = cost.shape();
    let transposed = rows > cols;
    let (small, large) = if transposed { (cols, rows) } else { (rows, cols) };
    let at = |s: usize, l: usize| if transposed { cost.get(l, s) } else { cost.get(s, l) };

    let mut dp = vec![f64::INFINITY; 1 << large];
    dp[0] = 0.0;
    let mut best = f64::INFINITY;

    for mask in 0..(1usize << large) {
        if dp[mask].is_infinite() {
            continue;
        }
        let placed = mask.count_ones() as usize;
        if placed == small {
            best = best.min(dp[mask]);
            continue;
        }
        for l in 0..large {
            if mask & (1 << l) == 0 {
                let next = mask | (1 << l);
                let candidate = dp[mask] + at(placed, l);
                if candidate < dp[next] {
                    dp[next] = candidate;
                }
            }
        }
    }

    best
}

/// Every row and column index appears at most once
pub fn is_partial_bijection(pairs: &[(usize, usize)]) -> bool {
    let mut rows: Vec<usize> = pairs.iter().map(|&(r, _)| r).collect();
    let mut cols: Vec<usize> = pairs.iter().map(|&(_, c)| c).collect();
    rows.sort_unstable();
    rows.dedup();
    cols.sort_unstable();
    cols.dedup();
    rows.len() == pairs.len() && cols.len() == pairs.len()
}

/// Score sheet in the layout the loader expects: two price columns, a
/// trailing count column and two summary rows
pub const BOOK_CLUB_CSV: &str = "\
Books,Original Price,Discounted Price,Person1,Person2,Person3,Person4,Person5,Person6,Person7,Person8,Person9,Person10,10
Book1,20.00,19.00,7,3,8,2,9,6,4,1,10,5,10
Book2,25.00,23.75,5,9,3,8,2,7,6,10,4,1,10
Book3,18.00,17.10,1,6,7,9,5,8,3,4,2,10,10
Book4,22.00,20.90,4,8,1,10,6,2,9,7,3,5,10
Book5,30.00,28.50,10,2,5,3,7,9,8,6,1,4,10
Book6,27.00,25.65,3,7,10,6,4,5,1,2,8,9,10
Book7,15.00,14.25,9,5,2,7,8,3,6,4,10,1,10
Book8,24.00,22.80,6,10,4,5,1,7,2,3,9,8,10
Book9,21.00,19.95,2,1,9,4,10,6,5,8,7,3,10
Book10,19.00,18.05,8,4,6,1,3,10,7,9,5,2,10
Summary,,,,,,,,,,,,
Total Cost,221.00,209.95,,,,,,,,,,,
";
