//! Properties that must hold for every grid.

use std::collections::{BTreeSet, HashSet};
use std::ops::Range;

use marga::{Grid, HeuristicKind, PathSearch, ResultSet, SearchConfig, Solution};

use crate::{BruteForce, random_grid};

/// Shapes and value ranges covered by the seeded sweeps
fn sweep() -> impl Iterator<Item = (u64, Grid)> {
    let ranges: [Range<u32>; 4] = [0..2, 0..4, 1..10, 0..100];
    (0..40u64).flat_map(move |seed| {
        let ranges = ranges.clone();
        (1..=4).flat_map(move |width| {
            let ranges = ranges.clone();
            (1..=4).map(move |height| {
                let range = ranges[(seed as usize + width + height) % ranges.len()].clone();
                (seed, random_grid(seed, width, height, range))
            })
        })
    })
}

fn solve(grid: &Grid) -> ResultSet {
    PathSearch::with_defaults(grid).solve().unwrap()
}

fn intermediate_sum(grid: &Grid, solution: &Solution) -> u64 {
    let positions = solution.path.replay(grid).expect("path stays in bounds");
    if positions.len() < 2 {
        return 0;
    }
    positions[1..positions.len() - 1]
        .iter()
        .map(|p| u64::from(grid.get(*p).unwrap()))
        .sum()
}

#[test]
fn test_min_cost_matches_brute_force() {
    for (seed, grid) in sweep() {
        let result = solve(&grid);
        let bf = BruteForce::solve(&grid);

        assert_eq!(
            result.min_cost(),
            Some(bf.min_cost),
            "seed {} grid {}x{}",
            seed,
            grid.rows(),
            grid.cols()
        );
        assert!(result.iter().all(|s| s.cost == bf.min_cost));
    }
}

#[test]
fn test_path_set_matches_brute_force() {
    for (seed, grid) in sweep() {
        let result = solve(&grid);
        let bf = BruteForce::solve(&grid);

        let found: BTreeSet<_> = result.iter().map(|s| s.path.clone()).collect();
        assert_eq!(found, bf.paths, "seed {}\n{:?}", seed, grid);
        // No duplicate move sequences
        assert_eq!(found.len(), result.len());
    }
}

#[test]
fn test_five_by_five_matches_brute_force() {
    for seed in 0..6u64 {
        let grid = random_grid(1000 + seed, 5, 5, 0..3);
        let result = solve(&grid);
        let bf = BruteForce::solve(&grid);

        let found: BTreeSet<_> = result.iter().map(|s| s.path.clone()).collect();
        assert_eq!(result.min_cost(), Some(bf.min_cost));
        assert_eq!(found, bf.paths, "seed {}", seed);
    }
}

#[test]
fn test_paths_replay_to_end_without_revisits() {
    for (seed, grid) in sweep() {
        for solution in solve(&grid).iter() {
            let positions = solution
                .path
                .replay(&grid)
                .unwrap_or_else(|| panic!("seed {}: path leaves grid", seed));

            assert_eq!(positions.first(), Some(&grid.start()));
            assert_eq!(positions.last(), Some(&grid.end()));

            let unique: HashSet<_> = positions.iter().collect();
            assert_eq!(unique.len(), positions.len(), "seed {}: revisit", seed);
        }
    }
}

#[test]
fn test_cost_is_sum_of_intermediate_cells() {
    for (_, grid) in sweep() {
        for solution in solve(&grid).iter() {
            assert_eq!(solution.cost, intermediate_sum(&grid, solution));
        }
    }
}

#[test]
fn test_solve_is_idempotent() {
    for (_, grid) in sweep().take(60) {
        let search = PathSearch::with_defaults(&grid);
        let first = search.solve().unwrap();
        let second = search.solve().unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_heuristic_only_changes_order() {
    for (seed, grid) in sweep() {
        let shaped = solve(&grid);
        let uniform = PathSearch::new(
            &grid,
            SearchConfig::default().with_heuristic(HeuristicKind::None),
        )
        .solve()
        .unwrap();

        let a: BTreeSet<_> = shaped.iter().map(|s| s.path.clone()).collect();
        let b: BTreeSet<_> = uniform.iter().map(|s| s.path.clone()).collect();
        assert_eq!(shaped.min_cost(), uniform.min_cost(), "seed {}", seed);
        assert_eq!(a, b, "seed {}", seed);
    }
}

#[test]
fn test_never_empty_on_valid_grid() {
    for (_, grid) in sweep() {
        assert!(!solve(&grid).is_empty());
    }
}
