//! CachedSolver lifecycle: lazy compute, cache reuse, invalidation.

use marga::{CachedSolver, Error, SearchConfig};

use crate::random_grid;

#[test]
fn test_cache_reused_until_grid_replaced() {
    let mut solver = CachedSolver::with_defaults(random_grid(7, 4, 4, 0..10));

    let first = solver.solve().unwrap().clone();
    assert_eq!(solver.cached(), Some(&first));
    assert_eq!(solver.solve().unwrap(), &first);

    let replacement = random_grid(8, 3, 5, 0..10);
    solver.replace_grid(replacement.clone());
    assert!(solver.is_dirty());
    assert_eq!(solver.grid(), &replacement);

    let second = solver.solve().unwrap().clone();
    assert!(!solver.is_dirty());
    let positions = second.solutions[0].path.replay(&replacement).unwrap();
    assert_eq!(positions.last(), Some(&replacement.end()));
}

#[test]
fn test_display_every_solution() {
    let mut solver = CachedSolver::with_defaults(random_grid(21, 4, 4, 0..2));
    let count = solver.solve().unwrap().len();
    assert!(count >= 1);

    for i in 0..count {
        let overlay = solver.display_path(i).unwrap();
        assert_eq!(overlay.lines().count(), 4);
        assert!(overlay.ends_with("*\n"));
    }

    assert!(matches!(
        solver.display_path(count),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_limit_surfaces_as_error() {
    let grid = marga::Grid::from_matrix(vec![vec![0; 4]; 4]).unwrap();
    let mut solver = CachedSolver::new(grid, SearchConfig::with_max_solutions(10));
    assert_eq!(
        solver.solve().unwrap_err(),
        Error::SolutionLimitExceeded { limit: 10 }
    );

    solver.set_config(SearchConfig::default());
    // 4x4 all-zero: all 184 self-avoiding corner paths are optimal
    assert_eq!(solver.solve().unwrap().len(), 184);
}
