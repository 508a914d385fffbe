//! Fixed scenarios and boundary shapes.

use std::collections::HashSet;

use marga::render::{render_grid, render_path};
use marga::{Error, Grid, MargaConfig, PathSearch};

fn reference_grid() -> Grid {
    Grid::from_text(include_str!("../../demos/reference.txt")).unwrap()
}

#[test]
fn test_reference_grid() {
    env_logger::try_init().ok();

    let grid = reference_grid();
    let result = PathSearch::with_defaults(&grid).solve().unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result.min_cost(), Some(16));

    let paths: HashSet<String> = result.iter().map(|s| s.path.to_string()).collect();
    let expected: HashSet<String> = ["→→↓↓←↓↓→→→", "→→↓↓→↓→↓"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(paths, expected);
}

#[test]
fn test_reference_grid_rendering() {
    let grid = reference_grid();
    assert_eq!(
        render_grid(&grid),
        "0 3 2 5 9\n6 5 1 3 3\n4 2 1 4 5\n8 2 8 4 1\n7 1 2 2 0\n"
    );

    let result = PathSearch::with_defaults(&grid).solve().unwrap();
    let short = result
        .iter()
        .find(|s| s.path.len() == 8)
        .expect("eight-move solution");
    assert_eq!(
        render_path(&grid, short).unwrap(),
        "→ → ↓    \n    ↓    \n    → ↓  \n      → ↓\n        *\n"
    );
}

#[test]
fn test_single_cell_grid() {
    let grid = Grid::from_matrix(vec![vec![123]]).unwrap();
    let result = PathSearch::with_defaults(&grid).solve().unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.solutions[0].cost, 0);
    assert!(result.solutions[0].path.is_empty());
}

#[test]
fn test_single_row_and_column() {
    for n in 1..=8 {
        let row = Grid::from_matrix(vec![(0..n).collect()]).unwrap();
        let result = PathSearch::with_defaults(&row).solve().unwrap();
        assert_eq!(result.len(), 1, "1x{}", n);
        assert_eq!(result.solutions[0].path.len(), n as usize - 1);

        let column = Grid::from_matrix((0..n).map(|v| vec![v]).collect()).unwrap();
        let result = PathSearch::with_defaults(&column).solve().unwrap();
        assert_eq!(result.len(), 1, "{}x1", n);
        assert!(
            result.solutions[0]
                .path
                .iter()
                .all(|d| *d == marga::Direction::Down)
        );
    }
}

#[test]
fn test_invalid_dimensions() {
    assert!(matches!(
        Grid::from_matrix(vec![]),
        Err(Error::InvalidDimension { .. })
    ));
    let mut rng = MargaConfig::default().rng();
    assert!(matches!(
        Grid::build(0, 0, 0..10, &mut rng),
        Err(Error::InvalidDimension { .. })
    ));
}

#[test]
fn test_uniform_grid_counts_monotone_paths() {
    // With equal positive costs the optimal paths are exactly the monotone
    // staircases: C(rows + cols - 2, rows - 1)
    let grid = Grid::from_matrix(vec![vec![1; 4]; 3]).unwrap();
    let result = PathSearch::with_defaults(&grid).solve().unwrap();
    assert_eq!(result.len(), 10);
    assert_eq!(result.min_cost(), Some(4));
    assert!(result.iter().all(|s| s.path.len() == 5));
}

#[test]
fn test_config_driven_run() {
    let yaml = "grid:\n  width: 4\n  height: 3\n  seed: 5\nsearch:\n  max_solutions: 500\n";
    let config = MargaConfig::from_yaml(yaml).unwrap();
    let grid = config.build_grid().unwrap();
    let result = PathSearch::new(&grid, config.to_search_config())
        .solve()
        .unwrap();
    assert_eq!((grid.rows(), grid.cols()), (3, 4));
    assert!(!result.is_empty());
}
