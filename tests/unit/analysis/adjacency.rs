//! Tests for the independent adjacency re-check

#[cfg(test)]
mod tests {
    use edgematch::analysis::adjacency::{
        Direction, check_adjacencies, find_mismatches, is_valid_solution,
    };
    use edgematch::puzzle::edge::Edge;
    use edgematch::puzzle::tile::{Rotation, Side, Tile};
    use edgematch::solver::backtrack::solve;
    use edgematch::solver::grid::{Grid, Placement};

    fn place(grid: &mut Grid<char>, row: usize, col: usize, id: usize, tile: &Tile<char>) {
        let placement = Placement::new(id, Rotation::IDENTITY, tile.sides().clone());
        assert!(grid.place(row, col, placement).is_ok());
    }

    // Every tile presents front `a` up/left and back `a` down/right
    fn tiling_tile() -> Tile<char> {
        Tile::new(
            Edge::front('a'),
            Edge::back('a'),
            Edge::back('a'),
            Edge::front('a'),
        )
    }

    // Tests a full grid yields 2 * (N^2 - N) checks, all matching
    // Verified by skipping the vertical neighbor
    #[test]
    fn test_full_grid_check_count() {
        let tiles = vec![tiling_tile(); 9];
        let solution = solve(tiles, 3).unwrap().solution().unwrap();
        let checks = check_adjacencies(solution.grid());

        assert_eq!(checks.len(), 12);
        assert!(checks.iter().all(|check| check.matches));
        assert!(is_valid_solution(solution.grid()));
    }

    // Tests checks are listed row-major, horizontal before vertical
    // Verified by emitting vertical pairs first
    #[test]
    fn test_check_order() {
        let mut grid = Grid::new(2);
        for (position, (row, col)) in [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().enumerate() {
            place(&mut grid, row, col, position, &tiling_tile());
        }
        let pairs: Vec<((usize, usize), (usize, usize), Direction)> = check_adjacencies(&grid)
            .into_iter()
            .map(|check| (check.from, check.to, check.direction))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ((0, 0), (0, 1), Direction::Horizontal),
                ((0, 0), (1, 0), Direction::Vertical),
                ((0, 1), (1, 1), Direction::Vertical),
                ((1, 0), (1, 1), Direction::Horizontal),
            ]
        );
    }

    // Tests a same-polarity seam is reported as a mismatch
    // Verified by comparing labels only
    #[test]
    fn test_mismatch_detected() {
        let clash = Tile::new(
            Edge::front('a'),
            Edge::back('a'),
            Edge::back('a'),
            Edge::back('a'),
        );
        let mut grid = Grid::with_dimensions(1, 2);
        place(&mut grid, 0, 0, 0, &tiling_tile());
        place(&mut grid, 0, 1, 1, &clash);

        let mismatches = find_mismatches(&grid);
        assert_eq!(mismatches.len(), 1);
        let mismatch = mismatches.first().unwrap();
        assert_eq!((mismatch.from_tile, mismatch.to_tile), (0, 1));
        assert_eq!(mismatch.from_edge, Edge::back('a'));
        assert_eq!(mismatch.to_edge, Edge::back('a'));
        assert!(!is_valid_solution(&grid));
    }

    // Tests empty cells are skipped and make the grid invalid
    // Verified by treating empty neighbors as matching
    #[test]
    fn test_partial_grid() {
        let mut grid = Grid::new(2);
        place(&mut grid, 0, 0, 0, &tiling_tile());
        place(&mut grid, 1, 1, 1, &tiling_tile());

        assert!(check_adjacencies(&grid).is_empty());
        assert!(!is_valid_solution(&grid));
        assert_eq!(Direction::Vertical.facing_side(), Side::Bottom);
    }
}
