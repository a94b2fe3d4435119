//! Tests for text rendering of tiles, grids and adjacency reports

#[cfg(test)]
mod tests {
    use edgematch::analysis::adjacency::check_adjacencies;
    use edgematch::io::render::{
        format_edge, render_adjacency_report, render_grid, render_tile, summarize_adjacencies,
    };
    use edgematch::puzzle::edge::Edge;
    use edgematch::puzzle::tile::{Rotation, Tile};
    use edgematch::solver::grid::{Grid, Placement};

    fn sample_tile() -> Tile<&'static str> {
        Tile::new(
            Edge::front("R"),
            Edge::back("V"),
            Edge::front("B"),
            Edge::back("Z"),
        )
    }

    fn placed(id: usize) -> Placement<&'static str> {
        Placement::new(id, Rotation::IDENTITY, sample_tile().sides().clone())
    }

    // Tests polarity suffixes follow the label
    // Verified by swapping front and back suffixes
    #[test]
    fn test_format_edge() {
        assert_eq!(format_edge(&Edge::front("R")), "R1");
        assert_eq!(format_edge(&Edge::back("sky")), "sky0");
    }

    // Tests tile layout centers top and bottom with left and right at the ends
    // Verified by swapping left and right in the middle line
    #[test]
    fn test_render_tile_layout() {
        let lines = render_tile(sample_tile().sides());
        assert_eq!(
            lines,
            [
                String::from("   R1    "),
                String::from("Z0     V0"),
                String::from("   B1    "),
            ]
        );
    }

    // Tests rotated sides are rendered as placed
    // Verified by rendering the unrotated tile
    #[test]
    fn test_render_rotated_tile() {
        let sides = sample_tile().rotated_sides(Rotation::new(1));
        let lines = render_tile(&sides);
        assert_eq!(lines.first().map(String::as_str), Some("   Z0    "));
        assert_eq!(lines.get(1).map(String::as_str), Some("B1     R1"));
    }

    // Tests rows are separated by a rule spanning every column
    // Verified by emitting a rule after the last row
    #[test]
    fn test_render_grid_rows() {
        let mut grid = Grid::new(2);
        assert!(grid.place(0, 0, placed(0)).is_ok());
        assert!(grid.place(0, 1, placed(1)).is_ok());
        assert!(grid.place(1, 1, placed(2)).is_ok());

        let output = render_grid(&grid);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines.get(1).copied(), Some("Z0     V0 | Z0     V0"));
        assert_eq!(lines.get(3).copied(), Some("-".repeat(21).as_str()));
        // Empty cell on the left stays blank
        assert_eq!(lines.get(5).copied(), Some("          | Z0     V0"));
    }

    // Tests every rendered line ends with a newline and trailing blanks are trimmed
    // Verified by joining lines without a final newline
    #[test]
    fn test_render_single_cell_exact() {
        let mut grid = Grid::new(1);
        assert!(grid.place(0, 0, placed(0)).is_ok());
        assert_eq!(render_grid(&grid), "   R1\nZ0     V0\n   B1\n");
        assert_eq!(render_adjacency_report::<&str>(&[]), "");
    }

    // Tests a mismatched seam is marked and summarized
    // Verified by printing the status of the first check for all
    #[test]
    fn test_adjacency_report() {
        let mut grid = Grid::with_dimensions(1, 2);
        assert!(grid.place(0, 0, placed(0)).is_ok());
        assert!(grid.place(0, 1, placed(1)).is_ok());
        let checks = check_adjacencies(&grid);

        assert_eq!(
            render_adjacency_report(&checks),
            "❌ (0,0) right V0 <-> (0,1) left Z0\n"
        );
        assert_eq!(
            summarize_adjacencies(&checks),
            "1 adjacencies checked (1 horizontal, 0 vertical), 1 mismatches"
        );
    }
}
