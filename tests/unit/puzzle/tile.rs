//! Tests for side lookup and rotated tile views

#[cfg(test)]
mod tests {
    use edgematch::PuzzleError;
    use edgematch::puzzle::edge::Edge;
    use edgematch::puzzle::tile::{Rotation, Side, Tile};

    fn labeled_tile() -> Tile<&'static str> {
        Tile::new(
            Edge::front("top"),
            Edge::back("right"),
            Edge::front("bottom"),
            Edge::back("left"),
        )
    }

    fn labels(tile: &Tile<&'static str>, rotation: Rotation) -> Vec<&'static str> {
        tile.rotated_sides(rotation)
            .as_array()
            .iter()
            .map(|edge| *edge.label())
            .collect()
    }

    // Tests sides are returned in construction order
    // Verified by storing the edges in reverse
    #[test]
    fn test_sides_in_construction_order() {
        let tile = labeled_tile();
        assert_eq!(*tile.edge(Side::Top).label(), "top");
        assert_eq!(*tile.edge(Side::Right).label(), "right");
        assert_eq!(*tile.edge(Side::Bottom).label(), "bottom");
        assert_eq!(*tile.edge(Side::Left).label(), "left");
        assert_eq!(tile.side(2).ok(), Some(&Edge::front("bottom")));
    }

    // Tests out-of-range side lookups fail with InvalidSideIndex
    // Verified by clamping the index instead of failing
    #[test]
    fn test_invalid_side_index() {
        let tile = labeled_tile();
        assert!(matches!(
            tile.side(4),
            Err(PuzzleError::InvalidSideIndex { index: 4 })
        ));
        assert!(matches!(
            Side::from_index(7),
            Err(PuzzleError::InvalidSideIndex { index: 7 })
        ));
        assert_eq!(Side::from_index(3).ok(), Some(Side::Left));
    }

    // Tests one clockwise turn moves the left edge to the top
    // Verified by rotating left instead of right
    #[test]
    fn test_single_rotation_is_clockwise() {
        let tile = labeled_tile();
        assert_eq!(
            labels(&tile, Rotation::new(1)),
            vec!["left", "top", "right", "bottom"]
        );
        assert_eq!(
            labels(&tile, Rotation::new(3)),
            vec!["right", "bottom", "left", "top"]
        );
    }

    // Tests rotation 0 and rotation 4 return the original sides
    // Verified by skipping the mod 4 normalisation
    #[test]
    fn test_rotation_identity_and_full_turn() {
        let tile = labeled_tile();
        assert_eq!(tile.rotated_sides(Rotation::new(0)), *tile.sides());
        assert_eq!(Rotation::new(4), Rotation::IDENTITY);
        assert_eq!(tile.rotated_sides(Rotation::new(4)), *tile.sides());
    }

    // Tests rotating by k then j equals rotating by (k + j) mod 4
    // Verified by composing rotations with subtraction
    #[test]
    fn test_rotation_composition() {
        let tile = labeled_tile();
        for k in Rotation::ALL {
            for j in Rotation::ALL {
                let stepwise = tile.rotated_sides(k).rotated(j);
                let combined = tile.rotated_sides(k.then(j));
                assert_eq!(stepwise, combined, "k={k:?} j={j:?}");
                assert_eq!(
                    k.then(j).quarter_turns(),
                    (k.quarter_turns() + j.quarter_turns()) % 4
                );
            }
        }
    }

    // Tests rotation never changes tile identity
    // Verified by rotating the stored sides in place
    #[test]
    fn test_rotation_does_not_mutate_tile() {
        let tile = labeled_tile();
        let copy = tile.clone();
        let _ = tile.rotated_sides(Rotation::new(2));
        assert_eq!(tile, copy);
    }

    // Tests orientations lists all four rotations ascending
    // Verified by iterating rotations in reverse
    #[test]
    fn test_orientations_ascending() {
        let tile = labeled_tile();
        let orientations = tile.orientations();
        for (expected, (rotation, sides)) in Rotation::ALL.into_iter().zip(orientations) {
            assert_eq!(rotation, expected);
            assert_eq!(sides, tile.rotated_sides(expected));
        }
    }

    // Tests opposite sides and degree reporting
    // Verified by mapping Top to Left in opposite
    #[test]
    fn test_side_helpers() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
            assert_eq!(Side::from_index(side.index()).ok(), Some(side));
        }
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Rotation::new(3).degrees(), 270);
    }
}
