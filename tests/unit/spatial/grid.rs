//! Tests for pixel grids, their transforms and text conversion

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use tilemosaic::JigsawError;
    use tilemosaic::spatial::{Grid, Pixel};

    fn grid(text: &str) -> Grid {
        text.parse().expect("Failed to parse grid")
    }

    fn random_grid(rng: &mut StdRng, side: usize) -> Grid {
        Grid::from_fn(side, |_, _| Pixel::from(rng.random_bool(0.5)))
    }

    // Tests clockwise rotation moves the top row to the right column
    // Verified by rotating counter-clockwise instead
    #[test]
    fn test_rotate90_is_clockwise() {
        let original = grid("##.\n...\n...");

        let rotated = original.rotate90();

        assert_eq!(rotated, grid("..#\n..#\n..."));
    }

    // Tests reflection reverses the order of rows
    // Verified by reversing columns instead
    #[test]
    fn test_reflect_reverses_rows() {
        let original = grid("##.\n...\n..#");

        assert_eq!(original.reflect(), grid("..#\n...\n##."));
    }

    // Tests four rotations and two reflections restore random grids
    // Verified by transposing instead of rotating
    #[test]
    fn test_transforms_have_expected_order() {
        let mut rng = StdRng::seed_from_u64(7);
        for side in 3..9 {
            let original = random_grid(&mut rng, side);

            let mut turned = original.clone();
            for _ in 0..4 {
                turned = turned.rotate90();
            }
            assert_eq!(turned, original);
            assert_eq!(original.reflect().reflect(), original);
            assert_ne!(original.rotate90().side(), 0);
        }
    }

    // Tests transforms leave the receiver untouched
    // Verified by rotating in place
    #[test]
    fn test_transforms_are_pure() {
        let original = grid("#..\n...\n...");
        let copy = original.clone();

        let _ = original.rotate90();
        let _ = original.reflect();
        let _ = original.trim_border();

        assert_eq!(original, copy);
    }

    // Tests trimming removes exactly the outer ring
    // Verified by trimming two rings
    #[test]
    fn test_trim_border_keeps_interior() {
        let original = grid("####\n#.##\n##.#\n####");

        let trimmed = original.trim_border();

        assert_eq!(trimmed, grid(".#\n#."));
    }

    // Tests grids too small for an interior trim to the empty grid
    // Verified by removing the side guard
    #[test]
    fn test_trim_border_of_small_grid_is_empty() {
        let small = grid("##\n##");

        let trimmed = small.trim_border();

        assert_eq!(trimmed.side(), 0);
        assert_eq!(trimmed, Grid::empty());
    }

    // Tests row and column accessors read in the documented direction
    // Verified by swapping the row and column index
    #[test]
    fn test_row_and_column_iteration() {
        let original = grid("#..\n#.#\n...");

        let top: Vec<Pixel> = original.row(0).collect();
        let right: Vec<Pixel> = original.column(2).collect();

        assert_eq!(top, vec![Pixel::Filled, Pixel::Empty, Pixel::Empty]);
        assert_eq!(right, vec![Pixel::Empty, Pixel::Filled, Pixel::Empty]);
        assert_eq!(original.row(3).count(), 0);
        assert_eq!(original.column(5).count(), 0);
    }

    // Tests filled pixel counting
    // Verified by counting empty pixels instead
    #[test]
    fn test_count_filled() {
        assert_eq!(grid("#..\n#.#\n...").count_filled(), 3);
        assert_eq!(Grid::empty().count_filled(), 0);
    }

    // Tests display output parses back to the same grid
    // Verified by emitting a trailing newline and a blank row
    #[test]
    fn test_display_matches_input_text() {
        let text = "#.#\n.#.\n##.";

        let rendered = grid(text).to_string();

        assert_eq!(rendered, text);
    }

    // Tests unknown symbols are rejected with their line number
    // Verified by skipping unknown symbols
    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let result: Result<Grid, JigsawError> = "#..\n.x.\n...".parse();

        match result {
            Err(JigsawError::InvalidInput { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains('x'));
            }
            other => unreachable!("Expected InvalidInput, got {other:?}"),
        }
    }

    // Tests non-square input is rejected
    // Verified by padding short rows
    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![vec![Pixel::Filled; 3], vec![Pixel::Empty; 2], vec![Pixel::Empty; 3]];

        let result = Grid::from_rows(&rows);

        assert!(matches!(result, Err(JigsawError::MalformedTile { .. })));
    }

    // Tests out-of-range reads return nothing
    // Verified by clamping indices
    #[test]
    fn test_get_out_of_range() {
        let original = grid("#..\n...\n...");

        assert_eq!(original.get(0, 0), Some(Pixel::Filled));
        assert_eq!(original.get(3, 0), None);
        assert_eq!(original.get(0, 3), None);
    }

    // Tests pixel symbol conversion in both directions
    // Verified by swapping the symbols
    #[test]
    fn test_pixel_symbols() {
        assert_eq!(Pixel::from_char('#'), Some(Pixel::Filled));
        assert_eq!(Pixel::from_char('.'), Some(Pixel::Empty));
        assert_eq!(Pixel::from_char(' '), None);
        assert_eq!(Pixel::Filled.to_char(), '#');
        assert_eq!(Pixel::from(false), Pixel::Empty);
        assert!(Pixel::from(true).is_filled());
    }
}
