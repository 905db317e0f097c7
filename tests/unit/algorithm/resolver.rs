//! Tests for border resolution, tile classification and corner discovery

#[cfg(test)]
mod tests {
    use tilemosaic::JigsawError;
    use tilemosaic::algorithm::resolver::{
        TileClass, classify, corner_product, find_corners, one_sided_links, resolve_borders,
    };
    use tilemosaic::io::parser::parse_tiles;
    use tilemosaic::spatial::{Grid, Tile, TileId, TileSet};

    const SAMPLE: &str = include_str!("../../fixtures/sample.txt");

    fn resolved_sample() -> TileSet {
        let mut tiles = parse_tiles(SAMPLE).expect("Failed to parse sample");
        resolve_borders(&mut tiles);
        tiles
    }

    fn tile(id: TileId, rows: &str) -> Tile {
        let grid: Grid = rows.parse().expect("Failed to parse grid");
        Tile::new(id, grid).expect("Failed to create tile")
    }

    // Tests the sample resolves to four corners, four edges and one interior
    // Verified by skipping reversed signatures during matching
    #[test]
    fn test_sample_classification() {
        let tiles = resolved_sample();

        let count = |class| tiles.iter().filter(|t| classify(t) == Some(class)).count();

        assert_eq!(count(TileClass::Corner), 4);
        assert_eq!(count(TileClass::Edge), 4);
        assert_eq!(count(TileClass::Interior), 1);
        assert_eq!(tiles.get(1427).and_then(classify), Some(TileClass::Interior));
    }

    // Tests corners are reported in ascending id order
    // Verified by collecting corners from a HashMap
    #[test]
    fn test_sample_corners() {
        let tiles = resolved_sample();

        let corners = find_corners(&tiles).expect("Failed to find corners");

        assert_eq!(corners, [1171, 1951, 2971, 3079]);
        assert_eq!(corner_product(&corners).ok(), Some(20_899_048_083_289));
    }

    // Tests adjacency is symmetric on a well-formed puzzle
    // Verified by only annotating the lower id of each pair
    #[test]
    fn test_adjacency_is_symmetric() {
        let tiles = resolved_sample();

        for tile in tiles.iter() {
            for neighbor in tile.matches().into_iter().flatten() {
                let back = tiles.get(neighbor).map(Tile::matches);
                assert!(back.is_some_and(|ids| ids.contains(&Some(tile.id()))));
            }
        }
    }

    // Tests a second resolution pass reproduces the first
    // Verified by keeping earlier annotations when no match is found
    #[test]
    fn test_resolution_is_idempotent() {
        let once = resolved_sample();

        let mut twice = once.clone();
        resolve_borders(&mut twice);

        assert_eq!(once, twice);
    }

    // Tests the highest matching id wins an ambiguous border
    // Verified by stopping at the first matching tile
    #[test]
    fn test_ambiguous_border_keeps_highest_id() {
        let mut tiles = TileSet::new([
            tile(1, "#.##\n.##.\n####\n.##."),
            tile(2, "####\n#..#\n#.##\n#.##"),
            tile(3, "#...\n.##.\n..#.\n##.#"),
        ])
        .expect("Failed to create tile set");

        resolve_borders(&mut tiles);

        let matches = |id| tiles.get(id).map(Tile::matches);
        assert_eq!(matches(1), Some([Some(3), None, None, None]));
        assert_eq!(matches(2), Some([None, None, Some(3), None]));
        assert_eq!(matches(3), Some([None, None, Some(2), None]));
        assert_eq!(one_sided_links(&tiles), vec![(1, 3)]);
    }

    // Tests a well-formed puzzle has no one-sided links
    // Verified by dropping the reverse lookup
    #[test]
    fn test_sample_has_no_one_sided_links() {
        let tiles = resolved_sample();

        assert!(one_sided_links(&tiles).is_empty());
    }

    // Tests a non-square tile count fails before corner classification
    // Verified by counting corners regardless of the tile count
    #[test]
    fn test_non_square_count_rejected() {
        let mut tiles = TileSet::new(
            parse_tiles(SAMPLE)
                .expect("Failed to parse sample")
                .iter()
                .filter(|t| t.id() != 2311)
                .cloned(),
        )
        .expect("Failed to create tile set");
        resolve_borders(&mut tiles);

        match find_corners(&tiles) {
            Err(JigsawError::InvalidCornerCount { corners, tiles: count }) => {
                assert_eq!(corners, None);
                assert_eq!(count, 8);
            }
            other => unreachable!("Expected InvalidCornerCount, got {other:?}"),
        }
    }

    // Tests a square count with the wrong number of corners is rejected
    // Verified by accepting any number of corners above zero
    #[test]
    fn test_wrong_corner_count_rejected() {
        let mut tiles = TileSet::new([
            tile(1, "#..\n...\n..."),
            tile(2, ".#.\n#.#\n.#."),
            tile(3, "###\n#..\n#.."),
            tile(4, "..#\n..#\n###"),
        ])
        .expect("Failed to create tile set");
        resolve_borders(&mut tiles);

        let result = find_corners(&tiles);

        assert!(matches!(
            result,
            Err(JigsawError::InvalidCornerCount {
                corners: Some(1),
                tiles: 4
            })
        ));
    }

    // Tests classification thresholds
    // Verified by classifying one-match tiles as corners
    #[test]
    fn test_classify_unmatched_tile() {
        let lonely = tile(1, "#..\n...\n...");

        assert_eq!(classify(&lonely), None);
    }

    // Tests overflow in the corner product is reported
    // Verified by using wrapping multiplication
    #[test]
    fn test_corner_product_overflow() {
        let result = corner_product(&[u64::MAX, 2, 1, 1]);

        assert!(matches!(result, Err(JigsawError::Computation { .. })));
        assert_eq!(corner_product(&[2, 3, 5, 7]).ok(), Some(210));
    }
}
