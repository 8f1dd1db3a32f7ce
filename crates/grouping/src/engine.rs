//! The grouping engine: a stable partition of tiles by the featured flag.

use std::sync::Arc;

use tracing::debug;

use crate::tile::{GroupLabel, ShowGroup, ShowTile};

/// Partition tiles into the fixed featured / for-you display groups.
///
/// ## Algorithm
/// Single stable pass: featured tiles keep their relative input order in the
/// `Featured` bucket, the rest keep theirs in `ForYou`. The featured group is
/// always emitted first and empty buckets are dropped entirely, so the result
/// has zero, one, or two groups.
///
/// Pure function: no side effects, output fully determined by input. Every
/// input tile lands in exactly one group — this is a partition, not a filter.
pub fn group_by_featured(tiles: &[Arc<ShowTile>]) -> Vec<ShowGroup> {
    let mut featured = Vec::new();
    let mut for_you = Vec::new();

    for tile in tiles {
        if tile.show().is_featured {
            featured.push(Arc::clone(tile));
        } else {
            for_you.push(Arc::clone(tile));
        }
    }

    debug!(
        featured = featured.len(),
        for_you = for_you.len(),
        "partitioned tiles"
    );

    let mut groups = Vec::with_capacity(2);
    if !featured.is_empty() {
        groups.push(ShowGroup {
            label: GroupLabel::Featured,
            shows: featured,
        });
    }
    if !for_you.is_empty() {
        groups.push(ShowGroup {
            label: GroupLabel::ForYou,
            shows: for_you,
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Show;
    use uuid::Uuid;

    fn tile(title: &str, featured: bool) -> Arc<ShowTile> {
        Arc::new(ShowTile::new(
            Arc::new(Show {
                id: Uuid::new_v4(),
                title: title.to_string(),
                author: "test".to_string(),
                description: String::new(),
                image_url: None,
                is_featured: featured,
            }),
            false,
        ))
    }

    fn titles(group: &ShowGroup) -> Vec<&str> {
        group
            .shows
            .iter()
            .map(|t| t.show().title.as_str())
            .collect()
    }

    #[test]
    fn test_featured_group_comes_first() {
        let tiles = vec![tile("A", true), tile("B", false), tile("C", true)];

        let groups = group_by_featured(&tiles);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, GroupLabel::Featured);
        assert_eq!(titles(&groups[0]), vec!["A", "C"]);
        assert_eq!(groups[1].label, GroupLabel::ForYou);
        assert_eq!(titles(&groups[1]), vec!["B"]);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let tiles = vec![
            tile("A", true),
            tile("B", false),
            tile("C", true),
            tile("D", false),
            tile("E", false),
        ];

        let groups = group_by_featured(&tiles);
        let total: usize = groups.iter().map(|g| g.shows.len()).sum();
        assert_eq!(total, tiles.len());

        // Every input tile appears exactly once across all groups.
        for input in &tiles {
            let hits = groups
                .iter()
                .flat_map(|g| &g.shows)
                .filter(|t| Arc::ptr_eq(t, input))
                .count();
            assert_eq!(hits, 1, "{} should appear once", input.show().title);
        }
    }

    #[test]
    fn test_empty_buckets_are_dropped() {
        let all_featured = vec![tile("A", true), tile("B", true)];
        let groups = group_by_featured(&all_featured);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, GroupLabel::Featured);

        let none_featured = vec![tile("C", false)];
        let groups = group_by_featured(&none_featured);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, GroupLabel::ForYou);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_featured(&[]).is_empty());
    }

    #[test]
    fn test_partition_is_stable_within_buckets() {
        // Reordering across the partition boundary never reorders within it.
        let tiles = vec![
            tile("F1", true),
            tile("P1", false),
            tile("F2", true),
            tile("P2", false),
            tile("F3", true),
        ];

        let groups = group_by_featured(&tiles);
        assert_eq!(titles(&groups[0]), vec!["F1", "F2", "F3"]);
        assert_eq!(titles(&groups[1]), vec!["P1", "P2"]);

        // Moving P1 later in the input leaves the featured bucket untouched.
        let reordered = vec![
            Arc::clone(&tiles[0]),
            Arc::clone(&tiles[2]),
            Arc::clone(&tiles[3]),
            Arc::clone(&tiles[1]),
            Arc::clone(&tiles[4]),
        ];
        let groups = group_by_featured(&reordered);
        assert_eq!(titles(&groups[0]), vec!["F1", "F2", "F3"]);
        assert_eq!(titles(&groups[1]), vec!["P2", "P1"]);
    }

    #[test]
    fn test_output_is_deterministic() {
        let tiles = vec![tile("A", true), tile("B", false)];
        let first = group_by_featured(&tiles);
        let second = group_by_featured(&tiles);
        assert_eq!(first, second);
    }
}
