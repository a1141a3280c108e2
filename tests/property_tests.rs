//! Property-Based Tests for hdr-tourney
//!
//! These tests verify:
//! - Selection list invariants (cap, order, purity)
//! - save → load round-trips when every id resolves
//! - Role parsing never panics and round-trips

use proptest::prelude::*;
use tempfile::TempDir;

use hdr_tourney::config_file::{self, ACTIVE_CONFIG_FILE};
use hdr_tourney::{ConfigData, FsBackend, MAX_STAGES, Stage, StageDb, StageRole, selection};

const CATALOG: &[(&str, &str)] = &[
    ("BATTLEFIELD", "Battlefield"),
    ("FD", "Final Destination"),
    ("SMASHVILLE", "Smashville"),
    ("TOWN", "Town and City"),
    ("PS2", "Pokemon Stadium 2"),
];

fn catalog() -> StageDb {
    StageDb::new(CATALOG.iter().map(|(id, name)| Stage::new(*id, *name)).collect())
}

/// Strategy for a stage drawn from the catalog
fn stage_strategy() -> impl Strategy<Value = Stage> {
    (0..CATALOG.len()).prop_map(|i| Stage::new(CATALOG[i].0, CATALOG[i].1))
}

fn list_strategy(max: usize) -> impl Strategy<Value = Vec<Stage>> {
    prop::collection::vec(stage_strategy(), 0..=max)
}

// =============================================================================
// Selection Controller Property Tests
// =============================================================================

proptest! {
    /// add: grows by one below the cap, rejected at the cap
    #[test]
    fn add_respects_cap(list in list_strategy(MAX_STAGES)) {
        let result = selection::add(&catalog(), &list);
        if list.len() < MAX_STAGES {
            let updated = result.expect("add below cap");
            prop_assert_eq!(updated.len(), list.len() + 1);
            prop_assert_eq!(&updated[..list.len()], &list[..]);
            prop_assert_eq!(updated[list.len()].name_id.as_str(), "BATTLEFIELD");
        } else {
            prop_assert!(result.is_err());
        }
    }

    /// remove_at: one shorter, remaining entries in original order
    #[test]
    fn remove_at_preserves_order(list in list_strategy(10), seed in any::<usize>()) {
        prop_assume!(!list.is_empty());
        let index = seed % list.len();

        let updated = selection::remove_at(&list, index).expect("index in range");

        let mut expected = list.clone();
        expected.remove(index);
        prop_assert_eq!(updated, expected);
    }

    /// replace_at: only the target position changes
    #[test]
    fn replace_at_changes_one_position(
        list in list_strategy(MAX_STAGES),
        seed in any::<usize>(),
        replacement in stage_strategy(),
    ) {
        prop_assume!(!list.is_empty());
        let index = seed % list.len();

        let updated = selection::replace_at(&catalog(), &list, index, &replacement.display_name)
            .expect("valid replacement");

        prop_assert_eq!(updated.len(), list.len());
        for (i, (before, after)) in list.iter().zip(&updated).enumerate() {
            if i == index {
                prop_assert_eq!(after, &replacement);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    /// includes: true exactly when the id is in both lists
    #[test]
    fn includes_is_conjunctive(
        starters in list_strategy(MAX_STAGES),
        counterpicks in list_strategy(MAX_STAGES),
        probe in stage_strategy(),
    ) {
        let in_starters = starters.contains(&probe);
        let in_counterpicks = counterpicks.contains(&probe);
        let data = ConfigData::new(false, false, starters, counterpicks);
        prop_assert_eq!(data.includes(&probe), in_starters && in_counterpicks);
    }
}

// =============================================================================
// Persistence Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// save → load yields the same flags and id sequences
    #[test]
    fn save_load_round_trip(
        enabled in any::<bool>(),
        use_official in any::<bool>(),
        starters in list_strategy(12),
        counterpicks in list_strategy(12),
    ) {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path());
        let data = ConfigData::new(enabled, use_official, starters, counterpicks);

        config_file::save(&backend, ACTIVE_CONFIG_FILE, &data).unwrap();
        let loaded = config_file::load(&backend, &catalog(), ACTIVE_CONFIG_FILE).unwrap();

        prop_assert_eq!(loaded, data);
    }
}

// =============================================================================
// String Input Validation Property Tests
// =============================================================================

proptest! {
    /// Arbitrary strings don't crash StageRole parsing
    #[test]
    fn role_parse_doesnt_crash(s in ".*") {
        let _ = s.parse::<StageRole>();
    }

    /// StageRole: to_string → parse round-trip is identity
    #[test]
    fn role_roundtrip(role in prop_oneof![Just(StageRole::Starter), Just(StageRole::Counterpick)]) {
        let parsed: StageRole = role.to_string().parse().expect("Should parse");
        prop_assert_eq!(role, parsed);
    }
}
