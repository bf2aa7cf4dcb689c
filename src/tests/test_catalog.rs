#[cfg(test)]
mod tests {
    use crate::catalog::MoveCatalog;
    use crate::errors::CatalogError;
    use crate::tests::common::{fixture_catalog, TestCatalogBuilder};
    use pretty_assertions::assert_eq;
    use schema::{ChargedMoveRecord, FastMoveRecord, MoveKind};

    fn names<'a>(records: impl IntoIterator<Item = &'a FastMoveRecord>) -> Vec<&'a str> {
        records.into_iter().map(|r| r.move_name.as_str()).collect()
    }

    #[test]
    fn test_fast_moves_for_keeps_dataset_order() {
        let catalog = TestCatalogBuilder::new()
            .with_fast("Azumarill", "Rock Smash", 7)
            .with_fast("Azumarill", "Bubble", 11)
            .with_fast("Azumarill", "Tackle", 5)
            .build();

        // Requested in a different order than stored.
        let moves = catalog.fast_moves_for("Azumarill", &["Tackle", "Rock Smash"]);

        assert_eq!(names(moves), vec!["Rock Smash", "Tackle"]);
    }

    #[test]
    fn test_fast_moves_for_without_match_is_empty() {
        let catalog = fixture_catalog();

        assert!(catalog.fast_moves_for("Medicham", &["Bubble"]).is_empty());
        assert!(catalog.fast_moves_for("Missingno", &["Counter"]).is_empty());
    }

    #[test]
    fn test_shared_move_names_stay_per_pokemon() {
        let catalog = fixture_catalog();

        let medicham = catalog.fast_moves_for("Medicham", &["Counter"]);
        let snorlax = catalog.fast_moves_for("Snorlax", &["Counter"]);

        assert_eq!(medicham.len(), 1);
        assert_eq!(medicham[0].pokemon, "Medicham");
        assert_eq!(snorlax.len(), 1);
        assert_eq!(snorlax[0].pokemon, "Snorlax");
    }

    #[test]
    fn test_charged_move_energy_distinguishes_zero_from_absent() {
        let catalog = fixture_catalog();

        assert_eq!(catalog.charged_move_energy("Medicham", "Ice Punch"), Some(40));
        assert_eq!(catalog.charged_move_energy("Ditto", "Struggle"), Some(0));
        assert_eq!(catalog.charged_move_energy("Medicham", "Struggle"), None);
        assert_eq!(catalog.charged_move_energy("Missingno", "Ice Punch"), None);
    }

    #[test]
    fn test_move_lists_per_pokemon() {
        let catalog = fixture_catalog();

        let fast: Vec<&str> = names(catalog.fast_moves_of("Medicham"));
        let charged: Vec<&str> = catalog
            .charged_moves_of("Medicham")
            .map(|r| r.move_name.as_str())
            .collect();

        assert_eq!(fast, vec!["Counter", "Psycho Cut"]);
        assert_eq!(charged, vec!["Ice Punch", "Dynamic Punch", "Psychic"]);
        assert_eq!(catalog.fast_moves_of("Missingno").count(), 0);
    }

    #[test]
    fn test_pokemon_names_in_first_seen_order() {
        let catalog = fixture_catalog();

        let pokemon: Vec<&str> = catalog.pokemon_names().collect();

        assert_eq!(pokemon, vec!["Medicham", "Azumarill", "Snorlax", "Ditto"]);
        assert_eq!(catalog.pokemon_count(), 4);
        assert_eq!(catalog.fast_move_count(), 7);
        assert_eq!(catalog.charged_move_count(), 9);
    }

    #[test]
    fn test_pokemon_with_only_charged_moves_is_listed() {
        let catalog = TestCatalogBuilder::new()
            .with_fast("Medicham", "Counter", 7)
            .with_charged("Smeargle", "Flame Charge", 50)
            .build();

        assert!(catalog.contains_pokemon("Smeargle"));
        assert_eq!(catalog.pokemon_names().collect::<Vec<_>>(), vec!["Medicham", "Smeargle"]);
    }

    #[test]
    fn test_resolve_pokemon_ignores_case() {
        let catalog = fixture_catalog();

        assert_eq!(catalog.resolve_pokemon("azumarill"), Some("Azumarill"));
        assert_eq!(catalog.resolve_pokemon("  SNORLAX "), Some("Snorlax"));
        assert_eq!(catalog.resolve_pokemon("Medicham"), Some("Medicham"));
        assert_eq!(catalog.resolve_pokemon("Medi"), None);
    }

    #[test]
    fn test_duplicate_fast_move_is_rejected() {
        let result = MoveCatalog::from_records(
            vec![
                FastMoveRecord::new("Medicham", "Counter", 7),
                FastMoveRecord::new("Snorlax", "Counter", 7),
                FastMoveRecord::new("Medicham", "Counter", 8),
            ],
            vec![],
        );

        match result {
            Err(CatalogError::DuplicateRecord {
                kind,
                pokemon,
                move_name,
            }) => {
                assert_eq!(kind, MoveKind::Fast);
                assert_eq!(pokemon, "Medicham");
                assert_eq!(move_name, "Counter");
            }
            other => panic!("expected a duplicate record error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_charged_move_is_rejected() {
        let result = MoveCatalog::from_records(
            vec![],
            vec![
                ChargedMoveRecord::new("Medicham", "Ice Punch", 40),
                ChargedMoveRecord::new("Medicham", "Ice Punch", 45),
            ],
        );

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateRecord {
                kind: MoveKind::Charged,
                ..
            })
        ));
    }

    #[test]
    fn test_record_without_names_is_malformed() {
        let result = MoveCatalog::from_records(
            vec![
                FastMoveRecord::new("Medicham", "Counter", 7),
                FastMoveRecord::new("Medicham", " ", 9),
            ],
            vec![],
        );

        match result {
            Err(CatalogError::MalformedRecord { kind, index, reason }) => {
                assert_eq!(kind, MoveKind::Fast);
                assert_eq!(index, 1);
                assert_eq!(reason, "missing move name");
            }
            other => panic!("expected a malformed record error, got {:?}", other),
        }

        let result = MoveCatalog::from_records(vec![], vec![ChargedMoveRecord::new("", "Psychic", 55)]);
        assert!(matches!(result, Err(CatalogError::MalformedRecord { index: 0, .. })));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MoveCatalog::default();

        assert!(catalog.is_empty());
        assert_eq!(catalog.pokemon_count(), 0);
        assert_eq!(catalog.charged_move_energy("Medicham", "Ice Punch"), None);
    }
}
