use super::*;
use crate::data::substat::SubstatRepository;

/// Tests loading the full substat table.
///
/// Verifies that every stat is loaded and populations keep configuration order.
///
/// Expected: Ok with 7 stats
#[test]
fn loads_substat_table() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_substats(fixture::substat::table())
        .build()?;

    let repo = SubstatRepository::new(test.resources_dir());
    let table = repo.load().unwrap();

    assert_eq!(table.len(), 7);
    assert_eq!(
        table.population("crit_rate", "percent").map(|p| p.values()),
        Some(&fixture::substat::CRIT_RATE_ROLLS[..])
    );
    assert!(table.population("elemental_mastery", "flat").is_some());
    assert!(table.population("elemental_mastery", "percent").is_none());

    Ok(())
}

/// Tests loading when the substat file does not exist.
///
/// Expected: Err(ResourceError::Read)
#[test]
fn fails_when_file_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let repo = SubstatRepository::new(test.resources_dir());
    let result = repo.load();

    assert!(matches!(result, Err(ResourceError::Read { .. })));

    Ok(())
}

/// Tests loading a file that is not valid JSON for the table shape.
///
/// Expected: Err(ResourceError::Parse)
#[test]
fn fails_on_malformed_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_file("artifacts/substats.json", r#"{"crit_rate": {"percent": "fast"}}"#)
        .build()?;

    let repo = SubstatRepository::new(test.resources_dir());
    let result = repo.load();

    assert!(matches!(result, Err(ResourceError::Parse { .. })));

    Ok(())
}

/// Tests that a population holding a non-positive roll is rejected.
///
/// Expected: Err(ResourceError::InvalidPopulation)
#[test]
fn rejects_non_positive_rolls() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_substats(fixture::substat::invalid_table())
        .build()?;

    let repo = SubstatRepository::new(test.resources_dir());
    let result = repo.load();

    match result {
        Err(ResourceError::InvalidPopulation { stat, mode, .. }) => {
            assert_eq!(stat, "crit_rate");
            assert_eq!(mode, "percent");
        }
        other => panic!("expected InvalidPopulation, got {:?}", other),
    }

    Ok(())
}
