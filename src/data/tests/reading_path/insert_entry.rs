use super::*;

/// Expect a second entry at a taken position to be ignored
#[tokio::test]
async fn ignores_entry_at_taken_position() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_tables().build().await?;
    let first_edition = test
        .catalog()
        .insert_mock_edition("fantastic-four-omnibus-1", "silver-age")
        .await?;
    let second_edition = test
        .catalog()
        .insert_mock_edition("fantastic-four-omnibus-2", "silver-age")
        .await?;
    let path: ReadingPathRecord = serde_json::from_value(factory::reading_path(
        "fantastic-four-complete",
        &[
            (1, "fantastic-four-omnibus-1"),
            (1, "fantastic-four-omnibus-2"),
        ],
    ))?;

    let path_repo = ReadingPathRepository::new(&test.db);
    let model = path_repo.upsert(&path).await?;
    let first = path_repo
        .insert_entry(model.id, first_edition.id, &path.entries[0])
        .await?;
    let second = path_repo
        .insert_entry(model.id, second_edition.id, &path.entries[1])
        .await?;

    assert!(first);
    assert!(!second);
    let entries = entity::prelude::ReadingPathEntry::find()
        .all(&test.db)
        .await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].edition_id, first_edition.id);

    Ok(())
}
