use super::*;

/// Expect Ok with the era foreign key set
#[tokio::test]
async fn creates_new_edition_in_era() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Era)
        .with_table(entity::prelude::CollectedEdition)
        .with_mock_era("silver-age")
        .build()
        .await?;
    let era = test.catalog().insert_mock_era("silver-age").await?;
    let edition: CollectedEditionRecord =
        serde_json::from_value(factory::edition("fantastic-four-omnibus-1", "silver-age"))?;

    let edition_repo = EditionRepository::new(&test.db);
    let created = edition_repo.upsert(&edition, era.id).await?;

    assert_eq!(created.slug, "fantastic-four-omnibus-1");
    assert_eq!(created.era_id, era.id);
    assert_eq!(created.issue_count, 30);

    Ok(())
}

/// Expect only the title to change when upserting an existing slug
#[tokio::test]
async fn updates_only_title_of_existing_edition() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Era)
        .with_table(entity::prelude::CollectedEdition)
        .build()
        .await?;
    let era = test.catalog().insert_mock_era("silver-age").await?;
    let edition: CollectedEditionRecord =
        serde_json::from_value(factory::edition("fantastic-four-omnibus-1", "silver-age"))?;
    let edition_repo = EditionRepository::new(&test.db);
    let initial = edition_repo.upsert(&edition, era.id).await?;

    let revised = CollectedEditionRecord {
        title: "Fantastic Four Omnibus Vol. 1 (New Printing)".to_string(),
        print_status: "out_of_print".to_string(),
        ..edition
    };
    let updated = edition_repo.upsert(&revised, era.id).await?;

    assert_eq!(updated.id, initial.id);
    assert_eq!(updated.title, "Fantastic Four Omnibus Vol. 1 (New Printing)");
    assert_eq!(updated.print_status, initial.print_status);

    Ok(())
}

/// Expect Error when the era ID does not exist
#[tokio::test]
async fn fails_for_unknown_era_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Era)
        .with_table(entity::prelude::CollectedEdition)
        .build()
        .await?;
    let edition: CollectedEditionRecord =
        serde_json::from_value(factory::edition("fantastic-four-omnibus-1", "silver-age"))?;

    let edition_repo = EditionRepository::new(&test.db);
    let result = edition_repo.upsert(&edition, 999).await;

    assert!(result.is_err());

    Ok(())
}
