use super::*;

/// Expect Ok when upserting a new era
#[tokio::test]
async fn creates_new_era() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Era)
        .build()
        .await?;
    let era: EraRecord = serde_json::from_value(factory::era("silver-age", "Silver Age"))?;

    let era_repo = EraRepository::new(&test.db);
    let result = era_repo.upsert(&era).await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.slug, "silver-age");
    assert_eq!(created.name, "Silver Age");
    assert_eq!(created.year_start, 1961);
    assert_eq!(created.subtitle.as_deref(), Some("The Marvel Age"));

    Ok(())
}

/// Expect only the name to change when upserting an existing slug
#[tokio::test]
async fn updates_only_name_of_existing_era() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Era)
        .build()
        .await?;
    let era: EraRecord = serde_json::from_value(factory::era("silver-age", "Silver Age"))?;
    let era_repo = EraRepository::new(&test.db);
    let initial = era_repo.upsert(&era).await?;

    let renamed = EraRecord {
        name: "The Silver Age".to_string(),
        year_start: 1956,
        color: Some("#000000".to_string()),
        ..era
    };
    let updated = era_repo.upsert(&renamed).await?;

    assert_eq!(updated.id, initial.id);
    assert_eq!(updated.name, "The Silver Age");
    assert_eq!(updated.year_start, initial.year_start);
    assert_eq!(updated.color, initial.color);
    assert_eq!(test.count(entity::prelude::Era).await?, 1);

    Ok(())
}

/// Expect the upsert to return the row for its own slug when several eras exist
#[tokio::test]
async fn returns_row_for_own_slug() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Era)
        .build()
        .await?;
    let era_repo = EraRepository::new(&test.db);
    let golden: EraRecord = serde_json::from_value(factory::era("golden-age", "Golden Age"))?;
    let silver: EraRecord = serde_json::from_value(factory::era("silver-age", "Silver Age"))?;
    let golden_model = era_repo.upsert(&golden).await?;
    let silver_model = era_repo.upsert(&silver).await?;

    let again = era_repo.upsert(&golden).await?;

    assert_eq!(again.id, golden_model.id);
    assert_ne!(again.id, silver_model.id);

    Ok(())
}

/// Expect Error when upserting without the table
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let era: EraRecord = serde_json::from_value(factory::era("silver-age", "Silver Age"))?;

    let era_repo = EraRepository::new(&test.db);
    let result = era_repo.upsert(&era).await;

    assert!(result.is_err());

    Ok(())
}
