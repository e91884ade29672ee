use super::*;

/// Expect the era foreign key to be stored when given
#[tokio::test]
async fn creates_story_arc_in_era() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Era)
        .with_table(entity::prelude::StoryArc)
        .build()
        .await?;
    let era = test.catalog().insert_mock_era("bronze-age").await?;
    let arc: StoryArcRecord =
        serde_json::from_value(factory::story_arc("dark-phoenix-saga", Some("bronze-age")))?;

    let arc_repo = StoryArcRepository::new(&test.db);
    arc_repo.upsert(&arc, Some(era.id)).await?;

    let stored = entity::prelude::StoryArc::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.era_id, Some(era.id));

    Ok(())
}

/// Expect Ok with no era when none is given
#[tokio::test]
async fn creates_story_arc_without_era() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Era)
        .with_table(entity::prelude::StoryArc)
        .build()
        .await?;
    let arc: StoryArcRecord = serde_json::from_value(factory::story_arc("kree-skrull-war", None))?;

    let arc_repo = StoryArcRepository::new(&test.db);
    let inserted = arc_repo.upsert(&arc, None).await?;

    assert!(inserted);
    let stored = entity::prelude::StoryArc::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.era_id, None);

    Ok(())
}
