use super::*;

/// Expect an event to be inserted once per slug, keeping its first-seeded fields
#[tokio::test]
async fn inserts_event_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Era)
        .with_table(entity::prelude::Event)
        .build()
        .await?;
    let era = test.catalog().insert_mock_era("modern-age").await?;
    let event: EventRecord =
        serde_json::from_value(factory::event("secret-wars-1984", Some("modern-age")))?;

    let event_repo = EventRepository::new(&test.db);
    let first = event_repo.upsert(&event, Some(era.id)).await?;
    let second = event_repo.upsert(&event, None).await?;

    assert!(first);
    assert!(!second);
    let stored = entity::prelude::Event::find().one(&test.db).await?.unwrap();
    assert_eq!(stored.year, 1984);
    assert_eq!(stored.era_id, Some(era.id));

    Ok(())
}
