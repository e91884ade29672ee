use super::*;

/// Expect defaults for strength, confidence and interpretation when the record omits them
#[tokio::test]
async fn inserts_connection_with_defaults() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_tables().build().await?;
    let source = test
        .catalog()
        .insert_mock_edition("fantastic-four-omnibus-1", "silver-age")
        .await?;
    let target = test
        .catalog()
        .insert_mock_edition("fantastic-four-omnibus-2", "silver-age")
        .await?;
    let connection: ConnectionRecord = serde_json::from_value(factory::connection(
        "fantastic-four-omnibus-1",
        "fantastic-four-omnibus-2",
        "leads_to",
    ))?;

    let connection_repo = ConnectionRepository::new(&test.db);
    let inserted = connection_repo
        .insert(&connection, source.id, target.id)
        .await?;

    assert!(inserted);
    let stored = entity::prelude::Connection::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.source_id, source.id);
    assert_eq!(stored.target_id, target.id);
    assert_eq!(stored.strength, 5);
    assert_eq!(stored.confidence, 80);
    assert_eq!(stored.interpretation, "official");

    Ok(())
}

/// Expect a duplicate connection to be a no-op
#[tokio::test]
async fn ignores_duplicate_connection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_tables().build().await?;
    let source = test
        .catalog()
        .insert_mock_edition("fantastic-four-omnibus-1", "silver-age")
        .await?;
    let target = test
        .catalog()
        .insert_mock_edition("fantastic-four-omnibus-2", "silver-age")
        .await?;
    let connection: ConnectionRecord = serde_json::from_value(factory::connection(
        "fantastic-four-omnibus-1",
        "fantastic-four-omnibus-2",
        "leads_to",
    ))?;

    let connection_repo = ConnectionRepository::new(&test.db);
    connection_repo
        .insert(&connection, source.id, target.id)
        .await?;
    let inserted = connection_repo
        .insert(&connection, source.id, target.id)
        .await?;

    assert!(!inserted);
    assert_eq!(test.count(entity::prelude::Connection).await?, 1);

    Ok(())
}
