use super::*;

/// Expect a conflict to be inserted once per slug
#[tokio::test]
async fn inserts_conflict_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContinuityConflict)
        .build()
        .await?;
    let conflict: ContinuityConflictRecord =
        serde_json::from_value(factory::conflict("sliding-timescale"))?;

    let conflict_repo = ContinuityConflictRepository::new(&test.db);
    let first = conflict_repo.upsert(&conflict).await?;
    let second = conflict_repo.upsert(&conflict).await?;

    assert!(first);
    assert!(!second);
    let stored = entity::prelude::ContinuityConflict::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.confidence, 60);
    assert_eq!(stored.tags, serde_json::json!(["retcon"]));

    Ok(())
}
