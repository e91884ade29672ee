use super::*;

/// Expect resources to be keyed by name
#[tokio::test]
async fn inserts_resource_once_per_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Resource)
        .build()
        .await?;
    let resource: ResourceRecord = serde_json::from_value(factory::resource("Marvel Fandom"))?;

    let resource_repo = ResourceRepository::new(&test.db);
    let first = resource_repo.upsert(&resource).await?;
    let second = resource_repo
        .upsert(&ResourceRecord {
            url: Some("https://example.org".to_string()),
            ..resource.clone()
        })
        .await?;

    assert!(first);
    assert!(!second);
    let stored = entity::prelude::Resource::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.url, resource.url);

    Ok(())
}
