use super::*;

/// Expect Ok with roles stored as a JSON array
#[tokio::test]
async fn creates_new_creator() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Creator)
        .build()
        .await?;
    let creator: CreatorRecord = serde_json::from_value(factory::creator("stan-lee", "Stan Lee"))?;

    let creator_repo = CreatorRepository::new(&test.db);
    let created = creator_repo.upsert(&creator).await?;

    assert_eq!(created.slug, "stan-lee");
    assert_eq!(created.roles, serde_json::json!(["writer"]));
    assert_eq!(created.bio, None);

    Ok(())
}

/// Expect the existing row to keep its ID and pick up the new name
#[tokio::test]
async fn updates_name_of_existing_creator() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Creator)
        .build()
        .await?;
    let creator: CreatorRecord = serde_json::from_value(factory::creator("stan-lee", "Stan Lee"))?;
    let creator_repo = CreatorRepository::new(&test.db);
    let initial = creator_repo.upsert(&creator).await?;

    let renamed = CreatorRecord {
        name: "Stan \"The Man\" Lee".to_string(),
        ..creator
    };
    let updated = creator_repo.upsert(&renamed).await?;

    assert_eq!(updated.id, initial.id);
    assert_eq!(updated.name, "Stan \"The Man\" Lee");
    assert_eq!(test.count(entity::prelude::Creator).await?, 1);

    Ok(())
}
