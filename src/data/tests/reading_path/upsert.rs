use super::*;

/// Expect the existing path to keep its ID and pick up the new name
#[tokio::test]
async fn updates_name_of_existing_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReadingPath)
        .build()
        .await?;
    let path: ReadingPathRecord =
        serde_json::from_value(factory::reading_path("fantastic-four-complete", &[]))?;
    let path_repo = ReadingPathRepository::new(&test.db);
    let initial = path_repo.upsert(&path).await?;

    let renamed = ReadingPathRecord {
        name: "The Complete Fantastic Four".to_string(),
        difficulty: "advanced".to_string(),
        ..path
    };
    let updated = path_repo.upsert(&renamed).await?;

    assert_eq!(updated.id, initial.id);
    assert_eq!(updated.name, "The Complete Fantastic Four");
    assert_eq!(updated.difficulty, "beginner");

    Ok(())
}
