use super::*;

/// Expect a new character with the default universe
#[tokio::test]
async fn creates_new_character_with_default_universe() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await?;
    let character: CharacterRecord =
        serde_json::from_value(factory::character("reed-richards", "Reed Richards"))?;

    let character_repo = CharacterRepository::new(&test.db);
    let inserted = character_repo.upsert(&character).await?;

    assert!(inserted);
    let stored = entity::prelude::Character::find()
        .filter(entity::character::Column::Slug.eq("reed-richards"))
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.universe, "Earth-616");
    assert_eq!(stored.teams, serde_json::json!(["Fantastic Four"]));

    Ok(())
}

/// Expect an existing character to be left untouched
#[tokio::test]
async fn leaves_existing_character_untouched() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await?;
    let character: CharacterRecord =
        serde_json::from_value(factory::character("reed-richards", "Reed Richards"))?;
    let character_repo = CharacterRepository::new(&test.db);
    character_repo.upsert(&character).await?;

    let renamed = CharacterRecord {
        name: "Mister Fantastic".to_string(),
        ..character
    };
    let inserted = character_repo.upsert(&renamed).await?;

    assert!(!inserted);
    let stored = entity::prelude::Character::find().all(&test.db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Reed Richards");

    Ok(())
}
