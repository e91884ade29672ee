use super::*;

/// Expect a link to be inserted once and then ignored
#[tokio::test]
async fn ignores_duplicate_link() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .with_mock_edition("fantastic-four-omnibus-1", "silver-age")
        .with_mock_creator("stan-lee")
        .build()
        .await?;
    let edition = test
        .catalog()
        .insert_mock_edition("fantastic-four-omnibus-1", "silver-age")
        .await?;
    let creator = test.catalog().insert_mock_creator("stan-lee").await?;

    let edition_repo = EditionRepository::new(&test.db);
    let first = edition_repo
        .link_creator(edition.id, creator.id, "writer")
        .await?;
    let second = edition_repo
        .link_creator(edition.id, creator.id, "writer")
        .await?;

    assert!(first);
    assert!(!second);
    assert_eq!(test.count(entity::prelude::EditionCreator).await?, 1);

    Ok(())
}

/// Expect the same creator to be linkable under different roles
#[tokio::test]
async fn links_same_creator_under_each_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .build()
        .await?;
    let edition = test
        .catalog()
        .insert_mock_edition("fantastic-four-omnibus-1", "silver-age")
        .await?;
    let creator = test.catalog().insert_mock_creator("jack-kirby").await?;

    let edition_repo = EditionRepository::new(&test.db);
    edition_repo
        .link_creator(edition.id, creator.id, "writer")
        .await?;
    edition_repo
        .link_creator(edition.id, creator.id, "artist")
        .await?;

    assert_eq!(test.count(entity::prelude::EditionCreator).await?, 2);

    Ok(())
}
