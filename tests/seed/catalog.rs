use super::*;

fn marvel_sample() -> TestBuilder {
    TestBuilder::new()
        .with_seed_tables()
        .with_data_file(
            "eras.json",
            json!([
                factory::era("golden-age", "Golden Age"),
                factory::era("silver-age", "Silver Age"),
                factory::era("bronze-age", "Bronze Age")
            ]),
        )
        .with_data_file(
            "creators.json",
            json!([
                factory::creator("stan-lee", "Stan Lee"),
                factory::creator("jack-kirby", "Jack Kirby"),
                factory::creator("chris-claremont", "Chris Claremont"),
                factory::creator("john-byrne", "John Byrne")
            ]),
        )
        .with_data_file(
            "characters.json",
            json!([
                factory::character("reed-richards", "Reed Richards"),
                factory::character("jean-grey", "Jean Grey")
            ]),
        )
        .with_data_file(
            "collected_editions.json",
            json!([
                factory::edition_with_creators(
                    "fantastic-four-omnibus-1",
                    "silver-age",
                    &[("Stan Lee", "writer"), ("Jack Kirby", "artist")]
                ),
                factory::edition_with_creators(
                    "dark-phoenix-saga",
                    "bronze-age",
                    &[("Chris Claremont", "writer"), ("John Byrne", "artist")]
                ),
                factory::edition_with_creators(
                    "days-of-future-past",
                    "bronze-age",
                    &[("Chris Claremont", "writer"), ("John Byrne", "")]
                )
            ]),
        )
        .with_data_file(
            "connections.json",
            json!([
                factory::connection("dark-phoenix-saga", "days-of-future-past", "leads_to"),
                factory::connection("dark-phoenix-saga", "days-of-future-past", "leads_to")
            ]),
        )
        .with_data_file(
            "continuity_conflicts.json",
            json!([factory::conflict("sliding-timescale")]),
        )
        .with_data_file(
            "story_arcs.json",
            json!([factory::story_arc("dark-phoenix-saga", Some("bronze-age"))]),
        )
        .with_data_file(
            "events.json",
            json!([factory::event("secret-wars-1984", None)]),
        )
        .with_data_file(
            "reading_paths.json",
            json!([factory::reading_path(
                "x-men-essentials",
                &[(1, "dark-phoenix-saga"), (2, "days-of-future-past")]
            )]),
        )
        .with_data_file(
            "retailers.json",
            json!([factory::retailer("local-shop"), factory::retailer("digital-store")]),
        )
        .with_data_file("resources.json", json!([factory::resource("Marvel Fandom")]))
}

/// Expect one row per record across every table, with duplicates collapsed
#[tokio::test]
async fn seeds_sample_catalog() -> Result<(), TestError> {
    let test = marvel_sample().build().await?;

    let summary = SeedPipeline::new(&test.db, test.data_dir())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.reports.len(), Stage::ALL.len());
    assert_eq!((summary.eras, summary.creators, summary.editions), (3, 4, 3));
    assert_eq!(test.count(entity::prelude::Character).await?, 2);
    assert_eq!(test.count(entity::prelude::EditionCreator).await?, 6);
    assert_eq!(test.count(entity::prelude::Connection).await?, 1);
    assert_eq!(test.count(entity::prelude::ContinuityConflict).await?, 1);
    assert_eq!(test.count(entity::prelude::StoryArc).await?, 1);
    assert_eq!(test.count(entity::prelude::Event).await?, 1);
    assert_eq!(test.count(entity::prelude::ReadingPathEntry).await?, 2);
    assert_eq!(test.count(entity::prelude::Retailer).await?, 2);
    assert_eq!(test.count(entity::prelude::Resource).await?, 1);

    Ok(())
}

/// Expect every edition to reference an era seeded in the same run
#[tokio::test]
async fn editions_reference_seeded_eras() -> Result<(), TestError> {
    let test = marvel_sample().build().await?;

    SeedPipeline::new(&test.db, test.data_dir())
        .run()
        .await
        .unwrap();

    let editions = entity::prelude::CollectedEdition::find()
        .find_also_related(entity::prelude::Era)
        .all(&test.db)
        .await?;
    assert_eq!(editions.len(), 3);
    for (edition, era) in editions {
        let era = era.unwrap();
        let expected = if edition.slug == "fantastic-four-omnibus-1" {
            "silver-age"
        } else {
            "bronze-age"
        };
        assert_eq!(era.slug, expected, "{}", edition.slug);
    }

    Ok(())
}

/// Expect a credit with a blank role to be stored as a writer credit
#[tokio::test]
async fn stores_blank_credit_role_as_writer() -> Result<(), TestError> {
    let test = marvel_sample().build().await?;

    SeedPipeline::new(&test.db, test.data_dir())
        .run()
        .await
        .unwrap();

    let byrne = entity::prelude::Creator::find()
        .filter(entity::creator::Column::Slug.eq("john-byrne"))
        .one(&test.db)
        .await?
        .unwrap();
    let mut roles: Vec<String> = entity::prelude::EditionCreator::find()
        .filter(entity::edition_creator::Column::CreatorId.eq(byrne.id))
        .all(&test.db)
        .await?
        .into_iter()
        .map(|credit| credit.role)
        .collect();
    roles.sort();
    assert_eq!(roles, vec!["artist".to_string(), "writer".to_string()]);

    Ok(())
}
