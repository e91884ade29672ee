use super::*;

/// Expect a rerun to refresh names only, leaving other edited fields as first seeded
#[tokio::test]
async fn rerun_refreshes_names_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .with_data_file("eras.json", json!([factory::era("silver-age", "Silver Age")]))
        .with_data_file("creators.json", json!([]))
        .with_data_file("characters.json", json!([]))
        .with_data_file("collected_editions.json", json!([]))
        .with_data_file("connections.json", json!([]))
        .with_data_file("continuity_conflicts.json", json!([]))
        .with_data_file("reading_paths.json", json!([]))
        .with_data_file("retailers.json", json!([]))
        .with_data_file("resources.json", json!([]))
        .build()
        .await?;
    let pipeline = SeedPipeline::new(&test.db, test.data_dir());
    pipeline.run().await.unwrap();

    let mut edited = factory::era("silver-age", "The Silver Age of Comics");
    edited["year_start"] = json!(1956);
    test.write_data_file("eras.json", &json!([edited]))?;
    pipeline.run().await.unwrap();

    let eras = entity::prelude::Era::find().all(&test.db).await?;
    assert_eq!(eras.len(), 1);
    assert_eq!(eras[0].name, "The Silver Age of Comics");
    assert_eq!(eras[0].year_start, 1961);

    Ok(())
}

/// Expect records added between runs to be seeded and resolvable by later stages
#[tokio::test]
async fn rerun_picks_up_new_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .with_data_file("eras.json", json!([factory::era("silver-age", "Silver Age")]))
        .with_data_file("creators.json", json!([]))
        .with_data_file("characters.json", json!([]))
        .with_data_file(
            "collected_editions.json",
            json!([factory::edition("x-men-epic-collection-1", "bronze-age")]),
        )
        .with_data_file("connections.json", json!([]))
        .with_data_file("continuity_conflicts.json", json!([]))
        .with_data_file("reading_paths.json", json!([]))
        .with_data_file("retailers.json", json!([]))
        .with_data_file("resources.json", json!([]))
        .build()
        .await?;
    let pipeline = SeedPipeline::new(&test.db, test.data_dir());

    let first = pipeline.run().await.unwrap();
    assert_eq!(
        first
            .report(Stage::CollectedEditions)
            .unwrap()
            .records
            .skipped,
        1
    );

    test.write_data_file(
        "eras.json",
        &json!([
            factory::era("silver-age", "Silver Age"),
            factory::era("bronze-age", "Bronze Age")
        ]),
    )?;
    let second = pipeline.run().await.unwrap();

    assert_eq!(second.editions, 1);
    assert_eq!(test.count(entity::prelude::Era).await?, 2);
    assert_eq!(test.count(entity::prelude::CollectedEdition).await?, 1);

    Ok(())
}
