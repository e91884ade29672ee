use super::*;

/// Expect an edition whose era was never loaded to be skipped without failing the run
#[tokio::test]
async fn skips_edition_with_unknown_era() -> Result<(), TestError> {
    let test = seed_builder()
        .with_data_file("eras.json", json!([factory::era("silver-age", "Silver Age")]))
        .with_data_file(
            "collected_editions.json",
            json!([
                factory::edition("fantastic-four-omnibus-1", "silver-age"),
                factory::edition("x-men-epic-collection-1", "bronze-age")
            ]),
        )
        .build()
        .await?;

    let summary = SeedPipeline::new(&test.db, test.data_dir())
        .run()
        .await
        .unwrap();

    let report = summary.report(Stage::CollectedEditions).unwrap();
    assert_eq!(report.records.processed, 1);
    assert_eq!(report.records.skipped, 1);
    assert_eq!(summary.editions, 1);
    assert_eq!(test.count(entity::prelude::CollectedEdition).await?, 1);

    Ok(())
}

/// Expect credits to resolve through slugs derived from creator names, including overrides
#[tokio::test]
async fn links_credits_by_derived_creator_slug() -> Result<(), TestError> {
    let test = seed_builder()
        .with_data_file("eras.json", json!([factory::era("modern-age", "Modern Age")]))
        .with_data_file(
            "creators.json",
            json!([
                factory::creator("j-m-dematteis", "J.M. DeMatteis"),
                factory::creator("george-perez", "George Pérez")
            ]),
        )
        .with_data_file(
            "collected_editions.json",
            json!([factory::edition_with_creators(
                "kravens-last-hunt",
                "modern-age",
                &[
                    ("J.M. DeMatteis", "writer"),
                    ("George Pérez", "artist"),
                    ("Mike Zeck", "artist")
                ]
            )]),
        )
        .build()
        .await?;

    let summary = SeedPipeline::new(&test.db, test.data_dir())
        .run()
        .await
        .unwrap();

    let report = summary.report(Stage::CollectedEditions).unwrap();
    assert_eq!(report.records.processed, 1);
    assert_eq!(
        report.links,
        Tally {
            processed: 2,
            skipped: 1,
            failed: 0
        }
    );
    assert_eq!(test.count(entity::prelude::EditionCreator).await?, 2);

    Ok(())
}

/// Expect a credit with no role to be stored as a writer credit
#[tokio::test]
async fn defaults_blank_credit_role_to_writer() -> Result<(), TestError> {
    let mut edition = factory::edition("amazing-fantasy-15", "silver-age");
    edition["creators"] = json!([{ "name": "Stan Lee", "role": "" }]);
    let test = seed_builder()
        .with_data_file("eras.json", json!([factory::era("silver-age", "Silver Age")]))
        .with_data_file("creators.json", json!([factory::creator("stan-lee", "Stan Lee")]))
        .with_data_file("collected_editions.json", json!([edition]))
        .build()
        .await?;

    SeedPipeline::new(&test.db, test.data_dir())
        .run()
        .await
        .unwrap();

    let credits = entity::prelude::EditionCreator::find().all(&test.db).await?;
    assert_eq!(credits.len(), 1);
    assert_eq!(credits[0].role, "writer");

    Ok(())
}
