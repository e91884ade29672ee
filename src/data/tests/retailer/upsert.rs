use super::*;

/// Expect a retailer to be inserted once per slug
#[tokio::test]
async fn inserts_retailer_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Retailer)
        .build()
        .await?;
    let retailer: RetailerRecord = serde_json::from_value(factory::retailer("local-shop"))?;

    let retailer_repo = RetailerRepository::new(&test.db);
    let first = retailer_repo.upsert(&retailer).await?;
    let second = retailer_repo.upsert(&retailer).await?;

    assert!(first);
    assert!(!second);
    assert_eq!(test.count(entity::prelude::Retailer).await?, 1);

    Ok(())
}
