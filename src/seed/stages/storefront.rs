use sea_orm::ConnectionTrait;

use crate::{
    data::{resource::ResourceRepository, retailer::RetailerRepository},
    error::seed::SeedError,
    model::{resource::ResourceRecord, retailer::RetailerRecord},
    seed::{
        outcome::{RecordOutcome, StageReport},
        stage::Stage,
        SeedPipeline,
    },
};

impl<'a, C: ConnectionTrait> SeedPipeline<'a, C> {
    pub(in crate::seed) async fn seed_retailers(&self) -> Result<StageReport, SeedError> {
        let Some(retailers) = self.load::<RetailerRecord>(Stage::Retailers).await? else {
            return Ok(StageReport::not_loaded(Stage::Retailers));
        };

        let retailer_repo = RetailerRepository::new(self.db);
        let mut report = StageReport::new(Stage::Retailers);

        for retailer in &retailers {
            let outcome = RecordOutcome::from(retailer_repo.upsert(retailer).await);
            report.tally(&retailer.slug, outcome)?;
        }

        Ok(report)
    }

    pub(in crate::seed) async fn seed_resources(&self) -> Result<StageReport, SeedError> {
        let Some(resources) = self.load::<ResourceRecord>(Stage::Resources).await? else {
            return Ok(StageReport::not_loaded(Stage::Resources));
        };

        let resource_repo = ResourceRepository::new(self.db);
        let mut report = StageReport::new(Stage::Resources);

        for resource in &resources {
            let outcome = RecordOutcome::from(resource_repo.upsert(resource).await);
            report.tally(&resource.name, outcome)?;
        }

        Ok(report)
    }
}
