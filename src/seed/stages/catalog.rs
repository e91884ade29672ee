use sea_orm::ConnectionTrait;

use crate::{
    data::{character::CharacterRepository, creator::CreatorRepository, era::EraRepository},
    error::seed::SeedError,
    model::{character::CharacterRecord, creator::CreatorRecord, era::EraRecord},
    seed::{
        context::SeedContext,
        outcome::{RecordOutcome, StageReport},
        stage::Stage,
        SeedPipeline,
    },
};

impl<'a, C: ConnectionTrait> SeedPipeline<'a, C> {
    pub(in crate::seed) async fn seed_eras(
        &self,
        ctx: &mut SeedContext,
    ) -> Result<StageReport, SeedError> {
        let Some(eras) = self.load::<EraRecord>(Stage::Eras).await? else {
            return Ok(StageReport::not_loaded(Stage::Eras));
        };

        let era_repo = EraRepository::new(self.db);
        let mut report = StageReport::new(Stage::Eras);

        for era in &eras {
            let result = era_repo.upsert(era).await;
            if let Ok(model) = &result {
                ctx.era_ids.insert(era.slug.clone(), model.id);
            }

            report.tally(&era.slug, result.into())?;
        }

        Ok(report)
    }

    pub(in crate::seed) async fn seed_creators(
        &self,
        ctx: &mut SeedContext,
    ) -> Result<StageReport, SeedError> {
        let Some(creators) = self.load::<CreatorRecord>(Stage::Creators).await? else {
            return Ok(StageReport::not_loaded(Stage::Creators));
        };

        let creator_repo = CreatorRepository::new(self.db);
        let mut report = StageReport::new(Stage::Creators);

        for creator in &creators {
            let result = creator_repo.upsert(creator).await;
            if let Ok(model) = &result {
                ctx.creator_ids.insert(creator.slug.clone(), model.id);
            }

            report.tally(&creator.slug, result.into())?;
        }

        Ok(report)
    }

    pub(in crate::seed) async fn seed_characters(&self) -> Result<StageReport, SeedError> {
        let Some(characters) = self.load::<CharacterRecord>(Stage::Characters).await? else {
            return Ok(StageReport::not_loaded(Stage::Characters));
        };

        let character_repo = CharacterRepository::new(self.db);
        let mut report = StageReport::new(Stage::Characters);

        for character in &characters {
            let outcome = RecordOutcome::from(character_repo.upsert(character).await);
            report.tally(&character.slug, outcome)?;
        }

        Ok(report)
    }
}
