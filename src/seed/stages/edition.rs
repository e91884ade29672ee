use sea_orm::ConnectionTrait;

use crate::{
    data::{connection::ConnectionRepository, edition::EditionRepository},
    error::seed::SeedError,
    model::{connection::ConnectionRecord, edition::CollectedEditionRecord},
    seed::{
        context::SeedContext,
        outcome::{RecordOutcome, SkipReason, StageReport},
        stage::Stage,
        SeedPipeline,
    },
    util::slug::slugify,
};

/// Endpoint type whose slugs resolve through the edition map
static EDITION_ENDPOINT: &str = "edition";

impl<'a, C: ConnectionTrait> SeedPipeline<'a, C> {
    /// Persist collected editions and link each to its credited creators.
    ///
    /// An edition whose era is unknown is skipped. A credit whose derived creator slug is unknown
    /// is skipped on its own without affecting the edition.
    pub(in crate::seed) async fn seed_editions(
        &self,
        ctx: &mut SeedContext,
    ) -> Result<StageReport, SeedError> {
        let Some(editions) = self
            .load::<CollectedEditionRecord>(Stage::CollectedEditions)
            .await?
        else {
            return Ok(StageReport::not_loaded(Stage::CollectedEditions));
        };

        let edition_repo = EditionRepository::new(self.db);
        let mut report = StageReport::new(Stage::CollectedEditions);

        for edition in &editions {
            let Some(&era_id) = ctx.era_ids.get(&edition.era_slug) else {
                report.tally(
                    &edition.slug,
                    RecordOutcome::unresolved("era", &edition.era_slug),
                )?;
                continue;
            };

            let edition_id = match edition_repo.upsert(edition, era_id).await {
                Ok(model) => model.id,
                Err(error) => {
                    report.tally(&edition.slug, RecordOutcome::Failed { error })?;
                    continue;
                }
            };
            ctx.edition_ids.insert(edition.slug.clone(), edition_id);
            report.tally(&edition.slug, RecordOutcome::Inserted)?;

            for credit in &edition.creators {
                let creator_slug = slugify(&credit.name);
                let outcome = match ctx.creator_ids.get(&creator_slug) {
                    Some(&creator_id) => edition_repo
                        .link_creator(edition_id, creator_id, credit.role())
                        .await
                        .into(),
                    None => RecordOutcome::unresolved("creator", &creator_slug),
                };

                report.tally_link(&edition.slug, &creator_slug, outcome);
            }
        }

        Ok(report)
    }

    /// Persist connections between collected editions.
    pub(in crate::seed) async fn seed_connections(
        &self,
        ctx: &SeedContext,
    ) -> Result<StageReport, SeedError> {
        let Some(connections) = self.load::<ConnectionRecord>(Stage::Connections).await? else {
            return Ok(StageReport::not_loaded(Stage::Connections));
        };

        let connection_repo = ConnectionRepository::new(self.db);
        let mut report = StageReport::new(Stage::Connections);

        for connection in &connections {
            let endpoints = resolve_endpoint(ctx, &connection.source_type, &connection.source_slug)
                .and_then(|source_id| {
                    resolve_endpoint(ctx, &connection.target_type, &connection.target_slug)
                        .map(|target_id| (source_id, target_id))
                });

            let outcome = match endpoints {
                Ok((source_id, target_id)) => connection_repo
                    .insert(connection, source_id, target_id)
                    .await
                    .into(),
                Err(reason) => RecordOutcome::Skipped { reason },
            };

            report.tally(&connection.key(), outcome)?;
        }

        Ok(report)
    }
}

fn resolve_endpoint(ctx: &SeedContext, endpoint_type: &str, slug: &str) -> Result<i32, SkipReason> {
    if endpoint_type != EDITION_ENDPOINT {
        return Err(SkipReason::UnsupportedEndpoint {
            endpoint_type: endpoint_type.to_string(),
        });
    }

    ctx.edition_ids
        .get(slug)
        .copied()
        .ok_or_else(|| SkipReason::unresolved(EDITION_ENDPOINT, slug))
}
