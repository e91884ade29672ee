use sea_orm::ConnectionTrait;

use crate::{
    data::reading_path::ReadingPathRepository,
    error::seed::SeedError,
    model::reading_path::ReadingPathRecord,
    seed::{
        context::SeedContext,
        outcome::{RecordOutcome, StageReport},
        stage::Stage,
        SeedPipeline,
    },
};

impl<'a, C: ConnectionTrait> SeedPipeline<'a, C> {
    /// Persist reading paths and their ordered entries.
    ///
    /// Entries are keyed by position within their path; a second entry at a taken position is
    /// ignored.
    pub(in crate::seed) async fn seed_reading_paths(
        &self,
        ctx: &SeedContext,
    ) -> Result<StageReport, SeedError> {
        let Some(paths) = self.load::<ReadingPathRecord>(Stage::ReadingPaths).await? else {
            return Ok(StageReport::not_loaded(Stage::ReadingPaths));
        };

        let path_repo = ReadingPathRepository::new(self.db);
        let mut report = StageReport::new(Stage::ReadingPaths);

        for path in &paths {
            let path_id = match path_repo.upsert(path).await {
                Ok(model) => model.id,
                Err(error) => {
                    report.tally(&path.slug, RecordOutcome::Failed { error })?;
                    continue;
                }
            };
            report.tally(&path.slug, RecordOutcome::Inserted)?;

            for entry in &path.entries {
                let link = format!("#{} {}", entry.position, entry.edition_slug);
                let outcome = match ctx.edition_ids.get(&entry.edition_slug) {
                    Some(&edition_id) => {
                        let result = path_repo.insert_entry(path_id, edition_id, entry).await;
                        if let Ok(false) = result {
                            tracing::debug!(
                                path = %path.slug,
                                position = entry.position,
                                "Position already taken, entry ignored"
                            );
                        }

                        result.into()
                    }
                    None => RecordOutcome::unresolved("edition", &entry.edition_slug),
                };

                report.tally_link(&path.slug, &link, outcome);
            }
        }

        Ok(report)
    }
}
