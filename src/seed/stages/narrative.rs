use sea_orm::ConnectionTrait;

use crate::{
    data::{
        conflict::ContinuityConflictRepository, event::EventRepository,
        story_arc::StoryArcRepository,
    },
    error::seed::SeedError,
    model::{conflict::ContinuityConflictRecord, event::EventRecord, story_arc::StoryArcRecord},
    seed::{
        context::SeedContext,
        outcome::{RecordOutcome, StageReport},
        stage::Stage,
        SeedPipeline,
    },
};

impl<'a, C: ConnectionTrait> SeedPipeline<'a, C> {
    pub(in crate::seed) async fn seed_conflicts(&self) -> Result<StageReport, SeedError> {
        let Some(conflicts) = self
            .load::<ContinuityConflictRecord>(Stage::ContinuityConflicts)
            .await?
        else {
            return Ok(StageReport::not_loaded(Stage::ContinuityConflicts));
        };

        let conflict_repo = ContinuityConflictRepository::new(self.db);
        let mut report = StageReport::new(Stage::ContinuityConflicts);

        for conflict in &conflicts {
            let outcome = RecordOutcome::from(conflict_repo.upsert(conflict).await);
            report.tally(&conflict.slug, outcome)?;
        }

        Ok(report)
    }

    pub(in crate::seed) async fn seed_story_arcs(
        &self,
        ctx: &SeedContext,
    ) -> Result<StageReport, SeedError> {
        let Some(arcs) = self.load::<StoryArcRecord>(Stage::StoryArcs).await? else {
            return Ok(StageReport::not_loaded(Stage::StoryArcs));
        };

        let arc_repo = StoryArcRepository::new(self.db);
        let mut report = StageReport::new(Stage::StoryArcs);

        for arc in &arcs {
            let era_id = optional_era_id(ctx, Stage::StoryArcs, &arc.slug, arc.era_slug.as_deref());
            let outcome = RecordOutcome::from(arc_repo.upsert(arc, era_id).await);
            report.tally(&arc.slug, outcome)?;
        }

        Ok(report)
    }

    pub(in crate::seed) async fn seed_events(
        &self,
        ctx: &SeedContext,
    ) -> Result<StageReport, SeedError> {
        let Some(events) = self.load::<EventRecord>(Stage::Events).await? else {
            return Ok(StageReport::not_loaded(Stage::Events));
        };

        let event_repo = EventRepository::new(self.db);
        let mut report = StageReport::new(Stage::Events);

        for event in &events {
            let era_id = optional_era_id(ctx, Stage::Events, &event.slug, event.era_slug.as_deref());
            let outcome = RecordOutcome::from(event_repo.upsert(event, era_id).await);
            report.tally(&event.slug, outcome)?;
        }

        Ok(report)
    }
}

/// Resolve an optional era reference. An unknown era is logged and stored as no era.
fn optional_era_id(
    ctx: &SeedContext,
    stage: Stage,
    slug: &str,
    era_slug: Option<&str>,
) -> Option<i32> {
    let era_slug = era_slug?;
    let era_id = ctx.era_ids.get(era_slug).copied();

    if era_id.is_none() {
        tracing::warn!(
            stage = %stage,
            record = slug,
            era = era_slug,
            "Era not found, storing record without an era"
        );
    }

    era_id
}
