//! Seed pipeline.
//!
//! Stages run strictly in [`Stage::ALL`] order, one record at a time in file order. Each
//! stage resolves slugs through the [`SeedContext`] filled by earlier stages and reports a
//! [`StageReport`]; whether a failure ends the run is decided by the stage's policies.

pub mod context;
pub mod loader;
pub mod outcome;
pub mod stage;

mod stages;

#[cfg(test)]
mod tests;

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use sea_orm::ConnectionTrait;
use serde::de::DeserializeOwned;

use crate::{
    error::{seed::SeedError, Error},
    seed::{
        context::SeedContext,
        loader::load_records,
        outcome::StageReport,
        stage::{FailurePolicy, Stage},
    },
};

/// Loads every data file from `data_dir` into the database.
pub struct SeedPipeline<'a, C: ConnectionTrait> {
    db: &'a C,
    data_dir: PathBuf,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct SeedSummary {
    /// One report per stage, in run order
    pub reports: Vec<StageReport>,
    /// Wall-clock time of the whole run
    pub elapsed: Duration,
    /// Eras resolvable by slug at the end of the run
    pub eras: usize,
    /// Creators resolvable by slug at the end of the run
    pub creators: usize,
    /// Collected editions resolvable by slug at the end of the run
    pub editions: usize,
}

impl SeedSummary {
    /// Report for `stage`, if the stage ran
    pub fn report(&self, stage: Stage) -> Option<&StageReport> {
        self.reports.iter().find(|report| report.stage == stage)
    }

    /// Emit the run's completion line
    pub fn log(&self) {
        tracing::info!(
            elapsed_ms = self.elapsed.as_millis() as u64,
            eras = self.eras,
            creators = self.creators,
            editions = self.editions,
            "Seed complete"
        );
    }
}

impl<'a, C: ConnectionTrait> SeedPipeline<'a, C> {
    /// Create a pipeline writing to `db` from the data files in `data_dir`.
    pub fn new(db: &'a C, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            data_dir: data_dir.into(),
        }
    }

    /// Run every stage in dependency order.
    ///
    /// # Returns
    /// - `Ok(SeedSummary)`: All stages ran; skipped and tolerated failures are counted in the reports
    /// - `Err(Error::SeedError)`: A required data file could not be loaded, or a record in a stage
    ///   with a fatal persist policy could not be written
    pub async fn run(&self) -> Result<SeedSummary, Error> {
        let start = Instant::now();
        let mut ctx = SeedContext::default();
        let mut reports = Vec::with_capacity(Stage::ALL.len());

        tracing::info!(data_dir = %self.data_dir.display(), "Starting seed");

        for stage in Stage::ALL {
            let report = self.run_stage(stage, &mut ctx).await?;
            report.log();
            reports.push(report);
        }

        Ok(SeedSummary {
            reports,
            elapsed: start.elapsed(),
            eras: ctx.era_ids.len(),
            creators: ctx.creator_ids.len(),
            editions: ctx.edition_ids.len(),
        })
    }

    async fn run_stage(
        &self,
        stage: Stage,
        ctx: &mut SeedContext,
    ) -> Result<StageReport, SeedError> {
        match stage {
            Stage::Eras => self.seed_eras(ctx).await,
            Stage::Creators => self.seed_creators(ctx).await,
            Stage::Characters => self.seed_characters().await,
            Stage::CollectedEditions => self.seed_editions(ctx).await,
            Stage::Connections => self.seed_connections(ctx).await,
            Stage::ContinuityConflicts => self.seed_conflicts().await,
            Stage::StoryArcs => self.seed_story_arcs(ctx).await,
            Stage::Events => self.seed_events(ctx).await,
            Stage::ReadingPaths => self.seed_reading_paths(ctx).await,
            Stage::Retailers => self.seed_retailers().await,
            Stage::Resources => self.seed_resources().await,
        }
    }

    /// Load the records of `stage`, applying its load policy.
    ///
    /// # Returns
    /// - `Ok(Some(records))`: The data file decoded
    /// - `Ok(None)`: The file failed to load and the stage tolerates it; the stage should be skipped
    /// - `Err(SeedError::Load)`: The file failed to load and the stage requires it
    async fn load<T: DeserializeOwned>(&self, stage: Stage) -> Result<Option<Vec<T>>, SeedError> {
        let path = self.data_dir.join(stage.file_name());

        match load_records(&path).await {
            Ok(records) => Ok(Some(records)),
            Err(source) => match stage.load_policy() {
                FailurePolicy::Fatal => Err(SeedError::Load { stage, source }),
                FailurePolicy::Warn => {
                    tracing::warn!(stage = %stage, error = %source, "Skipping stage, data file could not be loaded");
                    Ok(None)
                }
            },
        }
    }
}
