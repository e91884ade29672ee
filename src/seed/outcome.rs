//! Per-record outcomes and their aggregation into stage reports.

use std::fmt;

use sea_orm::DbErr;

use crate::{
    error::seed::SeedError,
    seed::stage::{FailurePolicy, Stage},
};

/// Why a record or link was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A referenced slug was not loaded by an earlier stage
    UnresolvedReference {
        /// Kind of record the slug should name, e.g. `era`
        entity: &'static str,
        /// The slug that was not found
        slug: String,
    },
    /// A connection endpoint names a kind of record connections cannot point at
    UnsupportedEndpoint {
        /// Endpoint type as given in the data file
        endpoint_type: String,
    },
}

impl SkipReason {
    /// Reason for a slug of kind `entity` that no earlier stage loaded
    pub fn unresolved(entity: &'static str, slug: &str) -> Self {
        Self::UnresolvedReference {
            entity,
            slug: slug.to_string(),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedReference { entity, slug } => {
                write!(f, "{entity} '{slug}' not found")
            }
            Self::UnsupportedEndpoint { endpoint_type } => {
                write!(f, "unsupported endpoint type '{endpoint_type}'")
            }
        }
    }
}

/// Result of processing one record or link.
#[derive(Debug)]
pub enum RecordOutcome {
    /// Written, or already present under its unique key
    Inserted,
    /// Not written because a reference could not be resolved
    Skipped {
        /// Why the record was skipped
        reason: SkipReason,
    },
    /// The database rejected the write
    Failed {
        /// Error returned by the database
        error: DbErr,
    },
}

impl RecordOutcome {
    /// Skipped outcome for a slug of kind `entity` that no earlier stage loaded
    pub fn unresolved(entity: &'static str, slug: &str) -> Self {
        Self::Skipped {
            reason: SkipReason::unresolved(entity, slug),
        }
    }
}

impl<T> From<Result<T, DbErr>> for RecordOutcome {
    fn from(result: Result<T, DbErr>) -> Self {
        match result {
            Ok(_) => Self::Inserted,
            Err(error) => Self::Failed { error },
        }
    }
}

/// Counts of outcomes of one kind of record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Written or already present
    pub processed: usize,
    /// Left out because a reference did not resolve
    pub skipped: usize,
    /// Rejected by the database and tolerated
    pub failed: usize,
}

/// Aggregated outcomes of a single stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// Stage the counts belong to
    pub stage: Stage,
    /// False when an optional stage's data file could not be loaded and the stage was skipped
    pub loaded: bool,
    /// Primary records of the stage
    pub records: Tally,
    /// Link sub-records: edition credits, reading path entries
    pub links: Tally,
}

impl StageReport {
    /// Empty report for a stage whose data file loaded
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            loaded: true,
            records: Tally::default(),
            links: Tally::default(),
        }
    }

    /// Report for an optional stage skipped because its data file could not be loaded
    pub fn not_loaded(stage: Stage) -> Self {
        Self {
            loaded: false,
            ..Self::new(stage)
        }
    }

    /// Tally the outcome of one primary record.
    ///
    /// # Returns
    /// - `Ok(())`: The outcome was counted and the stage may continue
    /// - `Err(SeedError::Persist)`: The record failed and the stage's persist policy is fatal
    pub fn tally(&mut self, key: &str, outcome: RecordOutcome) -> Result<(), SeedError> {
        match outcome {
            RecordOutcome::Inserted => self.records.processed += 1,
            RecordOutcome::Skipped { reason } => {
                self.records.skipped += 1;
                tracing::warn!(stage = %self.stage, record = key, %reason, "Skipped record");
            }
            RecordOutcome::Failed { error } => match self.stage.persist_policy() {
                FailurePolicy::Fatal => {
                    return Err(SeedError::Persist {
                        stage: self.stage,
                        key: key.to_string(),
                        source: error,
                    })
                }
                FailurePolicy::Warn => {
                    self.records.failed += 1;
                    tracing::warn!(
                        stage = %self.stage,
                        record = key,
                        error = %error,
                        "Failed to persist record"
                    );
                }
            },
        }

        Ok(())
    }

    /// Tally the outcome of a link belonging to `owner`. Link failures never abort the run.
    pub fn tally_link(&mut self, owner: &str, link: &str, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Inserted => self.links.processed += 1,
            RecordOutcome::Skipped { reason } => {
                self.links.skipped += 1;
                tracing::warn!(stage = %self.stage, record = owner, link, %reason, "Skipped link");
            }
            RecordOutcome::Failed { error } => {
                self.links.failed += 1;
                tracing::warn!(
                    stage = %self.stage,
                    record = owner,
                    link,
                    error = %error,
                    "Failed to persist link"
                );
            }
        }
    }

    /// Emit the stage's completion line.
    pub fn log(&self) {
        if !self.loaded {
            tracing::info!(stage = %self.stage, "Stage skipped");
            return;
        }

        tracing::info!(
            stage = %self.stage,
            processed = self.records.processed,
            skipped = self.records.skipped,
            failed = self.records.failed,
            links = self.links.processed,
            links_skipped = self.links.skipped,
            links_failed = self.links.failed,
            "Stage complete"
        );
    }
}
