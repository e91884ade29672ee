//! The stages of a seed run and their failure policies.

use std::fmt;

/// What to do when a stage hits a failure of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the run
    Fatal,
    /// Log a warning and carry on
    Warn,
}

/// One pass over one entity type's data file.
///
/// Variants are declared in dependency order; [`Stage::ALL`] is the order the pipeline runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Publishing eras
    Eras,
    /// Writers and artists
    Creators,
    /// Characters, independent of every other stage
    Characters,
    /// Collected editions and their creator credits
    CollectedEditions,
    /// Links between collected editions
    Connections,
    /// Known continuity conflicts
    ContinuityConflicts,
    /// Story arcs, optionally within an era
    StoryArcs,
    /// Crossover events, optionally within an era
    Events,
    /// Reading paths and their ordered entries
    ReadingPaths,
    /// Places to buy editions
    Retailers,
    /// External reference resources
    Resources,
}

impl Stage {
    /// Every stage, in the order the pipeline runs them
    pub const ALL: [Stage; 11] = [
        Stage::Eras,
        Stage::Creators,
        Stage::Characters,
        Stage::CollectedEditions,
        Stage::Connections,
        Stage::ContinuityConflicts,
        Stage::StoryArcs,
        Stage::Events,
        Stage::ReadingPaths,
        Stage::Retailers,
        Stage::Resources,
    ];

    /// Name of the stage's data file within the data directory
    pub fn file_name(self) -> &'static str {
        match self {
            Stage::Eras => "eras.json",
            Stage::Creators => "creators.json",
            Stage::Characters => "characters.json",
            Stage::CollectedEditions => "collected_editions.json",
            Stage::Connections => "connections.json",
            Stage::ContinuityConflicts => "continuity_conflicts.json",
            Stage::StoryArcs => "story_arcs.json",
            Stage::Events => "events.json",
            Stage::ReadingPaths => "reading_paths.json",
            Stage::Retailers => "retailers.json",
            Stage::Resources => "resources.json",
        }
    }

    /// Policy applied when the data file is missing, unreadable or malformed
    pub fn load_policy(self) -> FailurePolicy {
        match self {
            Stage::StoryArcs | Stage::Events => FailurePolicy::Warn,
            _ => FailurePolicy::Fatal,
        }
    }

    /// Policy applied when persisting one of the stage's primary records fails
    ///
    /// Link sub-records (edition credits, reading path entries) always warn.
    pub fn persist_policy(self) -> FailurePolicy {
        match self {
            Stage::Connections | Stage::StoryArcs | Stage::Events | Stage::Resources => {
                FailurePolicy::Warn
            }
            _ => FailurePolicy::Fatal,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Eras => "eras",
            Stage::Creators => "creators",
            Stage::Characters => "characters",
            Stage::CollectedEditions => "collected editions",
            Stage::Connections => "connections",
            Stage::ContinuityConflicts => "continuity conflicts",
            Stage::StoryArcs => "story arcs",
            Stage::Events => "events",
            Stage::ReadingPaths => "reading paths",
            Stage::Retailers => "retailers",
            Stage::Resources => "resources",
        };

        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editions_run_after_their_dependencies() {
        let position = |stage| Stage::ALL.iter().position(|s| *s == stage).unwrap();

        assert!(position(Stage::Eras) < position(Stage::CollectedEditions));
        assert!(position(Stage::Creators) < position(Stage::CollectedEditions));
        assert!(position(Stage::CollectedEditions) < position(Stage::Connections));
        assert!(position(Stage::CollectedEditions) < position(Stage::ReadingPaths));
    }

    #[test]
    fn only_story_arcs_and_events_tolerate_load_failures() {
        let tolerant: Vec<Stage> = Stage::ALL
            .into_iter()
            .filter(|stage| stage.load_policy() == FailurePolicy::Warn)
            .collect();

        assert_eq!(tolerant, vec![Stage::StoryArcs, Stage::Events]);
    }

    #[test]
    fn core_stages_abort_on_persist_failure() {
        for stage in [
            Stage::Eras,
            Stage::Creators,
            Stage::Characters,
            Stage::CollectedEditions,
            Stage::ContinuityConflicts,
            Stage::ReadingPaths,
            Stage::Retailers,
        ] {
            assert_eq!(stage.persist_policy(), FailurePolicy::Fatal, "{stage}");
        }

        assert_eq!(Stage::Connections.persist_policy(), FailurePolicy::Warn);
    }
}
