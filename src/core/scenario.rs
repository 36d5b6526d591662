//! Exercise descriptors.
//!
//! A [`Scenario`] bundles everything that makes one exercise different from
//! another: the graph the learner starts from, the branch they start on, the
//! problem statement and the rule table the interpreter evaluates.

use crate::core::error::{Result, TrainerError};
use crate::core::graph::{GraphEvent, GraphLog};
use crate::core::rules::{Effect, Guard, Rule};
use crate::core::state::SessionState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    /// Breadcrumb shown above the problem, e.g. "Git basics > Commit"
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    pub seed: Vec<GraphEvent>,
    pub initial_branch: String,
    pub rules: Vec<Rule>,
}

impl Scenario {
    /// Check the seed graph and starting branch, returning the seeded graph
    pub fn validate(&self) -> Result<GraphLog> {
        if self.rules.is_empty() {
            return Err(TrainerError::EmptyRuleTable {
                id: self.id.clone(),
            });
        }
        let graph = GraphLog::from_events(self.seed.iter().cloned())
            .map_err(|source| TrainerError::invalid_seed_graph(&self.id, source))?;
        if !graph.has_branch(&self.initial_branch) {
            return Err(TrainerError::unknown_initial_branch(
                &self.id,
                &self.initial_branch,
            ));
        }
        Ok(graph)
    }

    /// Fresh state and graph for a new attempt at this exercise
    pub fn start(&self) -> Result<(SessionState, GraphLog)> {
        let graph = self.validate()?;
        Ok((SessionState::new(&self.initial_branch), graph))
    }

    /// Subcommands this exercise understands, in rule order
    pub fn subcommands(&self) -> Vec<&str> {
        let mut subcommands: Vec<&str> = Vec::new();
        for rule in &self.rules {
            for sub in &rule.subcommands {
                if !subcommands.contains(&sub.as_str()) {
                    subcommands.push(sub);
                }
            }
        }
        subcommands
    }

    /// The commit exercise: stage everything on `master` and commit it
    pub fn commit_exercise() -> Self {
        Self {
            id: "commit".to_string(),
            title: "Commit".to_string(),
            category: "Git basics > Commit".to_string(),
            description: vec![
                "You are a developer working on a website project.".to_string(),
                "Two commits have been made on the master branch.".to_string(),
                "Commit every file in the current directory.".to_string(),
            ],
            constraints: vec!["The commit message can be anything you like.".to_string()],
            seed: vec![
                GraphEvent::root("master"),
                GraphEvent::commit("master", "Initial commit"),
                GraphEvent::commit("master", "Second commit"),
            ],
            initial_branch: "master".to_string(),
            rules: vec![
                Rule::accept(&["add"], "Files are already staged")
                    .when(Guard::ArgEquals(".".to_string()))
                    .when(Guard::Staged),
                Rule::accept(&["add"], "Files added to staging area")
                    .when(Guard::ArgEquals(".".to_string()))
                    .then(Effect::Stage),
                Rule::reject(&["add"], "git add . is the only allowed add command in this problem."),
                Rule::reject(&["commit"], "git: '{sub}' requires a commit message (-m \"message\").")
                    .when(Guard::MessageEmpty),
                Rule::reject(&["commit"], "No files added to commit").when(Guard::NotStaged),
                Rule::accept(&["commit"], "Committed with message: \"{message}\"")
                    .then(Effect::Commit)
                    .then(Effect::Unstage)
                    .completing(),
            ],
        }
    }

    /// The merge exercise: bring `develop` into `master`
    pub fn merge_exercise() -> Self {
        Self {
            id: "merge".to_string(),
            title: "Merge".to_string(),
            category: "Git intermediate > Merge".to_string(),
            description: vec![
                "You are a developer working on a website project.".to_string(),
                "The master branch holds the stable version and new features are developed on develop.".to_string(),
                "The develop branch was created from master.".to_string(),
                "Two features were implemented on develop: a search box component and a search api.".to_string(),
                "Merge the changes on develop into master so the stable version includes them.".to_string(),
            ],
            constraints: vec![
                "Every branch is up to date.".to_string(),
                "You are currently on the develop branch.".to_string(),
                "Assume no conflicts occur.".to_string(),
            ],
            seed: vec![
                GraphEvent::root("master"),
                GraphEvent::commit("master", "Initial commit"),
                GraphEvent::branch("develop", "master"),
                GraphEvent::commit("develop", "Build search box component"),
                GraphEvent::commit("develop", "Implement search api"),
                GraphEvent::commit("master", "Refactor home page"),
            ],
            initial_branch: "develop".to_string(),
            rules: vec![
                Rule::reject(&["checkout", "switch"], "git: '{sub}' requires a branch name.")
                    .when(Guard::ArgMissing),
                Rule::reject(
                    &["checkout", "switch"],
                    "error: pathspec '{arg}' did not match any file(s) known to git",
                )
                .when(Guard::ArgIsUnknownBranch),
                Rule::accept(&["checkout", "switch"], "Already on '{arg}'")
                    .when(Guard::ArgIsCurrentBranch),
                Rule::accept(&["checkout", "switch"], "Switched to branch '{arg}'")
                    .then(Effect::SwitchToArg),
                Rule::reject(&["merge"], "git: '{sub}' requires a branch name.")
                    .when(Guard::ArgMissing),
                Rule::reject(&["merge"], "error: Cannot merge {arg} into itself.")
                    .when(Guard::ArgIsCurrentBranch),
                Rule::accept(&["merge"], "Merged branch '{arg}' into '{branch}'")
                    .when(Guard::ArgEquals("develop".to_string()))
                    .then(Effect::MergeArgIntoCurrent)
                    .completing(),
                Rule::reject(&["merge"], "error: '{arg}' is not a valid branch."),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GraphError;

    #[test]
    fn test_builtin_scenarios_validate() {
        for scenario in [Scenario::commit_exercise(), Scenario::merge_exercise()] {
            let graph = scenario.validate().unwrap();
            assert_eq!(graph.len(), scenario.seed.len());
        }
    }

    #[test]
    fn test_start_uses_initial_branch() {
        let (state, graph) = Scenario::merge_exercise().start().unwrap();
        assert_eq!(state.current_branch, "develop");
        assert!(!state.staged_changes);
        assert!(!state.input_locked);
        assert!(state.command_log.is_empty());
        assert_eq!(graph.branch_names(), vec!["master", "develop"]);
    }

    #[test]
    fn test_subcommands_deduplicated() {
        assert_eq!(Scenario::commit_exercise().subcommands(), vec!["add", "commit"]);
        assert_eq!(
            Scenario::merge_exercise().subcommands(),
            vec!["checkout", "switch", "merge"]
        );
    }

    #[test]
    fn test_invalid_seed_rejected() {
        let mut scenario = Scenario::commit_exercise();
        scenario.seed.insert(1, GraphEvent::commit("main", "oops"));
        let err = scenario.validate().unwrap_err();
        assert!(matches!(
            err,
            TrainerError::InvalidSeedGraph {
                source: GraphError::UnknownBranch { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_initial_branch_rejected() {
        let mut scenario = Scenario::commit_exercise();
        scenario.initial_branch = "main".to_string();
        assert!(matches!(
            scenario.validate(),
            Err(TrainerError::UnknownInitialBranch { .. })
        ));
    }

    #[test]
    fn test_empty_rule_table_rejected() {
        let mut scenario = Scenario::merge_exercise();
        scenario.rules.clear();
        assert!(matches!(
            scenario.validate(),
            Err(TrainerError::EmptyRuleTable { .. })
        ));
    }
}
