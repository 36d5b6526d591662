//! Command interpreter.
//!
//! [`interpret`] takes one line of input and applies it to a session: it picks
//! the scenario rule that matches, renders the result message, applies the
//! rule's effects and always appends exactly one entry to the command log.
//!
//! Validation order:
//! 1. the command must start with `git`
//! 2. a solved exercise rejects everything
//! 3. the first matching scenario rule decides, unmatched subcommands are rejected
//!
//! Nothing in here returns an error for bad input. Every failure is a logged
//! rejection message.

use crate::core::command_parser::{CommandParser, ParsedCommand};
use crate::core::error::GraphError;
use crate::core::graph::{GraphEvent, GraphLog};
use crate::core::rules::{first_match, Effect, Rule, Verdict};
use crate::core::scenario::Scenario;
use crate::core::state::SessionState;
use crate::core::templates::{render_template, TemplateContext};
use log::{debug, warn};
use serde::Serialize;

pub const GIT_PREFIX: &str = "git";
pub const INVALID_PREFIX: &str = "Invalid command. Commands should start with 'git'.";
pub const ALREADY_COMPLETED: &str = "This exercise is already completed.";
pub const NOT_REQUIRED: &str = "git: '{sub}' is not a required command for this problem.";

/// What happened to a single submitted command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub verdict: Verdict,
    pub result: String,
    /// Graph event appended by this command
    pub event: Option<GraphEvent>,
    /// True only for the command that solved the exercise
    pub solved: bool,
}

impl Outcome {
    fn rejected(result: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Rejected,
            result: result.into(),
            event: None,
            solved: false,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }
}

/// Interpret `input` against `scenario`, updating `state` and `graph`
pub fn interpret(
    scenario: &Scenario,
    state: &mut SessionState,
    graph: &mut GraphLog,
    input: &str,
) -> Outcome {
    let command = CommandParser::parse(input);
    let branch = state.current_branch.clone();

    let outcome = evaluate(scenario, state, graph, &command);
    debug!(
        "'{}' on '{}' -> {:?}: {}",
        input.trim(),
        branch,
        outcome.verdict,
        outcome.result
    );

    state.record(input, outcome.result.clone(), branch);
    outcome
}

fn evaluate(
    scenario: &Scenario,
    state: &mut SessionState,
    graph: &mut GraphLog,
    command: &ParsedCommand,
) -> Outcome {
    if command.main != GIT_PREFIX {
        return Outcome::rejected(INVALID_PREFIX);
    }

    if state.input_locked {
        return Outcome::rejected(ALREADY_COMPLETED);
    }

    let context = TemplateContext {
        sub: command.sub(),
        arg: command.arg(),
        branch: &state.current_branch,
        message: &command.message,
    };

    let Some(rule) = first_match(&scenario.rules, command, state, graph) else {
        return Outcome::rejected(render_template(NOT_REQUIRED, &context));
    };

    let result = render_template(&rule.result, &context);
    if rule.verdict == Verdict::Rejected {
        return Outcome::rejected(result);
    }

    match apply(rule, state, graph, command) {
        Ok(event) => Outcome {
            verdict: Verdict::Accepted,
            result,
            event,
            solved: rule.completes,
        },
        Err(err) => {
            warn!("Scenario '{}' rule refused by graph: {err}", scenario.id);
            Outcome::rejected(format!("error: {err}"))
        }
    }
}

/// Apply an accepted rule. Either every effect is applied or none is.
fn apply(
    rule: &Rule,
    state: &mut SessionState,
    graph: &mut GraphLog,
    command: &ParsedCommand,
) -> Result<Option<GraphEvent>, GraphError> {
    let mut event = None;
    let mut switch_to = None;

    for effect in &rule.effects {
        match effect {
            Effect::Commit => {
                event = Some(GraphEvent::commit(&state.current_branch, &command.message));
            }
            Effect::MergeArgIntoCurrent => {
                event = Some(GraphEvent::merge(command.arg(), &state.current_branch));
            }
            Effect::SwitchToArg => {
                let target = command.arg();
                if !graph.has_branch(target) {
                    return Err(GraphError::unknown_branch(target));
                }
                switch_to = Some(target.to_string());
            }
            Effect::Stage | Effect::Unstage => {}
        }
    }

    if let Some(event) = &event {
        graph.validate(event)?;
    }

    for effect in &rule.effects {
        match effect {
            Effect::Stage => state.staged_changes = true,
            Effect::Unstage => state.staged_changes = false,
            _ => {}
        }
    }
    if let Some(branch) = switch_to {
        state.current_branch = branch;
    }
    if let Some(event) = &event {
        graph.append(event.clone())?;
    }
    if rule.completes {
        state.input_locked = true;
    }

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(scenario: &Scenario) -> (SessionState, GraphLog) {
        scenario.start().unwrap()
    }

    #[test]
    fn test_invalid_prefix_only_logs() {
        let scenario = Scenario::commit_exercise();
        let (mut state, mut graph) = start(&scenario);
        let before = state.clone();

        for input in ["svn commit", "", "   ", "gti add ."] {
            let outcome = interpret(&scenario, &mut state, &mut graph, input);
            assert_eq!(outcome.result, INVALID_PREFIX);
            assert!(!outcome.is_accepted());
        }

        assert_eq!(state.current_branch, before.current_branch);
        assert_eq!(state.staged_changes, before.staged_changes);
        assert_eq!(state.input_locked, before.input_locked);
        assert_eq!(state.command_log.len(), 4);
        assert_eq!(graph.len(), scenario.seed.len());
    }

    #[test]
    fn test_unknown_subcommand() {
        let scenario = Scenario::commit_exercise();
        let (mut state, mut graph) = start(&scenario);

        let outcome = interpret(&scenario, &mut state, &mut graph, "git push origin master");
        assert_eq!(outcome.result, "git: 'push' is not a required command for this problem.");

        let outcome = interpret(&scenario, &mut state, &mut graph, "git");
        assert_eq!(outcome.result, "git: '' is not a required command for this problem.");
    }

    #[test]
    fn test_commit_flow() {
        let scenario = Scenario::commit_exercise();
        let (mut state, mut graph) = start(&scenario);

        let outcome = interpret(&scenario, &mut state, &mut graph, "git add .");
        assert_eq!(outcome.result, "Files added to staging area");
        assert!(state.staged_changes);

        let outcome = interpret(&scenario, &mut state, &mut graph, "git commit -m \"done\"");
        assert_eq!(outcome.result, "Committed with message: \"done\"");
        assert_eq!(outcome.event, Some(GraphEvent::commit("master", "done")));
        assert!(outcome.solved);
        assert!(!state.staged_changes);
        assert!(state.input_locked);
        assert_eq!(graph.events().last(), Some(&GraphEvent::commit("master", "done")));
    }

    #[test]
    fn test_commit_requires_message_before_staging_check() {
        let scenario = Scenario::commit_exercise();
        let (mut state, mut graph) = start(&scenario);

        let outcome = interpret(&scenario, &mut state, &mut graph, "git commit");
        assert_eq!(
            outcome.result,
            "git: 'commit' requires a commit message (-m \"message\")."
        );

        let outcome = interpret(&scenario, &mut state, &mut graph, "git commit -m \"x\"");
        assert_eq!(outcome.result, "No files added to commit");
        assert_eq!(outcome.event, None);
        assert_eq!(graph.len(), scenario.seed.len());
    }

    #[test]
    fn test_locked_session_rejects_but_logs() {
        let scenario = Scenario::commit_exercise();
        let (mut state, mut graph) = start(&scenario);
        interpret(&scenario, &mut state, &mut graph, "git add .");
        interpret(&scenario, &mut state, &mut graph, "git commit -m done");

        let outcome = interpret(&scenario, &mut state, &mut graph, "git add .");
        assert_eq!(outcome.result, ALREADY_COMPLETED);
        assert!(!state.staged_changes);
        assert_eq!(state.command_log.len(), 3);

        let outcome = interpret(&scenario, &mut state, &mut graph, "ls");
        assert_eq!(outcome.result, INVALID_PREFIX);
    }

    #[test]
    fn test_log_records_branch_at_call_time() {
        let scenario = Scenario::merge_exercise();
        let (mut state, mut graph) = start(&scenario);

        let outcome = interpret(&scenario, &mut state, &mut graph, "git switch master");
        assert_eq!(outcome.result, "Switched to branch 'master'");
        assert_eq!(state.current_branch, "master");
        assert_eq!(state.command_log[0].branch, "develop");
        assert_eq!(state.command_log[0].command, "git switch master");
    }

    #[test]
    fn test_graph_refusal_becomes_rejection() {
        let mut scenario = Scenario::merge_exercise();
        scenario.rules.insert(
            0,
            Rule::accept(&["merge"], "Merged '{arg}'").then(Effect::MergeArgIntoCurrent),
        );
        let (mut state, mut graph) = start(&scenario);

        let outcome = interpret(&scenario, &mut state, &mut graph, "git merge hotfix");
        assert_eq!(outcome.result, "error: branch 'hotfix' does not exist");
        assert!(!outcome.is_accepted());
        assert!(!state.input_locked);
        assert_eq!(graph.len(), scenario.seed.len());
        assert_eq!(state.command_log.len(), 1);
    }

    #[test]
    fn test_switch_effect_refuses_missing_branch() {
        let mut scenario = Scenario::merge_exercise();
        scenario.rules = vec![Rule::accept(&["checkout"], "ok").then(Effect::SwitchToArg)];
        let (mut state, mut graph) = start(&scenario);

        let outcome = interpret(&scenario, &mut state, &mut graph, "git checkout");
        assert_eq!(outcome.result, "error: branch '' does not exist");
        assert_eq!(state.current_branch, "develop");
    }
}
