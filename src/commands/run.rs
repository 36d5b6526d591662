use crate::commands::terminal::TerminalObserver;
use crate::core::{
    command_init::ScenarioCommandInit,
    error::{Result, TrainerError},
    print_graph, print_info, print_success, Session,
};
use std::path::Path;

/// Submit a fixed list of commands and print the transcript, or a JSON snapshot
/// when `json` is set
pub fn execute_run(
    scenario_id: &str,
    commands: Vec<String>,
    script: Option<&Path>,
    json: bool,
) -> Result<()> {
    let context = ScenarioCommandInit::initialize()?;
    let mut session = context.open_session(scenario_id)?;

    let mut inputs = commands;
    if let Some(script) = script {
        inputs.extend(read_script(script)?);
    }

    if inputs.is_empty() {
        return Err(TrainerError::NoCommands);
    }

    if !json {
        let layout = session.layout();
        session.subscribe(Box::new(TerminalObserver::new(true, false, layout)));
    }

    submit_all(&mut session, &inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        return Ok(());
    }

    if context.config.show_graph {
        print_graph(&session.layout());
    }
    if session.is_solved() {
        print_success(&format!("Exercise '{}' solved.", session.scenario().id));
    } else {
        print_info(&format!("Exercise '{}' not solved yet.", session.scenario().id));
    }

    Ok(())
}

/// Submit every input in order. The success notification is dismissed once
/// the observers have shown it.
fn submit_all(session: &mut Session, inputs: &[String]) {
    for input in inputs {
        if session.submit(input).solved {
            session.dismiss_notification();
        }
    }
}

/// One command per line; blank lines and lines starting with `#` are skipped
pub fn read_script(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TrainerError::script_read_failed(path, e))?;
    Ok(parse_script(&content))
}

fn parse_script(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scenario;

    #[test]
    fn test_parse_script_skips_comments_and_blanks() {
        let script = "# solve the merge exercise\ngit checkout master\n\n  git merge develop  \n";
        assert_eq!(
            parse_script(script),
            vec!["git checkout master".to_string(), "git merge develop".to_string()]
        );
    }

    #[test]
    fn test_submit_all_dismisses_notification_after_success() {
        let mut session = Session::new(Scenario::commit_exercise()).unwrap();
        let inputs = vec!["git add .".to_string(), "git commit -m \"done\"".to_string()];

        submit_all(&mut session, &inputs);
        assert!(session.is_solved());
        assert_eq!(session.notification().shown, 1);
        assert!(!session.notification().visible);
    }

    #[test]
    fn test_read_script_missing_file() {
        let err = read_script(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
