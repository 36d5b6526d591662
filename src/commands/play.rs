use crate::commands::terminal::TerminalObserver;
use crate::core::{
    command_init::ScenarioCommandInit, error::Result, format_prompt, print_graph, print_info,
    print_problem, Session,
};
use std::io::{self, BufRead, Write};

const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

pub fn execute_play(scenario_id: &str) -> Result<()> {
    let context = ScenarioCommandInit::initialize()?;
    let session = context.open_session(scenario_id)?;
    let stdin = io::stdin();
    play_session(session, stdin.lock(), context.config.show_graph)?;
    Ok(())
}

/// Run the prompt loop until the exercise is solved, the input ends or the
/// learner types `exit`. Returns the finished session.
pub fn play_session<R: BufRead>(mut session: Session, reader: R, show_graph: bool) -> Result<Session> {
    let layout = session.layout();
    print_problem(session.scenario());
    print_graph(&layout);
    println!();

    session.subscribe(Box::new(TerminalObserver::new(false, show_graph, layout)));

    let mut lines = reader.lines();
    while !session.is_solved() {
        let layout = session.layout();
        let branch = &session.state().current_branch;
        print!("{}", format_prompt(branch, layout.lane_of(branch)));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if EXIT_COMMANDS.contains(&input) {
            break;
        }

        session.submit(&line);
    }

    if session.is_solved() {
        session.dismiss_notification();
    } else {
        print_info(&format!(
            "Exercise '{}' left unsolved after {} command(s).",
            session.scenario().id,
            session.state().command_log.len()
        ));
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scenario;
    use std::io::Cursor;

    #[test]
    fn test_play_stops_when_solved() {
        let session = Session::new(Scenario::merge_exercise()).unwrap();
        let input = Cursor::new("git merge develop\n\ngit checkout master\ngit merge develop\ngit status\n");

        let session = play_session(session, input, false).unwrap();
        assert!(session.is_solved());
        assert_eq!(session.state().command_log.len(), 3);
        assert_eq!(session.state().current_branch, "master");
        assert_eq!(session.notification().shown, 1);
        assert!(!session.notification().visible);
    }

    #[test]
    fn test_play_exit_and_eof() {
        let session = Session::new(Scenario::commit_exercise()).unwrap();
        let session = play_session(session, Cursor::new("git add .\nexit\ngit commit -m x\n"), false).unwrap();
        assert!(!session.is_solved());
        assert_eq!(session.state().command_log.len(), 1);

        let session = Session::new(Scenario::commit_exercise()).unwrap();
        let session = play_session(session, Cursor::new(""), false).unwrap();
        assert!(session.state().command_log.is_empty());
    }
}
