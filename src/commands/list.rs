use crate::core::{command_init::ScenarioCommandInit, error::Result, print_section_header, Scenario};
use colored::*;

pub fn execute_list() -> Result<()> {
    let context = ScenarioCommandInit::initialize()?;

    print_section_header("Exercises");
    for scenario in context.catalog.scenarios() {
        println!("{}", format_scenario_line(scenario));
    }
    println!();

    Ok(())
}

/// `  commit    Commit (Git basics > Commit) [add, commit]`
pub fn format_scenario_line(scenario: &Scenario) -> String {
    let category = if scenario.category.is_empty() {
        String::new()
    } else {
        format!(" {}", format!("({})", scenario.category).bright_black())
    };
    format!(
        "  {}{}{} {}",
        format!("{:<10}", scenario.id).blue(),
        scenario.title.white(),
        category,
        format!("[{}]", scenario.subcommands().join(", ")).bright_black()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strip_ansi_codes;

    #[test]
    fn test_format_scenario_line() {
        let line = strip_ansi_codes(&format_scenario_line(&Scenario::merge_exercise()));
        assert_eq!(
            line,
            "  merge     Merge (Git intermediate > Merge) [checkout, switch, merge]"
        );
    }
}
