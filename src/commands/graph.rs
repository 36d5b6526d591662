use crate::core::{
    command_init::ScenarioCommandInit, error::Result, print_graph, GraphEvent, GraphLayout,
};
use serde::Serialize;

#[derive(Serialize)]
struct GraphDump<'a> {
    scenario: &'a str,
    initial_branch: &'a str,
    events: &'a [GraphEvent],
    layout: GraphLayout,
}

/// Print the starting graph of a scenario
pub fn execute_graph(scenario_id: &str, json: bool) -> Result<()> {
    let context = ScenarioCommandInit::initialize()?;
    let scenario = context.catalog.find(scenario_id)?;
    let layout = GraphLayout::compute(&scenario.seed);

    if json {
        let dump = GraphDump {
            scenario: &scenario.id,
            initial_branch: &scenario.initial_branch,
            events: &scenario.seed,
            layout,
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        print_graph(&layout);
        println!();
    }

    Ok(())
}
