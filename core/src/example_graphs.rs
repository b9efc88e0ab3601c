use crate::{types::InteractionRecord, InteractionGraph};

/// Agents and interactions as written by a small simulation run.
///
/// Every collaboration is reported by both participants, so each pair occurs
/// twice with reversed orientation.
pub(crate) fn simulation_reports() -> (Vec<String>, Vec<InteractionRecord>) {
    let agents = vec![
        "Engineer1".to_string(),
        "Engineer2".to_string(),
        "Scientist1".to_string(),
        "Manager1".to_string(),
    ];
    let interactions = vec![
        InteractionRecord::new("Engineer1", "Scientist1", 3.0),
        InteractionRecord::new("Engineer1", "Engineer2", 1.0),
        InteractionRecord::new("Engineer2", "Engineer1", 1.0),
        InteractionRecord::new("Scientist1", "Engineer1", 3.0),
    ];
    (agents, interactions)
}

pub(crate) fn create_simulation_graph() -> InteractionGraph {
    let (agents, interactions) = simulation_reports();
    InteractionGraph::from_records(&agents, &interactions)
}
