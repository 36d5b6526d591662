//! Lane layout for the commit graph.
//!
//! Each branch owns a lane (a column) and every commit sits at a position along
//! that lane. The layout is recomputed from the full event log, so it always
//! matches what the log says.

use crate::core::graph::GraphEvent;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lane {
    pub index: usize,
    pub branch: String,
    /// Position on the parent's lane where this branch forked off
    pub start: usize,
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Commit,
    Merge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub lane: usize,
    pub position: usize,
    pub kind: NodeKind,
    pub label: String,
}

/// Connection drawn between two lanes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from_lane: usize,
    pub from_position: usize,
    pub to_lane: usize,
    pub to_position: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphLayout {
    pub lanes: Vec<Lane>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, Copy)]
struct Cursor {
    lane: usize,
    position: usize,
}

impl GraphLayout {
    /// Lay out `events` in log order.
    ///
    /// A new branch gets the lane directly right of its parent; lanes already
    /// on that side move one column over. Events naming a branch the layout
    /// has not seen are skipped; the graph model never lets such events into a
    /// log.
    pub fn compute(events: &[GraphEvent]) -> Self {
        let mut layout = Self::default();
        let mut cursors: HashMap<&str, Cursor> = HashMap::new();
        // Lane ids in column order. Ids are creation order until `renumber_lanes`.
        let mut columns: Vec<usize> = Vec::new();

        for event in events {
            match event {
                GraphEvent::BranchCreated { name, from } => {
                    if cursors.contains_key(name.as_str()) {
                        continue;
                    }
                    let parent = match from {
                        None => None,
                        Some(parent) => match cursors.get(parent.as_str()) {
                            Some(cursor) => Some(*cursor),
                            None => continue,
                        },
                    };
                    let start = parent.map_or(0, |cursor| cursor.position);
                    let lane = layout.lanes.len();
                    layout.lanes.push(Lane {
                        index: lane,
                        branch: name.clone(),
                        start,
                        parent: from.clone(),
                    });

                    let column = parent
                        .and_then(|cursor| columns.iter().position(|&id| id == cursor.lane))
                        .map_or(columns.len(), |column| column + 1);
                    columns.insert(column, lane);

                    if let Some(cursor) = parent {
                        layout.edges.push(Edge {
                            from_lane: cursor.lane,
                            from_position: start,
                            to_lane: lane,
                            to_position: start,
                        });
                    }
                    cursors.insert(
                        name.as_str(),
                        Cursor {
                            lane,
                            position: start,
                        },
                    );
                }
                GraphEvent::CommitAdded { branch, message } => {
                    let Some(cursor) = cursors.get_mut(branch.as_str()) else {
                        continue;
                    };
                    cursor.position += 1;
                    layout.nodes.push(Node {
                        lane: cursor.lane,
                        position: cursor.position,
                        kind: NodeKind::Commit,
                        label: message.clone(),
                    });
                }
                GraphEvent::Merged { from, to } => {
                    let (Some(source), Some(target)) =
                        (cursors.get(from.as_str()).copied(), cursors.get(to.as_str()).copied())
                    else {
                        continue;
                    };
                    let position = source.position.max(target.position) + 1;
                    layout.edges.push(Edge {
                        from_lane: source.lane,
                        from_position: source.position,
                        to_lane: target.lane,
                        to_position: position,
                    });
                    layout.nodes.push(Node {
                        lane: target.lane,
                        position,
                        kind: NodeKind::Merge,
                        label: format!("Merge branch '{from}' into '{to}'"),
                    });
                    if let Some(cursor) = cursors.get_mut(to.as_str()) {
                        cursor.position = position;
                    }
                }
            }
        }

        layout.renumber_lanes(&columns);
        layout
    }

    /// Renumber lanes from creation order to column order
    fn renumber_lanes(&mut self, columns: &[usize]) {
        let mut column_of = vec![0; columns.len()];
        for (column, &id) in columns.iter().enumerate() {
            column_of[id] = column;
        }

        for lane in &mut self.lanes {
            lane.index = column_of[lane.index];
        }
        self.lanes.sort_by_key(|lane| lane.index);
        for node in &mut self.nodes {
            node.lane = column_of[node.lane];
        }
        for edge in &mut self.edges {
            edge.from_lane = column_of[edge.from_lane];
            edge.to_lane = column_of[edge.to_lane];
        }
    }

    pub fn lane_of(&self, branch: &str) -> Option<usize> {
        self.lanes
            .iter()
            .find(|lane| lane.branch == branch)
            .map(|lane| lane.index)
    }

    /// Highest position occupied by any node or fork point
    pub fn height(&self) -> usize {
        let nodes = self.nodes.iter().map(|node| node.position);
        let forks = self.lanes.iter().map(|lane| lane.start);
        nodes.chain(forks).max().unwrap_or(0)
    }

    /// Last position reached on `lane`
    pub fn tip(&self, lane: usize) -> Option<usize> {
        let start = self.lanes.get(lane)?.start;
        let last = self
            .nodes
            .iter()
            .filter(|node| node.lane == lane)
            .map(|node| node.position)
            .max();
        Some(last.unwrap_or(start).max(start))
    }

    pub fn node_at(&self, lane: usize, position: usize) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|node| node.lane == lane && node.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge_seed() -> Vec<GraphEvent> {
        vec![
            GraphEvent::root("master"),
            GraphEvent::commit("master", "Initial commit"),
            GraphEvent::branch("develop", "master"),
            GraphEvent::commit("develop", "Build search box"),
            GraphEvent::commit("develop", "Implement search api"),
            GraphEvent::commit("master", "Refactor home page"),
        ]
    }

    #[test]
    fn test_branch_forks_at_parent_position() {
        let layout = GraphLayout::compute(&merge_seed());
        assert_eq!(layout.lanes.len(), 2);
        assert_eq!(layout.lane_of("master"), Some(0));
        assert_eq!(layout.lane_of("develop"), Some(1));
        assert_eq!(layout.lanes[1].start, 1);
        assert_eq!(layout.lanes[1].parent.as_deref(), Some("master"));
    }

    #[test]
    fn test_commits_advance_their_own_lane() {
        let layout = GraphLayout::compute(&merge_seed());
        let positions: Vec<_> = layout
            .nodes
            .iter()
            .map(|node| (node.lane, node.position))
            .collect();
        assert_eq!(positions, vec![(0, 1), (1, 2), (1, 3), (0, 2)]);
        assert_eq!(layout.tip(0), Some(2));
        assert_eq!(layout.tip(1), Some(3));
    }

    #[test]
    fn test_merge_connects_lanes_after_both_tips() {
        let mut events = merge_seed();
        events.push(GraphEvent::merge("develop", "master"));
        let layout = GraphLayout::compute(&events);

        let merge = layout.nodes.last().unwrap();
        assert_eq!(merge.kind, NodeKind::Merge);
        assert_eq!((merge.lane, merge.position), (0, 4));
        assert_eq!(
            layout.edges.last(),
            Some(&Edge {
                from_lane: 1,
                from_position: 3,
                to_lane: 0,
                to_position: 4,
            })
        );
        assert_eq!(layout.height(), 4);
    }

    fn sibling_forks() -> Vec<GraphEvent> {
        vec![
            GraphEvent::root("master"),
            GraphEvent::commit("master", "Initial commit"),
            GraphEvent::branch("develop", "master"),
            GraphEvent::branch("feature", "develop"),
            GraphEvent::branch("hotfix", "master"),
        ]
    }

    #[test]
    fn test_new_lane_sits_right_of_parent() {
        let layout = GraphLayout::compute(&sibling_forks());
        let branches: Vec<_> = layout.lanes.iter().map(|lane| lane.branch.as_str()).collect();
        assert_eq!(branches, vec!["master", "hotfix", "develop", "feature"]);
        for (column, lane) in layout.lanes.iter().enumerate() {
            assert_eq!(lane.index, column);
        }
        assert_eq!(layout.lane_of("hotfix"), Some(1));
        assert_eq!(layout.lane_of("feature"), Some(3));
    }

    #[test]
    fn test_shifted_lanes_keep_their_nodes_and_edges() {
        let mut events = sibling_forks();
        events.push(GraphEvent::commit("develop", "Add search"));
        events.push(GraphEvent::commit("hotfix", "Fix typo"));
        events.push(GraphEvent::merge("hotfix", "master"));
        let layout = GraphLayout::compute(&events);

        let develop = layout.lane_of("develop").unwrap();
        let hotfix = layout.lane_of("hotfix").unwrap();
        assert_eq!((develop, hotfix), (2, 1));
        assert_eq!(layout.node_at(develop, 2).map(|n| n.label.as_str()), Some("Add search"));
        assert_eq!(layout.node_at(hotfix, 2).map(|n| n.label.as_str()), Some("Fix typo"));

        let forks: Vec<_> = layout
            .edges
            .iter()
            .filter(|edge| edge.from_position == edge.to_position)
            .map(|edge| (edge.from_lane, edge.to_lane))
            .collect();
        assert_eq!(forks, vec![(0, 2), (2, 3), (0, 1)]);
        assert_eq!(
            layout.edges.last(),
            Some(&Edge {
                from_lane: 1,
                from_position: 2,
                to_lane: 0,
                to_position: 3,
            })
        );
    }

    #[test]
    fn test_unknown_branches_skipped() {
        let layout = GraphLayout::compute(&[
            GraphEvent::root("master"),
            GraphEvent::commit("ghost", "lost"),
            GraphEvent::merge("ghost", "master"),
        ]);
        assert!(layout.nodes.is_empty());
        assert_eq!(layout.edges.len(), 0);
    }

    #[test]
    fn test_empty_log() {
        let layout = GraphLayout::compute(&[]);
        assert_eq!(layout, GraphLayout::default());
        assert_eq!(layout.height(), 0);
        assert_eq!(layout.tip(0), None);
    }
}
