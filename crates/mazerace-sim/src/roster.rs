//! Agent line-ups for a race.

use mazerace_core::Color;
use mazerace_search::StrategyKind;

/// Everything needed to field one agent: display name, team color and
/// the strategy it runs.
#[derive(Debug, Clone)]
pub struct AgentSpec {
    pub name: String,
    pub color: Color,
    pub kind: StrategyKind,
}

impl AgentSpec {
    pub fn new(name: impl Into<String>, color: Color, kind: StrategyKind) -> Self {
        Self {
            name: name.into(),
            color,
            kind,
        }
    }
}

/// The canonical four-team line-up with the classic team colors.
pub fn default_roster() -> Vec<AgentSpec> {
    vec![
        AgentSpec::new(
            "Dijkstra",
            Color::from_rgb(220, 50, 50),
            StrategyKind::UniformCost,
        ),
        AgentSpec::new("A*", Color::from_rgb(50, 180, 50), StrategyKind::BestFirst),
        AgentSpec::new("BFS", Color::from_rgb(50, 50, 220), StrategyKind::BreadthFirst),
        AgentSpec::new("DFS", Color::from_rgb(220, 180, 50), StrategyKind::DepthFirst),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_covers_every_strategy() {
        let roster = default_roster();
        assert_eq!(roster.len(), 4);
        for kind in [
            StrategyKind::UniformCost,
            StrategyKind::BestFirst,
            StrategyKind::BreadthFirst,
            StrategyKind::DepthFirst,
        ] {
            assert!(roster.iter().any(|a| a.kind == kind));
        }
        // Names and colors are distinct.
        for i in 0..roster.len() {
            for j in i + 1..roster.len() {
                assert_ne!(roster[i].name, roster[j].name);
                assert_ne!(roster[i].color, roster[j].color);
            }
        }
    }
}
