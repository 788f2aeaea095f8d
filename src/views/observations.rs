use crate::analyzers::InsightSet;

/// Key observations view: the ranked insight text.
pub fn render_observations(insights: &InsightSet) -> String {
    format!("=== Key Observations ===\n{}", insights.render())
}
