use crate::core::calculator::projection::GoalProjection;
use crate::core::calculator::weeks::WeekGroup;

/// Aggregated view-model consumed by `list`, `report` and the exports:
/// the week-grouped table plus the goal summary block.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub weeks: Vec<WeekGroup>,
    pub projection: GoalProjection,
}
