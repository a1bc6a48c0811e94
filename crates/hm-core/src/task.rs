//! Task type tag shared by the world state, task machines, and the registry.

/// What an agent has been told to do.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TaskType {
    /// No task; the agent accepts manual move commands.
    #[default]
    Idle,
    /// Walk to a gold mine, mine, carry the gold home, rest, repeat.
    MineGold,
    /// Walk to a tree, chop, carry the wood home, rest, repeat.
    ChopWood,
}

impl TaskType {
    /// `true` for the cyclic gather tasks.
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, TaskType::Idle)
    }

    /// Label matching the world-file spelling, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Idle     => "idle",
            TaskType::MineGold => "mine_gold",
            TaskType::ChopWood => "chop_wood",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
