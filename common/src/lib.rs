pub mod log_analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RoundWinner {
    CT,
    T,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct RosterEntry {
    pub steamid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundEvent {
    pub at: chrono::NaiveDateTime,
    pub event: String,
}

/// One completed round, as handed to consumers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundRecord {
    pub number: usize,
    pub winner: Option<RoundWinner>,
    pub started_at: Option<chrono::NaiveDateTime>,
    pub ended_at: Option<chrono::NaiveDateTime>,
    pub terrorists: Vec<RosterEntry>,
    pub counter_terrorists: Vec<RosterEntry>,
    pub spectators: Vec<RosterEntry>,
    pub events: Vec<RoundEvent>,
}
