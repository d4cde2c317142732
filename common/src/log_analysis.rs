#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogRecord {
    pub log: String,
    pub rounds: Vec<crate::RoundRecord>,
    /// Tracked events after the last round delimiter, which never form a round.
    pub dropped_events: usize,
    pub skipped_errors: usize,
}

impl LogRecord {
    pub fn new(log: impl Into<String>) -> Self {
        Self {
            log: log.into(),
            rounds: Vec::new(),
            dropped_events: 0,
            skipped_errors: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_shape() {
        let mut record = LogRecord::new("L0102000.log");
        record.rounds.push(crate::RoundRecord {
            number: 1,
            winner: Some(crate::RoundWinner::CT),
            started_at: None,
            ended_at: None,
            terrorists: vec![crate::RosterEntry {
                steamid: "STEAM_0:1:103655".to_owned(),
                name: "bl00db4th".to_owned(),
            }],
            counter_terrorists: Vec::new(),
            spectators: Vec::new(),
            events: Vec::new(),
        });

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!("CT", value["rounds"][0]["winner"]);
        assert_eq!("bl00db4th", value["rounds"][0]["terrorists"][0]["name"]);
        assert_eq!(serde_json::Value::Null, value["rounds"][0]["started_at"]);

        let back: LogRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record, back);
    }
}
