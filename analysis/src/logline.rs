/// Event suffixes that mark a line as relevant for round reconstruction.
const TRACKED_SUFFIXES: [&str; 7] = [
    "disconnected",
    "joined team \"TERRORIST\"",
    "joined team \"CT\"",
    "joined team \"SPECTATOR\"",
    "\"Round_Start\"",
    "\"Round_End\"",
    "Log file closed",
];

/// A single timestamped event taken from a server log.
///
/// Lines look like `L 01/02/2015 - 20:15:33: <event>`. The leading `L` and the
/// `-` separator carry no information and are dropped.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogLine {
    pub date: String,
    pub time: String,
    pub event: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed log line, expected `<prefix> <date> <separator> <time>: <event>`: {line:?}")]
pub struct MalformedLineError {
    pub line: String,
}

impl LogLine {
    pub fn parse(line: &str) -> Result<Self, MalformedLineError> {
        let stripped = line.trim_end_matches(&['\r', '\n'][..]);

        let mut fields = stripped.splitn(5, ' ');
        let (Some(_), Some(date), Some(_), Some(time), Some(event)) = (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) else {
            return Err(MalformedLineError {
                line: line.to_owned(),
            });
        };

        Ok(Self {
            date: date.to_owned(),
            time: time.trim_matches(':').to_owned(),
            event: event.trim().to_owned(),
        })
    }

    /// Combines `date` and `time` into a single timestamp.
    pub fn timestamp(&self) -> Result<chrono::NaiveDateTime, chrono::ParseError> {
        chrono::NaiveDateTime::parse_from_str(
            &format!("{} {}", self.date, self.time),
            "%m/%d/%Y %H:%M:%S",
        )
    }
}

pub fn is_valid_event(event: &str) -> bool {
    let team_win = event.contains("CTs_Win") || event.contains("Terrorists_Win");
    if event.starts_with("Team") && team_win {
        return true;
    }

    let event = event.trim();
    TRACKED_SUFFIXES.iter().any(|suffix| event.ends_with(suffix))
}

/// Iterator over the tracked events of a log, see [`parse_events`].
#[derive(Debug)]
pub struct Events<I> {
    lines: I,
}

impl<I, S> Iterator for Events<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<LogLine, MalformedLineError>;

    fn next(&mut self) -> Option<Self::Item> {
        for raw in self.lines.by_ref() {
            match LogLine::parse(raw.as_ref()) {
                Ok(line) if is_valid_event(&line.event) => return Some(Ok(line)),
                Ok(line) => {
                    tracing::trace!(event = %line.event, "Ignoring untracked event");
                }
                Err(e) => return Some(Err(e)),
            };
        }

        None
    }
}

/// Parses raw log lines, yielding only the events that matter for rounds.
///
/// A line without the minimum field structure is yielded as an error instead of
/// being skipped, the iterator can be resumed afterwards.
pub fn parse_events<I>(lines: I) -> Events<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Events {
        lines: lines.into_iter(),
    }
}
