use crate::logline::LogLine;

/// Events that close the round currently being collected.
pub static ROUND_DELIMITERS: phf::Set<&'static str> = phf::phf_set! {
    "World triggered \"Round_End\"",
    "Log file closed",
};

/// The events of one round, the closing delimiter included.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub lines: Vec<LogLine>,
}

impl Round {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogLine> {
        self.lines.iter()
    }

    pub fn delimiter(&self) -> Option<&LogLine> {
        self.lines.last()
    }
}

impl IntoIterator for Round {
    type Item = LogLine;
    type IntoIter = std::vec::IntoIter<LogLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

/// Buffers events until a delimiter closes the round.
#[derive(Debug, Default)]
pub struct Segmenter {
    buffer: Vec<LogLine>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: LogLine) -> Option<Round> {
        let closes = ROUND_DELIMITERS.contains(line.event.as_str());
        self.buffer.push(line);

        if !closes {
            return None;
        }

        Some(Round {
            lines: std::mem::take(&mut self.buffer),
        })
    }

    /// Events seen since the last delimiter.
    pub fn pending(&self) -> &[LogLine] {
        &self.buffer
    }

    fn report_dropped(&self) {
        if !self.buffer.is_empty() {
            tracing::debug!(
                dropped = self.buffer.len(),
                "Log ended without a round delimiter, dropping the partial round"
            );
        }
    }
}

/// Iterator returned by [`segment_rounds`].
#[derive(Debug)]
pub struct Rounds<I> {
    events: I,
    segmenter: Segmenter,
    exhausted: bool,
}

impl<I> Rounds<I> {
    pub fn pending(&self) -> &[LogLine] {
        self.segmenter.pending()
    }
}

impl<I> Iterator for Rounds<I>
where
    I: Iterator<Item = LogLine>,
{
    type Item = Round;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        for line in self.events.by_ref() {
            if let Some(round) = self.segmenter.push(line) {
                return Some(round);
            }
        }

        self.exhausted = true;
        self.segmenter.report_dropped();
        None
    }
}

/// Iterator returned by [`try_segment_rounds`].
#[derive(Debug)]
pub struct TryRounds<I> {
    events: I,
    segmenter: Segmenter,
    exhausted: bool,
}

impl<I> TryRounds<I> {
    pub fn pending(&self) -> &[LogLine] {
        self.segmenter.pending()
    }
}

impl<I, E> Iterator for TryRounds<I>
where
    I: Iterator<Item = Result<LogLine, E>>,
{
    type Item = Result<Round, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        for line in self.events.by_ref() {
            let line = match line {
                Ok(l) => l,
                Err(e) => return Some(Err(e)),
            };

            if let Some(round) = self.segmenter.push(line) {
                return Some(Ok(round));
            }
        }

        self.exhausted = true;
        self.segmenter.report_dropped();
        None
    }
}

/// Groups events into rounds.
///
/// Events after the last `Round_End`/`Log file closed` delimiter never form a
/// round and are dropped once the input runs out. They stay inspectable through
/// [`Rounds::pending`].
pub fn segment_rounds<I>(events: I) -> Rounds<I::IntoIter>
where
    I: IntoIterator<Item = LogLine>,
{
    Rounds {
        events: events.into_iter(),
        segmenter: Segmenter::new(),
        exhausted: false,
    }
}

/// Like [`segment_rounds`], but forwards upstream errors in order. An error
/// leaves the round buffer untouched.
pub fn try_segment_rounds<I, E>(events: I) -> TryRounds<I::IntoIter>
where
    I: IntoIterator<Item = Result<LogLine, E>>,
{
    TryRounds {
        events: events.into_iter(),
        segmenter: Segmenter::new(),
        exhausted: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(event: &str) -> LogLine {
        LogLine {
            date: "01/02/2015".to_owned(),
            time: "20:15:33".to_owned(),
            event: event.to_owned(),
        }
    }

    #[test]
    fn quoted_round_end_only_closes_on_exact_match() {
        let mut segmenter = Segmenter::new();

        assert!(segmenter.push(line("\"Round_End\" said somebody")).is_none());
        assert!(segmenter.push(line("World triggered \"Round_End\"")).is_some());
        assert!(segmenter.pending().is_empty());
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut rounds = segment_rounds(vec![line("World triggered \"Round_Start\"")]);

        assert!(rounds.next().is_none());
        assert!(rounds.next().is_none());
        assert_eq!(1, rounds.pending().len());
    }
}
