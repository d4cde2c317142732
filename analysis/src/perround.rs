use crate::logline::{Events, LogLine};
use crate::rounds::TryRounds;
use crate::teams::{RoundResult, TeamTracker};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    MalformedLine(#[from] crate::logline::MalformedLineError),
    #[error(transparent)]
    MalformedPlayerString(#[from] crate::player::MalformedPlayerStringError),
}

/// Raw lines in, one [`RoundResult`] per completed round out.
///
/// Errors do not end the iteration, the caller decides whether to keep pulling.
#[derive(Debug)]
pub struct PerRound<I> {
    rounds: TryRounds<Events<I>>,
    tracker: TeamTracker,
}

impl<I> PerRound<I> {
    pub fn tracker(&self) -> &TeamTracker {
        &self.tracker
    }

    /// Events after the last round delimiter, see [`crate::segment_rounds`].
    pub fn pending(&self) -> &[LogLine] {
        self.rounds.pending()
    }
}

impl<I, S> Iterator for PerRound<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<RoundResult, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let round = match self.rounds.next()? {
            Ok(r) => r,
            Err(e) => return Some(Err(e.into())),
        };

        Some(self.tracker.advance(round).map_err(Error::from))
    }
}

pub fn rounds<I>(lines: I) -> PerRound<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    PerRound {
        rounds: crate::try_segment_rounds(crate::parse_events(lines)),
        tracker: TeamTracker::new(),
    }
}

/// Reconstructs all rounds of a complete log, stopping at the first error.
pub fn parse(log: &str) -> Result<Vec<RoundResult>, Error> {
    rounds(log.lines()).collect()
}
