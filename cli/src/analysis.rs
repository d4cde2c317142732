use anyhow::Context;

/// What to do when the pipeline reports a malformed line or player string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    #[default]
    Abort,
    Skip,
}

pub fn round_record(
    number: usize,
    result: &analysis::RoundResult,
) -> Result<common::RoundRecord, chrono::ParseError> {
    let roster = |roster: &analysis::teams::Roster| {
        roster
            .values()
            .map(|p| common::RosterEntry {
                steamid: p.steamid.clone(),
                name: p.name.clone(),
            })
            .collect::<Vec<_>>()
    };

    let events = result
        .raw_round
        .iter()
        .map(|line| -> Result<common::RoundEvent, chrono::ParseError> {
            Ok(common::RoundEvent {
                at: line.timestamp()?,
                event: line.event.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(common::RoundRecord {
        number,
        winner: result.winner.map(|w| match w {
            analysis::Side::CT => common::RoundWinner::CT,
            analysis::Side::T => common::RoundWinner::T,
        }),
        started_at: events.first().map(|e| e.at),
        ended_at: events.last().map(|e| e.at),
        terrorists: roster(&result.te),
        counter_terrorists: roster(&result.ct),
        spectators: roster(&result.sp),
        events,
    })
}

/// Runs the round reconstruction over one log.
///
/// Round numbers follow the log, a round lost to a malformed player string still
/// takes up its number.
#[tracing::instrument(skip(lines))]
pub fn analyse<I>(
    name: &str,
    lines: I,
    policy: ErrorPolicy,
) -> anyhow::Result<common::log_analysis::LogRecord>
where
    I: IntoIterator<Item = String>,
{
    let mut record = common::log_analysis::LogRecord::new(name);
    let mut number = 0;

    let mut per_round = analysis::perround::rounds(lines);
    for result in per_round.by_ref() {
        // a malformed line is reported before its round closes, so it uses up no round
        if !matches!(result, Err(analysis::Error::MalformedLine(_))) {
            number += 1;
        }

        let round = result
            .with_context(|| format!("analysing {}", name))
            .and_then(|r| {
                round_record(number, &r).with_context(|| {
                    format!("round {} of {} has an invalid timestamp", number, name)
                })
            });

        match (round, policy) {
            (Ok(round), _) => record.rounds.push(round),
            (Err(e), ErrorPolicy::Abort) => return Err(e),
            (Err(e), ErrorPolicy::Skip) => {
                tracing::warn!(error = %format!("{:#}", e), "Skipping malformed input");
                record.skipped_errors += 1;
            }
        };
    }

    record.dropped_events = per_round.pending().len();
    if record.dropped_events > 0 {
        tracing::info!(
            dropped = record.dropped_events,
            "Log does not end with a round delimiter"
        );
    }

    Ok(record)
}
