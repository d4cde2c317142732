use analysis::{segment_rounds, try_segment_rounds, LogLine};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn line(event: &str) -> LogLine {
    LogLine {
        date: "01/02/2015".to_owned(),
        time: "20:15:33".to_owned(),
        event: event.to_owned(),
    }
}

#[test]
fn delimiter_is_part_of_the_round() {
    let events = vec![
        line("World triggered \"Round_Start\""),
        line("Team \"CT\" triggered \"CTs_Win\" (CT \"1\") (T \"0\")"),
        line("World triggered \"Round_End\""),
        line("World triggered \"Round_Start\""),
        line("Log file closed"),
    ];

    let rounds: Vec<_> = segment_rounds(events.clone()).collect();

    assert_eq!(2, rounds.len());
    assert_eq!(&events[..3], &rounds[0].lines[..]);
    assert_eq!(&events[3..], &rounds[1].lines[..]);
    assert_eq!(Some(&events[4]), rounds[1].delimiter());
}

#[test]
#[traced_test]
fn trailing_partial_round_is_dropped() {
    let events = vec![
        line("\"a<1><STEAM_0:0:1><>\" joined team \"CT\""),
        line("World triggered \"Round_Start\""),
        line("World triggered \"Round_End\""),
        line("World triggered \"Round_Start\""),
        line("\"b<2><STEAM_0:0:2><>\" joined team \"TERRORIST\""),
        line("\"a<1><STEAM_0:0:1><CT>\" disconnected"),
    ];

    let mut rounds = segment_rounds(events);

    let first = rounds.next().unwrap();
    assert_eq!(3, first.len());
    assert!(rounds.next().is_none());
    assert_eq!(3, rounds.pending().len());

    assert!(logs_contain("dropping the partial round"));
}

#[test]
fn no_events() {
    assert_eq!(0, segment_rounds(Vec::new()).count());
}

#[test]
fn errors_are_forwarded_in_order() {
    let events: Vec<Result<LogLine, &str>> = vec![
        Ok(line("World triggered \"Round_Start\"")),
        Err("broken"),
        Ok(line("World triggered \"Round_End\"")),
    ];

    let mut rounds = try_segment_rounds(events);

    assert_eq!(Some(Err("broken")), rounds.next());

    let round = rounds.next().unwrap().unwrap();
    assert_eq!(2, round.len());
    assert!(rounds.next().is_none());
}
