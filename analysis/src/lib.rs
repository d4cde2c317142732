//! Reconstructs rounds, team rosters and round winners from game server logs.
//!
//! The stages are plain iterators and can be used on their own:
//! [`parse_events`] feeds [`segment_rounds`], whose rounds are folded by a
//! [`TeamTracker`]. [`perround::rounds`] chains all of them.

pub mod logline;
pub mod perround;
pub mod player;
pub mod rounds;
pub mod teams;

pub use logline::{is_valid_event, parse_events, LogLine, MalformedLineError};
pub use perround::{Error, PerRound};
pub use player::{MalformedPlayerStringError, Player};
pub use rounds::{segment_rounds, try_segment_rounds, Round};
pub use teams::{RoundResult, Side, Team, TeamTracker};
