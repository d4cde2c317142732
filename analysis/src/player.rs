#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Player {
    pub name: String,
    pub steamid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed player string, expected `NAME<SLOT><STEAMID><TEAM>`: {input:?}")]
pub struct MalformedPlayerStringError {
    pub input: String,
}

impl Player {
    /// Parses a player identity like `bl00db4th<13><STEAM_0:1:103655><TERRORIST>`.
    ///
    /// Either the bare identity or a whole event may be passed in. An event starts
    /// with a double quote and the identity runs up to the next one.
    pub fn parse(input: &str) -> Result<Self, MalformedPlayerStringError> {
        let identity = match input.strip_prefix('"') {
            Some(quoted) => quoted.split('"').next().unwrap_or(quoted),
            None => input,
        };

        let malformed = || MalformedPlayerStringError {
            input: input.to_owned(),
        };

        if identity.matches('<').count() < 3 || identity.matches('>').count() < 3 {
            return Err(malformed());
        }

        // team, steamid, slot, name
        let mut parts = identity.rsplitn(4, '<');
        let (Some(_), Some(steamid), Some(_), Some(name)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        Ok(Self {
            name: name.trim_end_matches('>').to_owned(),
            steamid: steamid.trim_end_matches('>').to_owned(),
        })
    }
}

impl std::str::FromStr for Player {
    type Err = MalformedPlayerStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
