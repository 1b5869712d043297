use std::{fmt::Display, str::FromStr};

/// Activity kinds a sensor package can describe, keyed by their short code.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityCode {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl ActivityCode {
    pub const ALL: [ActivityCode; 3] = [
        ActivityCode::Running,
        ActivityCode::SportsWalking,
        ActivityCode::Swimming,
    ];

    /// Three letter code used by the sensor packages.
    pub fn code(self) -> &'static str {
        match self {
            ActivityCode::Running => "RUN",
            ActivityCode::SportsWalking => "WLK",
            ActivityCode::Swimming => "SWM",
        }
    }

    /// Training type label printed in the summary line.
    pub fn name(self) -> &'static str {
        match self {
            ActivityCode::Running => "Running",
            ActivityCode::SportsWalking => "SportsWalking",
            ActivityCode::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            ActivityCode::Running => 3,
            ActivityCode::SportsWalking => 4,
            ActivityCode::Swimming => 5,
        }
    }
}

impl Display for ActivityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownActivityCode(pub String);

impl Display for UnknownActivityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown activity code: {}", self.0)
    }
}

impl std::error::Error for UnknownActivityCode {}

impl FromStr for ActivityCode {
    type Err = UnknownActivityCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(ActivityCode::Running),
            "WLK" => Ok(ActivityCode::SportsWalking),
            "SWM" => Ok(ActivityCode::Swimming),
            _ => Err(UnknownActivityCode(s.to_owned())),
        }
    }
}
