//! Parsing of user arguments, as they are passed to command line tools.

use crate::consts::{
    USER_ALL,
    USER_CURRENT,
};
use crate::{
    UserHandle,
    UserId,
};
use core::fmt::{
    Display,
    Formatter,
};
use core::str::FromStr;

/// Errors of [`parse_user_arg`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UserArgError {
    /// The argument is neither a keyword nor a decimal number in the range of [`UserId`].
    BadUserNumber,
}

impl Display for UserArgError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadUserNumber => write!(f, "bad user number"),
        }
    }
}

/// Parses a user argument. Accepts
/// * `all` for [`USER_ALL`],
/// * `current` or `cur` for [`USER_CURRENT`],
/// * a decimal user id.
pub fn parse_user_arg(arg: &str) -> Result<UserId, UserArgError> {
    match arg {
        "all" => Ok(USER_ALL),
        "current" | "cur" => Ok(USER_CURRENT),
        _ => arg.parse::<UserId>().map_err(|_| {
            log::debug!("bad user number: {}", arg);
            UserArgError::BadUserNumber
        }),
    }
}

impl FromStr for UserHandle {
    type Err = UserArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_user_arg(s).map(Self::of)
    }
}
