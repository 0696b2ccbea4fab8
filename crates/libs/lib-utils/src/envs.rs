//! # Build Variables
//!
//! Reading and parsing named configuration values through a lookup function.
//!
//! The browser build has no process environment, so values are resolved by the
//! caller (for example from `option_env!`) and looked up by name here.

use std::str::FromStr;

/// Get a variable by name from `lookup`.
pub fn get_env_from<F>(lookup: F, name: &'static str) -> Result<String, Error>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(Error::MissingEnv(name))
}

/// Get and parse a variable by name from `lookup`.
pub fn get_env_parse_from<T, F>(lookup: F, name: &'static str) -> Result<T, Error>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let val = get_env_from(lookup, name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
