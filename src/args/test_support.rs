use clap::Parser;

use crate::error::{AppError, AppResult};

use super::CheckArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<CheckArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CheckArgs::try_parse_from(args).map_err(AppError::from)
}
