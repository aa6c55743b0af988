mod app;
mod args;
mod config;
mod entry;
mod error;
mod phases;
mod probe;
mod report;
mod system;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
