use anyhow::Result;
use ecwid_api::Store;

use crate::output::{build_profile_rows, build_stats_rows, print, OutputFormat};

pub fn run_profile(store: &Store<'_>, format: &OutputFormat) -> Result<()> {
    let profile = store.get_profile()?.execute()?;
    print(format, &profile, &build_profile_rows(&profile))
}

pub fn run_stats(store: &Store<'_>, format: &OutputFormat) -> Result<()> {
    let stats = store.get_latest_stats()?.execute()?;
    print(format, &stats, &build_stats_rows(&stats))
}
