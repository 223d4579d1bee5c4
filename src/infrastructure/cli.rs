use std::path::PathBuf;

use clap::Parser;

use crate::{domain::ViewKind, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// JSON array of records to browse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Which list view the records belong to
    #[arg(short, long, value_enum, default_value_t = ViewKind::Users)]
    pub kind: ViewKind,

    /// Initial page size (snapped to the configured sizes)
    #[arg(short, long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Let the backend filter and page instead of loading everything
    #[arg(short, long)]
    pub server_paging: bool,

    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "HZ", default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 30.0)]
    pub frame_rate: f64,
}
