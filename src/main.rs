use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use serde::de::DeserializeOwned;

use mentorlist::{
    core::state::{AppState, ListState},
    domain::{
        records::{Application, AuditLog, Discussion, Opportunity, SavedOpportunity, User},
        Listable, TableRow, ViewKind,
    },
    infrastructure::{cli::Cli, config::Config, source::MemorySource, tui::real::RealTui},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn run<T>(args: &Cli, config: &Config) -> Result<()>
where
    T: Listable + TableRow + DeserializeOwned,
{
    let source = MemorySource::<T>::from_json_file(&args.file)?;
    let options = config.list_options(args.kind, args.page_size, args.server_paging);
    log::info!("mounting {} view ({:?} paging)", args.kind, options.mode);

    let state = AppState::new(args.kind.title(), ListState::new(options));
    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut runner = AppRunner::new(state, Arc::new(source), tui);
    runner.run().await
}

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    match args.kind {
        ViewKind::Users => run::<User>(&args, &config).await,
        ViewKind::Opportunities => run::<Opportunity>(&args, &config).await,
        ViewKind::Applications => run::<Application>(&args, &config).await,
        ViewKind::Discussions => run::<Discussion>(&args, &config).await,
        ViewKind::AuditLogs => run::<AuditLog>(&args, &config).await,
        ViewKind::Saved => run::<SavedOpportunity>(&args, &config).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
