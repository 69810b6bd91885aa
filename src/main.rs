#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Restriction lints
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::deref_by_slicing,
    clippy::if_then_some_else_none,
    clippy::undocumented_unsafe_blocks,
    clippy::unnecessary_cast,
    clippy::unnecessary_safety_comment
)]
// False positives
#![allow(clippy::needless_pass_by_value)] // for dptree handlers
// Style
#![allow(clippy::module_name_repetitions)]

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::sync::{Arc, OnceLock};

use anyhow::{Context as _, Result};
use argh::FromArgs;
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::types::Update;
use teloxide::Bot;

mod common;
mod config;
mod db;
mod models;
mod modules;
mod schema;

static VERSION: OnceLock<String> = OnceLock::new();

fn version() -> &'static str {
    VERSION.get().map_or("unknown", String::as_str)
}

/// event planner bot
#[derive(FromArgs, PartialEq, Debug)]
struct Args {
    #[argh(option, hidden_help = true, long = "-set-revision")]
    set_revision: Option<String>,

    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    Init(SubCommandInit),
    Bot(SubCommandBot),
}

/// create the database tables and exit
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "init")]
struct SubCommandInit {
    /// config file
    #[argh(positional)]
    config_file: OsString,
}

/// run the bot
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "bot")]
struct SubCommandBot {
    /// config file
    #[argh(positional)]
    config_file: OsString,
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();
    let args: Args = argh::from_env();
    VERSION.get_or_init(|| {
        args.set_revision.clone().unwrap_or_else(|| {
            git_version::git_version!(fallback = "unknown").to_string()
        })
    });
    log::info!("Version {}", version());
    match args.subcommand {
        SubCommand::Init(c) => {
            open_db(&read_config(&c.config_file)?)?;
        }
        SubCommand::Bot(c) => run_bot(read_config(&c.config_file)?).await?,
    }
    Ok(())
}

fn read_config(config_fpath: &OsStr) -> Result<config::Config> {
    serde_yaml::from_reader(File::open(config_fpath)?)
        .map_err(|e| anyhow::anyhow!("Failed to parse config: {}", e))
}

/// Open the configured database and make sure all tables exist.
fn open_db(config: &config::Config) -> Result<db::Database> {
    let db = db::Database::open(&config.db)?;
    db.init().context("Failed to create tables")?;
    log::info!("Tables are ready in {}", db.url());
    Ok(db)
}

async fn run_bot(config: config::Config) -> Result<()> {
    let bot_env = Arc::new(common::BotEnv {
        db: Arc::new(open_db(&config)?),
        config: Arc::new(config),
    });

    let bot = Bot::new(&bot_env.config.telegram.token);

    Dispatcher::builder(
        bot,
        dptree::entry()
            .inspect_async(modules::user_tracker::inspect_update)
            .branch(
                Update::filter_message()
                    .branch(modules::basic::command_handler())
                    .endpoint(drop_endpoint),
            )
            .endpoint(drop_endpoint),
    )
    .dependencies(dptree::deps![Arc::clone(&bot_env)])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}

async fn drop_endpoint() -> Result<()> {
    Ok(())
}
