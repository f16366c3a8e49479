use clap::{Parser, Subcommand};
use eyre::{eyre, Result, WrapErr};
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    prelude::*,
};

use base::setting::{load, Settings, SETTINGS};
use base::{
    database::{get_database, open_database, DATABASE},
    setting::{generate_default, get_settings},
    CLI_NAME,
};
use fyyur::api;

#[derive(Parser)]
#[command(name = CLI_NAME, author, version, about, long_about = None)]
#[command(next_line_help = true)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long, name = "ADDRESS", default_value_t = String::from("127.0.0.1:5000"))]
    listen_address: String,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Prints the default configuration
    DefaultConfig,
    /// Brings the database schema up to date and exits
    Migrate,
    Serve,
}

async fn init_database(config: Option<PathBuf>) -> Result<()> {
    SETTINGS.get_or_try_init(async { load(config) }).await?;
    DATABASE
        .get_or_try_init(async { open_database().await })
        .await?;
    migration::Migrator::up(get_database()?, None)
        .await
        .wrap_err("Could not apply database migrations")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // logging
    color_eyre::install()?;
    let tracing_builder = tracing_subscriber::registry().with(fmt::layer());
    if std::env::var(base::FYYUR_LOGLEVEL).is_ok() {
        tracing_builder.with(EnvFilter::from_env(base::FYYUR_LOGLEVEL))
    } else {
        tracing_builder.with(EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }
    .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::DefaultConfig => {
            let default = generate_default(Settings::default())?;
            let str = toml::to_string(&default)?;
            println!("{}", str);
            Ok(())
        }
        Command::Migrate => {
            init_database(cli.config).await?;
            tracing::info!("Database is up to date");
            Ok(())
        }
        Command::Serve => {
            init_database(cli.config).await?;

            let addr: SocketAddr = cli
                .listen_address
                .parse()
                .wrap_err(eyre!("Invalid listen address"))?;
            tracing::info! {%addr, "Listening"};
            let router = api::router(get_database()?.clone(), &get_settings()?.secret_key);
            axum::Server::bind(&addr)
                .serve(router.into_make_service())
                .await
                .wrap_err("Server error")?;
            Ok(())
        }
    }
}
