mod render;

use std::path::Path;
use std::time::Duration;

use clap::{arg, value_parser, ArgMatches, Command};
use thub_core::address::Address;
use thub_core::decoder;
use thub_core::transport::HubQueryT;
use thub_env::{default_config_path, Config};
use thub_transport::TransportBuilder;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("thub")
        .about("Command line tools for Tournament Hub")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg!(-c --config <PATH> "Path to the config file").required(false))
        .arg(arg!(-a --api <API> "API URL or network (mainnet, testnet, devnet, local)").required(false))
        .arg(arg!(--contract <ADDRESS> "Bech32 address of the tournament hub contract").required(false))
        .arg(
            arg!(-t --timeout <MS> "Request timeout in milliseconds")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(arg!(--json "Print JSON instead of tables"))
        .subcommand(
            Command::new("tournament")
                .about("Show a tournament")
                .arg(arg!(<ID> "Tournament id").value_parser(value_parser!(u64)))
                .arg_required_else_help(true),
        )
        .subcommand(
            Command::new("game-config")
                .about("Show the configuration of a registered game")
                .arg(arg!(<INDEX> "Game index").value_parser(value_parser!(u64)))
                .arg_required_else_help(true),
        )
        .subcommand(
            Command::new("user-stats")
                .about("Show the statistics of a player")
                .arg(arg!(<ADDRESS> "Bech32 address of the player"))
                .arg_required_else_help(true),
        )
        .subcommand(Command::new("count").about("Show tournament and game counts and the current fees"))
        .subcommand(Command::new("ids").about("List active tournament ids"))
        .subcommand(
            Command::new("decode")
                .about("Decode a hex return value without querying")
                .arg(
                    arg!(<KIND> "Record kind")
                        .value_parser(["tournament", "game-config", "user-stats"]),
                )
                .arg(arg!(<HEX> "Hex encoded return data"))
                .arg_required_else_help(true),
        )
}

async fn load_config(matches: &ArgMatches) -> anyhow::Result<Config> {
    if let Some(path) = matches.get_one::<String>("config") {
        return Ok(Config::from_path(Path::new(path)).await?);
    }
    let default_path = default_config_path();
    if Path::new(&default_path).exists() {
        Ok(Config::from_path(Path::new(&default_path)).await?)
    } else {
        info!("No config file at {}, using command line options", default_path);
        Ok(Config::default())
    }
}

async fn build_transport(matches: &ArgMatches) -> anyhow::Result<Box<dyn HubQueryT>> {
    let config = load_config(matches).await?;
    let mut builder = TransportBuilder::default();
    if let Some(api) = matches.get_one::<String>("api") {
        builder = builder.with_api(api);
    }
    if let Some(contract) = matches.get_one::<String>("contract") {
        builder = builder.with_contract(contract);
    }
    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        builder = builder.with_timeout(Duration::from_millis(*timeout));
    }
    Ok(builder.try_with_config(&config)?.build()?)
}

fn decode(kind: &str, hex: &str, json: bool) -> anyhow::Result<()> {
    let hex = hex.trim().trim_start_matches("0x");
    match kind {
        "tournament" => {
            let t = decoder::decode_tournament(hex)?;
            if json {
                render::print_json(&t)?;
            } else {
                render::tournament_table(&t).printstd();
            }
        }
        "game-config" => {
            let c = decoder::decode_game_config(hex)?;
            if json {
                render::print_json(&c)?;
            } else {
                render::game_config_table(&c).printstd();
            }
        }
        "user-stats" => {
            let s = decoder::decode_user_stats(hex)?;
            if json {
                render::print_json(&s)?;
            } else {
                render::user_stats_table(&s).printstd();
            }
        }
        _ => unreachable!(),
    }
    Ok(())
}

async fn query(hub: &dyn HubQueryT, sub: (&str, &ArgMatches), json: bool) -> anyhow::Result<()> {
    match sub {
        ("tournament", m) => {
            let id = *m.get_one::<u64>("ID").expect("required");
            match hub.get_tournament(id).await? {
                Some(t) if json => render::print_json(&t)?,
                Some(t) => {
                    render::tournament_table(&t).printstd();
                }
                None => println!("Tournament {} not found", id),
            }
        }
        ("game-config", m) => {
            let index = *m.get_one::<u64>("INDEX").expect("required");
            match hub.get_game_config(index).await? {
                Some(c) if json => render::print_json(&c)?,
                Some(c) => {
                    render::game_config_table(&c).printstd();
                }
                None => println!("Game {} not found", index),
            }
        }
        ("user-stats", m) => {
            let addr: Address = m.get_one::<String>("ADDRESS").expect("required").parse()?;
            match hub.get_user_stats(&addr).await? {
                Some(s) if json => render::print_json(&s)?,
                Some(s) => {
                    render::user_stats_table(&s).printstd();
                }
                None => println!("No statistics for {}", addr),
            }
        }
        ("count", _) => {
            let tournaments = hub.get_number_of_tournaments().await?;
            let games = hub.get_number_of_games().await?;
            let fee = hub.get_tournament_fee().await?;
            let house_fee = hub.get_house_fee_percentage().await?;
            if json {
                render::print_json(&serde_json::json!({
                    "tournaments": tournaments,
                    "games": games,
                    "tournamentFee": fee.map(|f| f.to_string()),
                    "houseFeePercentage": house_fee,
                }))?;
            } else {
                let show = |v: Option<String>| v.unwrap_or_else(|| "unknown".to_string());
                println!("Tournaments: {}", show(tournaments.map(|n| n.to_string())));
                println!("Games: {}", show(games.map(|n| n.to_string())));
                println!("Tournament fee: {}", show(fee.map(|f| f.to_string())));
                println!("House fee: {}", show(house_fee.map(render::basis_points)));
            }
        }
        ("ids", _) => match hub.get_active_tournament_ids().await? {
            Some(ids) if json => render::print_json(&ids)?,
            Some(ids) => {
                for id in ids {
                    println!("{}", id);
                }
            }
            None => println!("No tournaments found"),
        },
        _ => unreachable!(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let json = matches.get_flag("json");
    match matches.subcommand() {
        Some(("decode", sub_matches)) => {
            let kind = sub_matches.get_one::<String>("KIND").expect("required");
            let hex = sub_matches.get_one::<String>("HEX").expect("required");
            decode(kind, hex, json)
        }
        Some(sub) => {
            let hub = build_transport(&matches).await?;
            query(hub.as_ref(), sub, json).await
        }
        None => unreachable!(),
    }
}
