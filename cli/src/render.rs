use prettytable::{row, Table};
use serde::Serialize;
use thub_core::address::Address;
use thub_core::types::{GameConfigRecord, TournamentRecord, UserStatsRecord};

fn address_list(addrs: &[Address]) -> String {
    if addrs.is_empty() {
        "-".into()
    } else {
        addrs
            .iter()
            .map(Address::to_bech32)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn basis_points(bp: u32) -> String {
    format!("{}.{:02}%", bp / 100, bp % 100)
}

pub fn tournament_table(t: &TournamentRecord) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Game", t.game_id]);
    table.add_row(row!["Status", t.status]);
    table.add_row(row!["Creator", t.creator]);
    table.add_row(row!["Participants", address_list(&t.participants)]);
    table.add_row(row!["Podium", address_list(&t.final_podium)]);
    table
}

pub fn game_config_table(c: &GameConfigRecord) -> Table {
    let mut table = Table::new();
    let prizes = c
        .prize_distribution_percentages
        .iter()
        .map(|p| basis_points(*p))
        .collect::<Vec<_>>()
        .join(" / ");
    table.add_row(row!["Signing server", c.signing_server_address]);
    table.add_row(row!["Podium size", c.podium_size]);
    table.add_row(row!["Prize distribution", prizes]);
    table.add_row(row!["House fee", basis_points(c.house_fee_percentage)]);
    table.add_row(row!["Late join", c.allow_late_join]);
    table
}

pub fn user_stats_table(s: &UserStatsRecord) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Games played", s.games_played]);
    table.add_row(row!["Wins / losses", format!("{} / {}", s.wins, s.losses)]);
    table.add_row(row!["Win rate", basis_points(s.win_rate)]);
    table.add_row(row!["Tokens won", s.tokens_won]);
    table.add_row(row!["Tokens spent", s.tokens_spent]);
    table.add_row(row!["Tournaments created", s.tournaments_created]);
    table.add_row(row!["Tournaments won", s.tournaments_won]);
    table.add_row(row!["Streak (best)", format!("{} ({})", s.current_streak, s.best_streak)]);
    table.add_row(row!["TELO rating", s.telo_rating]);
    table
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
