pub const VM_QUERY_PATH: &str = "vm-values/query";

pub const RETURN_CODE_OK: &str = "ok";

// View functions of the tournament hub contract
pub const GET_TOURNAMENT: &str = "getTournament";
pub const GET_GAME_CONFIG: &str = "getGameConfig";
pub const GET_USER_STATS: &str = "getUserStats";
pub const GET_NUMBER_OF_TOURNAMENTS: &str = "getNumberOfTournaments";
pub const GET_NUMBER_OF_GAMES: &str = "getNumberOfGames";
pub const GET_ACTIVE_TOURNAMENT_IDS: &str = "getActiveTournamentIds";
pub const GET_TOURNAMENT_FEE: &str = "getTournamentFee";
pub const GET_HOUSE_FEE_PERCENTAGE: &str = "getHouseFeePercentage";
