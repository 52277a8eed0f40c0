pub const TEST_CONTRACT_ADDR: &str = "erd1qqqqqqqqqqqqqpgqeqv9v8fydgdh8arf6kfd5y7uvycv9kx3d8ssz87x92";
pub const TEST_PLAYER_ADDR: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";

pub const DEFAULT_PRIZE_DISTRIBUTION: [u32; 3] = [5000, 3000, 2000];
pub const DEFAULT_HOUSE_FEE: u32 = 500;
