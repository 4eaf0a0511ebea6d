// Combat
pub const ATTACK_XP_REWARD: u64 = 10;

// Demo scenario fixtures
pub const DEMO_PLAYER_NAME: &str = "Alex";
pub const DEMO_PLAYER_HEALTH: u32 = 100;
pub const DEMO_PLAYER_XP: u64 = 5;
pub const DEMO_DAMAGE_AMOUNT: u32 = 20;
