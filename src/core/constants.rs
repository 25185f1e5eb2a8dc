// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 25; // 40 frames per second while a reel is moving
pub const SPIN_TICKS: u32 = 90;
pub const GUARANTEED_WIN_PERCENT: u32 = 20;

// Economy
pub const STARTING_TOKENS: i64 = 100;
pub const DAILY_TOKENS: i64 = 40;
pub const TOKEN_PACK_SIZE: i64 = 10;
pub const TOKEN_PACK_COST: i64 = 100;
pub const FIXED_BONUS_PAYOUT: i64 = 100;
pub const LOSE_JACKPOT_INCREASE: i64 = 5;
pub const FEVER_PAYOUT_FACTOR: i64 = 2;

// Multiplier die faces (inclusive)
pub const MULTIPLIER_MIN: u32 = 1;
pub const MULTIPLIER_MAX: u32 = 6;

// Symbol weights
pub const COMMON_FACE_WEIGHT: u32 = 100;
pub const SPECIAL_WEIGHT: u32 = 50;
pub const NIGHT_WILD_FACTOR: u32 = 4;
pub const NIGHT_FACE_WEIGHT: u32 = 50;
pub const NIGHT_PENALTY_WEIGHT: u32 = 50;

// Save system
pub const SCHEMA_VERSION: &str = "1";
pub const SAVE_DIR_NAME: &str = ".jackpot";
pub const SAVE_FILE_NAME: &str = "save.json";
pub const LOG_FILE_NAME: &str = "jackpot.log";
