// Player starting stats
pub const STARTING_HP: i32 = 100;
pub const STARTING_ATTACK: i32 = 10;
pub const STARTING_DEFENSE: i32 = 5;
pub const STARTING_GOLD: u32 = 50;
pub const STARTING_MAX_EXP: u32 = 100;

// Leveling. Max EXP grows geometrically, truncated to whole points.
pub const MAX_EXP_GROWTH: f64 = 1.2;
pub const LEVEL_UP_HP_BONUS: i32 = 20;
pub const LEVEL_UP_ATTACK_BONUS: i32 = 5;
pub const LEVEL_UP_DEFENSE_BONUS: i32 = 2;

// Combat rolls (uniform, inclusive)
pub const PLAYER_ATTACK_VARIANCE: i32 = 5;
pub const ENEMY_ATTACK_VARIANCE: i32 = 3;
pub const MIN_DAMAGE: i32 = 1;

// Healing
pub const POTION_HEAL: i32 = 30;
pub const REST_HEAL: i32 = 50;

// Victory rewards (EXP comes from the enemy's full HP pool)
pub const GOLD_REWARD_MIN: u32 = 10;
pub const GOLD_REWARD_MAX: u32 = 40;

// Character management
pub const CHARACTER_NAME_MAX_LENGTH: usize = 16;
