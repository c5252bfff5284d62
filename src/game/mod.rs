//! The bouncing-balls session built on top of the engine: material catalog,
//! body factory, per-frame controls, console prompts and the session record.

pub mod config;
pub mod controls;
pub mod factory;
pub mod material;
pub mod prompt;
pub mod session;

/// Number of balls in every session.
pub const BALL_COUNT: usize = 3;

/// Raw material selectors, one per ball, as typed at the console.
pub type BallChoices = [i64; BALL_COUNT];
