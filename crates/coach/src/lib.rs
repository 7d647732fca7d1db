//! Move Coach
//!
//! Transport-independent operations behind the coaching front end:
//! - `new_game`: the standard starting position
//! - `play`: grade a submitted move, apply it and answer with an engine reply
//! - `hint`: the engine's choice for the side to move
//!
//! # Usage
//!
//! ```
//! use coach::{Coach, CoachConfig, PlayRequest};
//!
//! let mut coach = Coach::new(CoachConfig { seed: Some(1), ..Default::default() });
//! let start = coach.new_game();
//! let reply = coach
//!     .play(&PlayRequest { fen: start.fen, user_move: "e4".into(), depth: Some(1) })
//!     .unwrap();
//! assert_eq!(reply.user_score, Some(10));
//! ```

mod api;
mod config;
mod error;
mod service;

pub use api::*;
pub use config::*;
pub use error::*;
pub use service::*;
