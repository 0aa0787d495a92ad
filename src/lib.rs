//! Wishsim - Terminal gacha banner simulator library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod banner;
pub mod build_info;
pub mod constants;
pub mod gacha;
pub mod game_state;
pub mod input;
pub mod items;
pub mod player;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
