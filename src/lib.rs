// Library exports for the Battlesnake bot
// The binary only wires these into a Rocket server

#[macro_use]
extern crate rocket;

pub mod board;
pub mod bot;
pub mod config;
pub mod error;
pub mod geometry;
pub mod handler;
pub mod safety;
pub mod strategy;
pub mod types;
