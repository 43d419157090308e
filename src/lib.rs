#![allow(non_snake_case)]
//! Musette is a browser-based planner for nutrition intake during
//! multi-stage endurance races. Users maintain a product library, assign
//! product quantities to each race stage, and review computed per-stage
//! and whole-race intake totals and per-hour rates.

pub mod client;
pub mod model;
