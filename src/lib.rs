pub mod catalog;
pub mod cli;
pub mod config;
pub mod contract;
pub mod controller;
pub mod logging;
pub mod ui;
pub mod units;
pub mod wallet;
