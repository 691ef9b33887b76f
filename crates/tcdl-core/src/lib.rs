pub mod config;
pub mod logging;

pub mod collection;
pub mod command;
pub mod events;
pub mod exec;
pub mod naming;
pub mod pipeline;
