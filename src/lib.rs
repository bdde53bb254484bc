pub mod api;
pub mod config;
pub mod explorer;
pub mod generator;
pub mod i18n;
pub mod models;
pub mod sampler;
pub mod summon;
pub mod summon_stats;
