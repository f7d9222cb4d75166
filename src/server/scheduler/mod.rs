//! Cron jobs driving the automatic parts of the league calendar.

pub mod league_jobs;
