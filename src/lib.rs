pub mod config;
pub mod demo;
pub mod output;
pub mod record;
pub mod replay;
pub mod subjects;
