pub mod constants;
pub mod export;
pub mod iconset;

use log::*;
use std::io::Write;

pub use crate::iconset::format::IconSet;
pub use crate::iconset::{decode, encode};

pub fn init_logging() {
    env_logger::Builder::new()
        .filter(Some("lib_rgi"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
