pub mod code;
pub mod sheet;

pub use code::export_as_code;
pub use sheet::render_sheet;
