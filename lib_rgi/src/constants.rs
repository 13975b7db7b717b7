pub const FORMAT_NAME: &str = "rGI icon set";
pub const FILE_EXT: &str = "rgi";
