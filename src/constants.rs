pub const DEFAULT_SEPARATOR: &str = ",";

pub const OCTET_STRING: &str = "text or bytes";
