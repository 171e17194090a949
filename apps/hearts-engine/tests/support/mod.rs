pub mod logging;
pub mod table_helpers;
