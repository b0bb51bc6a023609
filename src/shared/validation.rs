use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for identifiers that address a record by its numeric id.
    /// ASCII digits only; `\d` would also accept other Unicode digits.
    /// - Numeric: "42", "04", "0"
    /// - Not numeric: "travel-tips", "42a", "-1", "", "4 2", "١٢٣"
    pub static ref NUMERIC_ID_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
}
