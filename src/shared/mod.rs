pub mod constants;
pub mod pagination;
pub mod routing;
pub mod test_helpers;
pub mod types;
pub mod validation;
