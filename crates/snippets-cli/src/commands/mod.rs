pub mod catalog;
pub mod get;
pub mod hide;
pub mod put;
pub mod search;

/// Report a result variant that does not belong to the command that ran
fn unexpected(op: &str) -> Box<dyn std::error::Error> {
    format!("unexpected result for '{}'", op).into()
}
