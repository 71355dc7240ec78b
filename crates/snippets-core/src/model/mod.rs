pub mod lookup;
pub mod snippet;

pub use lookup::{Lookup, SearchHit};
pub use snippet::{validate_name, Snippet};
