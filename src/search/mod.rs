//! Incremental search over a list of items.
//!
//! [`SearchSession`] holds all of the state and is driven one key at a time;
//! [`run_search`] connects it to a [`SearchHost`] such as the terminal.

mod filter;
mod host;
mod session;
mod view;
mod viewport;

pub use filter::{Matcher, filter_items};
pub use host::{SearchHost, run_search};
pub use session::{SearchKey, SearchSession, SearchStatus, Step};
pub use view::{HELP, list_height, summary};
pub use viewport::Viewport;
