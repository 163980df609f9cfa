//! Comparison selections built up by a user during a session.
//!
//! - [`SelectionSet`]: Ordered, deduplicated keys for one entity kind
//! - [`Selections`]: The fund, company and sector sets side by side
//! - [`PortfolioList`]: Companies with user-declared AUM weights

mod portfolio;
mod selections;
mod set;

pub use portfolio::PortfolioList;
pub use selections::{SelectionKind, Selections};
pub use set::{SelectionSet, SelectionState};
