pub mod canceller;
pub use canceller::*;

pub mod odds;
pub use odds::*;

pub mod result;
pub use result::*;

pub mod simulator;
pub use simulator::*;

pub mod tally;
pub use tally::*;

pub mod verdict;
pub use verdict::*;
