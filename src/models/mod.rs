pub mod district;
pub mod location;
pub mod recommendation;
pub mod report;
pub mod season;
pub mod weather;

pub use district::*;
pub use location::*;
pub use recommendation::*;
pub use report::*;
pub use season::*;
pub use weather::*;
