mod steam;

pub use steam::*;
