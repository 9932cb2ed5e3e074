// Service module exports

pub mod countdown;
pub mod lifecycle;
pub mod refresher;
