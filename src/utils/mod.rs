// Utility module exports

pub mod clock;
