// Model module exports

pub mod schedule;
