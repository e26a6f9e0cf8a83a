/// UI module exports
pub mod options;
