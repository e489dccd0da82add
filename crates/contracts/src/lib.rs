//! Types shared by the console: school entities, REST envelopes and the
//! persisted list-view state.

pub mod domain;
pub mod shared;
