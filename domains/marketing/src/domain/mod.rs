//! Marketing domain layer: entities and the campaign state machine

pub mod entities;
pub mod state;
