// Assessment wizard: step definitions, the state machine, and hosted sessions.

pub mod handlers;
pub mod session;
pub mod steps;
pub mod wizard;
