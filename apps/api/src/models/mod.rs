pub mod answers;
pub mod recommendation;
