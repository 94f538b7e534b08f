/// Insertion, removal and rotation order.
pub mod queue;
