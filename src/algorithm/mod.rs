/// Pass orchestration, hyperparameters and the generated artwork
pub mod executor;
/// LIFO queue of candidate seeds validated when popped
pub mod frontier;
/// Bidirectional streamline growth with footprint reservation
pub mod tracer;
