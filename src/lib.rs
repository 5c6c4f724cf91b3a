// Internals
// ---------
mod derank;
mod sift;

// Building blocks
// ---------------
pub mod error;
pub mod heap_primitives;
pub mod order;
pub mod store;

// Queues
// ------
pub mod indexed;
pub mod queue;

pub use error::HeapError;
pub use error::KeyDirection;
pub use heap_primitives::Arity;
pub use heap_primitives::Fixed;
pub use heap_primitives::Multiway;
pub use heap_primitives::PowerOf2;
pub use indexed::IndexMaxPQ;
pub use indexed::IndexMinPQ;
pub use indexed::IndexedHeap;
pub use order::ByFn;
pub use order::Compare;
pub use order::Max;
pub use order::Min;
pub use order::Natural;
pub use order::Orientation;
pub use queue::MultiwayHeap;
pub use queue::MultiwayMaxPQ;
pub use queue::MultiwayMinPQ;
pub use queue::PowerOf2MaxPQ;
pub use queue::PowerOf2MinPQ;
