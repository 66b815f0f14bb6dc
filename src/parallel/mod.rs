pub mod batch;
pub mod cancel;
pub mod pool;

pub use batch::split_iterations;
pub use cancel::CancelToken;
pub use pool::WorkerPool;
