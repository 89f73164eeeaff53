//! topiclens-queue — Task publishing onto the pipeline work queue.
//!
//! The queue is a Redis list shared with the Python workers: the
//! dashboard LPUSHes JSON envelopes, workers BLPOP them. Fire and
//! forget; there is no consumption acknowledgment and no retry.

pub mod error;
pub mod publisher;
pub mod tasks;

pub use error::{QueueError, Result};
pub use publisher::TaskQueue;
pub use tasks::{PipelineTask, TaskEnvelope};
