//! Global allocator (wrapper around the System's default allocator) capable of gathering allocation/de-allocation/re-allocation metrics
//! and (current, max) memory usage between two points in time.
//!
//! Activated by default in [crate::features::ALLOC] -- disable it with the `no_allocator_metrics` feature.
//!
//! Usage example:
//! ```rust
//!     use container_complexity::features::ALLOC;
//!     let save_point = ALLOC.save_point();
//!     let _vec = Vec::<u64>::with_capacity(1024);
//!     let metrics = ALLOC.delta_statistics(&save_point);
//!     println!("Allocator Metrics for the Vec allocation: {}", metrics);
//! ```

mod metrics_allocator;
pub use metrics_allocator::*;
