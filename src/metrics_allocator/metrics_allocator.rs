//! See [super].

use crate::utils::presentable_measurements::bytes_measurement;
use std::{
    alloc::{GlobalAlloc, Layout, System},
    fmt::{Display, Formatter},
    sync::atomic::{AtomicUsize, Ordering::Relaxed},
};


/// Wrapper around [System] counting every byte that goes in & out of the heap
pub struct MetricsAllocator {
    allocations_count:   AtomicUsize,
    deallocations_count: AtomicUsize,
    reallocations_count: AtomicUsize,
    allocated_bytes:     AtomicUsize,
    deallocated_bytes:   AtomicUsize,
    current_used_memory: AtomicUsize,
    /// peak usage since the last call to [MetricsAllocator::save_point()]
    max_used_memory:     AtomicUsize,
}

/// A snapshot of [MetricsAllocator]'s counters -- either absolute (see [SavePoint])
/// or relative to a save point (see [MetricsAllocator::delta_statistics()])
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AllocatorMetrics {
    pub allocations_count:   usize,
    pub deallocations_count: usize,
    pub reallocations_count: usize,
    pub allocated_bytes:     usize,
    pub deallocated_bytes:   usize,
    /// heap memory in use at the time the metrics were taken -- always absolute
    pub current_used_memory: usize,
    /// maximum heap memory in use since the save point -- always absolute
    pub max_used_memory:     usize,
}

/// Marks a point in time from which [MetricsAllocator::delta_statistics()] will be computed
#[derive(Debug, Clone, Copy)]
pub struct SavePoint {
    pub metrics: AllocatorMetrics,
}

impl MetricsAllocator {

    pub const fn new() -> Self {
        Self {
            allocations_count:   AtomicUsize::new(0),
            deallocations_count: AtomicUsize::new(0),
            reallocations_count: AtomicUsize::new(0),
            allocated_bytes:     AtomicUsize::new(0),
            deallocated_bytes:   AtomicUsize::new(0),
            current_used_memory: AtomicUsize::new(0),
            max_used_memory:     AtomicUsize::new(0),
        }
    }

    /// the absolute counters, as they are now
    pub fn current_metrics(&self) -> AllocatorMetrics {
        AllocatorMetrics {
            allocations_count:   self.allocations_count.load(Relaxed),
            deallocations_count: self.deallocations_count.load(Relaxed),
            reallocations_count: self.reallocations_count.load(Relaxed),
            allocated_bytes:     self.allocated_bytes.load(Relaxed),
            deallocated_bytes:   self.deallocated_bytes.load(Relaxed),
            current_used_memory: self.current_used_memory.load(Relaxed),
            max_used_memory:     self.max_used_memory.load(Relaxed),
        }
    }

    /// Starts a new measurement -- resetting the peak memory usage to the current usage.\
    /// Only one save point is meaningful at a time: taking another one resets the peak again.
    pub fn save_point(&self) -> SavePoint {
        let current_used_memory = self.current_used_memory.load(Relaxed);
        self.max_used_memory.store(current_used_memory, Relaxed);
        SavePoint { metrics: self.current_metrics() }
    }

    /// Returns the counters' variation since `save_point` -- except for `current_used_memory` & `max_used_memory`, which are absolute
    pub fn delta_statistics(&self, save_point: &SavePoint) -> AllocatorMetrics {
        let now = self.current_metrics();
        let then = &save_point.metrics;
        AllocatorMetrics {
            allocations_count:   now.allocations_count.wrapping_sub(then.allocations_count),
            deallocations_count: now.deallocations_count.wrapping_sub(then.deallocations_count),
            reallocations_count: now.reallocations_count.wrapping_sub(then.reallocations_count),
            allocated_bytes:     now.allocated_bytes.wrapping_sub(then.allocated_bytes),
            deallocated_bytes:   now.deallocated_bytes.wrapping_sub(then.deallocated_bytes),
            current_used_memory: now.current_used_memory,
            max_used_memory:     now.max_used_memory,
        }
    }

    fn record_allocation(&self, size: usize) {
        self.allocated_bytes.fetch_add(size, Relaxed);
        let current_used_memory = self.current_used_memory.fetch_add(size, Relaxed).wrapping_add(size);
        self.max_used_memory.fetch_max(current_used_memory, Relaxed);
    }

    fn record_deallocation(&self, size: usize) {
        self.deallocated_bytes.fetch_add(size, Relaxed);
        self.current_used_memory.fetch_sub(size, Relaxed);
    }
}

unsafe impl GlobalAlloc for MetricsAllocator {

    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            self.allocations_count.fetch_add(1, Relaxed);
            self.record_allocation(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        self.deallocations_count.fetch_add(1, Relaxed);
        self.record_deallocation(layout.size());
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            self.allocations_count.fetch_add(1, Relaxed);
            self.record_allocation(layout.size());
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            self.reallocations_count.fetch_add(1, Relaxed);
            let old_size = layout.size();
            if new_size >= old_size {
                self.record_allocation(new_size - old_size);
            } else {
                self.record_deallocation(old_size - new_size);
            }
        }
        new_ptr
    }
}

impl Display for AllocatorMetrics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} allocations ({}), {} deallocations ({}), {} reallocations; in use: {}, peak: {}",
               self.allocations_count,   bytes_measurement(self.allocated_bytes as f64),
               self.deallocations_count, bytes_measurement(self.deallocated_bytes as f64),
               self.reallocations_count,
               bytes_measurement(self.current_used_memory as f64),
               bytes_measurement(self.max_used_memory as f64))
    }
}
