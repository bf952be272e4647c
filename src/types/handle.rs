//! Handle type for DXF database objects
//!
//! Handles are unique identifiers for every record written into a drawing.
//! They are issued by a [`HandleAllocator`] owned by one drawing session, so
//! two sessions never share handle state.

use std::fmt;

/// A unique identifier for DXF database objects
///
/// Handle 0 is reserved and invalid; the allocator starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The null/invalid handle (0)
    pub const NULL: Handle = Handle(0);

    /// Create a new handle from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is a null/invalid handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

/// Handles are written as lowercase hexadecimal without prefix
impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl fmt::LowerHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Session-scoped handle counter
///
/// Every database object calls [`HandleAllocator::allocate`] exactly once
/// when it is constructed. Allocation requires `&mut self`, so a session has
/// a single writer.
#[derive(Debug, Clone)]
pub struct HandleAllocator {
    first: u64,
    next: u64,
}

impl HandleAllocator {
    /// First handle issued by a fresh allocator
    pub const FIRST: u64 = 1;

    /// Largest accepted seed; handles stay within the signed 64-bit range
    pub const MAX_SEED: u64 = i64::MAX as u64;

    /// Create an allocator that starts at handle 1
    pub fn new() -> Self {
        HandleAllocator {
            first: Self::FIRST,
            next: Self::FIRST,
        }
    }

    /// Create an allocator continuing after externally numbered objects
    ///
    /// A seed of 0 is bumped to 1, since handle 0 is reserved. Seeds above
    /// [`MAX_SEED`](Self::MAX_SEED) are clamped to it.
    pub fn starting_at(seed: u64) -> Self {
        let first = seed.clamp(Self::FIRST, Self::MAX_SEED);
        HandleAllocator { first, next: first }
    }

    /// Issue the next unused handle
    pub fn allocate(&mut self) -> Handle {
        let handle = Handle(self.next);
        self.next += 1;
        handle
    }

    /// Number of handles issued so far
    pub fn current_count(&self) -> u64 {
        self.next - self.first
    }

    /// Value the next call to [`allocate`](Self::allocate) will return
    ///
    /// This is what a document assembler writes as `$HANDSEED`.
    pub fn next_value(&self) -> u64 {
        self.next
    }
}

impl Default for HandleAllocator {
    fn default() -> Self {
        Self::new()
    }
}
