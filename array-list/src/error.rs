use derive_more::Display;

/// Errors returned by list and cursor operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
#[non_exhaustive]
pub enum Error {
    /// Index was not within `0..size`.
    #[display("index {index} out of range for list of size {size}")]
    OutOfRange {
        /// Index that was requested.
        index: usize,

        /// Size of the list at the time of the request.
        size: usize,
    },

    /// Cursor has already yielded every element.
    #[display("cursor has no more elements")]
    Exhausted,

    /// Doubling the backing buffer would overflow `usize`.
    #[display("cannot grow backing buffer beyond capacity {capacity}")]
    CapacityOverflow {
        /// Capacity before the attempted growth.
        capacity: usize,
    },

    /// Allocator could not provide the grown backing buffer.
    #[display("failed to allocate backing buffer of capacity {capacity}")]
    AllocFailed {
        /// Capacity that was requested.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Error: Send, Sync, Clone, std::error::Error);

    #[test]
    fn out_of_range_reports_index_and_size() {
        let err = Error::OutOfRange { index: 7, size: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for list of size 3");
    }

    #[test]
    fn exhausted_message() {
        assert_eq!(Error::Exhausted.to_string(), "cursor has no more elements");
    }

    #[test]
    fn has_no_source() {
        use std::error::Error as _;

        assert!(Error::CapacityOverflow { capacity: 8 }.source().is_none());
    }
}
