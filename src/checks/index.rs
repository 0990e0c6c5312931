//! Element and position index checks
//!
//! An element index addresses an existing element and must be strictly less
//! than the size. A position index addresses a slot between elements (for
//! insertion or slicing) and may equal the size. The `_desc` forms let the
//! caller name the index in the failure message; the bare forms default the
//! name to "index".

use crate::errors::{PreconditionError, PreconditionResult};

/// Check that `index` addresses an element of a collection of `size`
pub fn check_element_index(index: usize, size: usize) -> PreconditionResult<usize> {
    check_element_index_desc(index, size, "index")
}

/// Check an element index, naming it `desc` in the failure message
pub fn check_element_index_desc(
    index: usize,
    size: usize,
    desc: &str,
) -> PreconditionResult<usize> {
    if index < size {
        Ok(index)
    } else {
        Err(PreconditionError::IndexOutOfRange(format!(
            "{} ({}) must be less than size ({})",
            desc, index, size
        )))
    }
}

/// Check that `index` is a valid position in a collection of `size`
pub fn check_position_index(index: usize, size: usize) -> PreconditionResult<usize> {
    check_position_index_desc(index, size, "index")
}

/// Check a position index, naming it `desc` in the failure message
pub fn check_position_index_desc(
    index: usize,
    size: usize,
    desc: &str,
) -> PreconditionResult<usize> {
    if index <= size {
        Ok(index)
    } else {
        Err(PreconditionError::IndexOutOfRange(format!(
            "{} ({}) must not be greater than size ({})",
            desc, index, size
        )))
    }
}

/// Check that `start..end` is a valid sub-range of a collection of `size`
pub fn check_position_indexes(start: usize, end: usize, size: usize) -> PreconditionResult<()> {
    if start > end {
        Err(PreconditionError::IndexOutOfRange(format!(
            "start position ({}) must not be greater than end position ({})",
            start, end
        )))
    } else if end > size {
        Err(PreconditionError::IndexOutOfRange(format!(
            "end position ({}) must not be greater than size ({})",
            end, size
        )))
    } else {
        Ok(())
    }
}
