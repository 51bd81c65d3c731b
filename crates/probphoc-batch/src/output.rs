//! Output storage seam for batch calls.

use probphoc_core::{PhocError, Probability, Result};

/// Storage a batch call writes its scores into.
///
/// The orchestrator first asks the buffer to hold exactly `len` scores, then
/// borrows it as one dense slice. Storage that cannot provide that slice is a
/// broken buffer contract and fails the call with
/// [`PhocError::AllocationInvariantViolation`] before any score is written.
pub trait OutputBuffer<T> {
    /// Makes room for exactly `len` scores.
    fn shape_to(&mut self, len: usize) -> Result<()>;

    /// The shaped storage as one dense slice, or `None` if it is not contiguous.
    fn contiguous_mut(&mut self) -> Option<&mut [T]>;
}

impl<T: Probability> OutputBuffer<T> for Vec<T> {
    fn shape_to(&mut self, len: usize) -> Result<()> {
        self.resize(len, T::zero());
        Ok(())
    }

    fn contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(self.as_mut_slice())
    }
}

/// A caller-owned buffer of fixed length; it must already have the output size.
impl<T> OutputBuffer<T> for &mut [T] {
    fn shape_to(&mut self, len: usize) -> Result<()> {
        if self.len() == len {
            Ok(())
        } else {
            Err(PhocError::AllocationInvariantViolation(format!(
                "fixed output buffer holds {} scores but {len} are required",
                self.len()
            )))
        }
    }

    fn contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

/// Shapes `out` and borrows it as a slice of exactly `len` scores.
pub(crate) fn prepare<T, O>(out: &mut O, len: usize) -> Result<&mut [T]>
where
    O: OutputBuffer<T> + ?Sized,
{
    out.shape_to(len)?;
    match out.contiguous_mut() {
        Some(slice) if slice.len() == len => Ok(slice),
        Some(slice) => Err(PhocError::AllocationInvariantViolation(format!(
            "output buffer reports {} scores after shaping to {len}",
            slice.len()
        ))),
        None => Err(PhocError::AllocationInvariantViolation(
            "output buffer is not contiguous after shaping".to_string(),
        )),
    }
}
