use sync_io::ByteStream;

use crate::error::PlanError;
use crate::types::UpdatePlan;

/// Reconstructs an output file from a plan, a local byte stream, and an
/// `extras` byte stream holding the concatenation of every remote segment
/// in plan order.
#[derive(Debug, Default)]
pub struct PlanApplier;

impl PlanApplier {
    /// Walks `plan` in `dst_offset` order, copying each local segment from
    /// `local` and each remote segment sequentially from `extras`, writing
    /// both to `output`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvariantViolated`] if `extras`'s length does
    /// not equal `plan.bytes_remote`, or [`PlanError::Io`] if any stream
    /// operation fails.
    pub fn apply(
        plan: &UpdatePlan,
        local: &mut dyn ByteStream,
        extras: &mut dyn ByteStream,
        output: &mut dyn ByteStream,
    ) -> Result<(), PlanError> {
        let extras_len = extras.size()? as i64;
        if extras_len != plan.bytes_remote {
            return Err(PlanError::InvariantViolated {
                reason: "extras stream length does not match plan.bytesRemote",
            });
        }

        extras.seek(0)?;
        output.seek(0)?;
        let mut extras_pos: i64 = 0;

        for seg in &plan.segments {
            let mut buf = vec![0u8; seg.size as usize];
            if seg.remote {
                extras.seek(extras_pos as u64)?;
                extras.read(&mut buf)?;
                extras_pos += seg.size;
            } else {
                local.seek(seg.src_offset as u64)?;
                local.read(&mut buf)?;
            }
            output.seek(seg.dst_offset as u64)?;
            output.write(&buf)?;
        }

        Ok(())
    }
}
