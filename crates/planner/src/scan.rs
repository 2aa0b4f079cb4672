use std::collections::VecDeque;

use checksums::{RollingChecksum, StrongDigest};
use phf::PerfectHashTable;
use signature::FileSignature;
use sync_io::ByteStream;

use crate::error::PlanError;
use crate::types::{SegmentUse, UpdatePlan};

/// Reads ahead from a stream in `chunk`-sized gulps, buffering the
/// remainder, so the scan loop's one-byte-at-a-time slide doesn't issue one
/// `read` syscall per byte.
struct ByteFeeder<'a> {
    stream: &'a mut dyn ByteStream,
    buffer: VecDeque<u8>,
    next_read_pos: i64,
    stream_len: i64,
}

impl<'a> ByteFeeder<'a> {
    fn new(stream: &'a mut dyn ByteStream, stream_len: i64, already_consumed: i64) -> Self {
        Self {
            stream,
            buffer: VecDeque::new(),
            next_read_pos: already_consumed,
            stream_len,
        }
    }

    fn next_byte(&mut self, chunk: usize) -> Result<u8, PlanError> {
        if self.buffer.is_empty() {
            let remaining = self.stream_len - self.next_read_pos;
            if remaining <= 0 {
                return Err(PlanError::InvariantViolated {
                    reason: "scan loop advanced past the end of the local stream",
                });
            }
            let to_read = (chunk as i64).min(remaining) as usize;
            let mut buf = vec![0u8; to_read];
            self.stream.seek(self.next_read_pos as u64)?;
            self.stream.read(&mut buf)?;
            self.next_read_pos += to_read as i64;
            self.buffer.extend(buf);
        }
        Ok(self.buffer.pop_front().expect("just refilled"))
    }
}

/// Constructs an [`UpdatePlan`] reconstructing `sig.file_size` bytes from a
/// local byte stream plus whatever remote ranges the local stream could not
/// supply.
#[derive(Debug, Default)]
pub struct Planner;

impl Planner {
    /// Scans `local` against `sig`'s block index and produces a valid
    /// [`UpdatePlan`] over `sig.file_size`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Phf`] if the perfect hash over `sig`'s checksums
    /// fails to build, or [`PlanError::Io`] if reading `local` fails.
    pub fn create_update_plan(
        sig: &FileSignature,
        local: &mut dyn ByteStream,
    ) -> Result<UpdatePlan, PlanError> {
        if sig.file_size == 0 {
            return Ok(UpdatePlan::empty());
        }

        let block_size = i64::from(sig.block_size);
        let local_len = local.size()? as i64;

        let mut segments = Vec::new();

        if !sig.blocks.is_empty() && local_len >= block_size {
            segments = Self::scan(sig, local, local_len, block_size)?;
        }

        Ok(Self::assemble(sig.file_size, segments))
    }

    fn scan(
        sig: &FileSignature,
        local: &mut dyn ByteStream,
        local_len: i64,
        block_size: i64,
    ) -> Result<Vec<SegmentUse>, PlanError> {
        let checksums: Vec<u32> = sig.blocks.iter().map(|b| b.chksum).collect();
        let table = PerfectHashTable::build(&checksums)?;
        let n = checksums.len();
        let mut found = vec![false; n];
        let mut segments = Vec::new();

        local.seek(0)?;
        let mut window_buf = vec![0u8; block_size as usize];
        local.read(&mut window_buf)?;
        let mut window: VecDeque<u8> = window_buf.into_iter().collect();
        let mut curr = RollingChecksum::compute(window.make_contiguous()).map_err(|_| {
            PlanError::InvariantViolated {
                reason: "blockSize produced an empty rolling-checksum window",
            }
        })?;

        let mut feeder = ByteFeeder::new(local, local_len, block_size);

        let mut offset: i64 = 0;
        while offset + block_size <= local_len {
            let key = curr.value();
            let idx = table.evaluate(key) as usize;

            #[cfg(feature = "tracing")]
            tracing::trace!(offset, chksum = key, idx, "probe");

            if idx < n && checksums[idx] == key {
                let mut left = idx;
                while left > 0 && checksums[left - 1] == key {
                    left -= 1;
                }
                let mut right = idx;
                while right < n && checksums[right] == key {
                    right += 1;
                }

                if (left..right).any(|j| !found[j]) {
                    let digest = StrongDigest::digest(window.make_contiguous());
                    for j in left..right {
                        if !found[j] && digest == sig.blocks[j].digest {
                            found[j] = true;
                            segments.push(SegmentUse {
                                src_offset: offset,
                                dst_offset: sig.blocks[j].offset,
                                size: block_size,
                                remote: false,
                            });
                        }
                    }
                }
            }

            if offset + block_size < local_len {
                let added = feeder.next_byte(block_size as usize)?;
                let removed = window.pop_front().expect("window holds block_size bytes");
                window.push_back(added);
                curr = curr.slide(added, removed);
            }
            offset += 1;
        }

        Ok(segments)
    }

    /// Coalesces matched local segments, fills the gaps with remote
    /// segments, and restores `dstOffset` order.
    ///
    /// Anchored tail blocks (see [`signature::Signer`]) can overlap the
    /// previous block in the remote file's own offset space, so two
    /// distinct matched local runs can legitimately claim overlapping
    /// `dst_offset` ranges. Before coalescing, any such overlap is trimmed
    /// from the later segment — both sides reconstruct the same remote
    /// bytes there, so trimming is lossless — which keeps the disjoint
    /// exact-cover invariant intact without special-casing the tail.
    fn assemble(file_size: i64, mut segments: Vec<SegmentUse>) -> UpdatePlan {
        segments.sort_by_key(|s| s.dst_offset);

        let mut coalesced: Vec<SegmentUse> = Vec::with_capacity(segments.len());
        let mut covered: i64 = 0;
        for mut seg in segments {
            if seg.dst_offset < covered {
                let overlap = covered - seg.dst_offset;
                if overlap >= seg.size {
                    continue;
                }
                seg.src_offset += overlap;
                seg.dst_offset += overlap;
                seg.size -= overlap;
            }

            if let Some(last) = coalesced.last_mut() {
                if !last.remote
                    && !seg.remote
                    && last.dst_offset + last.size == seg.dst_offset
                    && last.src_offset + last.size == seg.src_offset
                {
                    last.size += seg.size;
                    covered = last.dst_offset + last.size;
                    continue;
                }
            }
            covered = seg.dst_offset + seg.size;
            coalesced.push(seg);
        }

        let mut result = Vec::with_capacity(coalesced.len() * 2 + 1);
        let mut last_covered: i64 = 0;
        for seg in coalesced {
            if seg.dst_offset > last_covered {
                result.push(SegmentUse {
                    src_offset: last_covered,
                    dst_offset: last_covered,
                    size: seg.dst_offset - last_covered,
                    remote: true,
                });
            }
            last_covered = seg.dst_offset + seg.size;
            result.push(seg);
        }
        if file_size > last_covered {
            result.push(SegmentUse {
                src_offset: last_covered,
                dst_offset: last_covered,
                size: file_size - last_covered,
                remote: true,
            });
        }

        result.sort_by_key(|s| s.dst_offset);

        let bytes_local: i64 = result.iter().filter(|s| !s.remote).map(|s| s.size).sum();
        let bytes_remote: i64 = result.iter().filter(|s| s.remote).map(|s| s.size).sum();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            segment_count = result.len(),
            bytes_local,
            bytes_remote,
            "plan assembled"
        );

        UpdatePlan {
            file_size,
            segments: result,
            bytes_local,
            bytes_remote,
        }
    }
}
