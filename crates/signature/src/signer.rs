use checksums::{RollingChecksum, StrongDigest};
use sync_io::ByteStream;

use crate::error::SignatureError;
use crate::types::{BlockInfo, FileSignature};

/// Computes a [`FileSignature`] for a seekable byte stream.
///
/// Stateless; all configuration is a `block_size` passed to
/// [`Signer::compute_from_stream`].
#[derive(Debug, Default)]
pub struct Signer;

impl Signer {
    /// Scans `stream` (length `file_size`, read from offset `0`) into a
    /// [`FileSignature`] cut at `block_size`.
    ///
    /// If `file_size < block_size`, the returned signature has no blocks.
    /// Otherwise the final block is anchored at
    /// `max(i * block_size, file_size - block_size)` so the file's tail is
    /// always covered by a full-length block, even if that means
    /// overlapping the previous block's bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::InvariantViolated`] if `block_size` is not
    /// positive or is not a valid rolling-checksum window length, or
    /// [`SignatureError::Io`] if reading `stream` fails.
    pub fn compute_from_stream(
        stream: &mut dyn ByteStream,
        file_size: i64,
        block_size: i32,
    ) -> Result<FileSignature, SignatureError> {
        if block_size <= 0 {
            return Err(SignatureError::InvariantViolated {
                reason: "blockSize must be > 0",
            });
        }

        if file_size < i64::from(block_size) {
            return Ok(FileSignature {
                file_size,
                block_size,
                blocks: Vec::new(),
            });
        }

        let n = FileSignature::expected_block_count(file_size, block_size);
        let bs = i64::from(block_size);

        #[cfg(feature = "tracing")]
        tracing::debug!(file_size, block_size, block_count = n, "computing signature");

        let offsets: Vec<i64> = (0..n)
            .map(|i| (i as i64 * bs).min(file_size - bs))
            .collect();

        // `stream` is not `Sync`, so the sequential read pass collects owned
        // buffers first; hashing those buffers has no further dependency on
        // the stream and can run in parallel.
        let mut buffers = Vec::with_capacity(offsets.len());
        for &off in &offsets {
            stream.seek(off as u64)?;
            let mut buf = vec![0u8; block_size as usize];
            stream.read(&mut buf)?;
            buffers.push(buf);
        }

        let hash_one = |buf: &[u8]| -> Result<(u32, [u8; checksums::DIGEST_LEN]), SignatureError> {
            let chksum = RollingChecksum::compute(buf)
                .map_err(|_| SignatureError::InvariantViolated {
                    reason: "blockSize produced an empty rolling-checksum window",
                })?
                .value();
            Ok((chksum, StrongDigest::digest(buf)))
        };

        #[cfg(feature = "parallel")]
        let hashed: Vec<_> = {
            use rayon::prelude::*;
            buffers
                .par_iter()
                .map(|buf| hash_one(buf))
                .collect::<Result<Vec<_>, _>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let hashed: Vec<_> = buffers
            .iter()
            .map(|buf| hash_one(buf))
            .collect::<Result<Vec<_>, _>>()?;

        let mut blocks: Vec<BlockInfo> = offsets
            .into_iter()
            .zip(hashed)
            .map(|(offset, (chksum, digest))| BlockInfo {
                offset,
                chksum,
                digest,
            })
            .collect();
        blocks.sort_unstable_by_key(|b| b.chksum);

        #[cfg(feature = "tracing")]
        tracing::debug!(block_count = blocks.len(), "signature computed");

        Ok(FileSignature {
            file_size,
            block_size,
            blocks,
        })
    }
}
