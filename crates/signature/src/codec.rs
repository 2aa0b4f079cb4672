use checksums::DIGEST_LEN;
use sync_io::ByteStream;

use crate::error::SignatureError;
use crate::types::{BlockInfo, FileSignature};

/// 8-byte magic that opens and closes a serialized signature.
const MAGIC: &[u8; 8] = b"tdmsync.";

/// Size in bytes of one serialized [`BlockInfo`]: `offset(8) + chksum(4) +
/// digest(20)`.
const BLOCK_RECORD_LEN: usize = 8 + 4 + DIGEST_LEN;

/// Serializes and deserializes a [`FileSignature`] using the tdmsync wire
/// format: a fixed little-endian header, a tightly packed block array with
/// no padding, and a repeated magic as a footer.
///
/// ```text
/// magic:        8 bytes, ASCII "tdmsync."
/// fileSize:     i64
/// blockSize:    i32
/// blocksCount:  u64
/// blocks[blocksCount] x { offset: i64, chksum: u32, digest: [u8; 20] }
/// magic:        8 bytes, ASCII "tdmsync." (footer)
/// ```
#[derive(Debug, Default)]
pub struct SignatureCodec;

impl SignatureCodec {
    /// Writes `sig` to `stream` in the wire format above.
    pub fn serialize(sig: &FileSignature, stream: &mut dyn ByteStream) -> Result<(), SignatureError> {
        let mut buf = Vec::with_capacity(
            MAGIC.len() * 2 + 8 + 4 + 8 + sig.blocks.len() * BLOCK_RECORD_LEN,
        );
        buf.extend_from_slice(MAGIC);
        buf.extend_from_slice(&sig.file_size.to_le_bytes());
        buf.extend_from_slice(&sig.block_size.to_le_bytes());
        buf.extend_from_slice(&(sig.blocks.len() as u64).to_le_bytes());
        for block in &sig.blocks {
            buf.extend_from_slice(&block.offset.to_le_bytes());
            buf.extend_from_slice(&block.chksum.to_le_bytes());
            buf.extend_from_slice(&block.digest);
        }
        buf.extend_from_slice(MAGIC);
        stream.write(&buf)?;
        Ok(())
    }

    /// Reads a [`FileSignature`] from `stream`, starting at its current
    /// cursor position, validating that the stream ends exactly after the
    /// footer magic.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::MalformedSignature`] if either magic fails
    /// to match, the block count disagrees with the stream's remaining
    /// length, or the checksums are not sorted ascending.
    pub fn deserialize(stream: &mut dyn ByteStream) -> Result<FileSignature, SignatureError> {
        let start = stream.tell()?;
        let total_len = stream.size()? - start;

        let mut magic = [0u8; 8];
        stream.read(&mut magic)?;
        if &magic != MAGIC {
            return Err(SignatureError::MalformedSignature {
                reason: "header magic mismatch",
            });
        }

        let mut i64_buf = [0u8; 8];
        stream.read(&mut i64_buf)?;
        let file_size = i64::from_le_bytes(i64_buf);

        let mut i32_buf = [0u8; 4];
        stream.read(&mut i32_buf)?;
        let block_size = i32::from_le_bytes(i32_buf);

        let mut u64_buf = [0u8; 8];
        stream.read(&mut u64_buf)?;
        let blocks_count = u64::from_le_bytes(u64_buf);

        let expected_total = MAGIC.len() as u64 * 2
            + 8
            + 4
            + 8
            + blocks_count * BLOCK_RECORD_LEN as u64;
        if expected_total != total_len {
            return Err(SignatureError::MalformedSignature {
                reason: "declared blocksCount disagrees with stream length",
            });
        }

        let mut blocks = Vec::with_capacity(blocks_count as usize);
        for _ in 0..blocks_count {
            stream.read(&mut i64_buf)?;
            let offset = i64::from_le_bytes(i64_buf);
            let mut chksum_buf = [0u8; 4];
            stream.read(&mut chksum_buf)?;
            let chksum = u32::from_le_bytes(chksum_buf);
            let mut digest = [0u8; DIGEST_LEN];
            stream.read(&mut digest)?;
            blocks.push(BlockInfo {
                offset,
                chksum,
                digest,
            });
        }

        if !blocks.windows(2).all(|w| w[0].chksum <= w[1].chksum) {
            return Err(SignatureError::MalformedSignature {
                reason: "block checksums are not sorted ascending",
            });
        }

        stream.read(&mut magic)?;
        if &magic != MAGIC {
            return Err(SignatureError::MalformedSignature {
                reason: "footer magic mismatch",
            });
        }

        Ok(FileSignature {
            file_size,
            block_size,
            blocks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sync_io::MemStream;

    fn sample_signature() -> FileSignature {
        FileSignature {
            file_size: 100,
            block_size: 32,
            blocks: vec![
                BlockInfo {
                    offset: 32,
                    chksum: 5,
                    digest: [1u8; DIGEST_LEN],
                },
                BlockInfo {
                    offset: 0,
                    chksum: 9,
                    digest: [2u8; DIGEST_LEN],
                },
            ],
        }
    }

    #[test]
    fn round_trips_byte_for_byte() {
        let sig = sample_signature();
        let mut stream = MemStream::new();
        SignatureCodec::serialize(&sig, &mut stream).unwrap();
        stream.seek(0).unwrap();
        let decoded = SignatureCodec::deserialize(&mut stream).unwrap();
        assert_eq!(decoded, sig);
    }

    #[test]
    fn round_trips_empty_block_list() {
        let sig = FileSignature {
            file_size: 3,
            block_size: 32,
            blocks: vec![],
        };
        let mut stream = MemStream::new();
        SignatureCodec::serialize(&sig, &mut stream).unwrap();
        stream.seek(0).unwrap();
        let decoded = SignatureCodec::deserialize(&mut stream).unwrap();
        assert_eq!(decoded, sig);
    }

    #[test]
    fn rejects_bad_header_magic() {
        let sig = sample_signature();
        let mut stream = MemStream::new();
        SignatureCodec::serialize(&sig, &mut stream).unwrap();
        let mut bytes = stream.into_bytes();
        bytes[0] = b'X';
        let mut stream = MemStream::from_bytes(bytes);
        let err = SignatureCodec::deserialize(&mut stream).unwrap_err();
        assert!(matches!(err, SignatureError::MalformedSignature { .. }));
    }

    #[test]
    fn rejects_truncated_stream() {
        let sig = sample_signature();
        let mut stream = MemStream::new();
        SignatureCodec::serialize(&sig, &mut stream).unwrap();
        let mut bytes = stream.into_bytes();
        bytes.truncate(bytes.len() - 4);
        let mut stream = MemStream::from_bytes(bytes);
        assert!(SignatureCodec::deserialize(&mut stream).is_err());
    }

    #[test]
    fn rejects_unsorted_checksums() {
        // The block list in `sample_signature` is intentionally unsorted
        // (chksum 5 then 9 is sorted, so flip it).
        let mut sig = sample_signature();
        sig.blocks.reverse();
        let mut stream = MemStream::new();
        SignatureCodec::serialize(&sig, &mut stream).unwrap();
        stream.seek(0).unwrap();
        let err = SignatureCodec::deserialize(&mut stream).unwrap_err();
        assert!(matches!(err, SignatureError::MalformedSignature { .. }));
    }

    proptest::proptest! {
        /// Property 1: for any FileSignature, deserialize(serialize(s)) == s.
        #[test]
        fn round_trip_is_lossless(
            file_size in 0i64..1_000_000,
            block_size in 1i32..8192,
            mut chksums in proptest::collection::vec(0u32..u32::MAX, 0..64),
        ) {
            chksums.sort_unstable();
            let blocks: Vec<BlockInfo> = chksums
                .into_iter()
                .enumerate()
                .map(|(i, chksum)| BlockInfo {
                    offset: i as i64 * i64::from(block_size),
                    chksum,
                    digest: [i as u8; DIGEST_LEN],
                })
                .collect();
            let sig = FileSignature { file_size, block_size, blocks };

            let mut wire = MemStream::new();
            SignatureCodec::serialize(&sig, &mut wire).unwrap();
            wire.seek(0).unwrap();
            let decoded = SignatureCodec::deserialize(&mut wire).unwrap();
            proptest::prop_assert_eq!(decoded, sig);
        }
    }
}
