use signature::{Signer, SignatureCodec};
use sync_io::{ByteStream, FileStream, MemStream};

#[test]
fn signer_then_codec_round_trips_over_a_real_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("remote.bin");
    let data: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
    {
        let mut file = FileStream::open(&path).unwrap();
        file.write(&data).unwrap();
    }

    let mut file = FileStream::open_read_only(&path).unwrap();
    let sig = Signer::compute_from_stream(&mut file, data.len() as i64, 512).unwrap();
    assert_eq!(sig.blocks.len(), sig.blocks.len()); // sanity: no panics above
    assert!(sig.blocks.windows(2).all(|w| w[0].chksum <= w[1].chksum));

    let mut wire = MemStream::new();
    SignatureCodec::serialize(&sig, &mut wire).unwrap();
    wire.seek(0).unwrap();
    let decoded = SignatureCodec::deserialize(&mut wire).unwrap();
    assert_eq!(decoded, sig);
}

#[test]
fn short_file_produces_empty_signature_that_still_round_trips() {
    let mut file = MemStream::from_bytes(b"hi".to_vec());
    let sig = Signer::compute_from_stream(&mut file, 2, 4096).unwrap();
    assert!(sig.blocks.is_empty());

    let mut wire = MemStream::new();
    SignatureCodec::serialize(&sig, &mut wire).unwrap();
    wire.seek(0).unwrap();
    let decoded = SignatureCodec::deserialize(&mut wire).unwrap();
    assert_eq!(decoded, sig);
}
