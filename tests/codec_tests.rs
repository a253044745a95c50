//! Integration tests for the chained XOR codec facade

use chainxor::prelude::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

#[test]
fn test_facade_roundtrip() {
    let codec = ChainedXor::new(b"facade key").unwrap();

    let sealed = codec.encrypt(b"message body").unwrap();
    assert_eq!(sealed.len(), b"message body".len());
    assert_eq!(codec.decrypt(&sealed).unwrap(), b"message body");
}

#[test]
fn test_free_functions_match_bound_instance() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut data = vec![0u8; 257];
    rng.fill_bytes(&mut data);

    let codec = ChainedXor::new(b"k3y").unwrap();
    let via_instance = codec.encrypt(&data).unwrap();
    let via_free = encrypt(&data, b"k3y").unwrap();
    assert_eq!(via_instance, via_free);

    assert_eq!(decrypt(&via_free, b"k3y").unwrap(), data);
}

#[test]
fn test_in_place_entry_points() {
    let original = b"mutate me in place".to_vec();
    let mut buf = original.clone();

    encrypt_in_place(&mut buf, b"pk").unwrap();
    assert_ne!(buf, original);
    assert_eq!(buf.len(), original.len());

    decrypt_in_place(&mut buf, b"pk").unwrap();
    assert_eq!(buf, original);
}

#[test]
fn test_generic_codec_use() {
    fn seal_and_open<C: SymmetricCodec>(key: &C::Key, data: &[u8]) -> Vec<u8> {
        let codec = C::new(key).unwrap();
        let sealed = codec.encrypt(data).unwrap();
        codec.decrypt(&sealed).unwrap()
    }

    let key = XorKey::new(b"generic").unwrap();
    let opened = seal_and_open::<ChainedXor>(&key, b"through the trait");
    assert_eq!(opened, b"through the trait");
}

#[test]
fn test_error_display() {
    let err = encrypt(b"data", &[]).unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("Invalid argument"));
    assert!(rendered.contains("key must not be empty"));
}

#[test]
fn test_shared_instance_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let codec = Arc::new(ChainedXor::new(b"shared").unwrap());
    let handles: Vec<_> = (0u8..4)
        .map(|seed| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                let data = vec![seed; 1024];
                let sealed = codec.encrypt(&data).unwrap();
                assert_eq!(codec.decrypt(&sealed).unwrap(), data);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
