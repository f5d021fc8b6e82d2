//! tests/roundtrip_tests.rs
//! End-to-end framing properties: round trips, header size, wrong-key and
//! truncation rejection, and the (deliberate) absence of payload integrity.

mod common;
use common::{other_keypair, test_keypair};

use std::io::Cursor;

use aes::cipher::StreamCipher;
use rsacrypt_rs::consts::{NONCE_LEN, RSA_MODULUS_LEN};
use rsacrypt_rs::{decrypt, encrypt, Header, RsacryptError};

fn encrypt_to_vec(plaintext: &[u8]) -> Vec<u8> {
    let keypair = test_keypair();
    let mut ciphertext = Vec::new();
    encrypt(&keypair.public, Cursor::new(plaintext), &mut ciphertext)
        .expect("encryption should succeed");
    ciphertext
}

fn decrypt_to_vec(ciphertext: &[u8]) -> Vec<u8> {
    let keypair = test_keypair();
    let mut plaintext = Vec::new();
    decrypt(&keypair.private, Cursor::new(ciphertext), &mut plaintext)
        .expect("decryption should succeed");
    plaintext
}

#[test]
fn roundtrip_various_sizes() {
    // Includes the empty file, sub-block, exactly-one-block, and a large
    // non-block-aligned payload.
    let large: Vec<u8> = (0..100_003u32).map(|i| (i % 251) as u8).collect();

    let cases: Vec<(&[u8], &str)> = vec![
        (&[], "empty input"),
        (b"Hello, World!", "small input"),
        (&[0xAA; 16], "exactly one AES block"),
        (&large, "large non-aligned input (100 003 bytes)"),
    ];

    for (plaintext, desc) in cases {
        let ciphertext = encrypt_to_vec(plaintext);
        assert_eq!(
            ciphertext.len(),
            RSA_MODULUS_LEN + plaintext.len(),
            "{desc}: ciphertext must be header + payload, nothing more"
        );
        let recovered = decrypt_to_vec(&ciphertext);
        assert_eq!(recovered, plaintext, "{desc}: round trip mismatch");
    }
}

#[test]
fn header_is_exactly_one_rsa_block() {
    let ciphertext = encrypt_to_vec(b"payload");
    assert_eq!(ciphertext.len() - b"payload".len(), RSA_MODULUS_LEN);
}

#[test]
fn encryption_is_nondeterministic() {
    let plaintext = b"same plaintext, same key";
    let ct1 = encrypt_to_vec(plaintext);
    let ct2 = encrypt_to_vec(plaintext);

    // Fresh session key and fresh OAEP randomness every run: the headers
    // (and with them the keystreams) must differ.
    assert_ne!(ct1, ct2);
    assert_ne!(ct1[..RSA_MODULUS_LEN], ct2[..RSA_MODULUS_LEN]);

    assert_eq!(decrypt_to_vec(&ct1), plaintext);
    assert_eq!(decrypt_to_vec(&ct2), plaintext);
}

#[test]
fn wrong_key_is_rejected_deterministically() {
    let ciphertext = encrypt_to_vec(b"for the other keypair's eyes only");
    let wrong = other_keypair();

    // OAEP unwrap failure is not probabilistic — run it a few times.
    for _ in 0..3 {
        let mut sink = Vec::new();
        let err = decrypt(&wrong.private, Cursor::new(&ciphertext), &mut sink)
            .expect_err("wrong private key must fail");
        assert!(matches!(err, RsacryptError::KeyMismatch), "got {err:?}");
        assert!(sink.is_empty(), "no plaintext may be produced");
    }
}

#[test]
fn truncated_input_is_rejected_before_symmetric_work() {
    let keypair = test_keypair();

    for len in [0usize, 1, 16, 255] {
        let short = vec![0x42u8; len];
        let mut sink = Vec::new();
        let err = decrypt(&keypair.private, Cursor::new(&short), &mut sink)
            .expect_err("short input must fail");
        match err {
            RsacryptError::TruncatedInput { expected, actual } => {
                assert_eq!(expected, RSA_MODULUS_LEN);
                assert_eq!(actual, len);
            }
            other => panic!("expected TruncatedInput, got {other:?}"),
        }
        assert!(sink.is_empty());
    }
}

#[test]
fn corrupted_header_is_a_key_mismatch() {
    let keypair = test_keypair();
    let mut ciphertext = encrypt_to_vec(b"header corruption test");
    ciphertext[5] ^= 0x01;

    let err = decrypt(&keypair.private, Cursor::new(&ciphertext), &mut Vec::new())
        .expect_err("corrupted header must fail");
    assert!(matches!(err, RsacryptError::KeyMismatch), "got {err:?}");
}

#[test]
fn payload_tampering_is_silent() {
    // No MAC on the payload: a flipped ciphertext bit flips exactly the
    // same plaintext bit and decryption still reports success.
    let plaintext = vec![0x55u8; 100];
    let mut ciphertext = encrypt_to_vec(&plaintext);
    let tampered_offset = RSA_MODULUS_LEN + 44;
    ciphertext[tampered_offset] ^= 0x80;

    let recovered = decrypt_to_vec(&ciphertext);
    assert_eq!(recovered.len(), plaintext.len());
    assert_eq!(recovered[44], plaintext[44] ^ 0x80);

    let mut expected = plaintext.clone();
    expected[44] ^= 0x80;
    assert_eq!(recovered, expected, "only the tampered byte may change");
}

#[test]
fn nonce_is_the_header_prefix() {
    let keypair = test_keypair();
    let plaintext = b"nonce derivation check";
    let ciphertext = encrypt_to_vec(plaintext);

    let mut input = Cursor::new(&ciphertext);
    let header = Header::read_from(&mut input, RSA_MODULUS_LEN).unwrap();
    assert_eq!(header.nonce(), ciphertext[..NONCE_LEN]);

    // Rebuilding the keystream from header[0..16] by hand must recover the
    // plaintext — this is the whole framing contract.
    let session_key = header.unwrap_session_key(&keypair.private).unwrap();
    let mut payload = ciphertext[RSA_MODULUS_LEN..].to_vec();
    session_key
        .keystream(&header.nonce())
        .apply_keystream(&mut payload);
    assert_eq!(payload, plaintext);
}
