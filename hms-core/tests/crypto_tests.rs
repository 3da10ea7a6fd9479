#![allow(missing_docs)]
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hms_core::crypto::{self, CryptoError};
use hms_core::key_generator::{KEY_ALPHABET, generate_key};

#[test]
fn test_seal_unseal_roundtrip_with_fresh_key() {
    let plaintext = "admin123";
    let key = generate_key(plaintext.len());

    let sealed = crypto::encrypt(plaintext, &key).unwrap();
    let unsealed = crypto::decrypt(&sealed.ciphertext, &sealed.key);

    assert_eq!(unsealed.as_deref(), Some(plaintext));
}

#[test]
fn test_manual_xor_of_outputs_recovers_plaintext() {
    let sealed = crypto::encrypt("admin123", "XY7!ZQ2@").unwrap();

    let ciphertext = STANDARD.decode(&sealed.ciphertext).unwrap();
    let key = STANDARD.decode(&sealed.key).unwrap();
    let recovered: String = ciphertext
        .iter()
        .zip(key.iter())
        .map(|(&c, &k)| char::from(c ^ k))
        .collect();

    assert_eq!(recovered, "admin123");
}

#[test]
fn test_short_key_is_stretched_by_self_repetition() {
    let plaintext = "correct horse battery staple";
    let short_key = "abc";
    let stretched: String = short_key.chars().cycle().take(plaintext.len()).collect();

    let with_short = crypto::encrypt(plaintext, short_key).unwrap();
    let with_stretched = crypto::encrypt(plaintext, &stretched).unwrap();

    assert_eq!(with_short.ciphertext, with_stretched.ciphertext);
    assert_eq!(with_short.key, STANDARD.encode(stretched.as_bytes()));
}

#[test]
fn test_key_longer_than_plaintext_is_kept_whole() {
    let sealed = crypto::encrypt("hi", "longer-key").unwrap();
    assert_eq!(sealed.key, STANDARD.encode(b"longer-key"));
    assert_eq!(crypto::decrypt(&sealed.ciphertext, &sealed.key).as_deref(), Some("hi"));
}

#[test]
fn test_generated_keys_stay_inside_the_alphabet() {
    for length in [0, 1, 16, 74, 256] {
        let key = generate_key(length);
        assert_eq!(key.chars().count(), length);
        assert!(key.chars().all(|c| KEY_ALPHABET.contains(c)));
    }
}

#[test]
fn test_empty_key_passes_text_through() {
    // An empty key cannot be lengthened by repeating itself; the XOR then
    // runs against missing key positions and leaves the text unchanged.
    assert_eq!(generate_key(0), "");

    let sealed = crypto::encrypt("a", "").unwrap();
    assert_eq!(sealed.key, "");
    assert_eq!(sealed.ciphertext, STANDARD.encode(b"a"));
    assert_eq!(crypto::decrypt(&sealed.ciphertext, &sealed.key).as_deref(), Some("a"));
}

#[test]
fn test_unseal_with_short_key_leaves_tail_unchanged() {
    let ciphertext = STANDARD.encode(b"XYZ");
    let key = STANDARD.encode([0x01]);
    assert_eq!(crypto::decrypt(&ciphertext, &key).as_deref(), Some("YYZ"));
}

#[test]
fn test_malformed_base64_yields_no_result() {
    assert_eq!(crypto::decrypt("not-valid-base64!!", "XY7!"), None);
    assert_eq!(crypto::decrypt(&STANDARD.encode(b"fine"), "%%%"), None);
}

#[test]
fn test_wide_characters_are_rejected_at_seal_time() {
    let err = crypto::encrypt("price: 10€", "kkkkkkkkkk").unwrap_err();
    assert_eq!(err, CryptoError::UnencodableCharacter('€'));
}

#[test]
fn test_latin1_characters_roundtrip() {
    let sealed = crypto::encrypt("café au lait", "ZZZZZZZZZZZZ").unwrap();
    let unsealed = crypto::decrypt(&sealed.ciphertext, &sealed.key);
    assert_eq!(unsealed.as_deref(), Some("café au lait"));
}
