//! Integration tests for `VaultClient` push/pull.

use std::sync::Arc;

use rand::distr::{Alphanumeric, SampleString};
use rand::RngCore;
use tinycrypt::store::MemoryStore;
use tinycrypt::{KeyDeriver, Lookup, RemoteStore, Salt, StoreError, TinyCryptError, VaultClient};

/// Helper: a client with an isolated salt over a fresh in-memory store.
fn client() -> VaultClient<MemoryStore> {
    VaultClient::with_deriver(
        KeyDeriver::new(Salt::new("TinyCrypt Unit Tests")),
        MemoryStore::new(),
    )
}

/// A store that fails every call with a transport fault.
struct BrokenStore;

impl RemoteStore for BrokenStore {
    fn put(&self, _alias: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Transport("network unreachable".into()))
    }

    fn get(&self, _alias: &str) -> Result<Lookup, StoreError> {
        Err(StoreError::Transport("network unreachable".into()))
    }
}

/// A store that knows nothing for one alias and faults for every other.
struct SplitStore {
    absent_alias: String,
}

impl RemoteStore for SplitStore {
    fn put(&self, _alias: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn get(&self, alias: &str) -> Result<Lookup, StoreError> {
        if alias == self.absent_alias {
            Ok(Lookup::NotFound)
        } else {
            Err(StoreError::UnexpectedStatus {
                status: 503,
                url: format!("https://store.example/{alias}"),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[test]
fn push_then_pull_returns_message() {
    let client = client();
    client
        .push(b"correct horse", b"meet at dawn")
        .expect("push");

    let message = client.pull(b"correct horse").expect("pull");
    assert_eq!(message.as_deref(), Some(&b"meet at dawn"[..]));
}

#[test]
fn pull_never_pushed_key_is_absent() {
    let message = client().pull(b"never pushed key").expect("pull");
    assert!(message.is_none());
}

#[test]
fn pull_with_different_secret_is_absent() {
    let client = client();
    client.push(b"correct horse", b"meet at dawn").unwrap();

    let message = client.pull(b"correct horse battery").unwrap();
    assert!(message.is_none(), "wrong secret must miss the record");
}

#[test]
fn binary_message_roundtrip() {
    let client = client();
    let message: Vec<u8> = vec![0x00, 0xFF, 0xC3, 0x28, 0x0A, 0x0D, 0x80, 0x7F];

    client.push(b"binary key", &message).unwrap();
    assert_eq!(client.pull(b"binary key").unwrap(), Some(message));
}

#[test]
fn empty_message_roundtrip() {
    let client = client();
    client.push(b"empty", b"").unwrap();
    assert_eq!(client.pull(b"empty").unwrap(), Some(Vec::new()));
}

#[test]
fn second_push_overwrites_first() {
    let client = client();
    client.push(b"k", b"first").unwrap();
    client.push(b"k", b"second").unwrap();
    assert_eq!(client.pull(b"k").unwrap(), Some(b"second".to_vec()));
}

#[test]
fn evicted_record_reads_as_absent() {
    let client = client();
    client.push(b"k", b"soon gone").unwrap();

    let alias = client.alias(b"k").unwrap();
    client.store().evict(&alias).unwrap();

    assert!(client.pull(b"k").unwrap().is_none());
}

#[test]
fn fuzzy_push_pull() {
    let client = client();
    let mut rng = rand::rng();

    for _ in 0..20 {
        let key = Alphanumeric.sample_string(&mut rng, 32);
        let mut message = vec![0u8; 64];
        rng.fill_bytes(&mut message);

        client.push(key.as_bytes(), &message).unwrap();
        assert_eq!(client.pull(key.as_bytes()).unwrap(), Some(message));
    }
}

// ---------------------------------------------------------------------------
// Absent vs. error
// ---------------------------------------------------------------------------

#[test]
fn not_found_is_absent_and_fault_is_error() {
    let deriver = KeyDeriver::new(Salt::new("TinyCrypt Unit Tests"));
    let absent_alias = deriver.derive(b"secret A").unwrap().alias().to_string();
    let client = VaultClient::with_deriver(deriver, SplitStore { absent_alias });

    assert!(client.pull(b"secret A").unwrap().is_none());

    let err = client.pull(b"secret B").unwrap_err();
    assert!(matches!(
        err,
        TinyCryptError::Store(StoreError::UnexpectedStatus { status: 503, .. })
    ));
}

#[test]
fn push_surfaces_store_fault() {
    let client = VaultClient::new(BrokenStore);
    let err = client.push(b"k", b"v").unwrap_err();
    assert!(matches!(err, TinyCryptError::Store(StoreError::Transport(_))));
}

#[test]
fn pull_surfaces_store_fault() {
    let client = VaultClient::new(BrokenStore);
    let err = client.pull(b"k").unwrap_err();
    assert!(matches!(err, TinyCryptError::Store(StoreError::Transport(_))));
    assert!(err.to_string().contains("network unreachable"));
}

// ---------------------------------------------------------------------------
// Store plumbing
// ---------------------------------------------------------------------------

#[test]
fn client_over_boxed_dyn_store() {
    let store: Box<dyn RemoteStore> = Box::new(MemoryStore::new());
    let client = VaultClient::with_deriver(KeyDeriver::new(Salt::new("boxed")), store);

    client.push(b"k", b"v").unwrap();
    assert_eq!(client.pull(b"k").unwrap(), Some(b"v".to_vec()));
}

#[test]
fn two_clients_share_one_store_by_reference() {
    let store = MemoryStore::new();
    let salt = Salt::new("shared");
    let writer = VaultClient::with_deriver(KeyDeriver::new(salt.clone()), &store);
    let reader = VaultClient::with_deriver(KeyDeriver::new(salt), &store);

    writer.push(b"k", b"hello").unwrap();
    assert_eq!(reader.pull(b"k").unwrap(), Some(b"hello".to_vec()));
}

#[test]
fn different_salts_do_not_see_each_other() {
    let store = MemoryStore::new();
    let a = VaultClient::with_deriver(KeyDeriver::new(Salt::new("salt a")), &store);
    let b = VaultClient::with_deriver(KeyDeriver::new(Salt::new("salt b")), &store);

    a.push(b"k", b"only for a").unwrap();
    assert!(b.pull(b"k").unwrap().is_none());
}

#[test]
fn concurrent_pushes_with_distinct_secrets() {
    let client = Arc::new(client());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = Arc::clone(&client);
            std::thread::spawn(move || {
                let key = format!("key-{i}");
                let msg = format!("message-{i}");
                client.push(key.as_bytes(), msg.as_bytes()).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..8 {
        let pulled = client.pull(format!("key-{i}").as_bytes()).unwrap();
        assert_eq!(pulled, Some(format!("message-{i}").into_bytes()));
    }
    assert_eq!(client.store().len().unwrap(), 8);
}
