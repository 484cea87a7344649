use crate::config::ServerConfig;
use crate::model::{Receipt, ReceiptId};
use parking_lot::Mutex;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

const RECEIPT_ID_LEN: usize = 26;

// 32-character alphabet without 0/1/l/o lookalikes; 26 characters give
// 130 bits of randomness, so collisions are negligible.
const RECEIPT_ID_ALPHABET: &[u8] = b"23456789abcdefghijkmnpqrstuvwxyz";

/// Shared application state: the in-memory receipt store plus operation
/// counters. Constructed once at startup and handed to handlers as an
/// `Arc`; the map lock is held only for the single insert or read.
pub struct AppState {
    config: Arc<ServerConfig>,
    receipts: Mutex<HashMap<ReceiptId, Receipt>>,
    stored: AtomicU64,
    lookups: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone, Copy)]
pub struct StoreStats {
    pub stored: u64,
    pub lookups: u64,
    pub misses: u64,
}

impl AppState {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            receipts: Mutex::new(HashMap::new()),
            stored: AtomicU64::new(0),
            lookups: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Stores a receipt under a freshly generated identifier and returns the
    /// identifier. The id is generated outside the lock.
    pub fn put(&self, receipt: Receipt) -> ReceiptId {
        let id = random_receipt_id();
        self.receipts.lock().insert(id.clone(), receipt);
        self.stored.fetch_add(1, Ordering::Relaxed);
        id
    }

    /// Returns a copy of the stored receipt, or `None` for an unknown id.
    pub fn get(&self, id: &ReceiptId) -> Option<Receipt> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        let receipt = self.receipts.lock().get(id).cloned();
        if receipt.is_none() {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        receipt
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            stored: self.stored.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

pub fn random_receipt_id() -> ReceiptId {
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity("rcpt-".len() + RECEIPT_ID_LEN);
    out.push_str("rcpt-");
    for _ in 0..RECEIPT_ID_LEN {
        let idx = rng.gen_range(0..RECEIPT_ID_ALPHABET.len());
        out.push(RECEIPT_ID_ALPHABET[idx] as char);
    }
    ReceiptId(out)
}
