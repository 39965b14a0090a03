//! Ledger persistence.
//!
//! Storage is an external blob: the whole ledger is loaded once at startup
//! and rewritten in full after every append. Write failures are reported to
//! the caller of [`LedgerStore::save`] but intake swallows them.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use veriguard_types::{Result, TicketRecord, VeriguardError};

/// Load/save access to the persisted ledger.
pub trait LedgerStore: Send + Sync {
    /// Returns the stored records in insertion order; empty if nothing has
    /// been stored yet.
    ///
    /// # Errors
    /// `StorageReadCorruption` if stored content cannot be parsed.
    fn load(&self) -> Result<Vec<TicketRecord>>;

    /// Replaces the stored ledger with `records`.
    ///
    /// # Errors
    /// `StorageWrite` if the records could not be durably written.
    fn save(&self, records: &[TicketRecord]) -> Result<()>;
}

impl<T: LedgerStore + ?Sized> LedgerStore for Arc<T> {
    fn load(&self) -> Result<Vec<TicketRecord>> {
        (**self).load()
    }

    fn save(&self, records: &[TicketRecord]) -> Result<()> {
        (**self).save(records)
    }
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// Ledger stored as a JSON array in a single file.
///
/// Saves go to a sibling `.tmp` file that is then renamed over the target,
/// so a crash mid-write leaves the previous ledger intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write(&self, records: &[TicketRecord]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec(records)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<Vec<TicketRecord>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(VeriguardError::StorageReadCorruption {
                    reason: format!("{}: {err}", self.path.display()),
                });
            }
        };
        serde_json::from_slice(&raw).map_err(|err| VeriguardError::StorageReadCorruption {
            reason: format!("{}: {err}", self.path.display()),
        })
    }

    fn save(&self, records: &[TicketRecord]) -> Result<()> {
        self.write(records)
            .map_err(|err| VeriguardError::StorageWrite {
                reason: format!("{}: {err}", self.path.display()),
            })
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store. Can be told to fail writes or to present a corrupt
/// ledger on load.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<TicketRecord>>,
    fail_writes: AtomicBool,
    corrupt: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `records`.
    #[must_use]
    pub fn with_records(records: Vec<TicketRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// A store whose load always reports corruption.
    #[must_use]
    pub fn corrupt() -> Self {
        let store = Self::default();
        store.corrupt.store(true, Ordering::SeqCst);
        store
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Copy of what was last saved.
    #[must_use]
    pub fn stored(&self) -> Vec<TicketRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Vec<TicketRecord>> {
        if self.corrupt.load(Ordering::SeqCst) {
            return Err(VeriguardError::StorageReadCorruption {
                reason: "memory store marked corrupt".to_string(),
            });
        }
        Ok(self.stored())
    }

    fn save(&self, records: &[TicketRecord]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(VeriguardError::StorageWrite {
                reason: "memory store write failure".to_string(),
            });
        }
        *self.records.lock().unwrap_or_else(PoisonError::into_inner) = records.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
