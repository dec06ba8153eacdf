//! The memo collection and the only code that touches its persisted blob.

use crate::note::{Note, StoredEntry};
use crate::storage::Storage;
use serde_json::Value;
use std::io;

/// Slot the whole collection is serialized under.
pub const STORE_KEY: &str = "memoryStorage";

pub struct NoteStore<S: Storage> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: Storage> NoteStore<S> {
    /// Load the collection from `storage`. A missing slot yields an empty
    /// store; an unreadable or corrupt one is logged and also yields an
    /// empty store.
    pub fn open(storage: S) -> Self {
        let notes = match storage.get(STORE_KEY) {
            Ok(Some(raw)) => decode_notes(&raw).unwrap_or_else(|e| {
                log::error!("memo store is corrupt, starting empty: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::error!("memo store could not be read, starting empty: {e}");
                Vec::new()
            }
        };
        log::debug!("opened memo store with {} record(s)", notes.len());
        Self { storage, notes }
    }

    /// Append a memo and persist. Returns `None` without writing when the
    /// text is blank. The in-memory list only changes once the write
    /// succeeded.
    pub fn append(
        &mut self,
        text: &str,
        tags: Vec<String>,
        date: String,
    ) -> io::Result<Option<Note>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let note = Note::new(text, tags, date);
        let mut next = self.notes.clone();
        next.push(note.clone());
        self.commit(next)?;
        Ok(Some(note))
    }

    /// Remove every memo whose text and date both equal the given values.
    pub fn delete_where(&mut self, text: &str, date: &str) -> io::Result<usize> {
        let next: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| n.text != text || n.date != date)
            .cloned()
            .collect();
        let removed = self.notes.len() - next.len();
        self.commit(next)?;
        Ok(removed)
    }

    pub fn load_all(&self) -> &[Note] {
        &self.notes
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write `next` to storage, then adopt it as the current list.
    fn commit(&mut self, next: Vec<Note>) -> io::Result<()> {
        let blob = encode_notes(&next)?;
        self.storage.set(STORE_KEY, &blob)?;
        log::debug!("persisted {} record(s)", next.len());
        self.notes = next;
        Ok(())
    }
}

pub fn encode_notes(notes: &[Note]) -> io::Result<String> {
    serde_json::to_string(notes).map_err(io::Error::other)
}

/// Decode the persisted array. The top level must be an array. Elements
/// that are neither a string nor an object, or that carry no text, are
/// skipped with a warning.
pub fn decode_notes(raw: &str) -> serde_json::Result<Vec<Note>> {
    let values: Vec<Value> = serde_json::from_str(raw)?;
    let mut notes = Vec::with_capacity(values.len());
    for (idx, value) in values.into_iter().enumerate() {
        if !matches!(value, Value::String(_) | Value::Object(_)) {
            log::warn!("skipping memo #{idx}: expected a string or an object");
            continue;
        }
        match serde_json::from_value::<StoredEntry>(value) {
            Ok(entry) => {
                let note = Note::from(entry);
                if note.text.trim().is_empty() {
                    log::warn!("skipping memo #{idx}: empty text");
                } else {
                    notes.push(note);
                }
            }
            Err(e) => log::warn!("skipping memo #{idx}: {e}"),
        }
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    fn stored(store: &NoteStore<MemoryStorage>) -> String {
        store.storage().get(STORE_KEY).unwrap().unwrap_or_default()
    }

    #[test]
    fn append_then_load_contains_text() {
        let mut store = NoteStore::open(MemoryStorage::new());
        let note = store
            .append("buy milk", vec!["#shopping".into()], "2024/01/01".into())
            .unwrap()
            .unwrap();
        assert_eq!(note.text, "buy milk");
        assert_eq!(store.load_all(), &[note]);
    }

    #[test]
    fn append_blank_is_a_no_op() {
        let mut store = NoteStore::open(MemoryStorage::new());
        assert!(store.append("  \n\t", vec![], "d".into()).unwrap().is_none());
        assert!(store.load_all().is_empty());
        assert_eq!(store.storage().get(STORE_KEY).unwrap(), None);
    }

    #[test]
    fn append_trims_text() {
        let mut store = NoteStore::open(MemoryStorage::new());
        store.append("  spaced  ", vec![], String::new()).unwrap();
        assert_eq!(store.load_all()[0].text, "spaced");
    }

    #[test]
    fn mutation_keeps_blob_in_sync() {
        let mut store = NoteStore::open(MemoryStorage::new());
        store.append("a", vec![], "2024/01/01".into()).unwrap();
        store.append("b", vec!["#x".into()], "2024/01/02".into()).unwrap();
        assert_eq!(stored(&store), encode_notes(store.load_all()).unwrap());
        store.delete_where("a", "2024/01/01").unwrap();
        assert_eq!(stored(&store), encode_notes(store.load_all()).unwrap());
    }

    #[test]
    fn delete_where_removes_all_equal_and_keeps_order() {
        let mut store = NoteStore::open(MemoryStorage::new());
        store.append("dup", vec![], "2024/01/01".into()).unwrap();
        store.append("keep1", vec![], "2024/01/01".into()).unwrap();
        store.append("dup", vec!["#t".into()], "2024/01/01".into()).unwrap();
        store.append("dup", vec![], "2024/01/02".into()).unwrap();
        store.append("keep2", vec![], "2024/01/03".into()).unwrap();

        let removed = store.delete_where("dup", "2024/01/01").unwrap();
        assert_eq!(removed, 2);
        let texts: Vec<(&str, &str)> = store
            .load_all()
            .iter()
            .map(|n| (n.text.as_str(), n.date.as_str()))
            .collect();
        assert_eq!(
            texts,
            vec![
                ("keep1", "2024/01/01"),
                ("dup", "2024/01/02"),
                ("keep2", "2024/01/03")
            ]
        );
    }

    #[test]
    fn delete_where_matches_legacy_with_empty_date() {
        let storage =
            MemoryStorage::with_slot(STORE_KEY, r#"["hello", "other"]"#);
        let mut store = NoteStore::open(storage);
        assert_eq!(store.delete_where("hello", "").unwrap(), 1);
        assert_eq!(store.load_all(), &[Note::new("other", vec![], "")]);
        assert_eq!(stored(&store), r#"[{"text":"other","tags":[],"date":""}]"#);
    }

    #[test]
    fn round_trip_structured_records() {
        let notes = vec![
            Note::new("line1\nline2", vec!["#a".into(), "#a".into()], "2024/01/01 10:00:00"),
            Note::new("日本語", vec![], "2024/01/02"),
        ];
        let blob = encode_notes(&notes).unwrap();
        assert_eq!(decode_notes(&blob).unwrap(), notes);
    }

    #[test]
    fn corrupt_blob_opens_empty() {
        let storage = MemoryStorage::with_slot(STORE_KEY, "{not json");
        let store = NoteStore::open(storage);
        assert!(store.load_all().is_empty());

        let storage = MemoryStorage::with_slot(STORE_KEY, r#"{"text":"x"}"#);
        assert!(NoteStore::open(storage).load_all().is_empty());
    }

    #[test]
    fn odd_elements_are_skipped() {
        let notes = decode_notes(
            r##"["hello", 42, null, [], ["x", ["#t"], "d"], {}, {"text":"  "},
                {"text":"x","tags":["#a"],"date":"d"}]"##,
        )
        .unwrap();
        assert_eq!(
            notes,
            vec![
                Note::new("hello", vec![], ""),
                Note::new("x", vec!["#a".into()], "d")
            ]
        );
    }

    #[test]
    fn delete_where_tells_undated_from_dated_same_text() {
        let storage = MemoryStorage::with_slot(
            STORE_KEY,
            r#"["note", {"text":"note","tags":[],"date":"2024/01/01 10:00:00"}]"#,
        );
        let mut store = NoteStore::open(storage);
        assert_eq!(store.delete_where("note", "").unwrap(), 1);
        assert_eq!(
            store.load_all(),
            &[Note::new("note", vec![], "2024/01/01 10:00:00")]
        );
        assert_eq!(store.delete_where("note", "2024/01/01 10:00").unwrap(), 0);
        assert_eq!(store.delete_where("note", "2024/01/01 10:00:00").unwrap(), 1);
        assert!(store.load_all().is_empty());
    }

    /// Reads succeed, every write fails.
    struct ReadOnlyStorage(MemoryStorage);

    impl Storage for ReadOnlyStorage {
        fn get(&self, key: &str) -> io::Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn failed_write_leaves_memos_untouched() {
        let blob = r#"[{"text":"keep","tags":[],"date":"2024/01/01"}]"#;
        let mut store =
            NoteStore::open(ReadOnlyStorage(MemoryStorage::with_slot(STORE_KEY, blob)));
        let before = store.load_all().to_vec();

        assert!(store.append("new", vec![], "2024/01/02".into()).is_err());
        assert_eq!(store.load_all(), before.as_slice());

        assert!(store.delete_where("keep", "2024/01/01").is_err());
        assert_eq!(store.load_all(), before.as_slice());
        assert_eq!(store.storage().get(STORE_KEY).unwrap().as_deref(), Some(blob));
    }

    #[test]
    fn file_backed_store_survives_reopen() {
        let tmp = tempdir().unwrap();
        let mut store = NoteStore::open(FileStorage::new(tmp.path()));
        store.append("persisted", vec!["#k".into()], "2024/05/05".into()).unwrap();

        let reopened = NoteStore::open(FileStorage::new(tmp.path()));
        assert_eq!(
            reopened.load_all(),
            &[Note::new("persisted", vec!["#k".into()], "2024/05/05")]
        );
    }
}
