//! Tests for gallery loading, capacity and write-through persistence

#[cfg(test)]
mod tests {
    use fractree::TreeParameters;
    use fractree::gallery::storage::{MemoryStorage, StorageBackend};
    use fractree::gallery::store::{GalleryStore, decode_entries, encode_entries};
    use fractree::io::error::{Result, file_system_error};

    const KEY: &str = "trees-grid";

    fn tree(length: f64) -> TreeParameters {
        TreeParameters::new(length, 0.6, 25.0, 2.0, 7)
    }

    /// Backend whose writes always fail, like a full disk
    #[derive(Default)]
    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(file_system_error(
                "quota",
                "read",
                std::io::Error::other("storage disabled"),
            ))
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(file_system_error(
                "quota",
                "write",
                std::io::Error::other("quota exceeded"),
            ))
        }

        fn remove_item(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    // Tests absent data loads as an empty gallery
    // Verified by failing when the key is missing
    #[test]
    fn test_load_empty() {
        let store = GalleryStore::load(MemoryStorage::new(), KEY, 25);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 25);
        assert_eq!(store.remaining(), 25);
        assert_eq!(store.key(), KEY);
    }

    // Tests corrupt data is swallowed
    // Verified by propagating the parse error
    #[test]
    fn test_load_corrupt_data_is_empty() {
        let store = GalleryStore::load(MemoryStorage::with_item(KEY, "{not json"), KEY, 25);
        assert!(store.is_empty());

        let store = GalleryStore::load(MemoryStorage::with_item(KEY, r#"{"a":1}"#), KEY, 25);
        assert!(store.is_empty());
    }

    // Tests bad elements are skipped without dropping their neighbours
    // Verified by decoding the array as a whole
    #[test]
    fn test_load_skips_bad_elements() {
        let raw = r#"[
            null,
            {"length":60,"fraction":0.7,"angle":30,"threshold":1,"maxDepth":10},
            {"length":40,"fraction":0.5,"angle":20,"threshold":1},
            "tree",
            {"length":80,"fraction":0.6,"angle":25,"threshold":2,"maxDepth":7}
        ]"#;

        let store = GalleryStore::load(MemoryStorage::with_item(KEY, raw), KEY, 25);
        assert_eq!(
            store.list(),
            &[
                TreeParameters::default(),
                TreeParameters::new(80.0, 0.6, 25.0, 2.0, 7)
            ]
        );
    }

    // Tests the next append keeps the readable trees of a partly bad gallery
    // Verified by loading partly bad data as an empty gallery
    #[test]
    fn test_append_after_bad_element_keeps_saved_trees() {
        let raw = r#"[null,{"length":60,"fraction":0.7,"angle":30,"threshold":1,"maxDepth":10}]"#;
        let mut store = GalleryStore::load(MemoryStorage::with_item(KEY, raw), KEY, 25);
        assert!(store.append(tree(10.0)));

        let stored = store.backend().get_item(KEY).unwrap().unwrap();
        assert_eq!(
            decode_entries(&stored).unwrap(),
            vec![TreeParameters::default(), tree(10.0)]
        );
    }

    // Tests unreadable storage is swallowed
    // Verified by propagating the read error
    #[test]
    fn test_load_unreadable_storage_is_empty() {
        let store = GalleryStore::load(FailingStorage, KEY, 25);
        assert!(store.is_empty());
    }

    // Tests appends persist the whole list under the key
    // Verified by persisting only the new entry
    #[test]
    fn test_append_writes_through() {
        let mut store = GalleryStore::load(MemoryStorage::new(), KEY, 25);
        assert!(store.append(tree(10.0)));
        assert!(store.append(tree(20.0)));

        let raw = store.backend().get_item(KEY).unwrap().unwrap();
        assert_eq!(decode_entries(&raw).unwrap(), vec![tree(10.0), tree(20.0)]);
        assert_eq!(store.get(1), Some(&tree(20.0)));
    }

    // Tests appending to a full gallery changes nothing
    // Verified by checking capacity after the push
    #[test]
    fn test_full_gallery_rejects_append() {
        let mut store = GalleryStore::load(MemoryStorage::new(), KEY, 2);
        assert!(store.append(tree(1.0)));
        assert!(store.append(tree(2.0)));
        assert!(store.is_full());

        let before = store.list().to_vec();
        let stored_before = store.backend().get_item(KEY).unwrap();

        assert!(!store.append(tree(3.0)));
        assert_eq!(store.list(), before.as_slice());
        assert_eq!(store.backend().get_item(KEY).unwrap(), stored_before);
        assert_eq!(store.remaining(), 0);
    }

    // Tests the in-memory list keeps the entry when the write fails
    // Verified by rolling back on write failure
    #[test]
    fn test_write_failure_keeps_entry() {
        let mut store = GalleryStore::load(FailingStorage, KEY, 25);
        assert!(store.append(tree(5.0)));
        assert_eq!(store.len(), 1);
    }

    // Tests an existing gallery reloads in insertion order
    // Verified by sorting entries on load
    #[test]
    fn test_reload_preserves_order() {
        let entries = vec![tree(30.0), tree(10.0), tree(20.0)];
        let raw = encode_entries(&entries).unwrap();

        let store = GalleryStore::load(MemoryStorage::with_item(KEY, &raw), KEY, 25);
        assert_eq!(store.list(), entries.as_slice());
    }

    // Tests oversized stored lists are cut to capacity
    // Verified by loading every stored entry
    #[test]
    fn test_load_truncates_to_capacity() {
        let entries: Vec<TreeParameters> = (0..5).map(|i| tree(f64::from(i))).collect();
        let raw = encode_entries(&entries).unwrap();

        let store = GalleryStore::load(MemoryStorage::with_item(KEY, &raw), KEY, 3);
        assert_eq!(store.list(), &entries[..3]);
        assert!(store.is_full());
    }

    // Tests clearing empties the list and removes the key
    // Verified by clearing only the in-memory list
    #[test]
    fn test_clear() {
        let mut store = GalleryStore::load(MemoryStorage::new(), KEY, 25);
        store.append(tree(1.0));
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.backend().get_item(KEY).unwrap(), None);
    }

    // Tests N entries survive serialization field for field
    // Verified by dropping the threshold field from the encoding
    #[test]
    fn test_encode_decode_entries() {
        let entries = vec![
            TreeParameters::default(),
            TreeParameters::new(150.0, 0.45, -12.5, 0.25, 3),
            TreeParameters::new(1.0, 1.0, 0.0, 0.0, 0),
        ];
        let decoded = decode_entries(&encode_entries(&entries).unwrap()).unwrap();
        assert_eq!(decoded, entries);
    }
}
