use keyindex::{
    BalancedTree, Color, Index, LinearScan, OrderedTree, ProbingHashTable, Record, RecordSet,
};
use proptest::prelude::*;

fn records_strategy() -> impl Strategy<Value = RecordSet> {
    // A small key alphabet forces repeated keys.
    prop::collection::vec(("[a-e]{0,3}", any::<i64>()), 0..200).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(key, payload)| Record::new(key, payload))
            .collect()
    })
}

fn sorted_payloads<I: Index>(index: &I, key: &str) -> Vec<i64> {
    let mut found: Vec<_> = index.search(key).into_iter().map(Record::payload).collect();
    found.sort_unstable();
    found
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn red_black_invariants_hold_after_every_insert(records in records_strategy()) {
        let mut tree = BalancedTree::new();
        for record in &records {
            tree.insert(record.clone());
            prop_assert!(tree.validate().is_ok());
            prop_assert_eq!(tree.root_color(), Some(Color::Black));
        }
        prop_assert_eq!(tree.len(), records.len());
        prop_assert_eq!(tree.node_count(), records.distinct_keys());
    }

    #[test]
    fn trees_return_every_record_for_a_key(records in records_strategy(), probe in "[a-f]{0,3}") {
        let mut scan = LinearScan::new();
        let mut ordered = OrderedTree::new();
        let mut balanced = BalancedTree::new();
        scan.insert_all(&records);
        ordered.insert_all(&records);
        balanced.insert_all(&records);

        for record in &records {
            let expected = sorted_payloads(&scan, record.key());
            prop_assert_eq!(&sorted_payloads(&ordered, record.key()), &expected);
            prop_assert_eq!(&sorted_payloads(&balanced, record.key()), &expected);
        }
        // Insertion order is kept per key by the balanced tree.
        let in_order: Vec<_> = scan.search(&probe).into_iter().map(Record::payload).collect();
        let balanced_order: Vec<_> = balanced.get(&probe).iter().map(Record::payload).collect();
        prop_assert_eq!(in_order, balanced_order);
    }

    #[test]
    fn hash_table_keeps_first_record_per_key(records in records_strategy()) {
        let mut table = ProbingHashTable::sized_for(records.len().max(1)).unwrap();
        table.insert_all(&records);
        prop_assert_eq!(table.occupied(), records.distinct_keys());
        prop_assert_eq!(table.dropped(), 0);
        for record in &records {
            let first = records.iter().find(|r| r.key() == record.key());
            prop_assert_eq!(table.get(record.key()), first);
        }
    }

    #[test]
    fn absent_keys_are_not_found(records in records_strategy(), probe in "[f-h]{1,3}") {
        let mut ordered = OrderedTree::new();
        let mut balanced = BalancedTree::new();
        let mut table = ProbingHashTable::with_capacity(64).unwrap();
        ordered.insert_all(&records);
        balanced.insert_all(&records);
        table.insert_all(&records);
        prop_assert!(ordered.search(&probe).is_empty());
        prop_assert!(balanced.search(&probe).is_empty());
        prop_assert!(table.search(&probe).is_empty());
    }

    #[test]
    fn tiny_tables_never_hang(records in records_strategy(), capacity in 1usize..8) {
        let mut table = ProbingHashTable::with_capacity(capacity).unwrap();
        table.insert_all(&records);
        let placed = records.distinct_keys().min(capacity);
        prop_assert_eq!(table.occupied(), placed);
        prop_assert!(table.search("zzzz").is_empty());
    }
}
