use swipedo_core::{Item, ItemList, ItemStore, SequentialIds, TimestampIds};

fn seeded_store() -> ItemStore {
    ItemStore::from_items(
        SequentialIds::new(),
        vec![Item::new(1000, "Sample Text"), Item::new(1001, "Sample Text")],
    )
}

#[test]
fn appends_preserve_call_order_and_length() {
    let mut store: ItemStore = ItemStore::default();
    let texts = ["one", "two", "", "four"];
    let mut list = store.snapshot();
    for text in texts {
        list = store.append(text);
    }

    assert_eq!(list.len(), texts.len());
    for (item, text) in list.iter().zip(texts) {
        assert_eq!(item.text, text);
    }
    let mut ids = list.iter().map(|item| item.id).collect::<Vec<_>>();
    ids.dedup();
    assert_eq!(ids.len(), texts.len(), "sequential ids must be distinct");
}

#[test]
fn remove_is_idempotent() {
    let mut store = seeded_store();
    let first = store.remove(1000);
    let second = store.remove(1000);

    assert_eq!(first, second);
    assert_eq!(first.revision(), second.revision());
    assert_eq!(second.items(), &[Item::new(1001, "Sample Text")]);
}

#[test]
fn removing_unknown_id_returns_equal_sequence() {
    let mut store = seeded_store();
    let before = store.snapshot();
    let after = store.remove(42);

    assert_eq!(after, before);
    assert_eq!(after.items(), before.items());
}

#[test]
fn remove_then_append_scenario() {
    let mut store = seeded_store();
    let after_remove = store.remove(1000);
    assert_eq!(after_remove.items(), &[Item::new(1001, "Sample Text")]);

    let after_append = store.append("Buy milk");
    assert_eq!(after_append.len(), 2);
    assert_eq!(after_append.items()[0], Item::new(1001, "Sample Text"));
    assert_eq!(after_append.items()[1].text, "Buy milk");
    assert!(after_append.items()[1].id > 1001);
}

#[test]
fn earlier_snapshots_are_not_affected_by_later_commands() {
    let mut store = seeded_store();
    let before = store.snapshot();
    store.append("later");
    store.remove(1001);

    assert_eq!(before.len(), 2);
    assert!(before.contains(1001));
}

#[test]
fn update_replaces_text_without_reordering() {
    let mut store = seeded_store();
    store.append("third");
    let list = store.update(1001, "edited");

    let texts = list.iter().map(|item| item.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["Sample Text", "edited", "third"]);
}

#[test]
fn update_of_unknown_id_is_noop() {
    let mut store = seeded_store();
    let before = store.snapshot();
    let after = store.update(7, "ghost");
    assert_eq!(after.revision(), before.revision());
}

#[test]
fn colliding_timestamp_ids_are_removed_together() {
    let list = ItemList::from_items(vec![
        Item::new(1_700_000_000_000, "a"),
        Item::new(1_700_000_000_000, "b"),
        Item::new(1_700_000_000_001, "c"),
    ]);
    let mut store = ItemStore::from_items(TimestampIds::new(), list.items().to_vec());

    let result = store.remove(1_700_000_000_000);
    assert_eq!(result.items(), &[Item::new(1_700_000_000_001, "c")]);
}
