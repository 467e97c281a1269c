use crate::errors::NoteStoreError;
use crate::{Note, NoteID, NoteStore};

fn note(title: &str, content: &str) -> Note {
    Note::new(title.to_owned(), content.to_owned())
}

pub(super) async fn unique_id(store: impl NoteStore) {
    let id1 = store.add_note(note("", "Foo")).await.unwrap();
    let id2 = store.add_note(note("", "Bar")).await.unwrap();
    assert_ne!(id1, id2);
    assert!(!id1.is_unassigned());
    assert!(!id2.is_unassigned());
}

pub(super) async fn new_note_retrieve(store: impl NoteStore) {
    let id = store.add_note(note("title", "Foo")).await.unwrap();
    let retrieved = store.read_note(id).await.unwrap();
    assert_eq!(retrieved, note("title", "Foo").with_id(id));
}

pub(super) async fn caller_id_ignored(store: impl NoteStore) {
    let id = store
        .add_note(note("title", "Foo").with_id(NoteID::new(123456)))
        .await
        .unwrap();
    assert_ne!(id, NoteID::new(123456));
    assert!(matches!(
        store.read_note(NoteID::new(123456)).await,
        Err(NoteStoreError::NoteNotExist(_))
    ));
    assert_eq!(store.read_note(id).await.unwrap().id, id);
}

pub(super) async fn read_missing_note(store: impl NoteStore) {
    let id = store.add_note(note("", "Foo")).await.unwrap();
    let missing = NoteID::new(id.as_i64() + 1);
    let res = store.read_note(missing).await;
    assert!(matches!(res, Err(NoteStoreError::NoteNotExist(x)) if x == missing));
}

pub(super) async fn list_pagination(store: impl NoteStore) {
    let mut ids = vec![];
    for i in 0..5 {
        ids.push(
            store
                .add_note(note(&format!("title{}", i), "body"))
                .await
                .unwrap(),
        );
    }
    let page0 = store.read_note_list(2, 0).await.unwrap();
    let page1 = store.read_note_list(2, 1).await.unwrap();
    let page2 = store.read_note_list(2, 2).await.unwrap();
    let page3 = store.read_note_list(2, 3).await.unwrap();
    assert_eq!(page0.iter().map(|n| n.id).collect::<Vec<_>>(), ids[0..2]);
    assert_eq!(page1.iter().map(|n| n.id).collect::<Vec<_>>(), ids[2..4]);
    assert_eq!(page2.iter().map(|n| n.id).collect::<Vec<_>>(), ids[4..5]);
    assert!(page3.is_empty());
    assert!(page0.iter().all(|a| page1.iter().all(|b| a.id < b.id)));
    assert_eq!(page1[0].title, "title2");

    assert_eq!(store.read_note_list(10, 0).await.unwrap().len(), 5);
    assert!(store.read_note_list(0, 0).await.unwrap().is_empty());
}

pub(super) async fn list_invalid_pagination(store: impl NoteStore) {
    store.add_note(note("", "Foo")).await.unwrap();
    assert!(store.read_note_list(-1, 0).await.is_err());
    assert!(store.read_note_list(1, -1).await.is_err());
    assert!(matches!(
        store.read_note_list(i64::MAX, 2).await,
        Err(NoteStoreError::InvalidPagination { .. })
    ));
}

pub(super) async fn update_note(store: impl NoteStore) {
    let id1 = store.add_note(note("old", "Foo")).await.unwrap();
    let id2 = store.add_note(note("other", "Bar")).await.unwrap();
    store
        .update_note(note("new", "Foo1").with_id(id1))
        .await
        .unwrap();
    assert_eq!(store.read_note(id1).await.unwrap(), note("new", "Foo1").with_id(id1));
    assert_eq!(store.read_note(id2).await.unwrap(), note("other", "Bar").with_id(id2));
}

pub(super) async fn update_missing_note(store: impl NoteStore) {
    let id = store.add_note(note("", "Foo")).await.unwrap();
    let res = store
        .update_note(note("", "Bar").with_id(NoteID::new(id.as_i64() + 1)))
        .await;
    assert!(matches!(res, Err(NoteStoreError::UnexpectedUpdateCount(0))));
    assert_eq!(res.unwrap_err().to_string(), "0 entries updated");
    let res = store.update_note(note("", "Bar")).await;
    assert!(matches!(res, Err(NoteStoreError::UnexpectedUpdateCount(0))));
}

pub(super) async fn remove_note_twice(store: impl NoteStore) {
    let id = store.add_note(note("", "Foo")).await.unwrap();
    store.remove_note(id).await.unwrap();
    assert!(matches!(
        store.read_note(id).await,
        Err(NoteStoreError::NoteNotExist(_))
    ));
    let res = store.remove_note(id).await;
    assert!(matches!(res, Err(NoteStoreError::UnexpectedDeleteCount(0))));
    assert_eq!(res.unwrap_err().to_string(), "0 entries deleted");
}

pub(super) async fn ids_not_reused(store: impl NoteStore) {
    let id1 = store.add_note(note("", "Foo")).await.unwrap();
    store.remove_note(id1).await.unwrap();
    let id2 = store.add_note(note("", "Bar")).await.unwrap();
    assert!(id2 > id1);
}
