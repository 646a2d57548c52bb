use bookcase_core::{Book, BookRepository, MemoryBlobStore, RemoveOutcome, RepoError, BOOKS_KEY};

fn dune() -> Book {
    Book::new("Dune", "Herbert", "9780441013593")
}

#[test]
fn fetch_all_of_missing_key_is_empty() {
    let repo = BookRepository::new(MemoryBlobStore::new());
    assert!(repo.fetch_all().unwrap().is_empty());
}

#[test]
fn fetch_all_of_empty_string_blob_is_empty() {
    let mut store = MemoryBlobStore::new();
    store.seed(BOOKS_KEY, "");
    let repo = BookRepository::new(store);
    assert!(repo.fetch_all().unwrap().is_empty());
}

#[test]
fn fetch_all_rejects_malformed_blob() {
    let mut store = MemoryBlobStore::new();
    store.seed(BOOKS_KEY, "{not a list");
    let repo = BookRepository::new(store);
    let err = repo.fetch_all().unwrap_err();
    assert!(matches!(err, RepoError::Corrupt { key: "books", .. }));
}

#[test]
fn append_adds_at_the_end_of_the_list() {
    let mut repo = BookRepository::new(MemoryBlobStore::new());
    repo.append(&dune()).unwrap();
    repo.append(&Book::new("Emma", "Austen", "9780141439587"))
        .unwrap();

    let books = repo.fetch_all().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[1].title, "Emma");
}

#[test]
fn blob_wire_format_is_a_json_array_of_three_string_fields() {
    use bookcase_core::BlobStore;

    let mut repo = BookRepository::new(MemoryBlobStore::new());
    repo.append(&dune()).unwrap();

    let store = repo.into_store();
    let blob = store.get(BOOKS_KEY).unwrap().unwrap();
    assert_eq!(
        blob,
        r#"[{"title":"Dune","author":"Herbert","isbn":"9780441013593"}]"#
    );
}

#[test]
fn remove_by_isbn_drops_every_matching_entry() {
    let mut repo = BookRepository::new(MemoryBlobStore::new());
    repo.append(&dune()).unwrap();
    repo.append(&Book::new("Dune (dup)", "Herbert", "9780441013593"))
        .unwrap();
    repo.append(&Book::new("Emma", "Austen", "9780141439587"))
        .unwrap();

    let outcome = repo.remove_by_isbn("9780441013593").unwrap();
    assert_eq!(outcome, RemoveOutcome::Removed { count: 2 });

    let books = repo.fetch_all().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].isbn, "9780141439587");
}

#[test]
fn remove_by_isbn_with_no_match_still_rewrites() {
    let mut repo = BookRepository::new(MemoryBlobStore::new());
    repo.append(&dune()).unwrap();

    let outcome = repo.remove_by_isbn("missing").unwrap();
    assert_eq!(outcome, RemoveOutcome::Removed { count: 0 });
    assert_eq!(repo.fetch_all().unwrap().len(), 1);
}

#[test]
fn remove_by_isbn_on_empty_list_is_already_empty_and_writes_nothing() {
    let mut repo = BookRepository::new(MemoryBlobStore::new());
    let outcome = repo.remove_by_isbn("9780441013593").unwrap();
    assert_eq!(outcome, RemoveOutcome::AlreadyEmpty);

    // The key was never written, so a later fetch still sees the missing-key
    // empty state.
    let store = repo.into_store();
    use bookcase_core::BlobStore;
    assert_eq!(store.get(BOOKS_KEY).unwrap(), None);
}

#[test]
fn persist_then_refetch_preserves_order() {
    let mut repo = BookRepository::new(MemoryBlobStore::new());
    for i in 0..5 {
        repo.append(&Book::new(format!("t{i}"), format!("a{i}"), format!("i{i}")))
            .unwrap();
    }

    let titles: Vec<_> = repo
        .fetch_all()
        .unwrap()
        .into_iter()
        .map(|book| book.title)
        .collect();
    assert_eq!(titles, vec!["t0", "t1", "t2", "t3", "t4"]);
}
