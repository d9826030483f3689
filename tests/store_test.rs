use snipbox::store::{CreateOutcome, NewSnippet, SnippetPatch, SnippetStore};
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> SnippetStore {
    SnippetStore::open(&dir.path().join("snippets.db")).expect("open store")
}

fn snippet(language: &str, title: &str, category: &str) -> NewSnippet {
    NewSnippet {
        language: language.to_string(),
        title: title.to_string(),
        code: format!("// {title}"),
        category: category.to_string(),
        additional_info: String::new(),
    }
}

fn hello_world() -> NewSnippet {
    NewSnippet {
        language: "Python".to_string(),
        title: "Hello World".to_string(),
        code: "print(\"Hello, World!\")".to_string(),
        category: "Getting Started".to_string(),
        additional_info: "A simple program that prints a greeting".to_string(),
    }
}

#[test]
fn create_then_list_round_trips_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    assert_eq!(store.create(&hello_world()).unwrap(), CreateOutcome::Created);

    let snippets = store.list().unwrap();
    assert_eq!(snippets.len(), 1);
    let got = &snippets[0];
    assert_eq!(got.language, "Python");
    assert_eq!(got.title, "Hello World");
    assert_eq!(got.code, "print(\"Hello, World!\")");
    assert_eq!(got.category, "Getting Started");
    assert_eq!(got.additional_info, "A simple program that prints a greeting");
}

#[test]
fn duplicate_triple_is_rejected_not_stored() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    assert_eq!(store.create(&hello_world()).unwrap(), CreateOutcome::Created);

    // same triple, different body: still a duplicate
    let mut second = hello_world();
    second.code = "print('different body')".to_string();
    assert_eq!(store.create(&second).unwrap(), CreateOutcome::Duplicate);

    let snippets = store.list().unwrap();
    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].code, "print(\"Hello, World!\")");
}

#[test]
fn triple_match_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.create(&hello_world()).unwrap();
    let mut lowercased = hello_world();
    lowercased.language = "python".to_string();

    assert_eq!(store.create(&lowercased).unwrap(), CreateOutcome::Created);
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn exists_matches_exact_triple_only() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    store.create(&hello_world()).unwrap();

    assert!(store.exists("Python", "Hello World", "Getting Started").unwrap());
    assert!(!store.exists("Python", "Hello World", "Basics").unwrap());
    assert!(!store.exists("python", "Hello World", "Getting Started").unwrap());
}

#[test]
fn read_missing_id_returns_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    assert!(store.read(99).unwrap().is_none());
}

#[test]
fn delete_returns_true_then_false() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    store.create(&hello_world()).unwrap();

    assert!(store.delete(1).unwrap());
    assert!(store.list().unwrap().is_empty());
    assert!(!store.delete(1).unwrap());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.create(&snippet("Python", "first", "Basics")).unwrap();
    store.create(&snippet("Python", "second", "Basics")).unwrap();
    assert!(store.delete(2).unwrap());
    store.create(&snippet("Python", "third", "Basics")).unwrap();

    let ids: Vec<i64> = store.list().unwrap().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn distinct_languages_and_categories() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.create(&snippet("Python", "a", "Basics")).unwrap();
    store.create(&snippet("Javascript", "b", "Basics")).unwrap();
    store.create(&snippet("Python", "c", "Web")).unwrap();

    let mut languages = store.languages().unwrap();
    languages.sort();
    assert_eq!(languages, vec!["Javascript", "Python"]);

    let mut categories = store.categories().unwrap();
    categories.sort();
    assert_eq!(categories, vec!["Basics", "Web"]);
}

#[test]
fn find_filters_are_exact_and_independent() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.create(&snippet("Python", "loop", "Basics")).unwrap();
    store.create(&snippet("Python", "fetch", "Web")).unwrap();
    store.create(&snippet("Javascript", "fetch", "Web")).unwrap();

    assert_eq!(store.find_by_language("Python").unwrap().len(), 2);
    assert_eq!(store.find_by_category("Web").unwrap().len(), 2);
    assert_eq!(store.find_by_title("fetch").unwrap().len(), 2);

    let both = store.find_by_language_and_category("Python", "Web").unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].title, "fetch");

    // no substring or case-insensitive matching
    assert!(store.find_by_language("python").unwrap().is_empty());
    assert!(store.find_by_title("fet").unwrap().is_empty());
    assert!(store.find_by_category("Simple").unwrap().is_empty());
}

#[test]
fn store_reopens_with_data_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snippets.db");

    {
        let store = SnippetStore::open(&path).unwrap();
        store.create(&hello_world()).unwrap();
    }

    // schema init is idempotent and existing rows survive a reopen
    let store = SnippetStore::open(&path).unwrap();
    let snippets = store.list().unwrap();
    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].title, "Hello World");
}

#[test]
fn end_to_end_crud_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let input = NewSnippet {
        language: "Python".to_string(),
        title: "Hello World".to_string(),
        code: "print(\"Hello, World!\")".to_string(),
        category: "Getting Started".to_string(),
        additional_info: "A simple program...".to_string(),
    };
    assert_eq!(store.create(&input).unwrap(), CreateOutcome::Created);

    let got = store.read(1).unwrap().expect("snippet 1 exists");
    assert_eq!(got.language, input.language);
    assert_eq!(got.title, input.title);
    assert_eq!(got.code, input.code);
    assert_eq!(got.category, input.category);
    assert_eq!(got.additional_info, input.additional_info);

    let patch = SnippetPatch {
        title: Some("Hello, World!".to_string()),
        ..Default::default()
    };
    assert!(store.update(1, &patch).unwrap());

    let updated = store.read(1).unwrap().expect("snippet 1 still exists");
    assert_eq!(updated.title, "Hello, World!");
    assert_eq!(updated.language, input.language);
    assert_eq!(updated.code, input.code);
    assert_eq!(updated.category, input.category);
    assert_eq!(updated.additional_info, input.additional_info);

    assert!(store.delete(1).unwrap());
    assert!(store.list().unwrap().is_empty());
}
