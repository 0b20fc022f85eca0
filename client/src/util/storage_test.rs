use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    title: String,
    price: String,
}

#[test]
fn save_then_load_json_returns_same_value() {
    let store = MemoryStore::default();
    let draft = Draft { title: "Linear Algebra".to_owned(), price: "12".to_owned() };
    save_json(&store, "draft", &draft);
    assert_eq!(load_json::<Draft>(&store, "draft"), Some(draft));
}

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStore::default();
    assert_eq!(load_json::<Draft>(&store, "draft"), None);
}

#[test]
fn load_json_malformed_value_is_none() {
    let store = MemoryStore::with(&[("draft", "{not json")]);
    assert_eq!(load_json::<Draft>(&store, "draft"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let store = BrowserStorage;
    store.set("token", "abc");
    assert_eq!(store.get("token"), None);
    store.remove("token");
}
