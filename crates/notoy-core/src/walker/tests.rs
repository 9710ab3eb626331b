use super::*;
use crate::tree::MemoryTreeStore;

/// root -> [FolderA -> [Bookmark1, Bookmark2], Bookmark3]
fn create_test_store() -> MemoryTreeStore {
    MemoryTreeStore::from_json(
        r#"{
            "id": "0",
            "children": [
                {"id": "1", "title": "FolderA", "children": [
                    {"id": "10", "title": "Bookmark1", "url": "https://one.example"},
                    {"id": "11", "title": "Bookmark2", "url": "https://two.example"}
                ]},
                {"id": "2", "title": "Bookmark3", "url": "https://three.example"}
            ]
        }"#,
    )
    .unwrap()
}

fn id(value: &str) -> NodeId {
    NodeId::from(value)
}

#[tokio::test]
async fn test_first_leaf_of_root_descends_first_children() {
    let store = create_test_store();
    let walker = BookmarkWalker::new(&store, id("0"));

    let first = walker.first_leaf(&id("0")).await.unwrap().unwrap();
    assert_eq!(first.id, id("10"));
    assert_eq!(first.title(), "Bookmark1");
}

#[tokio::test]
async fn test_first_leaf_of_bookmark_is_itself() {
    let store = create_test_store();
    let walker = BookmarkWalker::new(&store, id("0"));

    let bookmark = store.get_node(&id("11")).await.unwrap();
    let first = walker.first_leaf(&id("11")).await.unwrap().unwrap();
    assert_eq!(first, bookmark);
}

#[tokio::test]
async fn test_first_leaf_of_empty_folder_is_none() {
    let store = MemoryTreeStore::from_json(
        r#"{"id": "0", "children": [
            {"id": "1", "title": "Empty", "children": []},
            {"id": "2", "title": "Late", "url": "https://late.example"}
        ]}"#,
    )
    .unwrap();
    let walker = BookmarkWalker::new(&store, id("0"));

    assert_eq!(walker.first_leaf(&id("1")).await.unwrap(), None);
    // Only the first child is followed, later siblings are not searched
    assert_eq!(walker.first_leaf(&id("0")).await.unwrap(), None);
}

#[tokio::test]
async fn test_first_bookmark_from_skips_empty_folders() {
    let store = MemoryTreeStore::from_json(
        r#"{"id": "0", "children": [
            {"id": "1", "title": "Empty", "children": []},
            {"id": "2", "title": "Nested", "children": [
                {"id": "20", "title": "AlsoEmpty", "children": []}
            ]},
            {"id": "3", "title": "Late", "url": "https://late.example"}
        ]}"#,
    )
    .unwrap();
    let walker = BookmarkWalker::new(&store, id("0"));

    let first = walker.first_bookmark_from(&id("0")).await.unwrap().unwrap();
    assert_eq!(first.id, id("3"));
    let first = walker.first_bookmark_from(&id("2")).await.unwrap().unwrap();
    assert_eq!(first.id, id("3"));
    assert_eq!(walker.first_bookmark_from(&id("3")).await.unwrap(), Some(first));
}

#[tokio::test]
async fn test_first_bookmark_from_tree_without_bookmarks_is_none() {
    let store = MemoryTreeStore::from_json(
        r#"{"id": "0", "children": [
            {"id": "1", "title": "Empty", "children": []}
        ]}"#,
    )
    .unwrap();
    let walker = BookmarkWalker::new(&store, id("0"));

    assert_eq!(walker.first_bookmark_from(&id("0")).await.unwrap(), None);
}

#[tokio::test]
async fn test_first_leaf_of_unknown_id_fails() {
    let store = create_test_store();
    let walker = BookmarkWalker::new(&store, id("0"));

    let err = walker.first_leaf(&id("404")).await.unwrap_err();
    assert_eq!(err, TreeError::NotFound(id("404")));
}

#[tokio::test]
async fn test_next_leaf_walks_tree_order() {
    let store = create_test_store();
    let walker = BookmarkWalker::new(&store, id("0"));

    let second = walker.next_leaf(&id("10")).await.unwrap().unwrap();
    assert_eq!(second.id, id("11"));

    // No sibling after Bookmark2, found by climbing to the root
    let third = walker.next_leaf(&id("11")).await.unwrap().unwrap();
    assert_eq!(third.id, id("2"));

    assert_eq!(walker.next_leaf(&id("2")).await.unwrap(), None);
}

#[tokio::test]
async fn test_next_leaf_of_root_is_none() {
    let store = create_test_store();
    let walker = BookmarkWalker::new(&store, id("0"));

    assert_eq!(walker.next_leaf(&id("0")).await.unwrap(), None);
}

#[tokio::test]
async fn test_next_leaf_stops_at_configured_root() {
    let store = MemoryTreeStore::from_json(
        r#"{"id": "root________", "children": [
            {"id": "toolbar_____", "title": "Toolbar", "children": [
                {"id": "t1", "title": "Toolbar bookmark", "url": "https://toolbar.example"}
            ]},
            {"id": "unfiled_____", "title": "Other", "children": [
                {"id": "u1", "title": "Unfiled", "url": "https://unfiled.example"}
            ]}
        ]}"#,
    )
    .unwrap();
    let walker = BookmarkWalker::new(&store, id("toolbar_____"));

    assert_eq!(walker.next_leaf(&id("t1")).await.unwrap(), None);
    assert_eq!(walker.next_leaf(&id("toolbar_____")).await.unwrap(), None);
}

#[tokio::test]
async fn test_next_leaf_may_return_a_folder() {
    let store = MemoryTreeStore::from_json(
        r#"{"id": "0", "children": [
            {"id": "5", "title": "First", "url": "https://first.example"},
            {"id": "6", "title": "Folder", "children": [
                {"id": "7", "title": "Inside", "url": "https://inside.example"}
            ]}
        ]}"#,
    )
    .unwrap();
    let walker = BookmarkWalker::new(&store, id("0"));

    let next = walker.next_leaf(&id("5")).await.unwrap().unwrap();
    assert_eq!(next.id, id("6"));
    assert!(next.is_folder());

    let leaf = walker.first_leaf(&next.id).await.unwrap().unwrap();
    assert_eq!(leaf.id, id("7"));
}

#[tokio::test]
async fn test_next_leaf_of_deleted_id_fails() {
    let store = create_test_store();
    let walker = BookmarkWalker::new(&store, id("0"));

    store.remove(&id("11")).await.unwrap();
    let err = walker.next_leaf(&id("11")).await.unwrap_err();
    assert_eq!(err, TreeError::NotFound(id("11")));
}

#[tokio::test]
async fn test_resolve_start_id() {
    let store = create_test_store();
    let walker = BookmarkWalker::new(&store, id("0"));

    assert_eq!(walker.resolve_start_id(None).await, id("0"));
    assert_eq!(walker.resolve_start_id(Some(&id("11"))).await, id("11"));

    store.remove(&id("11")).await.unwrap();
    assert_eq!(walker.resolve_start_id(Some(&id("11"))).await, id("0"));
}

#[tokio::test]
async fn test_siblings_of_keeps_one_kind_sorted_by_id() {
    let store = MemoryTreeStore::from_json(
        r#"{"id": "0", "children": [
            {"id": "1", "title": "Bar", "children": [
                {"id": "30", "title": "C", "url": "https://c.example"},
                {"id": "9", "title": "A", "url": "https://a.example"},
                {"id": "12", "title": "Sub", "children": []},
                {"id": "100", "title": "B", "url": "https://b.example"},
                {"id": "4", "title": "Other sub", "children": []}
            ]}
        ]}"#,
    )
    .unwrap();
    let walker = BookmarkWalker::new(&store, id("0"));

    let bookmark = store.get_node(&id("30")).await.unwrap();
    let ids: Vec<_> = walker
        .siblings_of(&bookmark)
        .await
        .unwrap()
        .into_iter()
        .map(|node| node.id.0)
        .collect();
    assert_eq!(ids, vec!["9", "30", "100"]);

    let folder = store.get_node(&id("12")).await.unwrap();
    let ids: Vec<_> = walker
        .siblings_of(&folder)
        .await
        .unwrap()
        .into_iter()
        .map(|node| node.id.0)
        .collect();
    assert_eq!(ids, vec!["4", "12"]);
}

#[tokio::test]
async fn test_siblings_of_root_is_empty() {
    let store = create_test_store();
    let walker = BookmarkWalker::new(&store, id("0"));

    let root = store.get_node(&id("0")).await.unwrap();
    assert!(walker.siblings_of(&root).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ancestors_and_breadcrumb() {
    let store = create_test_store();
    let walker = BookmarkWalker::new(&store, id("0"));

    let bookmark = store.get_node(&id("11")).await.unwrap();
    let ancestors = walker.ancestors(&bookmark).await.unwrap();
    let ids: Vec<_> = ancestors.iter().map(|node| node.id.0.as_str()).collect();
    assert_eq!(ids, vec!["0", "1"]);
    // The untitled root is left out
    assert_eq!(breadcrumb(&ancestors), "FolderA");

    let root = store.get_node(&id("0")).await.unwrap();
    assert!(walker.ancestors(&root).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_firefox_root_id() {
    let store = MemoryTreeStore::from_json(
        r#"[{"id": "root________", "children": [
            {"id": "menu________", "title": "Bookmarks Menu", "children": [
                {"id": "abc", "title": "Mozilla", "url": "https://www.mozilla.org"}
            ]},
            {"id": "toolbar_____", "title": "Bookmarks Toolbar", "children": [
                {"id": "xyz", "title": "MDN", "url": "https://developer.mozilla.org"}
            ]}
        ]}]"#,
    )
    .unwrap();
    let walker = BookmarkWalker::new(&store, crate::platform::Platform::Firefox.root_id());

    let start = walker.resolve_start_id(Some(&id("gone"))).await;
    let first = walker.first_leaf(&start).await.unwrap().unwrap();
    assert_eq!(first.id, id("abc"));

    let next = walker.next_leaf(&first.id).await.unwrap().unwrap();
    assert_eq!(next.id, id("toolbar_____"));

    let ancestors = walker.ancestors(&first).await.unwrap();
    assert_eq!(breadcrumb(&ancestors), "Bookmarks Menu");
}
