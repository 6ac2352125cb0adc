//! Integration tests for view state backed by an in-memory store.

use serde_json::json;
use vowsite::{
    Client, ListView, MemoryStore, MicrositeView, PostView, RecordStore, RsvpStatus, Vendor,
    Wedding,
};

fn client(id: &str, first: &str, last: &str, status: &str) -> Client {
    serde_json::from_value(json!({
        "id": id,
        "first_name": first,
        "last_name": last,
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "status": status
    }))
    .unwrap()
}

fn vendor(id: &str, name: &str, category: &str) -> Vendor {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "category": category,
        "contact_name": "Jordan Lee",
        "contact_email": "jordan@example.com"
    }))
    .unwrap()
}

fn beach_wedding() -> Wedding {
    serde_json::from_value(json!({
        "id": "w1",
        "title": "Sarah & Michael",
        "slug": "sarah-michael",
        "date": "2026-06-14T16:30:00Z",
        "venue": "Gulf Shores Pavilion",
        "status": "client",
        "content": {
            "blocks": [
                { "type": "header", "data": { "text": "Our Story", "level": 2 } },
                { "type": "paragraph", "data": { "text": "We met on the beach." } }
            ]
        },
        "guest_list": [
            { "id": "g1", "name": "Aunt Carol", "email": "carol@example.com" },
            { "id": "g2", "name": "Uncle Ray", "email": "ray@example.com",
              "rsvp_status": "confirmed" }
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn test_list_view_crud_round_trip() {
    let store = MemoryStore::new();
    let mut view: ListView<Client> = ListView::new();

    view.create(&store, client("c1", "Sarah", "Johnson", "lead"))
        .await;
    view.create(&store, client("c2", "Michael", "Chen", "client"))
        .await;
    assert_eq!(view.records().len(), 2);
    assert_eq!(store.row_count("clients"), 2);

    let mut promoted = view.records()[0].clone();
    promoted.status = vowsite::ClientStatus::Client;
    view.update(&store, promoted).await;
    assert_eq!(view.category_counts().get("client"), Some(&2));

    view.delete(&store, "c2").await;
    assert_eq!(view.records().len(), 1);
    assert_eq!(store.row_count("clients"), 1);

    // Reloading from the store sees the same surviving record.
    let mut fresh: ListView<Client> = ListView::new();
    fresh.load(&store).await;
    assert_eq!(fresh.records().len(), 1);
    assert_eq!(fresh.records()[0].id, "c1");
    assert!(fresh.last_error.is_none());
}

#[tokio::test]
async fn test_failed_load_sets_banner_and_keeps_records() {
    let store = MemoryStore::new();
    store
        .insert(vendor("v1", "Coastal Blooms", "florist"))
        .await
        .unwrap();

    let mut view: ListView<Vendor> = ListView::new();
    view.load(&store).await;
    assert_eq!(view.records().len(), 1);

    store.fail_next_call();
    view.load(&store).await;
    assert_eq!(view.last_error.as_deref(), Some("Failed to load vendors"));
    assert_eq!(view.records().len(), 1);
    assert!(!view.loading);

    // The next successful call clears the banner.
    view.load(&store).await;
    assert!(view.last_error.is_none());
}

#[tokio::test]
async fn test_failed_create_discards_the_record() {
    let store = MemoryStore::new();
    let mut view: ListView<Vendor> = ListView::new();

    store.fail_next_call();
    view.create(&store, vendor("v1", "Coastal Blooms", "florist"))
        .await;
    assert_eq!(view.last_error.as_deref(), Some("Failed to create vendor"));
    assert!(view.records().is_empty());
    assert_eq!(store.row_count("vendors"), 0);
}

#[tokio::test]
async fn test_vendor_search_and_category_combine() {
    let store = MemoryStore::new();
    store
        .insert(vendor("v1", "Coastal Blooms", "florist"))
        .await
        .unwrap();
    store
        .insert(vendor("v2", "Shoreline Strings", "music"))
        .await
        .unwrap();
    store
        .insert(vendor("v3", "Bloom & Vine", "florist"))
        .await
        .unwrap();

    let mut view: ListView<Vendor> = ListView::new();
    view.load(&store).await;

    view.set_category_filter(Some("florist".to_owned()));
    assert_eq!(view.visible().len(), 2);

    view.set_search("coastal");
    let visible = view.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "v1");

    // Matches by contact name across every vendor, but the category
    // filter still applies.
    view.set_search("jordan");
    assert_eq!(view.visible().len(), 2);
}

#[tokio::test]
async fn test_microsite_loads_by_slug() {
    let store = MemoryStore::new();
    store.insert(beach_wedding()).await.unwrap();

    let mut view = MicrositeView::new();
    view.load(&store, "sarah-michael").await;

    assert!(!view.is_not_found());
    let wedding = view.wedding.as_ref().unwrap();
    assert_eq!(wedding.title, "Sarah & Michael");

    let doc = view.content().unwrap();
    assert_eq!(doc.len(), 2);
}

#[tokio::test]
async fn test_microsite_unknown_slug_is_not_found() {
    let store = MemoryStore::new();
    store.insert(beach_wedding()).await.unwrap();

    let mut view = MicrositeView::new();
    view.load(&store, "nobody-here").await;

    assert!(view.is_not_found());
    assert!(view.last_error.is_none());
}

#[tokio::test]
async fn test_rsvp_respond_mirrors_into_local_state() {
    let store = MemoryStore::new();
    let wedding = beach_wedding();
    for guest in &wedding.guest_list {
        store.insert(guest.clone()).await.unwrap();
    }
    store.insert(wedding).await.unwrap();

    let mut view = MicrositeView::new();
    view.load(&store, "sarah-michael").await;

    view.respond(&store, "g1", RsvpStatus::Confirmed).await;
    let wedding = view.wedding.as_ref().unwrap();
    assert_eq!(wedding.guest_list[0].rsvp_status, RsvpStatus::Confirmed);
    assert_eq!(wedding.guest_list[1].rsvp_status, RsvpStatus::Confirmed);
    assert!(view.last_error.is_none());
}

#[tokio::test]
async fn test_rsvp_failure_leaves_guest_unchanged() {
    let store = MemoryStore::new();
    let wedding = beach_wedding();
    for guest in &wedding.guest_list {
        store.insert(guest.clone()).await.unwrap();
    }
    store.insert(wedding).await.unwrap();

    let mut view = MicrositeView::new();
    view.load(&store, "sarah-michael").await;

    store.fail_next_call();
    view.respond(&store, "g1", RsvpStatus::Declined).await;

    assert_eq!(view.last_error.as_deref(), Some("Failed to update RSVP"));
    let wedding = view.wedding.as_ref().unwrap();
    assert_eq!(wedding.guest_list[0].rsvp_status, RsvpStatus::Pending);
}

#[tokio::test]
async fn test_post_view_malformed_content_is_none() {
    let store = MemoryStore::new();
    let post: vowsite::BlogPost = serde_json::from_value(json!({
        "id": "p1",
        "title": "Planning Tips",
        "slug": "planning-tips",
        "content": "{broken json",
        "published": true
    }))
    .unwrap();
    store.insert(post).await.unwrap();

    let mut view = PostView::new();
    view.load(&store, "planning-tips").await;

    assert!(!view.is_not_found());
    assert!(view.content().is_none());
}
