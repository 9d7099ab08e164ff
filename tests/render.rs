//! Server-side renders of the card and sidebar against in-memory storage.

use dioxus::prelude::*;
use docs_ui::components::card::ExampleCard;
use docs_ui::components::navigation::Sidebar;
use docs_ui::config::{SectionKeying, SidebarConfig, DEFAULT_STORAGE_KEY};
use docs_ui::storage::{MemoryStore, OpenSections, SessionStore};
use docs_ui::types::{NavTree, RouteState, Technology};

const EXPANDED: &str = "class=\"accordion-content active-acc\"";
const COLLAPSED: &str = "class=\"accordion-content\"";

#[derive(Clone, PartialEq, Props)]
struct HarnessProps {
    tree: NavTree,
    route: RouteState,
    store: MemoryStore,
    keying: SectionKeying,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    use_context_provider(|| SidebarConfig {
        keying: props.keying,
        ..SidebarConfig::default()
    });
    use_context_provider(|| OpenSections::new(props.store.clone()));

    rsx! {
        Sidebar { tree: props.tree.clone(), route: props.route.clone() }
    }
}

fn route(segments: &[&str]) -> RouteState {
    let slug: Vec<String> = segments.iter().map(|s| s.to_string()).collect();
    RouteState::new(format!("/docs/{}", slug.join("/")), slug)
}

fn render_sidebar(tree: &str, route: RouteState, store: &MemoryStore, keying: SectionKeying) -> String {
    let props = HarnessProps {
        tree: NavTree::from_json(tree).unwrap(),
        route,
        store: store.clone(),
        keying,
    };
    let mut dom = VirtualDom::new_with_props(Harness, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn persisted(store: &MemoryStore) -> Vec<String> {
    store
        .get_item(DEFAULT_STORAGE_KEY)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
        .unwrap_or_default()
}

const ANDROID_TREE: &str = r#"{
    "android": {
        "setup": { "title": "Setup", "url": "/docs/android/setup" }
    }
}"#;

const FEATURES_TREE: &str = r#"{
    "features": {
        "chat": { "title": "Chat", "url": "/docs/features/chat" },
        "x": { "title": "Feature X", "url": "/docs/features/x" }
    }
}"#;

#[test]
fn test_single_technology_renders_icon_and_label() {
    let html = dioxus_ssr::render_element(rsx! {
        ExampleCard {
            title: "Live Streaming",
            description: "Broadcast to viewers",
            technologies: vec![Technology::ReactNative],
        }
    });

    assert!(html.contains("Live Streaming"));
    assert!(html.contains("Broadcast to viewers"));
    assert_eq!(html.matches("technology-icon-").count(), 1);
    assert!(html.contains("<span class=\"icon-list-label\">React Native</span>"));
    assert!(!html.contains("icon-list-item"));
}

#[test]
fn test_many_technologies_render_icons_in_order() {
    let html = dioxus_ssr::render_element(rsx! {
        ExampleCard {
            title: "Audio Rooms",
            description: "Drop-in audio",
            technologies: vec![Technology::Ios, Technology::Flutter, Technology::Ios],
        }
    });

    assert_eq!(html.matches("class=\"icon-list-item\"").count(), 3);
    assert_eq!(html.matches("technology-icon-ios").count(), 2);
    assert!(!html.contains("icon-list-label"));

    let first_ios = html.find("technology-icon-ios").unwrap();
    let flutter = html.find("technology-icon-flutter").unwrap();
    let last_ios = html.rfind("technology-icon-ios").unwrap();
    assert!(first_ios < flutter && flutter < last_ios);
}

#[test]
fn test_hidden_icons_render_no_icon_area() {
    let html = dioxus_ssr::render_element(rsx! {
        ExampleCard {
            title: "Chat",
            description: "Chat app",
            technologies: vec![Technology::React, Technology::Android],
            show_icon: false,
        }
    });

    assert!(!html.contains("technology-icon"));
    assert!(!html.contains("icon-list"));
}

#[test]
fn test_tags_render_in_order_with_duplicates() {
    let html = dioxus_ssr::render_element(rsx! {
        ExampleCard {
            title: "Chat",
            description: "Chat app",
            tags: vec!["chat".to_string(), "audio".to_string(), "chat".to_string()],
        }
    });

    assert_eq!(html.matches("class=\"tag-pill\"").count(), 3);
    let chat = html.find(">chat<").unwrap();
    let audio = html.find(">audio<").unwrap();
    assert!(chat < audio);
    assert!(html.rfind(">chat<").unwrap() > audio);
}

#[test]
fn test_card_without_tags_or_technologies_renders_only_text() {
    let html = dioxus_ssr::render_element(rsx! {
        ExampleCard { title: "Plain", description: "Nothing else", class: "featured" }
    });

    assert!(html.contains("class=\"example-card featured\""));
    assert!(!html.contains("tag-list"));
    assert!(!html.contains("icon-list"));
}

#[test]
fn test_in_focus_section_starts_expanded_and_is_recorded() {
    let store = MemoryStore::new();
    let html = render_sidebar(FEATURES_TREE, route(&["features", "x"]), &store, SectionKeying::Name);

    assert!(html.contains(EXPANDED));
    assert!(html.contains("sidebar-section-header in-focus"));
    assert_eq!(persisted(&store), vec!["features".to_string()]);
}

#[test]
fn test_unfocused_section_starts_collapsed() {
    let store = MemoryStore::new();
    let html = render_sidebar(ANDROID_TREE, route(&["ios", "setup"]), &store, SectionKeying::Name);

    assert!(html.contains(COLLAPSED));
    assert!(!html.contains(EXPANDED));
    assert!(html.contains("Android"));
    assert!(persisted(&store).is_empty());
}

#[test]
fn test_persisted_section_starts_expanded() {
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, r#"["android"]"#);
    let html = render_sidebar(ANDROID_TREE, route(&["ios", "setup"]), &store, SectionKeying::Name);

    assert!(html.contains(EXPANDED));
    assert!(!html.contains("in-focus"));
    assert_eq!(persisted(&store), vec!["android".to_string()]);
}

#[test]
fn test_malformed_storage_falls_back_to_collapsed() {
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, "not json");
    let html = render_sidebar(ANDROID_TREE, route(&["ios"]), &store, SectionKeying::Name);

    assert!(html.contains(COLLAPSED));
}

#[test]
fn test_features_section_gets_alias_links() {
    let store = MemoryStore::new();
    let html = render_sidebar(FEATURES_TREE, route(&["features", "x"]), &store, SectionKeying::Name);

    let last_child = html.find("Feature X").unwrap();
    let room_apis = html.find("Room APIs").unwrap();
    let webhooks = html.find("Webhooks").unwrap();
    let recording = html.find("SFU Recording").unwrap();
    assert!(last_child < room_apis && room_apis < webhooks && webhooks < recording);
}

#[test]
fn test_alias_links_omitted_under_server_side() {
    let store = MemoryStore::new();
    let html = render_sidebar(FEATURES_TREE, route(&["server-side", "features"]), &store, SectionKeying::Name);

    assert!(html.contains("Feature X"));
    assert!(!html.contains("Room APIs"));
    assert!(!html.contains("Webhooks"));
    assert!(!html.contains("SFU Recording"));
}

#[test]
fn test_active_leaf_is_tagged_for_scrolling() {
    let store = MemoryStore::new();
    let html = render_sidebar(FEATURES_TREE, route(&["features", "x"]), &store, SectionKeying::Name);

    assert_eq!(html.matches("id=\"sidebar-active-item\"").count(), 1);
    let active = html.find("id=\"sidebar-active-item\"").unwrap();
    let chat = html.find(">Chat<").unwrap();
    assert!(chat < active);
    assert_eq!(html.matches("sidebar-item active").count(), 1);
}

#[test]
fn test_unhydrated_route_has_no_focus_or_active_leaf() {
    let store = MemoryStore::new();
    let html = render_sidebar(
        FEATURES_TREE,
        RouteState::unhydrated("/docs/features/x"),
        &store,
        SectionKeying::Name,
    );

    assert!(!html.contains("in-focus"));
    assert!(!html.contains("sidebar-active-item"));
    assert!(html.contains(COLLAPSED));
}

#[test]
fn test_nested_branches_render_as_nested_sections() {
    let tree = r#"{
        "javascript": {
            "v2": {
                "intro": { "title": "Introduction", "url": "/docs/javascript/v2/intro" }
            }
        }
    }"#;
    let store = MemoryStore::new();
    let html = render_sidebar(tree, route(&["javascript", "v2", "intro"]), &store, SectionKeying::Name);

    assert_eq!(html.matches("class=\"sidebar-section\"").count(), 1);
    assert_eq!(html.matches("class=\"sidebar-section nested\"").count(), 1);
    assert!(html.contains("Javascript"));
    assert!(html.contains("V2"));
    assert_eq!(html.matches(EXPANDED).count(), 2);
}

const SHARED_NAME_TREE: &str = r#"{
    "guides": {
        "features": {
            "a": { "title": "Guide Feature", "url": "/docs/guides/features/a" }
        }
    },
    "features": {
        "b": { "title": "Top Feature", "url": "/docs/features/b" }
    }
}"#;

#[test]
fn test_name_keying_shares_state_between_same_named_sections() {
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, r#"["guides","features"]"#);
    let html = render_sidebar(SHARED_NAME_TREE, route(&["ios"]), &store, SectionKeying::Name);

    assert_eq!(html.matches(EXPANDED).count(), 3);
}

#[test]
fn test_path_keying_separates_same_named_sections() {
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, r#"["guides","features"]"#);
    let html = render_sidebar(SHARED_NAME_TREE, route(&["ios"]), &store, SectionKeying::Path);

    assert_eq!(html.matches(EXPANDED).count(), 2);
    assert_eq!(html.matches(COLLAPSED).count(), 1);
}

#[test]
fn test_path_keying_records_full_paths_on_mount() {
    let tree = r#"{
        "javascript": {
            "v2": {
                "features": {
                    "join": { "title": "Join", "url": "/docs/javascript/v2/features/join" }
                },
                "guides": {
                    "token": { "title": "Token", "url": "/docs/javascript/v2/guides/token" }
                }
            }
        }
    }"#;
    let store = MemoryStore::new();
    render_sidebar(
        tree,
        route(&["javascript", "v2", "features", "join"]),
        &store,
        SectionKeying::Path,
    );

    let keys = persisted(&store);
    assert_eq!(keys.len(), 3);
    for key in ["javascript", "javascript/v2", "javascript/v2/features"] {
        assert!(keys.contains(&key.to_string()), "missing {key}");
    }
}
