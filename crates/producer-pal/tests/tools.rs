mod fixtures;

use fixtures::StudioFixture;
use lom::{HostCall, MemoryHost, MemoryItem};
use palconf::BrowserSettings;
use producer_pal::target::BEFORE_UNSUPPORTED;
use producer_pal::{PalTools, ToolError};
use serde_json::{json, Value};

fn names(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect()
}

fn total(items: &Value) -> usize {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| 1 + i.get("children").map(total).unwrap_or(0))
        .sum()
}

fn has_children_anywhere(items: &Value) -> bool {
    items.as_array().unwrap().iter().any(|i| i.get("children").is_some())
}

fn read(host: &MemoryHost, args: Value) -> Value {
    PalTools::new(host, BrowserSettings::default())
        .call_tool("ppal-read-browser", args)
        .unwrap()
        .data
}

fn error_code(result: Result<producer_pal::ToolOutput, ToolError>) -> String {
    result.unwrap_err().code().to_string()
}

#[test]
fn test_list_tools() {
    let fixture = StudioFixture::new();
    let tools = PalTools::new(&fixture.host, BrowserSettings::default());
    let names: Vec<_> = tools.list_tools().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["ppal-read-browser", "ppal-load-item"]);
}

#[test]
fn test_read_default_category_nests_folders() {
    let fixture = StudioFixture::new();
    let data = read(&fixture.host, Value::Null);

    assert_eq!(data["category"], "user_library");
    assert_eq!(data["limitReached"], false);
    assert_eq!(names(&data["items"]), vec!["Presets", "Samples"]);
    assert_eq!(names(&data["items"][0]["children"]), vec!["My Bass", "Warm Pad"]);
    assert_eq!(
        data["items"][1]["children"][0],
        json!({
            "name": "Kick.wav",
            "uri": "userlibrary:Samples/Kick.wav",
            "isFolder": false,
            "isLoadable": true
        })
    );
}

#[test]
fn test_depth_zero_has_no_children() {
    let fixture = StudioFixture::new();
    for category in ["user_library", "drums", "instruments"] {
        let data = read(&fixture.host, json!({ "category": category, "maxDepth": 0 }));
        assert!(!has_children_anywhere(&data["items"]), "{} nested at depth 0", category);
    }
}

#[test]
fn test_max_depth_accepts_numeric_string() {
    let fixture = StudioFixture::new();
    let data = read(&fixture.host, json!({ "category": "drums", "maxDepth": "0" }));
    assert_eq!(names(&data["items"]), vec!["Acoustic", "808 Core Kit"]);
}

#[test]
fn test_max_depth_out_of_range() {
    let fixture = StudioFixture::new();
    let tools = PalTools::new(&fixture.host, BrowserSettings::default());
    for depth in [json!(11), json!("11"), json!(-1), json!("deep")] {
        let result = tools.call_tool("ppal-read-browser", json!({ "maxDepth": depth }));
        assert_eq!(error_code(result), "invalid_arguments");
    }
}

#[test]
fn test_unknown_category_is_invalid_argument() {
    let fixture = StudioFixture::new();
    let tools = PalTools::new(&fixture.host, BrowserSettings::default());
    let result = tools.call_tool("ppal-read-browser", json!({ "category": "synths" }));
    assert_eq!(error_code(result), "invalid_arguments");
}

#[test]
fn test_category_missing_from_host() {
    let fixture = StudioFixture::new();
    let tools = PalTools::new(&fixture.host, BrowserSettings::default());
    let err = tools
        .call_tool("ppal-read-browser", json!({ "category": "packs" }))
        .unwrap_err();
    assert_eq!(err.code(), "category_not_found");
    assert_eq!(err.to_string(), "Browser category \"packs\" not found");
}

#[test]
fn test_empty_category() {
    let fixture = StudioFixture::new();
    let data = read(&fixture.host, json!({ "category": "samples" }));
    assert_eq!(data["items"], json!([]));
    assert_eq!(data["limitReached"], false);
}

#[test]
fn test_search_flattens_non_matching_folders() {
    let fixture = StudioFixture::new();
    let data = read(&fixture.host, json!({ "category": "drums", "search": "KIT" }));
    assert_eq!(names(&data["items"]), vec!["Brush Kit", "Kick Kit", "808 Core Kit"]);
    assert!(!has_children_anywhere(&data["items"]));

    let data = read(&fixture.host, json!({ "category": "instruments", "search": "sub" }));
    assert_eq!(names(&data["items"]), vec!["Deep Sub"]);
}

#[test]
fn test_search_matching_folder_filters_its_own_subtree() {
    let fixture = StudioFixture::new();
    let data = read(&fixture.host, json!({ "category": "drums", "search": "acoustic" }));
    assert_eq!(names(&data["items"]), vec!["Acoustic"]);
    // no child matches, so no children key
    assert!(data["items"][0].get("children").is_none());
}

#[test]
fn test_search_respects_depth() {
    let fixture = StudioFixture::new();
    let data = read(
        &fixture.host,
        json!({ "category": "instruments", "search": "sub", "maxDepth": 1 }),
    );
    assert_eq!(data["items"], json!([]));
}

#[test]
fn test_single_leaf_match() {
    let fixture = StudioFixture::new();
    let data = read(&fixture.host, json!({ "category": "audio_effects", "search": "reverb" }));
    assert_eq!(data["items"].as_array().unwrap().len(), 1);
    assert!(data["items"][0].get("children").is_none());
}

#[test]
fn test_path_navigation() {
    let fixture = StudioFixture::new();
    let data = read(&fixture.host, json!({ "category": "drums", "path": "acoustic" }));
    assert_eq!(data["category"], "drums/acoustic");
    assert_eq!(names(&data["items"]), vec!["Brush Kit", "Kick Kit"]);

    let data = read(
        &fixture.host,
        json!({ "category": "instruments", "path": "Operator/Bass" }),
    );
    assert_eq!(names(&data["items"]), vec!["Deep Sub"]);
}

#[test]
fn test_path_segment_not_found() {
    let fixture = StudioFixture::new();
    let tools = PalTools::new(&fixture.host, BrowserSettings::default());
    let err = tools
        .call_tool(
            "ppal-read-browser",
            json!({ "category": "drums", "path": "Acoustic/Jazz" }),
        )
        .unwrap_err();
    assert_eq!(err.code(), "path_segment_not_found");
    assert!(err.to_string().contains("\"Jazz\""));
}

#[test]
fn test_cap_never_exceeded() {
    let fixture = StudioFixture::new();
    for cap in 1..=7 {
        let settings = BrowserSettings {
            max_items: cap,
            ..BrowserSettings::default()
        };
        let out = PalTools::new(&fixture.host, settings)
            .call_tool("ppal-read-browser", json!({}))
            .unwrap();

        let emitted = total(&out.data["items"]);
        assert!(emitted <= cap, "cap {} emitted {}", cap, emitted);

        // user_library holds five items within the default depth
        let capped = cap < 5;
        assert_eq!(out.data["limitReached"], capped, "cap {}", cap);
        assert_eq!(out.warnings.len(), usize::from(capped));
    }
}

#[test]
fn test_cap_warning_text() {
    let fixture = StudioFixture::new();
    let settings = BrowserSettings {
        max_items: 2,
        ..BrowserSettings::default()
    };
    let out = PalTools::new(&fixture.host, settings)
        .call_tool("ppal-read-browser", json!({ "category": "drums" }))
        .unwrap();

    assert_eq!(names(&out.data["items"]), vec!["Acoustic"]);
    assert_eq!(names(&out.data["items"][0]["children"]), vec!["Brush Kit"]);
    assert_eq!(
        out.warnings,
        vec!["Stopped scanning browser at 2 items. Use search or path to narrow results."]
    );
}

#[test]
fn test_browser_unavailable() {
    let host = MemoryHost::builder().without_browser().track("Solo").select_track(0).build();
    let tools = PalTools::new(&host, BrowserSettings::default());

    assert_eq!(error_code(tools.call_tool("ppal-read-browser", json!({}))), "browser_unavailable");
    assert_eq!(
        error_code(tools.call_tool("ppal-load-item", json!({ "uri": "query:Drums" }))),
        "browser_unavailable"
    );
    assert!(host.calls().is_empty());
}

#[test]
fn test_load_into_selected_track() {
    let fixture = StudioFixture::new();
    let host = &fixture.host;
    let bass = host.track_id(1).unwrap();

    let out = PalTools::new(host, BrowserSettings::default())
        .call_tool("ppal-load-item", json!({ "uri": "query:AudioFx#Reverb" }))
        .unwrap();

    assert_eq!(
        out.data,
        json!({
            "loaded": true,
            "uri": "query:AudioFx#Reverb",
            "trackId": format!("id {}", bass),
            "message": "Loaded Reverb"
        })
    );
    assert!(out.warnings.is_empty());
    assert_eq!(host.device_names(1), vec!["Operator", "Reverb"]);
}

#[test]
fn test_selection_is_read_at_call_time() {
    let fixture = StudioFixture::new();
    let host = &fixture.host;
    host.select_track(2);

    let out = PalTools::new(host, BrowserSettings::default())
        .call_tool("ppal-load-item", json!({ "uri": "query:AudioFx#EQEight" }))
        .unwrap();

    assert_eq!(out.data["trackId"], format!("id {}", host.track_id(2).unwrap()));
    assert_eq!(host.device_names(2), vec!["EQ Eight"]);
}

#[test]
fn test_replace_deletes_before_load() {
    let fixture = StudioFixture::new();
    let host = &fixture.host;
    host.select_track(0);
    let drums = host.track_id(0).unwrap();

    let out = PalTools::new(host, BrowserSettings::default())
        .call_tool(
            "ppal-load-item",
            json!({ "uri": "query:AudioFx#Reverb", "position": "replace" }),
        )
        .unwrap();

    assert!(out.warnings.is_empty());
    assert_eq!(
        host.calls(),
        vec![
            HostCall::DeleteDevice { track: drums, index: 1 },
            HostCall::LoadItem {
                uri: "query:AudioFx#Reverb".to_string(),
                track: Some(drums),
            },
        ]
    );
    assert_eq!(host.device_names(0), vec!["Drum Rack", "Reverb"]);
}

#[test]
fn test_replace_without_selected_device_appends() {
    let fixture = StudioFixture::new();
    let host = &fixture.host;

    PalTools::new(host, BrowserSettings::default())
        .call_tool(
            "ppal-load-item",
            json!({ "uri": "query:AudioFx#EQEight", "position": "replace" }),
        )
        .unwrap();

    assert_eq!(host.calls().len(), 1);
    assert_eq!(host.device_names(1), vec!["Operator", "EQ Eight"]);
}

#[test]
fn test_before_warns_and_appends() {
    let fixture = StudioFixture::new();
    let host = &fixture.host;
    host.select_track(0);

    let out = PalTools::new(host, BrowserSettings::default())
        .call_tool(
            "ppal-load-item",
            json!({ "uri": "query:AudioFx#Reverb", "position": "before" }),
        )
        .unwrap();

    assert_eq!(out.warnings, vec![BEFORE_UNSUPPORTED.to_string()]);
    assert_eq!(host.device_names(0), vec!["Drum Rack", "Glue Compressor", "Reverb"]);
}

#[test]
fn test_explicit_track_id_as_number() {
    let fixture = StudioFixture::new();
    let host = &fixture.host;
    let vox = host.track_id(2).unwrap();

    let out = PalTools::new(host, BrowserSettings::default())
        .call_tool(
            "ppal-load-item",
            json!({ "uri": "legacy:Live9:OldLoop", "trackId": vox }),
        )
        .unwrap();

    assert_eq!(out.data["trackId"], vox.to_string());
    assert_eq!(out.data["message"], "Loaded Old Loop.wav");
}

#[test]
fn test_replace_acts_on_requested_track() {
    // deletion targets the requested track; the load primitive itself
    // lands on whichever track the host has selected
    let fixture = StudioFixture::new();
    let host = &fixture.host;
    let drums = host.track_id(0).unwrap();
    let bass = host.track_id(1).unwrap();

    PalTools::new(host, BrowserSettings::default())
        .call_tool(
            "ppal-load-item",
            json!({
                "uri": "query:AudioFx#Reverb",
                "trackId": format!("id {}", drums),
                "position": "replace"
            }),
        )
        .unwrap();

    assert_eq!(
        host.calls(),
        vec![
            HostCall::DeleteDevice { track: drums, index: 1 },
            HostCall::LoadItem {
                uri: "query:AudioFx#Reverb".to_string(),
                track: Some(bass),
            },
        ]
    );
}

#[test]
fn test_load_failures_never_mutate() {
    let fixture = StudioFixture::new();
    let host = &fixture.host;
    host.select_track(0);
    let tools = PalTools::new(host, BrowserSettings::default());

    let cases = [
        (json!({ "uri": "query:Nowhere" }), "item_not_found"),
        (json!({ "uri": "query:Drums#Acoustic", "position": "replace" }), "item_not_loadable"),
        (
            json!({ "uri": "query:AudioFx#Reverb", "trackId": "id 999", "position": "replace" }),
            "track_not_found",
        ),
        (json!({ "uri": "query:AudioFx#Reverb", "position": "sideways" }), "invalid_arguments"),
        (json!({}), "invalid_arguments"),
    ];
    for (args, code) in cases {
        assert_eq!(error_code(tools.call_tool("ppal-load-item", args)), code);
    }

    assert!(host.calls().is_empty());
    assert_eq!(host.device_names(0), vec!["Drum Rack", "Glue Compressor"]);
}

#[test]
fn test_replace_on_named_track_without_selection_never_mutates() {
    let host = MemoryHost::builder()
        .category(
            "audio_effects",
            MemoryItem::folder(
                "Audio Effects",
                "query:AudioFx",
                vec![MemoryItem::device("Reverb", "query:AudioFx#Reverb")],
            ),
        )
        .track("Drums")
        .device("Drum Rack")
        .device("Glue Compressor")
        .select_device(1)
        .build();
    let drums = host.track_id(0).unwrap();

    let err = PalTools::new(&host, BrowserSettings::default())
        .call_tool(
            "ppal-load-item",
            json!({
                "uri": "query:AudioFx#Reverb",
                "trackId": format!("id {}", drums),
                "position": "replace"
            }),
        )
        .unwrap_err();

    assert_eq!(err.code(), "track_not_found");
    assert!(host.calls().is_empty());
    assert_eq!(host.device_names(0), vec!["Drum Rack", "Glue Compressor"]);
}

#[test]
fn test_not_loadable_names_item() {
    let fixture = StudioFixture::new();
    let err = PalTools::new(&fixture.host, BrowserSettings::default())
        .call_tool("ppal-load-item", json!({ "uri": "query:Drums#Acoustic" }))
        .unwrap_err();
    assert_eq!(
        err.to_json(),
        json!({ "code": "item_not_loadable", "message": "Item is not loadable: Acoustic" })
    );
}

#[test]
fn test_no_selected_track() {
    let host = MemoryHost::builder()
        .category(
            "audio_effects",
            MemoryItem::folder(
                "Audio Effects",
                "query:AudioFx",
                vec![MemoryItem::device("Reverb", "query:AudioFx#Reverb")],
            ),
        )
        .track("Unselected")
        .build();

    let err = PalTools::new(&host, BrowserSettings::default())
        .call_tool("ppal-load-item", json!({ "uri": "query:AudioFx#Reverb" }))
        .unwrap_err();
    assert_eq!(err.to_string(), "Track not found: (none)");
    assert!(host.calls().is_empty());
}

#[test]
fn test_unknown_tool() {
    let fixture = StudioFixture::new();
    let err = PalTools::new(&fixture.host, BrowserSettings::default())
        .call_tool("ppal-delete-everything", json!({}))
        .unwrap_err();
    assert_eq!(err.code(), "unknown_tool");
}
