#![allow(dead_code)]

use lom::{MemoryHost, MemoryItem};
use serde_json::{json, Value};

/// A small studio set: a few browser categories and three tracks.
///
/// Tracks, in order: Drums (Drum Rack, Glue Compressor; Glue selected),
/// Bass (Operator; nothing selected), Vox (empty). Bass is the selected
/// track.
pub struct StudioFixture {
    pub host: MemoryHost,
}

impl StudioFixture {
    pub fn new() -> Self {
        let host = MemoryHost::builder()
            .category("user_library", Self::user_library())
            .category("drums", Self::drums())
            .category("instruments", Self::instruments())
            .category("audio_effects", Self::audio_effects())
            .category("samples", MemoryItem::folder("Samples", "query:Samples", vec![]))
            .legacy_libraries(vec![MemoryItem::folder(
                "Live 9 Library",
                "legacy:Live9",
                vec![MemoryItem::sample("Old Loop.wav", "legacy:Live9:OldLoop")],
            )])
            .track("Drums")
            .device("Drum Rack")
            .device("Glue Compressor")
            .select_device(1)
            .track("Bass")
            .device("Operator")
            .track("Vox")
            .select_track(1)
            .build();

        Self { host }
    }

    fn user_library() -> MemoryItem {
        MemoryItem::folder(
            "User Library",
            "userlibrary:",
            vec![
                MemoryItem::folder(
                    "Presets",
                    "userlibrary:Presets",
                    vec![
                        MemoryItem::device("My Bass", "userlibrary:Presets/My Bass"),
                        MemoryItem::device("Warm Pad", "userlibrary:Presets/Warm Pad"),
                    ],
                ),
                MemoryItem::folder(
                    "Samples",
                    "userlibrary:Samples",
                    vec![MemoryItem::sample("Kick.wav", "userlibrary:Samples/Kick.wav")],
                ),
            ],
        )
    }

    fn drums() -> MemoryItem {
        MemoryItem::folder(
            "Drums",
            "query:Drums",
            vec![
                MemoryItem::folder(
                    "Acoustic",
                    "query:Drums#Acoustic",
                    vec![
                        MemoryItem::device("Brush Kit", "query:Drums#Acoustic:BrushKit"),
                        MemoryItem::device("Kick Kit", "query:Drums#Acoustic:KickKit"),
                    ],
                ),
                MemoryItem::device("808 Core Kit", "query:Drums#808"),
            ],
        )
    }

    fn instruments() -> MemoryItem {
        MemoryItem::folder(
            "Instruments",
            "query:Synths",
            vec![MemoryItem::folder(
                "Operator",
                "query:Synths#Operator",
                vec![MemoryItem::folder(
                    "Bass",
                    "query:Synths#Operator:Bass",
                    vec![MemoryItem::device("Deep Sub", "query:Synths#Operator:Bass:DeepSub")],
                )],
            )],
        )
    }

    fn audio_effects() -> MemoryItem {
        MemoryItem::folder(
            "Audio Effects",
            "query:AudioFx",
            vec![
                MemoryItem::device("Reverb", "query:AudioFx#Reverb"),
                MemoryItem::device("EQ Eight", "query:AudioFx#EQEight"),
            ],
        )
    }
}

/// A trimmed studio set as a JSON snapshot for the CLI, with Drums selected.
pub fn studio_snapshot() -> Value {
    json!({
        "categories": {
            "user_library": {
                "name": "User Library",
                "uri": "userlibrary:",
                "is_folder": true,
                "children": [
                    {
                        "name": "Presets",
                        "uri": "userlibrary:Presets",
                        "is_folder": true,
                        "children": [
                            { "name": "My Bass", "uri": "userlibrary:Presets/My Bass", "is_loadable": true, "is_device": true },
                            { "name": "Warm Pad", "uri": "userlibrary:Presets/Warm Pad", "is_loadable": true, "is_device": true }
                        ]
                    }
                ]
            },
            "audio_effects": {
                "name": "Audio Effects",
                "uri": "query:AudioFx",
                "is_folder": true,
                "children": [
                    { "name": "Reverb", "uri": "query:AudioFx#Reverb", "is_loadable": true, "is_device": true }
                ]
            }
        },
        "tracks": [
            {
                "name": "Drums",
                "devices": [{ "name": "Drum Rack" }, { "name": "Glue Compressor" }],
                "selected_device": 1
            },
            { "name": "Bass", "devices": [{ "name": "Operator" }] }
        ],
        "selected_track": 0
    })
}
