use super::*;

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.assistant.reply_delay_ms, 1000);
    assert_eq!(settings.assistant.reply_delay(), Duration::from_millis(1000));
    assert!(settings.workspace.seed_default_files);
    assert!(settings.workspace.show_banner);
    assert_eq!(settings.workspace.start_view, "terminal");
    assert_eq!(settings.theme.header_fg.as_deref(), Some("cyan"));
}

#[test]
fn partial_json_fills_missing_fields() {
    let settings: Settings =
        serde_json::from_str(r#"{ "assistant": { "reply_delay_ms": 10 } }"#).unwrap();
    assert_eq!(settings.assistant.reply_delay_ms, 10);
    assert_eq!(settings.workspace, WorkspaceSettings::default());
    assert_eq!(settings.theme, ThemeSettings::default());

    let settings: Settings =
        serde_json::from_str(r#"{ "workspace": { "show_banner": false } }"#).unwrap();
    assert!(!settings.workspace.show_banner);
    assert!(settings.workspace.seed_default_files);
}

#[test]
fn empty_theme_object_means_no_overrides() {
    let settings: Settings = serde_json::from_str(r#"{ "theme": {} }"#).unwrap();
    assert!(settings.theme.header_fg.is_none());
    assert!(settings.theme.selected_bg.is_none());
}

#[test]
fn workspace_settings_convert_to_options() {
    let options = WorkspaceOptions::from(&WorkspaceSettings {
        seed_default_files: false,
        show_banner: true,
        start_view: "File-List".to_string(),
    });
    assert!(!options.seed_default_files);
    assert!(options.show_banner);
    assert_eq!(options.start_view, ViewKind::Files);
}

#[test]
fn unknown_start_view_falls_back_to_terminal() {
    let settings: Settings =
        serde_json::from_str(r#"{ "workspace": { "start_view": "sidebar" } }"#).unwrap();
    assert_eq!(settings.workspace.start_view, "sidebar");
    let options = WorkspaceOptions::from(&settings.workspace);
    assert_eq!(options.start_view, ViewKind::Terminal);
    assert!(options.seed_default_files);
}

#[test]
fn serialized_defaults_round_trip() {
    let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
    assert!(json.contains("reply_delay_ms"));
    let back: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Settings::default());
}
