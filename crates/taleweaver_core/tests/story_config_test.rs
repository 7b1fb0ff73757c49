use strum::IntoEnumIterator;
use taleweaver_core::{CharacterTemplate, Locale, StoryConfig, Style, Theme};
use taleweaver_error::StoryErrorKind;

#[test]
fn test_default_config_is_fantasy_adventure_adventurer() {
    let config = StoryConfig::default();
    assert_eq!(*config.style(), Style::Fantasy);
    assert_eq!(*config.theme(), Theme::Adventure);
    assert_eq!(
        config.character_description(),
        CharacterTemplate::Adventurer.description(Locale::Zh)
    );
}

#[test]
fn test_option_sets_have_expected_sizes() {
    assert_eq!(Style::iter().count(), 6);
    assert_eq!(Theme::iter().count(), 6);
    assert_eq!(CharacterTemplate::iter().count(), 5);
}

#[test]
fn test_names_parse_case_insensitively() {
    assert_eq!(Style::from_name("sci-fi").unwrap(), Style::SciFi);
    assert_eq!(Style::from_name("Horror").unwrap(), Style::Horror);
    assert_eq!(Theme::from_name(" fairytale ").unwrap(), Theme::Fairytale);
    assert_eq!(
        CharacterTemplate::from_name("ordinary-person").unwrap(),
        CharacterTemplate::OrdinaryPerson
    );
    assert_eq!(Locale::from_name("EN").unwrap(), Locale::En);
}

#[test]
fn test_unknown_names_are_reported() {
    let err = Style::from_name("western").unwrap_err();
    assert_eq!(err.kind, StoryErrorKind::UnknownStyle("western".to_string()));

    let err = Theme::from_name("cyberpunk").unwrap_err();
    assert_eq!(err.kind, StoryErrorKind::UnknownTheme("cyberpunk".to_string()));

    let err = CharacterTemplate::from_name("wizard").unwrap_err();
    assert_eq!(err.kind, StoryErrorKind::UnknownCharacter("wizard".to_string()));
}

#[test]
fn test_every_option_has_labels_in_every_locale() {
    for locale in Locale::iter() {
        for style in Style::iter() {
            assert!(!style.label(locale).is_empty());
        }
        for theme in Theme::iter() {
            assert!(!theme.label(locale).is_empty());
        }
        for template in CharacterTemplate::iter() {
            assert!(!template.label(locale).is_empty());
            assert!(!template.description(locale).is_empty());
        }
    }
}

#[test]
fn test_chinese_labels_and_descriptions() {
    assert_eq!(Style::Fantasy.label(Locale::Zh), "奇幻");
    assert_eq!(Theme::Everyday.label(Locale::Zh), "日常");
    assert_eq!(
        CharacterTemplate::Detective.description(Locale::Zh),
        "一个敏锐细心的侦探，善于观察和推理。"
    );
}

#[test]
fn test_setters_replace_fields() {
    let mut config = StoryConfig::new(Style::Fantasy, Theme::Adventure, "a fearless explorer");
    config.set_style(Style::Horror);
    config.set_theme(Theme::Historical);
    config.set_character_description("a lighthouse keeper");

    assert_eq!(*config.style(), Style::Horror);
    assert_eq!(*config.theme(), Theme::Historical);
    assert_eq!(config.character_description(), "a lighthouse keeper");
}

#[test]
fn test_config_serializes_with_kebab_case_names() {
    let config = StoryConfig::new(Style::SciFi, Theme::Fairytale, "a robot");
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"sci-fi\""));
    assert!(json.contains("\"fairytale\""));
}
