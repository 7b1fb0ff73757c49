//! `taleweaver options`: list the choices the story settings accept.

use strum::IntoEnumIterator;
use taleweaver_core::{CharacterTemplate, Locale, Style, Theme};
use taleweaver_error::TaleweaverResult;

/// Prints every style, theme and character template with its label.
pub fn list_options(locale: Option<&str>) -> TaleweaverResult<()> {
    let locale = locale.map(Locale::from_name).transpose()?.unwrap_or_default();

    println!("Styles:");
    for style in Style::iter() {
        println!("  {:<18} {}", style.as_ref(), style.label(locale));
    }

    println!("\nThemes:");
    for theme in Theme::iter() {
        println!("  {:<18} {}", theme.as_ref(), theme.label(locale));
    }

    println!("\nCharacters:");
    for character in CharacterTemplate::iter() {
        println!(
            "  {:<18} {}  {}",
            character.as_ref(),
            character.label(locale),
            character.description(locale)
        );
    }

    println!("\nLocales:");
    for option in Locale::iter() {
        println!("  {}", option.as_ref());
    }

    Ok(())
}
