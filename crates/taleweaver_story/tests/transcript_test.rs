//! Tests for the transcript store.

use taleweaver_core::Locale;
use taleweaver_error::StoryErrorKind;
use taleweaver_story::Transcript;

fn two_turns() -> Transcript {
    let mut transcript = Transcript::new();
    transcript.append_open_turn("A storm approaches.").unwrap();
    transcript.complete_open_turn("Waves crashed.").unwrap();
    transcript.append_open_turn("A bell rings.").unwrap();
    transcript.complete_open_turn("Someone answered.").unwrap();
    transcript
}

#[test]
fn test_serialize_alternates_with_blank_line_after_replies() {
    let text = two_turns().serialize(Locale::Zh);

    assert_eq!(
        text,
        "用户: A storm approaches.\nAI: Waves crashed.\n\n用户: A bell rings.\nAI: Someone answered.\n\n"
    );
    let non_blank: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(non_blank.len(), 4);
}

#[test]
fn test_serialize_uses_english_labels() {
    let text = two_turns().serialize(Locale::En);

    assert!(text.starts_with("User: A storm approaches.\nAI: Waves crashed.\n\n"));
}

#[test]
fn test_serialize_skips_empty_entries() {
    let mut transcript = Transcript::new();
    transcript.append_open_turn("").unwrap();
    transcript.complete_open_turn("Only the reply.").unwrap();
    transcript.append_open_turn("Only the question.").unwrap();
    transcript.complete_open_turn("").unwrap();

    assert_eq!(
        transcript.serialize(Locale::En),
        "AI: Only the reply.\n\nUser: Only the question.\n"
    );
}

#[test]
fn test_second_open_turn_is_refused() {
    let mut transcript = Transcript::new();
    transcript.append_open_turn("one").unwrap();

    let err = transcript.append_open_turn("two").unwrap_err();

    assert_eq!(err.kind, StoryErrorKind::TurnInProgress);
    assert_eq!(transcript.len(), 1);
}

#[test]
fn test_complete_without_open_turn_is_refused() {
    let mut transcript = two_turns();

    let err = transcript.complete_open_turn("extra").unwrap_err();

    assert_eq!(err.kind, StoryErrorKind::NoOpenTurn);
}

#[test]
fn test_completed_turns_excludes_open_turn() {
    let mut transcript = two_turns();
    transcript.append_open_turn("pending").unwrap();

    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript.completed_turns().len(), 2);
    assert!(transcript.has_open_turn());
}

#[test]
fn test_reset_clears_turns_and_status() {
    let mut transcript = two_turns();
    transcript.set_status("saved");

    transcript.reset();

    assert!(transcript.is_empty());
    assert_eq!(transcript.status(), None);
    assert_eq!(transcript.serialize(Locale::Zh), "");
}
