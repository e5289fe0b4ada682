use crate::emojis::category::Category;
use crate::emojis::skin_tone::SkinTone;
use crate::index::emoji_index::EmojiIndex;

// The embedded dataset ships this many records...
const DATASET_RECORDS: usize = 54;
// ...of which this many have no Apple sprite and are dropped
const WITHOUT_SPRITE: usize = 1;

// One sprite per record plus one per skin tone variation
// (3 single-person emojis with 5 tones each, plus 5x5 tone pairs
// for the couple, plus thumbs down)
const SPRITES: usize = (DATASET_RECORDS - WITHOUT_SPRITE) + 4 * 5 + 5 * 5;

#[test]
fn builds_the_embedded_index() {
    let index = EmojiIndex::embedded();
    assert_eq!(index.len(), DATASET_RECORDS - WITHOUT_SPRITE);
    assert!(!index.is_empty());
}

#[test]
fn aliases_resolve_to_the_same_record() {
    let index = EmojiIndex::embedded();
    assert_eq!(index.get("thumbsup"), index.get("+1"));
    assert_eq!(index.get("poop"), index.get("hankey"));
    assert_eq!(index.get("shit"), index.get("hankey"));
    assert_eq!(index.get("red_car"), index.get("car"));
}

#[test]
fn unknown_short_names_miss() {
    let index = EmojiIndex::embedded();
    assert!(index.get("definitely_not_an_emoji").is_none());
    assert!(index.resolve("definitely_not_an_emoji", None).is_none());
    assert!(index.emoji("definitely_not_an_emoji", None).is_none());
}

#[test]
fn records_without_sprites_are_not_indexed() {
    let index = EmojiIndex::embedded();
    assert!(!index.is_short_name("face_with_bags_under_eyes"));
}

#[test]
fn resolves_skin_tones() {
    let index = EmojiIndex::embedded();
    let resolved = index.resolve("+1", Some(SkinTone::Light)).unwrap();
    assert_eq!(resolved.unified(), "1F44D-1F3FB");
    assert_eq!(resolved.image(), "1f44d-1f3fb.png");
    assert_eq!(resolved.character(), "👍🏻");
    // The base record stays reachable through the resolution
    assert_eq!(resolved.record().short_name, "+1");
}

#[test]
fn single_tone_falls_back_to_the_tone_pair() {
    let index = EmojiIndex::embedded();
    let resolved = index
        .resolve("couple_with_heart", Some(SkinTone::Medium))
        .unwrap();
    assert_eq!(
        resolved.unified(),
        "1F9D1-1F3FD-200D-2764-FE0F-200D-1F9D1-1F3FD"
    );
}

#[test]
fn tones_on_toneless_emojis_resolve_to_the_base() {
    let index = EmojiIndex::embedded();
    let resolved = index.resolve("pizza", Some(SkinTone::Dark)).unwrap();
    assert!(resolved.variation().is_none());
    assert_eq!(resolved.character(), "🍕");
}

#[test]
fn renders_zwj_sequences() {
    let index = EmojiIndex::embedded();
    assert_eq!(index.emoji("rainbow-flag", None).unwrap(), "🏳️‍🌈");
    assert_eq!(index.emoji("thinking_face", None).unwrap(), "🤔");
}

#[test]
fn characters_resolve_back_to_records() {
    let index = EmojiIndex::embedded();
    assert_eq!(
        index.record_for_character("🤔").unwrap().short_name,
        "thinking_face"
    );
    // Skin tone variations resolve to their base record
    assert_eq!(index.record_for_character("👍🏿").unwrap().short_name, "+1");
    // So do non-qualified spellings
    assert_eq!(
        index.record_for_character("\u{2764}").unwrap().short_name,
        "heart"
    );
    assert!(index.record_for_character("a").is_none());
}

#[test]
fn images_resolve_for_variations() {
    let index = EmojiIndex::embedded();
    assert_eq!(index.image_for_character("👍🏿").unwrap(), "1f44d-1f3ff.png");
    assert_eq!(index.image_for_character("🤔").unwrap(), "1f914.png");
    assert!(index.image_for_character("not an emoji").is_none());
}

#[test]
fn sequence_forms_map_both_ways() {
    let index = EmojiIndex::embedded();
    assert_eq!(index.qualified_form("2764").unwrap(), "2764-FE0F");
    assert_eq!(index.non_qualified_form("2708-FE0F").unwrap(), "2708");
    assert!(index.qualified_form("1F914").is_none());
}

#[test]
fn categories_merge_and_stay_sorted() {
    let index = EmojiIndex::embedded();
    let emojis = index.by_category(Category::Emoji);

    // Smileys & Emotion and People & Body form one group
    assert!(emojis.iter().any(|emoji| emoji.short_name == "grinning"));
    assert!(emojis.iter().any(|emoji| emoji.short_name == "+1"));

    // ...with all the smileys in front of all the people
    let wave_position = emojis
        .iter()
        .position(|emoji| emoji.short_name == "wave")
        .unwrap();
    let heart_position = emojis
        .iter()
        .position(|emoji| emoji.short_name == "heart")
        .unwrap();
    assert!(heart_position < wave_position);

    // ...and sorted within each part
    assert_eq!(emojis[0].short_name, "grinning");
}

#[test]
fn flags_have_their_own_category() {
    let index = EmojiIndex::embedded();
    let flags = index.by_category(Category::Flag);
    assert!(flags.iter().any(|emoji| emoji.short_name == "flag-de"));
    assert!(flags.iter().any(|emoji| emoji.short_name == "rainbow-flag"));
}

#[test]
fn unmapped_categories_are_empty() {
    let index = EmojiIndex::embedded();
    assert!(index.by_category(Category::Misc).is_empty());
}

#[test]
fn sprite_work_list_covers_variations() {
    let index = EmojiIndex::embedded();
    let images = index.sprite_images();
    assert_eq!(images.len(), SPRITES);
    assert!(images.contains(&"1f44d-1f3ff.png"));
    assert!(images.contains(&"1f914.png"));
}
