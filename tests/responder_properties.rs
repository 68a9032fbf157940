use chrono::{Duration, Local, TimeZone, Utc};
use krishi_sakhi::ai::knowledge::{rice_stage, RICE_STAGES};
use krishi_sakhi::ai::{identify_crop, CropKind};
use krishi_sakhi::{CropRecord, KrishiSakhi, Language};
use proptest::prelude::*;

fn stage_index(age: u32) -> usize {
    let stage = rice_stage(age);
    RICE_STAGES.iter().position(|s| s == stage).unwrap()
}

fn has_malayalam(text: &str) -> bool {
    text.chars().any(|c| ('\u{0D00}'..='\u{0D7F}').contains(&c))
}

fn arb_language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::English), Just(Language::Malayalam)]
}

proptest! {
    #[test]
    fn rice_stage_never_goes_backwards(a in 0u32..400, b in 0u32..400) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(stage_index(low) <= stage_index(high));
    }

    #[test]
    fn rice_past_day_85_is_mature(age in 86u32..100_000) {
        prop_assert_eq!(rice_stage(age).name, "Maturity");
    }

    #[test]
    fn reply_is_never_empty(text in ".{0,80}", language in arb_language()) {
        let crops = vec![
            CropRecord::new("Rice", "growing", Some("2025-01-01")),
            CropRecord::new("Coconut", "mature", None),
        ];
        let reply = KrishiSakhi::reply(&text, &crops, language, "Farmer");
        prop_assert!(!reply.trim().is_empty());
    }

    #[test]
    fn fallback_lists_name_and_crops(
        first in "[A-Z][a-z]{1,8}",
        last in proptest::option::of("[A-Z][a-z]{1,8}"),
        crops in proptest::collection::vec("[A-Z][a-z]{2,10}", 1..5),
        language in arb_language(),
    ) {
        let farmer = match &last {
            Some(last) => format!("{first} {last}"),
            None => first.clone(),
        };
        let records: Vec<CropRecord> = crops.iter().map(|c| CropRecord::new(c, "growing", None)).collect();
        let reply = KrishiSakhi::reply("hello", &records, language, &farmer);

        let greeting = format!(" {first}! 🙏");
        prop_assert!(reply.contains(&greeting));
        prop_assert!(reply.contains(&crops.join(", ")));
    }
}

#[test]
fn replies_stay_in_one_language() {
    let now = Local::now();
    let planted = (now - Duration::days(40)).with_timezone(&Utc).to_rfc3339();
    let crops = vec![
        CropRecord::new("Rice", "growing", Some(&planted)),
        CropRecord::new("Coconut", "mature", None),
        CropRecord::new("Tomato", "growing", Some(&planted)),
    ];
    let prompts = [
        "rice fertilizer",
        "rice pest",
        "rice water",
        "coconut fertilizer",
        "coconut pest",
        "tomato disease",
        "tomato fertilizer",
        "weather",
        "market",
        "scheme",
        "activity",
        "hello",
    ];

    for prompt in prompts {
        let english = KrishiSakhi::reply_at(prompt, &crops, Language::English, "Ravi", now);
        let malayalam = KrishiSakhi::reply_at(prompt, &crops, Language::Malayalam, "Ravi", now);
        assert!(!has_malayalam(&english), "{prompt}: {english}");
        assert!(has_malayalam(&malayalam), "{prompt}: {malayalam}");
        assert_ne!(english, malayalam);
    }
}

#[test]
fn identification_follows_keyword_priority() {
    let crops = vec![
        CropRecord::new("Banana", "growing", None),
        CropRecord::new("Rice", "growing", None),
    ];
    let (kind, record) = identify_crop("banana and rice", &crops).unwrap();
    assert_eq!(kind, CropKind::Rice);
    assert_eq!(record.name, "Rice");
}

#[test]
fn future_planting_date_counts_forward() {
    let now = Local.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
    let crops = vec![CropRecord::new("Rice", "planned", Some("2025-07-11"))];
    let reply = KrishiSakhi::reply_at("rice fertilizer", &crops, Language::English, "Ravi", now);
    assert!(reply.contains("Nursery"), "{reply}");
    assert!(reply.contains("Next Fertilizer: Day 15 - Urea 43kg/ha"));
}
