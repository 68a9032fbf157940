use super::keywords::{classify, identify_crop, mentioned_crop, record_matches, CropKind, Topic, CROP_KEYWORDS};
use super::knowledge::{
    coconut_season, next_after, rice_stage, tomato_stage, COCONUT_PESTS, RICE_FERTILIZER,
    RICE_PEST_CONTROL, TOMATO_SCHEDULE,
};
use super::templates;
use crate::farm::{CropRecord, DEFAULT_FARMER_NAME};
use crate::language::Language;
use chrono::{DateTime, Datelike, Local, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Rule-based farming assistant. Stateless; every call is answered from the
/// static knowledge tables and the data passed in.
pub struct KrishiSakhi;

impl KrishiSakhi {
    /// Answers `message` for a farmer growing `crops`.
    pub fn reply(message: &str, crops: &[CropRecord], language: Language, farmer_name: &str) -> String {
        Self::reply_at(message, crops, language, farmer_name, Local::now())
    }

    /// Same as [`KrishiSakhi::reply`] with an explicit clock.
    pub fn reply_at(
        message: &str,
        crops: &[CropRecord],
        language: Language,
        farmer_name: &str,
        now: DateTime<Local>,
    ) -> String {
        let topics = classify(message);

        if let Some((kind, record)) = Self::crop_in_question(message, crops) {
            for topic in &topics {
                if let Some(reply) = Self::crop_reply(kind, record, *topic, language, now) {
                    log::debug!("🌾 {:?}/{:?} reply for {}", kind, topic, record.name);
                    return reply;
                }
            }
        }

        for topic in &topics {
            if let Some(reply) = Self::general_reply(*topic, language) {
                log::debug!("📢 General {:?} reply", topic);
                return reply;
            }
        }

        log::debug!("🙏 No topic matched, sending help menu");
        Self::fallback(crops, language, farmer_name)
    }

    /// The crop named in the message; when none is named at all, the
    /// farmer's first recognised crop.
    fn crop_in_question<'c>(message: &str, crops: &'c [CropRecord]) -> Option<(CropKind, &'c CropRecord)> {
        if mentioned_crop(message).is_some() {
            return identify_crop(message, crops);
        }

        crops.iter().find_map(|record| {
            CROP_KEYWORDS
                .iter()
                .map(|(kind, _)| *kind)
                .find(|kind| record_matches(*kind, record))
                .map(|kind| (kind, record))
        })
    }

    fn crop_reply(
        kind: CropKind,
        record: &CropRecord,
        topic: Topic,
        language: Language,
        now: DateTime<Local>,
    ) -> Option<String> {
        match (kind, topic) {
            (CropKind::Rice, Topic::Fertilizer) => {
                let age = Self::age_of(record, now);
                Some(templates::rice_fertilizer(
                    language,
                    age,
                    rice_stage(age),
                    next_after(&RICE_FERTILIZER, age),
                ))
            }
            (CropKind::Rice, Topic::Pest) => {
                let age = Self::age_of(record, now);
                Some(templates::rice_pest(language, age, next_after(&RICE_PEST_CONTROL, age)))
            }
            (CropKind::Rice, Topic::Irrigation) => {
                let age = Self::age_of(record, now);
                Some(templates::rice_irrigation(language, age, rice_stage(age)))
            }
            (CropKind::Coconut, Topic::Fertilizer) => {
                Some(templates::coconut_fertilizer(language, coconut_season(now.month())))
            }
            // rhinoceros beetle is the one farmers meet most
            (CropKind::Coconut, Topic::Pest) => Some(templates::coconut_pest(language, &COCONUT_PESTS[0])),
            (CropKind::Tomato, Topic::Pest) => {
                let age = Self::age_of(record, now);
                Some(templates::tomato_disease(language, age, tomato_stage(age)))
            }
            (CropKind::Tomato, Topic::Fertilizer) => {
                let age = Self::age_of(record, now);
                Some(templates::tomato_schedule(
                    language,
                    age,
                    tomato_stage(age),
                    next_after(&TOMATO_SCHEDULE, age),
                ))
            }
            _ => None,
        }
    }

    fn general_reply(topic: Topic, language: Language) -> Option<String> {
        match topic {
            Topic::Weather => Some(templates::weather_alert(language)),
            Topic::Market => Some(templates::market_prices(language)),
            Topic::Activity => Some(templates::activity_log(language)),
            Topic::Scheme => Some(templates::government_schemes(language)),
            Topic::Fertilizer | Topic::Pest | Topic::Irrigation => None,
        }
    }

    fn fallback(crops: &[CropRecord], language: Language, farmer_name: &str) -> String {
        let first_name = farmer_name.split_whitespace().next().unwrap_or(DEFAULT_FARMER_NAME);
        let crop_names: Vec<&str> = crops.iter().map(|c| c.name.as_str()).collect();
        templates::general_help(language, first_name, &crop_names)
    }

    fn age_of(record: &CropRecord, now: DateTime<Local>) -> u32 {
        match record.planted_at() {
            Some(planted) => crop_age(planted, now.with_timezone(&Utc)),
            None => {
                log::warn!(
                    "⚠️ No usable planting date for {} ({:?}), assuming day 0",
                    record.name,
                    record.planting_date
                );
                0
            }
        }
    }
}

/// Whole days between planting and `now`, rounded up. Future dates count the
/// same distance forwards.
pub fn crop_age(planted: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let millis = (now - planted).num_milliseconds().unsigned_abs();
    let days = millis.div_ceil(MILLIS_PER_DAY as u64);
    u32::try_from(days).unwrap_or(u32::MAX)
}
