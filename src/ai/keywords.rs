/// Bilingual keyword tables and the single matching routine over them
use crate::farm::CropRecord;

/// Crops the assistant recognises in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropKind {
    Rice,
    Coconut,
    Tomato,
    Pepper,
    Banana,
}

/// What the farmer is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Fertilizer,
    Pest,
    Irrigation,
    Weather,
    Market,
    Activity,
    Scheme,
}

/// Keywords that mention a crop in a message, in match priority order.
///
/// Malayalam nouns drop the final virama when inflected (നെല്ല് becomes
/// നെല്ലിന്), so the bare stems are listed alongside the dictionary forms.
pub static CROP_KEYWORDS: &[(CropKind, &[&str])] = &[
    (CropKind::Rice, &["rice", "paddy", "നെല്ല്", "നെല്ല"]),
    (CropKind::Coconut, &["coconut", "തെങ്ങ്", "തെങ്ങ"]),
    (CropKind::Tomato, &["tomato", "തക്കാളി"]),
    (CropKind::Pepper, &["pepper", "കുരുമുളക്", "കുരുമുളക"]),
    (CropKind::Banana, &["banana", "വാഴ"]),
];

/// Terms that identify a crop record by its name.
static CROP_NAME_TERMS: &[(CropKind, &[&str])] = &[
    (CropKind::Rice, &["rice", "നെല്ല"]),
    (CropKind::Coconut, &["coconut", "തെങ്ങ"]),
    (CropKind::Tomato, &["tomato", "തക്കാളി"]),
    (CropKind::Pepper, &["pepper", "കുരുമുളക"]),
    (CropKind::Banana, &["banana", "വാഴ"]),
];

/// Topic keywords, in the order topics are tried.
pub static TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Fertilizer, &["fertilizer", "fertiliser", "manure", "വളം"]),
    (Topic::Pest, &["pest", "disease", "കീടം", "രോഗം"]),
    (Topic::Irrigation, &["water", "irrigation", "വെള്ളം", "ജലസേചനം"]),
    (Topic::Weather, &["weather", "rain", "മഴ", "കാലാവസ്ഥ"]),
    (Topic::Market, &["market", "price", "വില", "മാർക്കറ്റ്"]),
    (Topic::Activity, &["activity", "diary", "record", "പ്രവർത്തനം", "രേഖപ്പെടുത്ത"]),
    (Topic::Scheme, &["scheme", "subsidy", "government", "പദ്ധതി", "സബ്സിഡി"]),
];

/// Every tag whose keyword set has a substring match in `text`, in table order.
fn matching<'a, T: Copy>(table: &'a [(T, &'a [&'a str])], text: &'a str) -> impl Iterator<Item = T> + 'a {
    table
        .iter()
        .filter(move |(_, words)| words.iter().any(|word| text.contains(word)))
        .map(|(tag, _)| *tag)
}

/// First crop mentioned in `message`, regardless of what the farmer grows.
pub fn mentioned_crop(message: &str) -> Option<CropKind> {
    matching(CROP_KEYWORDS, &message.to_lowercase()).next()
}

pub fn record_matches(kind: CropKind, record: &CropRecord) -> bool {
    let name = record.name.to_lowercase();
    CROP_NAME_TERMS
        .iter()
        .find(|(tag, _)| *tag == kind)
        .is_some_and(|(_, terms)| terms.iter().any(|term| name.contains(term)))
}

/// Resolves the crop a message is about against the farmer's own crops.
///
/// Only the first crop mentioned is considered: asking about rice when no
/// rice is planted gives `None` even if a later keyword would match.
pub fn identify_crop<'c>(message: &str, crops: &'c [CropRecord]) -> Option<(CropKind, &'c CropRecord)> {
    let kind = mentioned_crop(message)?;
    crops
        .iter()
        .find(|record| record_matches(kind, record))
        .map(|record| (kind, record))
}

/// All topics present in `message`, highest priority first.
pub fn classify(message: &str) -> Vec<Topic> {
    matching(TOPIC_KEYWORDS, &message.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crops() -> Vec<CropRecord> {
        vec![
            CropRecord::new("Rice (Jyothi)", "growing", Some("2024-06-01")),
            CropRecord::new("Coconut", "mature", None),
            CropRecord::new("Tomato", "flowering", Some("2024-07-01")),
            CropRecord::new("Black Pepper", "growing", None),
            CropRecord::new("Nendran Banana", "growing", None),
        ]
    }

    #[test]
    fn every_keyword_finds_its_crop() {
        let crops = crops();
        for (kind, words) in CROP_KEYWORDS {
            for word in *words {
                let message = format!("question about {word} today");
                let (found, record) = identify_crop(&message, &crops)
                    .unwrap_or_else(|| panic!("no crop for {word}"));
                assert_eq!(found, *kind);
                assert!(record_matches(*kind, record));
            }
        }
    }

    #[test]
    fn malayalam_crop_names_match_records() {
        let crops = vec![CropRecord::new("നെല്ല്", "growing", None)];
        let (kind, record) = identify_crop("rice fertilizer", &crops).unwrap();
        assert_eq!(kind, CropKind::Rice);
        assert_eq!(record.name, "നെല്ല്");
    }

    #[test]
    fn inflected_malayalam_names_still_match() {
        assert_eq!(mentioned_crop("എന്റെ നെല്ലിന് എന്ത് വളം ഇടണം?"), Some(CropKind::Rice));
        assert_eq!(mentioned_crop("തെങ്ങിന് കീടം"), Some(CropKind::Coconut));
        assert_eq!(mentioned_crop("കുരുമുളകിന്റെ വില"), Some(CropKind::Pepper));

        let crops = vec![
            CropRecord::new("Coconut", "mature", None),
            CropRecord::new("നെല്ല് (Jyothi)", "growing", None),
        ];
        let (kind, record) = identify_crop("നെല്ലിന് വളം", &crops).unwrap();
        assert_eq!(kind, CropKind::Rice);
        assert_eq!(record.name, "നെല്ല് (Jyothi)");
    }

    #[test]
    fn crop_not_grown_yields_none() {
        let crops = vec![CropRecord::new("Coconut", "mature", None)];
        assert!(identify_crop("my rice and coconut", &crops).is_none());
        assert!(identify_crop("RICE", &[]).is_none());
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(mentioned_crop("How is my PADDY doing"), Some(CropKind::Rice));
        assert_eq!(mentioned_crop("hello"), None);
    }

    #[test]
    fn topics_come_back_in_priority_order() {
        assert_eq!(
            classify("Rain is coming, which FERTILIZER and pest spray?"),
            vec![Topic::Fertilizer, Topic::Pest, Topic::Weather]
        );
        assert_eq!(classify("നെല്ലിന് വളം"), vec![Topic::Fertilizer]);
        assert!(classify("hello there").is_empty());
    }
}
