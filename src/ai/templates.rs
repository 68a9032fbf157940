//! Reply texts. Each function renders one canned answer in the requested
//! language; the English and Malayalam variants always carry the same facts.

use super::knowledge::{
    CoconutPest, CoconutSeason, FertilizerDose, PestSpray, RiceStage, TomatoStage, TomatoTask,
};
use crate::language::Language;

pub fn rice_fertilizer(lang: Language, age: u32, stage: &RiceStage, next: Option<&FertilizerDose>) -> String {
    let RiceStage { name, days, water, .. } = stage;
    match lang {
        Language::English => {
            let next = next.map_or_else(
                || "Fertilizer schedule complete".to_string(),
                |dose| format!("Day {} - {} {}", dose.day, dose.kind, dose.quantity),
            );
            format!(
                "🌾 Rice - {age} days old\n\n📅 Current Stage: {name} ({days} days)\n💊 Next Fertilizer: {next}\n💧 Water Level: {water}\n\n⚠️ Avoid chemical fertilizers during heavy rain"
            )
        }
        Language::Malayalam => {
            let next = next.map_or_else(
                || "വളം പൂർത്തിയായി".to_string(),
                |dose| format!("ദിവസം {} - {} {}", dose.day, dose.kind, dose.quantity),
            );
            format!(
                "🌾 നെല്ല് - {age} ദിവസം പഴക്കം\n\n📅 നിലവിലെ ഘട്ടം: {name} ({days} ദിവസം)\n💊 അടുത്ത വളം: {next}\n💧 ജലനിരപ്പ്: {water}\n\n⚠️ മഴക്കാലത്ത് രാസവളം ഒഴിവാക്കുക"
            )
        }
    }
}

pub fn rice_pest(lang: Language, age: u32, next: Option<&PestSpray>) -> String {
    match lang {
        Language::English => {
            let next = next.map_or_else(
                || "Spray schedule complete".to_string(),
                |s| format!("Day {}\n{} - {} @ {}", s.day, s.pest, s.spray, s.rate),
            );
            format!(
                "🌾 Rice Pest Control - {age} days\n\n🐛 Next Spray: {next}\n\n📋 Immediate Actions:\n• Check for brown spots on leaves\n• Ensure proper drainage\n• Spray early morning 6-8 AM"
            )
        }
        Language::Malayalam => {
            let next = next.map_or_else(
                || "സ്പ്രേ ഷെഡ്യൂൾ പൂർത്തിയായി".to_string(),
                |s| format!("ദിവസം {}\n{} - {} @ {}", s.day, s.pest, s.spray, s.rate),
            );
            format!(
                "🌾 നെല്ല് കീട നിയന്ത്രണം - {age} ദിവസം\n\n🐛 അടുത്ത സ്പ്രേ: {next}\n\n📋 ഇപ്പോൾ ചെയ്യേണ്ടത്:\n• ഇലകളിൽ തവിട്ട് പാടുകൾ പരിശോധിക്കുക\n• വെള്ളം കെട്ടി നിൽക്കാതെ നോക്കുക\n• രാവിലെ 6-8 മണിക്ക് സ്പ്രേ ചെയ്യുക"
            )
        }
    }
}

pub fn rice_irrigation(lang: Language, age: u32, stage: &RiceStage) -> String {
    let RiceStage { name, water, key, .. } = stage;
    lang.pick(
        format!(
            "🌾 Rice Water Management - {age} days\n\n💧 Current Requirement: {water}\n📅 Stage: {name}\n\n⚠️ Key Points:\n• {key}\n• Drain excess water during heavy rain\n• Keep water clean and fresh\n\n🔄 Next Check: After 3 days"
        ),
        format!(
            "🌾 നെല്ല് ജല പരിപാലനം - {age} ദിവസം\n\n💧 നിലവിലെ ആവശ്യം: {water}\n📅 ഘട്ടം: {name}\n\n⚠️ പ്രധാന കാര്യങ്ങൾ:\n• {key}\n• മഴയുണ്ടെങ്കിൽ അധിക വെള്ളം ഒഴുക്കി വിടുക\n• വെള്ളം മലിനമാകാതെ നോക്കുക\n\n🔄 അടുത്ത പരിശോധന: 3 ദിവസം കഴിഞ്ഞ്"
        ),
    )
}

pub fn coconut_fertilizer(lang: Language, season: &CoconutSeason) -> String {
    let CoconutSeason { name, months, fertilizer } = season;
    lang.pick(
        format!(
            "🥥 Coconut Fertilizer Management\n\n📅 Season: {name} ({months})\n💊 Fertilizer: {fertilizer}\n\n📋 Application Method:\n• Apply in 2m radius around palm\n• Dig 15-20cm deep and apply\n• Water thoroughly after application\n\n🔄 Next Application: After 3 months"
        ),
        format!(
            "🥥 തെങ്ങ് വള പരിപാലനം\n\n📅 സീസൺ: {name} ({months})\n💊 വളം: {fertilizer}\n\n📋 പ്രയോഗ രീതി:\n• മരത്തിന്റെ ചുവട്ടിൽ 2 മീറ്റർ ചുറ്റളവിൽ\n• 15-20 സെ.മീ ആഴത്തിൽ കുഴിച്ച് ഇടുക\n• വളം ഇട്ട ശേഷം വെള്ളം നനയ്ക്കുക\n\n🔄 അടുത്ത വളം: 3 മാസം കഴിഞ്ഞ്"
        ),
    )
}

pub fn coconut_pest(lang: Language, pest: &CoconutPest) -> String {
    let CoconutPest { pest, control } = pest;
    lang.pick(
        format!(
            "🥥 Coconut Pest Control\n\n🐛 Major Pest: {pest}\n💊 Control: {control}\n\n📋 Immediate Actions:\n• Check crown for holes\n• Install pheromone traps\n• Remove dead fronds\n\n⚠️ Monthly inspection required"
        ),
        format!(
            "🥥 തെങ്ങ് കീട നിയന്ത്രണം\n\n🐛 പ്രധാന കീടം: {pest}\n💊 നിയന്ത്രണം: {control}\n\n📋 ഇപ്പോൾ ചെയ്യേണ്ടത്:\n• കിരീടത്തിൽ ദ്വാരങ്ങൾ പരിശോധിക്കുക\n• ഫെറോമോൺ ട്രാപ്പുകൾ സ്ഥാപിക്കുക\n• ചത്ത ഇലകൾ നീക്കം ചെയ്യുക\n\n⚠️ മാസത്തിൽ ഒരിക്കൽ പരിശോധിക്കുക"
        ),
    )
}

pub fn tomato_disease(lang: Language, age: u32, stage: &TomatoStage) -> String {
    let TomatoStage { name, days, .. } = stage;
    lang.pick(
        format!(
            "🍅 Tomato Disease Control - {age} days\n\n📅 Stage: {name} ({days} days)\n\n🐛 Major Diseases:\n• Blight - Copper spray 2g/L\n• Fruit Borer - Bt spray 1g/L\n• Viral - Remove infected plants\n\n📋 Prevention:\n• Ensure good air circulation\n• Avoid over-watering\n• Spray in evening hours"
        ),
        format!(
            "🍅 തക്കാളി രോഗ നിയന്ത്രണം - {age} ദിവസം\n\n📅 ഘട്ടം: {name} ({days} ദിവസം)\n\n🐛 പ്രധാന രോഗങ്ങൾ:\n• ബ്ലൈറ്റ് - കോപ്പർ സ്പ്രേ 2g/L\n• ഫ്രൂട് ബോറർ - Bt സ്പ്രേ 1g/L\n• വൈറൽ - രോഗബാധിത ചെടികൾ നീക്കം ചെയ്യുക\n\n📋 പ്രതിരോധം:\n• നല്ല വായു സഞ്ചാരം ഉറപ്പാക്കുക\n• അധിക വെള്ളം ഒഴിവാക്കുക\n• സായാഹ്നത്തിൽ സ്പ്രേ ചെയ്യുക"
        ),
    )
}

pub fn tomato_schedule(lang: Language, age: u32, stage: &TomatoStage, next: Option<&TomatoTask>) -> String {
    let TomatoStage { name, days, activity, .. } = stage;
    match lang {
        Language::English => {
            let next = next.map_or_else(
                || "Care schedule complete".to_string(),
                |task| format!("Day {} - {}", task.day, task.activity),
            );
            format!(
                "🍅 Tomato Care Schedule - {age} days\n\n📅 Stage: {name} ({days} days)\n🌱 Focus: {activity}\n📋 Next Task: {next}\n\n⚠️ Water the field before any foliar spray"
            )
        }
        Language::Malayalam => {
            let next = next.map_or_else(
                || "ഷെഡ്യൂൾ പൂർത്തിയായി".to_string(),
                |task| format!("ദിവസം {} - {}", task.day, task.activity),
            );
            format!(
                "🍅 തക്കാളി പരിപാലന ഷെഡ്യൂൾ - {age} ദിവസം\n\n📅 ഘട്ടം: {name} ({days} ദിവസം)\n🌱 ശ്രദ്ധ: {activity}\n📋 അടുത്ത പ്രവൃത്തി: {next}\n\n⚠️ ഇലകളിൽ സ്പ്രേ ചെയ്യുന്നതിന് മുമ്പ് നനയ്ക്കുക"
            )
        }
    }
}

pub fn weather_alert(lang: Language) -> String {
    lang.pick(
        "🌦️ Weather Alert\n\nHeavy rainfall expected for next 3 days\n\n⚠️ Immediate Actions:\n• Stop pesticide spraying\n• Ensure proper field drainage\n• Provide crop support/staking\n• Postpone fertilizer application\n\n🔄 Resume activities 2 days after rain stops",
        "🌦️ കാലാവസ്ഥാ മുന്നറിയിപ്പ്\n\nഅടുത്ത 3 ദിവസം കനത്ത മഴ പ്രതീക്ഷിക്കുന്നു\n\n⚠️ ഇപ്പോൾ ചെയ്യേണ്ടത്:\n• കീടനാശിനി തളിക്കുന്നത് നിർത്തുക\n• വയലിൽ നല്ല ഡ്രെയിനേജ് ഉറപ്പാക്കുക\n• വിളകൾ കെട്ടി താങ്ങുക\n• വളം പ്രയോഗം മാറ്റിവെക്കുക\n\n🔄 മഴ കഴിഞ്ഞ് 2 ദിവസം കഴിഞ്ഞ് പ്രവർത്തനങ്ങൾ പുനരാരംഭിക്കുക",
    )
    .to_string()
}

pub fn market_prices(lang: Language) -> String {
    lang.pick(
        "💰 Market Information\n\n📈 Today's Prices (Kottayam Mandi):\n• Rice: ₹2,850/quintal (+1.8%)\n• Coconut: ₹12/piece (+4.3%)\n• Pepper: ₹45,000/quintal (-3.2%)\n\n📋 Selling Tips:\n• Good rice prices, ideal time to sell\n• Coconut prices rising\n• Pepper prices down, wait for better rates\n\n🔄 Next Update: Tomorrow 8 AM",
        "💰 മാർക്കറ്റ് വിവരങ്ങൾ\n\n📈 ഇന്നത്തെ വില (കോട്ടയം മണ്ടി):\n• നെല്ല്: ₹2,850/ക്വിന്റൽ (+1.8%)\n• തെങ്ങ്: ₹12/എണ്ണം (+4.3%)\n• കുരുമുളക്: ₹45,000/ക്വിന്റൽ (-3.2%)\n\n📋 വിൽപ്പന നുറുങ്ങുകൾ:\n• നെല്ലിന് നല്ല വില, വിൽക്കാൻ നല്ല സമയം\n• തെങ്ങിന്റെ വില കൂടുന്നു\n• കുരുമുളക് വില കുറഞ്ഞു, കാത്തിരിക്കുക\n\n🔄 അടുത്ത അപ്ഡേറ്റ്: നാളെ രാവിലെ 8 മണിക്ക്",
    )
    .to_string()
}

pub fn activity_log(lang: Language) -> String {
    lang.pick(
        "📝 Activity Log\n\nKeeping records helps me give better advice.\n\n📋 Note these after every field visit:\n• Irrigation and water level\n• Fertilizer type and quantity\n• Sprays with product and rate\n• Pest or disease sightings\n\n💬 Example: \"Applied Urea 43kg/ha to rice today\"",
        "📝 പ്രവർത്തന രേഖ\n\nകൃത്യമായ രേഖകൾ മികച്ച ഉപദേശം നൽകാൻ സഹായിക്കും.\n\n📋 ഓരോ സന്ദർശനത്തിനു ശേഷവും രേഖപ്പെടുത്തുക:\n• ജലസേചനവും ജലനിരപ്പും\n• വളത്തിന്റെ തരവും അളവും\n• സ്പ്രേ ചെയ്ത മരുന്നും അളവും\n• കീട/രോഗ ലക്ഷണങ്ങൾ\n\n💬 ഉദാഹരണം: \"ഇന്ന് നെല്ലിന് യൂറിയ 43kg/ha ഇട്ടു\"",
    )
    .to_string()
}

pub fn government_schemes(lang: Language) -> String {
    lang.pick(
        "🏛️ Government Schemes\n\n📋 Support for Kerala farmers:\n• PM-KISAN - ₹6,000/year income support\n• PMFBY - Crop insurance against weather loss\n• Karshaka Pension - for farmers above 60\n• Soil Health Card - free soil testing\n\n📍 Apply at your nearest Krishi Bhavan with Aadhaar and land records",
        "🏛️ സർക്കാർ പദ്ധതികൾ\n\n📋 കേരളത്തിലെ കർഷകർക്കുള്ള സഹായം:\n• PM-KISAN - പ്രതിവർഷം ₹6,000 വരുമാന സഹായം\n• PMFBY - കാലാവസ്ഥാ നഷ്ടത്തിന് വിള ഇൻഷുറൻസ്\n• കർഷക പെൻഷൻ - 60 വയസ്സിന് മുകളിലുള്ളവർക്ക്\n• സോയിൽ ഹെൽത്ത് കാർഡ് - സൗജന്യ മണ്ണ് പരിശോധന\n\n📍 ആധാറും ഭൂരേഖകളുമായി അടുത്തുള്ള കൃഷിഭവനിൽ അപേക്ഷിക്കുക",
    )
    .to_string()
}

/// Greeting and help menu used whenever nothing more specific applies.
pub fn general_help(lang: Language, first_name: &str, crop_names: &[&str]) -> String {
    let crops = if crop_names.is_empty() {
        lang.pick("none added yet", "ഇതുവരെ ചേർത്തിട്ടില്ല").to_string()
    } else {
        crop_names.join(", ")
    };

    lang.pick(
        format!(
            "Hello {first_name}! 🙏\n\nYour crops: {crops}\n\n🤔 I can help you with:\n• Crop-specific guidance\n• Fertilizer & pesticide schedules\n• Disease diagnosis\n• Weather alerts\n• Market prices\n• Activity records\n• Government schemes\n\n💬 Example: Ask \"What fertilizer does my rice need?\""
        ),
        format!(
            "നമസ്കാരം {first_name}! 🙏\n\nനിങ്ങളുടെ വിളകൾ: {crops}\n\n🤔 എനിക്ക് സഹായിക്കാൻ കഴിയുന്ന കാര്യങ്ങൾ:\n• വിള-നിർദ്ദിഷ്ട ഉപദേശം\n• വളം & കീടനാശിനി ഷെഡ്യൂൾ\n• രോഗ നിർദ്ദാനം\n• കാലാവസ്ഥാ മുന്നറിയിപ്പ്\n• മാർക്കറ്റ് വിലകൾ\n• പ്രവർത്തന രേഖ\n• സർക്കാർ പദ്ധതികൾ\n\n💬 ഉദാഹരണം: \"എന്റെ നെല്ലിന് എന്ത് വളം വേണം?\" എന്ന് ചോദിക്കുക"
        ),
    )
}
