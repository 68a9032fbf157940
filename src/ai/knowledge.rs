//! Static agronomy tables used by the responder.
//!
//! Everything here is read-only and process-wide. Day offsets count from the
//! planting date of the crop.

/// A growth stage of rice with its standing-water requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiceStage {
    pub name: &'static str,
    pub days: &'static str,
    pub water: &'static str,
    pub key: &'static str,
    /// Last day (inclusive) of this stage, `None` for the terminal stage.
    pub until_day: Option<u32>,
}

/// One fertilizer application in a day-keyed schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertilizerDose {
    pub day: u32,
    pub kind: &'static str,
    pub quantity: &'static str,
}

/// One pest-control spray in a day-keyed schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PestSpray {
    pub day: u32,
    pub pest: &'static str,
    pub spray: &'static str,
    pub rate: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoconutSeason {
    pub name: &'static str,
    pub months: &'static str,
    pub fertilizer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoconutPest {
    pub pest: &'static str,
    pub control: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TomatoStage {
    pub name: &'static str,
    pub days: &'static str,
    pub activity: &'static str,
    pub until_day: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TomatoTask {
    pub day: u32,
    pub activity: &'static str,
}

/// Anything that appears in a day-keyed schedule.
pub trait Scheduled {
    fn day(&self) -> u32;
}

impl Scheduled for FertilizerDose {
    fn day(&self) -> u32 {
        self.day
    }
}

impl Scheduled for PestSpray {
    fn day(&self) -> u32 {
        self.day
    }
}

impl Scheduled for TomatoTask {
    fn day(&self) -> u32 {
        self.day
    }
}

/// Anything with an inclusive upper day bound, the last entry being open-ended.
pub trait Staged {
    fn until_day(&self) -> Option<u32>;
}

impl Staged for RiceStage {
    fn until_day(&self) -> Option<u32> {
        self.until_day
    }
}

impl Staged for TomatoStage {
    fn until_day(&self) -> Option<u32> {
        self.until_day
    }
}

pub static RICE_STAGES: [RiceStage; 5] = [
    RiceStage { name: "Nursery", days: "0-21", water: "2-3cm", key: "Seedling establishment", until_day: Some(21) },
    RiceStage { name: "Tillering", days: "22-45", water: "3-5cm", key: "Maximum tillers", until_day: Some(45) },
    RiceStage { name: "Panicle Initiation", days: "46-65", water: "5cm", key: "Reproductive phase", until_day: Some(65) },
    RiceStage { name: "Flowering", days: "66-85", water: "3-5cm", key: "Grain formation", until_day: Some(85) },
    RiceStage { name: "Maturity", days: "86-115", water: "Drain 15 days before harvest", key: "Grain filling", until_day: None },
];

pub static RICE_FERTILIZER: [FertilizerDose; 4] = [
    FertilizerDose { day: 15, kind: "Urea", quantity: "43kg/ha" },
    FertilizerDose { day: 21, kind: "Complex", quantity: "25kg/ha" },
    FertilizerDose { day: 45, kind: "Urea", quantity: "43kg/ha" },
    FertilizerDose { day: 65, kind: "MOP", quantity: "17kg/ha" },
];

pub static RICE_PEST_CONTROL: [PestSpray; 5] = [
    PestSpray { day: 15, pest: "General", spray: "Neem oil", rate: "5ml/L" },
    PestSpray { day: 25, pest: "Leaf folder", spray: "Chlorpyrifos", rate: "2ml/L" },
    PestSpray { day: 45, pest: "Brown plant hopper", spray: "Imidacloprid", rate: "0.5ml/L" },
    PestSpray { day: 65, pest: "Stem borer", spray: "Cartap hydrochloride", rate: "2g/L" },
    PestSpray { day: 80, pest: "Sheath blight", spray: "Propiconazole", rate: "1ml/L" },
];

pub static COCONUT_SEASONS: [CoconutSeason; 3] = [
    CoconutSeason { name: "Monsoon", months: "Jun-Sep", fertilizer: "50kg FYM + 1.3kg Urea + 2kg SSP + 2kg MOP per palm" },
    CoconutSeason { name: "Post-monsoon", months: "Oct-Jan", fertilizer: "25kg compost + 0.5kg Urea per palm" },
    CoconutSeason { name: "Summer", months: "Feb-May", fertilizer: "1kg Urea + 1kg MOP per palm" },
];

pub static COCONUT_PESTS: [CoconutPest; 3] = [
    CoconutPest { pest: "Rhinoceros beetle", control: "Pheromone traps + Metarhizium spray" },
    CoconutPest { pest: "Red palm weevil", control: "Trunk injection + Chlorpyrifos" },
    CoconutPest { pest: "Coconut mite", control: "Sulfur spray 3g/L" },
];

pub static TOMATO_STAGES: [TomatoStage; 4] = [
    TomatoStage { name: "Nursery", days: "0-25", activity: "Seed sowing to transplant ready", until_day: Some(25) },
    TomatoStage { name: "Transplant", days: "26-40", activity: "Field establishment", until_day: Some(40) },
    TomatoStage { name: "Flowering", days: "41-65", activity: "Flower induction and fruit set", until_day: Some(65) },
    TomatoStage { name: "Fruiting", days: "66-120", activity: "Fruit development and harvest", until_day: None },
];

pub static TOMATO_SCHEDULE: [TomatoTask; 5] = [
    TomatoTask { day: 7, activity: "First irrigation after transplant" },
    TomatoTask { day: 15, activity: "NPK 19:19:19 @ 5g/L foliar spray" },
    TomatoTask { day: 30, activity: "Staking and pruning" },
    TomatoTask { day: 45, activity: "Calcium spray 2g/L for fruit quality" },
    TomatoTask { day: 60, activity: "Monitor fruit borer, apply Bt spray" },
];

/// Picks the stage for `age`: the first whose bound is at least `age`,
/// otherwise the last one. `None` only for an empty table.
pub fn stage_for<S: Staged>(stages: &[S], age: u32) -> Option<&S> {
    stages
        .iter()
        .find(|stage| stage.until_day().is_some_and(|bound| age <= bound))
        .or_else(|| stages.last())
}

pub fn rice_stage(age: u32) -> &'static RiceStage {
    stage_for(&RICE_STAGES, age).unwrap_or(&RICE_STAGES[RICE_STAGES.len() - 1])
}

pub fn tomato_stage(age: u32) -> &'static TomatoStage {
    stage_for(&TOMATO_STAGES, age).unwrap_or(&TOMATO_STAGES[TOMATO_STAGES.len() - 1])
}

/// First schedule entry strictly after `age`, or `None` once the schedule is done.
pub fn next_after<T: Scheduled>(schedule: &[T], age: u32) -> Option<&T> {
    schedule.iter().find(|entry| entry.day() > age)
}

/// Coconut season for a calendar month (1-12). Monsoon is the default.
pub fn coconut_season(month: u32) -> &'static CoconutSeason {
    match month {
        10..=12 | 1 => &COCONUT_SEASONS[1],
        2..=5 => &COCONUT_SEASONS[2],
        _ => &COCONUT_SEASONS[0],
    }
}
