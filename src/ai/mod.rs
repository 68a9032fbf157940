pub mod keywords;
pub mod knowledge;
pub mod responder;
pub mod templates;

pub use keywords::{classify, identify_crop, CropKind, Topic};
pub use responder::{crop_age, KrishiSakhi};
