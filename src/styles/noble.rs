//! Noble names: a western first name paired with a house surname

use super::{pick, western};
use crate::types::Gender;
use rand::Rng;

pub const NOBLE_SURNAMES: &[&str] = &[
    "그레이라트", "라트레이야", "보레아스", "아스라", "드라고니아", "펜드래곤",
    "플란타지넷", "하프스부르크", "로마노프", "메디치", "몬테크리스토", "다르타냥",
    "발루아", "부르봉", "합스부르크", "폰아인즈베른", "토오사카", "엔즈워스",
    "마토", "에미야",
];

/// Pick a house surname
pub fn random_surname<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(NOBLE_SURNAMES, rng)
}

/// Generate `(first_name, surname)`
pub fn generate<R: Rng + ?Sized>(gender: Gender, rng: &mut R) -> (String, String) {
    let first_name = western::generate(gender, rng);
    let surname = random_surname(rng).to_string();
    (first_name, surname)
}

/// Western display order: first name, then surname
pub fn format_noble_name(first_name: &str, surname: &str) -> String {
    format!("{} {}", first_name, surname)
}
