//! Element-themed names

use super::{isekai, pick};
use crate::types::{ElementKey, Gender};
use rand::Rng;

/// Chance that a gendered ending is appended
const ENDING_PROBABILITY: f64 = 0.5;

const FEMALE_ENDINGS: &[&str] = &["리아", "나", "네", "아", "에"];
const MALE_ENDINGS: &[&str] = &["스", "드", "로", "토", "무스"];

/// Name patterns for an element
pub fn patterns_for(element: ElementKey) -> &'static [&'static str] {
    match element {
        ElementKey::Fire => &["이그니스", "플람마", "블레이즈", "인페르노", "파이로", "볼케이노"],
        ElementKey::Water => &["아쿠아", "마리나", "오케아노스", "히드로", "글라시에스", "나이아드"],
        ElementKey::Earth => &["테라", "가이아", "크리스탈", "석영", "다이아몬드", "에메랄드"],
        ElementKey::Air => &["벤투스", "시엘", "스카이", "에어리얼", "실프", "스톰"],
        ElementKey::Light => &["룩스", "루미나", "솔라", "레디안트", "오로라", "셀레스"],
        ElementKey::Dark => &["테네브라", "셰이드", "노크턴", "이클립스", "님버스", "오브시디안"],
        ElementKey::Lightning => &["볼트", "썬더", "라이트닝", "일렉트라", "스파크", "쇼크"],
        ElementKey::Ice => &["프로스트", "글레이셜", "윈터", "블리자드", "아이스", "스노우"],
        ElementKey::Steel => &["페룸", "메탈릭", "아이언", "스틸", "포지", "메탈"],
        ElementKey::Nature => &["플로라", "실바", "네이처", "블룸", "그로우", "리프"],
    }
}

/// Endings that may be appended for a gender
pub fn endings_for(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => MALE_ENDINGS,
        Gender::Female => FEMALE_ENDINGS,
    }
}

/// Pick a random element
pub fn random_element<R: Rng + ?Sized>(rng: &mut R) -> ElementKey {
    ElementKey::ALL[rng.gen_range(0..ElementKey::ALL.len())]
}

/// Generate an element-themed name. Without an element the isekai table is used.
pub fn generate<R: Rng + ?Sized>(element: Option<ElementKey>, gender: Gender, rng: &mut R) -> String {
    let Some(element) = element else {
        return isekai::generate(gender, rng);
    };

    let mut name = pick(patterns_for(element), rng).to_string();
    if rng.gen_bool(ENDING_PROBABILITY) {
        name.push_str(pick(endings_for(gender), rng));
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_element_has_patterns() {
        for element in ElementKey::ALL {
            assert!(!patterns_for(element).is_empty());
        }
    }

    #[test]
    fn test_name_starts_with_element_pattern() {
        let mut rng = StdRng::seed_from_u64(17);
        let patterns = patterns_for(ElementKey::Fire);
        let mut with_ending = 0;
        for _ in 0..200 {
            let name = generate(Some(ElementKey::Fire), Gender::Male, &mut rng);
            let base = patterns.iter().find(|p| name.starts_with(*p)).unwrap();
            let rest = &name[base.len()..];
            if !rest.is_empty() {
                assert!(MALE_ENDINGS.contains(&rest), "{}", name);
                with_ending += 1;
            }
        }
        assert!(with_ending > 50 && with_ending < 150);
    }

    #[test]
    fn test_no_element_falls_back() {
        let mut rng = StdRng::seed_from_u64(8);
        let name = generate(None, Gender::Female, &mut rng);
        assert!(isekai::FEMALE_NAMES.contains(&name.as_str()));
    }
}
