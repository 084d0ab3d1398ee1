//! Syllable-composed names
//!
//! The only strategy that synthesizes new strings: prefix + middle + suffix,
//! with the suffix drawn from a gendered sub-table. Some combinations read
//! less naturally than curated names; that is accepted.

use super::pick;
use crate::types::Gender;
use rand::Rng;

pub const PREFIXES: &[&str] = &[
    // Japanese feel
    "아", "카", "사", "타", "나", "하", "마", "야", "라", "와",
    "키", "시", "치", "니", "히", "미", "리", "유", "쿠", "스",
    "에", "케", "세", "테", "네", "헤", "메", "레", "웨", "츠",
    "오", "코", "소", "토", "노", "호", "모", "요", "로", "루",
    // Western feel
    "알", "벨", "셀", "델", "엘", "펠", "겔", "헬", "이", "젤",
    "아르", "베르", "세르", "데르", "에르", "페르", "게르", "헤르",
    "아리", "베리", "세리", "데리", "에리", "페리", "게리", "헤리",
    "아로", "베로", "세로", "데로", "에로", "페로", "게로", "헤로",
];

pub const MIDDLES: &[&str] = &[
    "미", "리", "티", "니", "비", "키", "시", "피", "히", "지",
    "라", "나", "마", "사", "카", "타", "파", "하", "야", "와",
    "루", "누", "무", "수", "쿠", "투", "푸", "후", "유", "주",
    "레", "네", "메", "세", "케", "테", "페", "헤", "예", "제",
    "로", "노", "모", "소", "코", "토", "포", "호", "요", "조",
    "란", "렌", "린", "론", "룬", "탄", "텐", "틴", "톤", "튠",
    "단", "덴", "딘", "돈", "둔", "다", "데", "디", "도", "두",
    "만", "멘", "민", "몬", "문", "산", "센", "신", "손", "순",
    "잔", "젠", "진", "존", "준", "자",
];

pub const FEMALE_SUFFIXES: &[&str] = &[
    "아", "야", "나", "라", "마", "사", "카", "타", "파", "하",
    "에", "예", "네", "레", "메", "세", "케", "테", "페", "헤",
    "이", "니", "리", "미", "시", "키", "티", "피", "히",
    "아나", "야나", "나나", "라나", "마나", "사나", "카나", "타나",
    "에나", "예나", "네나", "레나", "메나", "세나", "케나", "테나",
    "이나", "니나", "리나", "미나", "시나", "키나", "티나",
    "아리아", "야리아", "나리아", "라리아", "마리아", "사리아",
    "에리아", "예리아", "네리아", "레리아", "메리아", "세리아",
    "이리아", "니리아", "리리아", "미리아", "시리아",
];

pub const MALE_SUFFIXES: &[&str] = &[
    "오", "요", "노", "로", "모", "소", "코", "토", "포", "호",
    "우", "유", "누", "루", "무", "수", "쿠", "투", "푸", "후",
    "온", "욘", "논", "론", "몬", "손", "콘", "톤", "폰", "혼",
    "우스", "유스", "누스", "루스", "무스", "수스", "쿠스", "투스",
    "오르", "요르", "노르", "로르", "모르", "소르", "코르", "토르",
    "우르", "유르", "누르", "루르", "무르", "수르", "쿠르", "투르",
    "오스", "요스", "노스", "로스", "모스", "소스", "코스", "토스",
];

/// Doubled vowel syllables and the single syllable they collapse to
const SMOOTHING: &[(&str, &str)] = &[
    ("아아", "아"),
    ("에에", "에"),
    ("이이", "이"),
    ("오오", "오"),
    ("우우", "우"),
];

/// Suffix table for a gender
pub fn suffixes_for(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => MALE_SUFFIXES,
        Gender::Female => FEMALE_SUFFIXES,
    }
}

/// Collapse doubled vowels left at syllable joins
pub fn smooth(name: &str) -> String {
    SMOOTHING
        .iter()
        .fold(name.to_string(), |acc, (doubled, single)| acc.replace(doubled, single))
}

/// Compose a name from three syllable picks
pub fn generate<R: Rng + ?Sized>(gender: Gender, rng: &mut R) -> String {
    let prefix = pick(PREFIXES, rng);
    let middle = pick(MIDDLES, rng);
    let suffix = pick(suffixes_for(gender), rng);
    smooth(&format!("{}{}{}", prefix, middle, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_smoothing() {
        assert_eq!(smooth("아아라"), "아라");
        assert_eq!(smooth("카이이나"), "카이나");
        assert_eq!(smooth("루나"), "루나");
    }

    #[test]
    fn test_composed_names_are_smoothed() {
        let mut rng = StdRng::seed_from_u64(5);
        for gender in Gender::ALL {
            for _ in 0..300 {
                let name = generate(gender, &mut rng);
                assert!(!name.is_empty());
                for (doubled, _) in SMOOTHING {
                    assert!(!name.contains(doubled), "{} contains {}", name, doubled);
                }
            }
        }
    }

    #[test]
    fn test_suffix_follows_gender() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let name = generate(Gender::Male, &mut rng);
            assert!(MALE_SUFFIXES.iter().any(|s| name.ends_with(s)), "{}", name);
        }
    }

    #[test]
    fn test_synthesizes_variety() {
        let mut rng = StdRng::seed_from_u64(13);
        let names: std::collections::HashSet<_> =
            (0..200).map(|_| generate(Gender::Female, &mut rng)).collect();
        assert!(names.len() > 100);
    }
}
