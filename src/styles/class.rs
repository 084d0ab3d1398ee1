//! Character-class flavoured names

use super::{composed, isekai, pick};
use crate::types::Gender;
use rand::Rng;

/// Chance that a class pattern gets an extra middle syllable spliced in
const SPLICE_PROBABILITY: f64 = 0.3;

/// Class key and its name patterns
pub const CLASS_PATTERNS: &[(&str, &[&str])] = &[
    ("마법사", &["미스틱", "아르카나", "셀레스티아", "루나리아", "아스트라", "에테리아"]),
    ("기사", &["아르케인", "매지카", "메를린", "간달프", "미스터", "세이지"]),
    ("도적", &["섀도우", "실프", "니야", "로그", "팬텀", "미스트"]),
    ("성직자", &["세라핌", "엔젤", "홀리", "디바인", "세인트", "프리스티스"]),
    ("용사", &["헤로인", "챔피언", "세이비어", "레스큐어", "가디언", "프로텍터"]),
    ("전사", &["워리어", "버서커", "팔라딘", "나이트", "가디언", "디펜더"]),
    ("궁수", &["아처", "레인저", "스나이퍼", "헌터", "트래커", "마크스맨"]),
    ("소환사", &["서머너", "네크로맨서", "드루이드", "비스트마스터", "엘레멘탈리스트"]),
    ("용기사", &["드래곤나이트", "드래곤슬레이어", "드래곤마스터", "드래곤테이머"]),
    ("암살자", &["어쌔신", "쉐도우", "나이트블레이드", "닌자", "스텔스", "실루엣"]),
    ("광전사", &["버서커", "레이지", "매드니스", "퓨리", "블러드레이지", "배틀매니악"]),
    ("정령사", &["엘레멘탈리스트", "스피릿마스터", "소울바인더", "스피릿워커"]),
    ("주술사", &["샤먼", "보두", "헥서", "커서", "위치닥터", "오컬티스트"]),
    ("연금술사", &["알케미스트", "포션마스터", "트랜스뮤터", "엘릭서", "믹서"]),
    ("음유시인", &["바드", "송스트레스", "포엣", "라이머", "멜로디", "하모니"]),
    ("무희", &["댄서", "퍼포머", "엔터테이너", "아크로뱃", "발레리나", "리듬마스터"]),
];

/// Patterns for a class, if the class is known
pub fn patterns_for(character_class: &str) -> Option<&'static [&'static str]> {
    let key = character_class.trim();
    CLASS_PATTERNS
        .iter()
        .find(|(class, _)| *class == key)
        .map(|(_, patterns)| *patterns)
}

/// All known class keys
pub fn known_classes() -> impl Iterator<Item = &'static str> {
    CLASS_PATTERNS.iter().map(|(class, _)| *class)
}

/// Pick a random known class key
pub fn random_class<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CLASS_PATTERNS[rng.gen_range(0..CLASS_PATTERNS.len())].0
}

/// Insert `syllable` after the second character of `base`
pub fn splice(base: &str, syllable: &str) -> String {
    let cut = base.char_indices().nth(2).map_or(base.len(), |(i, _)| i);
    format!("{}{}{}", &base[..cut], syllable, &base[cut..])
}

/// Generate a name for a character class. Unknown classes get a plain isekai
/// name for the gender.
pub fn generate<R: Rng + ?Sized>(character_class: &str, gender: Gender, rng: &mut R) -> String {
    let Some(patterns) = patterns_for(character_class) else {
        tracing::debug!(class = %character_class, "Unknown class, using isekai table");
        return isekai::generate(gender, rng);
    };

    let base = pick(patterns, rng);
    if rng.gen_bool(SPLICE_PROBABILITY) {
        splice(base, pick(composed::MIDDLES, rng))
    } else {
        base.to_string()
    }
}
