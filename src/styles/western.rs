//! Western fantasy names (Arthurian, Tolkien and wizarding-school flavour)

use super::pick;
use crate::types::Gender;
use rand::Rng;

pub const FEMALE_NAMES: &[&str] = &[
    // Elves
    "갈라드리엘", "아르웬", "타우리엘", "님로델", "케레브린달", "이두릴", "넨야", "빌야",
    // Witches
    "허마이오니", "루나", "진니", "몰리", "맥고나갈", "벨라트릭스", "나르시사",
    "안드로메다", "님파도라", "플뢰르", "가브리엘", "라벤더", "파바티",
    // Princesses and ladies
    "이사벨라", "빅토리아", "알렉산드라", "카타리나", "아나스타시아", "엘리자베스",
    "샬롯", "아멜리아", "소피아", "올리비아", "에밀리", "그레이스", "로즈마리",
    // Angels
    "세라핌", "체루빔", "가브리엘라", "라파엘라", "우리엘라", "미카엘라",
    "아리엘", "카시엘", "라구엘", "라지엘", "하니엘", "카마엘",
];

pub const MALE_NAMES: &[&str] = &[
    // Knights of the round table
    "아서", "랜슬롯", "갈라하드", "퍼시발", "가웨인", "트리스탄", "모드레드",
    "보르스", "케이", "베디베르", "라이오넬", "에렉", "아그라베인",
    // Wizards
    "간달프", "사루만", "라다가스트", "알라타르", "팔란도", "메를린",
    "덤블도어", "스네이프", "루핀", "시리우스", "볼드모트", "그린델왈드",
    // Kings
    "아라곤", "보로미르", "파라미르", "데네토르", "세오덴", "에오메르", "엘렌딜",
    "이실두르", "아나리온", "발란딜", "알다리온", "엘론드", "길갈라드",
    // Gods and heroes
    "오딘", "토르", "로키", "발더", "티르", "헤이드마르", "시그문드", "시구르드",
    "프로도", "샘", "메리", "피핀", "빌보", "김리", "레골라스",
];

/// Name table for a gender
pub fn names_for(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => MALE_NAMES,
        Gender::Female => FEMALE_NAMES,
    }
}

/// Pick a western fantasy name. Only the gender affects the result.
pub fn generate<R: Rng + ?Sized>(gender: Gender, rng: &mut R) -> String {
    pick(names_for(gender), rng).to_string()
}
