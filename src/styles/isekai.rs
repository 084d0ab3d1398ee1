//! Isekai / anime protagonist names
//!
//! The tables are ordered by source work, which lets [`AnimeFlavor`] select a
//! themed slice of each table.

use super::pick;
use crate::types::Gender;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const FEMALE_NAMES: &[&str] = &[
    // Re:Zero
    "에밀리아", "렘", "람", "베아트리체", "펠트", "프리실라", "크루쉬", "아나스타시아",
    "엘자", "메일리", "프레데리카", "페트라", "에키드나", "티폰", "세크메트",
    // Kaguya-sama
    "카구야", "치카", "미코", "하야사카", "시로가네", "카시와기", "마키",
    "타나바타", "이바라", "오시노", "오가", "시라누이", "사부카와", "키요스미",
    // Overlord
    "알베도", "샤르티어", "아우라", "나베랄", "루푸스레기나", "유리", "엔트마", "솔류션",
    "빅팀", "플레이아데스",
    // Tensura
    "시즈", "시온", "슈나", "소우카", "트레이니", "라미리스", "밀림",
    // Dungeon Meshi
    "마르실", "파린", "이즈츠미", "나마리",
    // Re:Zero, continued
    "파우제", "루크니카", "구스테코", "볼라키아", "플뢰겔", "하르트",
    // Classic isekai heroines
    "아리아", "루나", "셀레스티아", "오로라", "이사벨라", "빅토리아", "샬롯", "로제리아",
    "에스텔", "카밀라", "레오나", "디아나", "플로라", "실비아",
    // Magical girls
    "사쿠라", "토모요", "메이링", "유에", "미도리", "아카네", "시로", "쿠로",
    "아오", "키이로", "무라사키",
    // Harem heroines
    "아스나", "유키", "실리카", "리즈벳", "사치", "유이", "시논", "리파", "스구하",
];

pub const MALE_NAMES: &[&str] = &[
    // SAO
    "키리토", "클라인", "아길", "엔드리", "레콘", "유지오", "유진", "카즈토",
    // Re:Zero
    "스바루", "라인하르트", "빌헬름", "알", "가르피엘", "오토", "리카르도",
    // Overlord
    "아인즈", "판도라즈 액터", "세바스", "코키토스", "데미우르고스", "마레", "제로",
    // Tensura
    "림루", "베니마루", "소우에이", "하쿠로", "리그르드", "가비루", "디아블로",
    // Dungeon Meshi
    "라이오스", "치루치크", "센시",
    // Demon Slayer
    "탄지로", "젠이츠", "이노스케", "겐야", "산지", "렌고쿠", "기유", "오바나이",
    // Classic isekai heroes
    "아스란", "레온", "카이토", "유토", "하루토", "소우마", "류지", "켄타",
    "유우키", "신지", "카오루", "카즈야", "타쿠야", "료마", "하야테",
    // Magical boys
    "시란", "샤오란", "유키토", "토우야", "에리올", "쿠로가네", "후마",
    // Harem protagonists
    "나츠키", "카즈마", "루데우스", "하지메", "이치카", "바사라",
    // Samurai
    "무사시", "코지로", "한조", "겐지", "사노스케", "켄신", "사이토",
];

/// Slice boundaries inside the female table: isekai | fantasy | school | magic
const FEMALE_FLAVOR_BOUNDS: [usize; 3] = [40, 60, 80];
/// Slice boundaries inside the male table
const MALE_FLAVOR_BOUNDS: [usize; 3] = [30, 50, 70];

/// Sub-genre used to narrow the isekai tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimeFlavor {
    Isekai,
    Fantasy,
    School,
    Magic,
    Mixed,
}

impl AnimeFlavor {
    /// Lenient parse; unknown flavors mean the whole table
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "isekai" => AnimeFlavor::Isekai,
            "fantasy" => AnimeFlavor::Fantasy,
            "school" => AnimeFlavor::School,
            "magic" => AnimeFlavor::Magic,
            _ => AnimeFlavor::Mixed,
        }
    }

    /// The part of `table` this flavor draws from
    fn slice(self, table: &'static [&'static str], bounds: [usize; 3]) -> &'static [&'static str] {
        let [a, b, c] = bounds.map(|bound| bound.min(table.len()));
        let range = match self {
            AnimeFlavor::Isekai => &table[..a],
            AnimeFlavor::Fantasy => &table[a..b],
            AnimeFlavor::School => &table[b..c],
            AnimeFlavor::Magic => &table[c..],
            AnimeFlavor::Mixed => table,
        };
        if range.is_empty() {
            table
        } else {
            range
        }
    }
}

/// Name table for a gender
pub fn names_for(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => MALE_NAMES,
        Gender::Female => FEMALE_NAMES,
    }
}

/// Names a flavor can produce for a gender
pub fn flavored_names(flavor: AnimeFlavor, gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => flavor.slice(MALE_NAMES, MALE_FLAVOR_BOUNDS),
        Gender::Female => flavor.slice(FEMALE_NAMES, FEMALE_FLAVOR_BOUNDS),
    }
}

/// Pick an isekai protagonist name for the gender
pub fn generate<R: Rng + ?Sized>(gender: Gender, rng: &mut R) -> String {
    pick(names_for(gender), rng).to_string()
}

/// Pick an isekai name restricted to one sub-genre
pub fn generate_flavored<R: Rng + ?Sized>(flavor: AnimeFlavor, gender: Gender, rng: &mut R) -> String {
    pick(flavored_names(flavor, gender), rng).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gendered_tables() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(MALE_NAMES.contains(&generate(Gender::Male, &mut rng).as_str()));
            assert!(FEMALE_NAMES.contains(&generate(Gender::Female, &mut rng).as_str()));
        }
    }

    #[test]
    fn test_no_name_in_both_tables() {
        for name in FEMALE_NAMES {
            assert!(!MALE_NAMES.contains(name), "{} is listed as both genders", name);
        }
    }

    #[test]
    fn test_flavor_bounds_fit_tables() {
        assert!(FEMALE_FLAVOR_BOUNDS[2] < FEMALE_NAMES.len());
        assert!(MALE_FLAVOR_BOUNDS[2] < MALE_NAMES.len());
    }

    #[test]
    fn test_flavor_slices_are_disjoint_and_cover_table() {
        for gender in Gender::ALL {
            let total: usize = [
                AnimeFlavor::Isekai,
                AnimeFlavor::Fantasy,
                AnimeFlavor::School,
                AnimeFlavor::Magic,
            ]
            .iter()
            .map(|f| flavored_names(*f, gender).len())
            .sum();
            assert_eq!(total, names_for(gender).len());
            assert_eq!(flavored_names(AnimeFlavor::Mixed, gender).len(), total);
        }
    }

    #[test]
    fn test_flavored_pick_stays_in_slice() {
        let mut rng = StdRng::seed_from_u64(11);
        let magic = flavored_names(AnimeFlavor::Magic, Gender::Female);
        for _ in 0..50 {
            let name = generate_flavored(AnimeFlavor::Magic, Gender::Female, &mut rng);
            assert!(magic.contains(&name.as_str()));
        }
        assert!(magic.contains(&"아스나"));
        assert!(!magic.contains(&"에밀리아"));
    }

    #[test]
    fn test_flavor_parse() {
        assert_eq!(AnimeFlavor::parse("School"), AnimeFlavor::School);
        assert_eq!(AnimeFlavor::parse("mecha"), AnimeFlavor::Mixed);
    }
}
