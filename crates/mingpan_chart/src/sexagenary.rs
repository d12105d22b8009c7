//! Sexagenary (stem-branch) year classification.
//!
//! Ten heavenly stems and twelve earthly branches advance together, one
//! step per year, giving a combined cycle of 60. The default epoch is
//! CE 1924, a Jia-Zi year (stem 0, branch 0).
//!
//! The year turns over at the Start of Spring solar term, approximated here
//! by a fixed calendar date (Feb 4 by default). Dates before it belong to
//! the previous sexagenary year. The real solar term drifts by about a day
//! between years; that drift is not modelled.

use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::config::SexagenaryConfig;

/// The five elements (Wu Xing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

/// The 10 heavenly stems (Tian Gan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    pub const fn character(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Element carried by the stem; stems pair off two per element.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem for an index; wraps modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }
}

/// The 12 earthly branches (Di Zhi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    pub const fn character(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch for an index; wraps modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// The zodiac animal sharing this branch's position.
    pub const fn animal(self) -> ZodiacAnimal {
        ALL_ANIMALS[self.index() as usize]
    }
}

/// The 12 zodiac animals, positionally aligned with [`ALL_BRANCHES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in branch order (index 0 = Rat).
pub const ALL_ANIMALS: [ZodiacAnimal; 12] = [
    ZodiacAnimal::Rat,
    ZodiacAnimal::Ox,
    ZodiacAnimal::Tiger,
    ZodiacAnimal::Rabbit,
    ZodiacAnimal::Dragon,
    ZodiacAnimal::Snake,
    ZodiacAnimal::Horse,
    ZodiacAnimal::Goat,
    ZodiacAnimal::Monkey,
    ZodiacAnimal::Rooster,
    ZodiacAnimal::Dog,
    ZodiacAnimal::Pig,
];

impl ZodiacAnimal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// Traditional Chinese label used in readings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龍",
            Self::Snake => "蛇",
            Self::Horse => "馬",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "雞",
            Self::Dog => "狗",
            Self::Pig => "豬",
        }
    }

    /// 0-based index (Rat=0 .. Pig=11), equal to the branch index.
    pub const fn index(self) -> u8 {
        match self {
            Self::Rat => 0,
            Self::Ox => 1,
            Self::Tiger => 2,
            Self::Rabbit => 3,
            Self::Dragon => 4,
            Self::Snake => 5,
            Self::Horse => 6,
            Self::Goat => 7,
            Self::Monkey => 8,
            Self::Rooster => 9,
            Self::Dog => 10,
            Self::Pig => 11,
        }
    }
}

/// Stem index for a year offset from the epoch, in [0, 9] for any sign.
pub fn stem_index(offset: i64) -> u8 {
    offset.rem_euclid(10) as u8
}

/// Branch index for a year offset from the epoch, in [0, 11] for any sign.
pub fn branch_index(offset: i64) -> u8 {
    offset.rem_euclid(12) as u8
}

/// Position in the combined 60-year cycle, in [0, 59]; 0 is Jia-Zi.
pub fn cycle_index(offset: i64) -> u8 {
    offset.rem_euclid(60) as u8
}

/// Year pillar of a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SexagenaryResult {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub animal: ZodiacAnimal,
    /// Year after the cutover adjustment; one less than the civil year for
    /// dates before the cutover.
    pub effective_year: i64,
    /// Position in the 60-year cycle (0 = Jia-Zi).
    pub cycle_index: u8,
}

impl SexagenaryResult {
    /// Element of the year stem.
    pub const fn element(&self) -> Element {
        self.stem.element()
    }
}

impl Display for SexagenaryResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.character(), self.branch.character())
    }
}

/// Classify a civil date with the default epoch (1924) and cutover (Feb 4).
pub fn classify_sexagenary(year: i32, month: u32, day: u32) -> SexagenaryResult {
    classify_sexagenary_with(year, month, day, &SexagenaryConfig::default())
}

/// Classify a civil date with an explicit configuration.
///
/// Total over all inputs: month and day are only compared against the
/// cutover, never range checked.
pub fn classify_sexagenary_with(
    year: i32,
    month: u32,
    day: u32,
    config: &SexagenaryConfig,
) -> SexagenaryResult {
    let before_cutover = config.cutover.is_before(month, day);
    let effective_year = if before_cutover {
        year as i64 - 1
    } else {
        year as i64
    };
    let offset = effective_year - config.epoch_year as i64;
    debug!(year, month, day, effective_year, offset, "sexagenary year");

    let branch = EarthlyBranch::from_index(branch_index(offset));
    SexagenaryResult {
        stem: HeavenlyStem::from_index(stem_index(offset)),
        branch,
        animal: branch.animal(),
        effective_year,
        cycle_index: cycle_index(offset),
    }
}
