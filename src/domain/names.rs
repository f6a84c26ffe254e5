//! King Wen numbering and names of the 64 hexagrams.

use serde::Serialize;

use crate::domain::trigram::TrigramId;

/// Name of a hexagram in the King Wen sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramName {
    /// King Wen number, 1..=64
    pub number: u8,
    pub name: &'static str,
    pub display_name: &'static str,
}

/// King Wen number by `[upper - 1][lower - 1]`, trigrams in table order
/// (Qian, Dui, Li, Zhen, Xun, Kan, Gen, Kun).
const KING_WEN: [[u8; 8]; 8] = [
    [1, 10, 13, 25, 44, 6, 33, 12],
    [43, 58, 49, 17, 28, 47, 31, 45],
    [14, 38, 30, 21, 50, 64, 56, 35],
    [34, 54, 55, 51, 32, 40, 62, 16],
    [9, 61, 37, 42, 57, 59, 53, 20],
    [5, 60, 63, 3, 48, 29, 39, 8],
    [26, 41, 22, 27, 18, 4, 52, 23],
    [11, 19, 36, 24, 46, 7, 15, 2],
];

/// (pinyin, chinese) by King Wen number - 1.
const NAMES: [(&str, &str); 64] = [
    ("Qian", "乾"),
    ("Kun", "坤"),
    ("Zhun", "屯"),
    ("Meng", "蒙"),
    ("Xu", "需"),
    ("Song", "訟"),
    ("Shi", "師"),
    ("Bi", "比"),
    ("Xiao Chu", "小畜"),
    ("Lu", "履"),
    ("Tai", "泰"),
    ("Pi", "否"),
    ("Tong Ren", "同人"),
    ("Da You", "大有"),
    ("Qian", "謙"),
    ("Yu", "豫"),
    ("Sui", "隨"),
    ("Gu", "蠱"),
    ("Lin", "臨"),
    ("Guan", "觀"),
    ("Shi He", "噬嗑"),
    ("Bi", "賁"),
    ("Bo", "剝"),
    ("Fu", "復"),
    ("Wu Wang", "無妄"),
    ("Da Chu", "大畜"),
    ("Yi", "頤"),
    ("Da Guo", "大過"),
    ("Kan", "坎"),
    ("Li", "離"),
    ("Xian", "咸"),
    ("Heng", "恆"),
    ("Dun", "遯"),
    ("Da Zhuang", "大壯"),
    ("Jin", "晉"),
    ("Ming Yi", "明夷"),
    ("Jia Ren", "家人"),
    ("Kui", "睽"),
    ("Jian", "蹇"),
    ("Xie", "解"),
    ("Sun", "損"),
    ("Yi", "益"),
    ("Guai", "夬"),
    ("Gou", "姤"),
    ("Cui", "萃"),
    ("Sheng", "升"),
    ("Kun", "困"),
    ("Jing", "井"),
    ("Ge", "革"),
    ("Ding", "鼎"),
    ("Zhen", "震"),
    ("Gen", "艮"),
    ("Jian", "漸"),
    ("Gui Mei", "歸妹"),
    ("Feng", "豐"),
    ("Lu", "旅"),
    ("Xun", "巽"),
    ("Dui", "兌"),
    ("Huan", "渙"),
    ("Jie", "節"),
    ("Zhong Fu", "中孚"),
    ("Xiao Guo", "小過"),
    ("Ji Ji", "既濟"),
    ("Wei Ji", "未濟"),
];

pub fn lookup(upper: TrigramId, lower: TrigramId) -> HexagramName {
    let number = KING_WEN[upper.index()][lower.index()];
    let (name, display_name) = NAMES[usize::from(number) - 1];
    HexagramName {
        number,
        name,
        display_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn given_all_trigram_pairs_when_numbering_then_covers_1_to_64_once() {
        let numbers: HashSet<u8> = TrigramId::all()
            .flat_map(|u| TrigramId::all().map(move |l| lookup(u, l).number))
            .collect();
        assert_eq!(numbers.len(), 64);
        assert!(numbers.iter().all(|n| (1..=64).contains(n)));
    }

    #[test]
    fn given_doubled_trigrams_when_looking_up_then_named_after_trigram() {
        for id in TrigramId::all() {
            let trigram = crate::domain::Trigram::get(id);
            let name = lookup(id, id);
            assert_eq!(name.name, trigram.name);
            assert_eq!(name.display_name, trigram.display_name);
        }
    }

    #[test]
    fn test_lookup_known_hexagrams() {
        // Water over Fire: After Completion
        assert_eq!(lookup(TrigramId::KAN, TrigramId::LI).number, 63);
        // Earth over Heaven: Peace
        let tai = lookup(TrigramId::KUN, TrigramId::QIAN);
        assert_eq!(tai.number, 11);
        assert_eq!(tai.name, "Tai");
        assert_eq!(lookup(TrigramId::XUN, TrigramId::QIAN).name, "Xiao Chu");
    }
}
