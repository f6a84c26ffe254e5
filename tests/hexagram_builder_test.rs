//! Trigram table and hexagram builder properties

use rstest::rstest;

use meihua::domain::{
    compose, identify, nuclear_lines, validate_table, Element, Hexagram, Line, Trigram,
    TrigramId, TrigramPair, TRIGRAMS,
};

use Line::{Broken as B, Solid as S};

#[rstest]
#[case(1, "Qian", Element::Heaven, [S, S, S])]
#[case(2, "Dui", Element::Lake, [B, S, S])]
#[case(3, "Li", Element::Fire, [S, B, S])]
#[case(4, "Zhen", Element::Thunder, [B, B, S])]
#[case(5, "Xun", Element::Wind, [S, S, B])]
#[case(6, "Kan", Element::Water, [B, S, B])]
#[case(7, "Gen", Element::Mountain, [S, B, B])]
#[case(8, "Kun", Element::Earth, [B, B, B])]
fn given_trigram_number_when_looking_up_then_classical_pattern(
    #[case] number: u8,
    #[case] name: &str,
    #[case] element: Element,
    #[case] pattern: [Line; 3],
) {
    let trigram = Trigram::by_number(number).unwrap();
    assert_eq!(trigram.id.get(), number);
    assert_eq!(trigram.name, name);
    assert_eq!(trigram.element, element);
    assert_eq!(trigram.pattern, pattern);
}

#[test]
fn given_table_then_patterns_pairwise_distinct_and_complete() {
    validate_table().expect("table valid");

    let mut bits: Vec<u8> = TRIGRAMS.iter().map(Trigram::bits).collect();
    bits.sort_unstable();
    assert_eq!(bits, (0..8).collect::<Vec<u8>>());
}

#[test]
fn given_every_id_pair_when_composing_then_identify_round_trips() {
    for upper in TrigramId::all() {
        for lower in TrigramId::all() {
            let lines = compose(upper, lower);
            assert_eq!(identify(&lines), TrigramPair { upper, lower });

            let hexagram = Hexagram::from_trigrams(upper, lower);
            assert_eq!(Hexagram::from_lines(*hexagram.lines()), hexagram);
        }
    }
}

#[test]
fn given_every_six_line_pattern_when_identifying_then_compose_rebuilds_it() {
    for bits in 0u8..64 {
        let lines: [Line; 6] =
            std::array::from_fn(|i| if bits & (1 << i) != 0 { S } else { B });
        let TrigramPair { upper, lower } = identify(&lines);
        assert_eq!(compose(upper, lower), lines, "pattern {bits:06b}");
    }
}

#[rstest]
#[case(TrigramId::QIAN, TrigramId::KUN, TrigramId::XUN, TrigramId::GEN)]
#[case(TrigramId::KAN, TrigramId::LI, TrigramId::LI, TrigramId::KAN)]
#[case(TrigramId::KUN, TrigramId::KUN, TrigramId::KUN, TrigramId::KUN)]
fn given_hexagram_when_taking_nuclear_then_expected_trigrams(
    #[case] upper: TrigramId,
    #[case] lower: TrigramId,
    #[case] nuclear_upper: TrigramId,
    #[case] nuclear_lower: TrigramId,
) {
    let nuclear = Hexagram::from_trigrams(upper, lower).nuclear();
    assert_eq!(nuclear.upper_id(), nuclear_upper);
    assert_eq!(nuclear.lower_id(), nuclear_lower);
}

#[test]
fn given_qian_over_kun_when_taking_nuclear_then_jian() {
    let nuclear = Hexagram::from_trigrams(TrigramId::QIAN, TrigramId::KUN).nuclear();
    assert_eq!(nuclear.lines(), &[B, B, S, B, S, S]);
    assert_eq!(nuclear.name().number, 53);
}

#[test]
fn given_same_lines_when_extracting_nuclear_then_ids_do_not_matter() {
    let lines = [S, B, B, S, S, B];
    let expected = [B, B, S, B, S, S];
    assert_eq!(nuclear_lines(&lines), expected);
    assert_eq!(Hexagram::from_lines(lines).nuclear().lines(), &expected);
}
