#![doc = include_str!("../README.md")]

/// Number of entries in each of the two parallel name tables.
pub const SCALE_COUNT: usize = 101;

/// Highest significant-digit count the tables can name; the last entry
/// covers 307 to 309 digits.
pub const MAX_NAMED_DIGITS: usize = SCALE_COUNT * 3 + 6;

/// Long-form scale names, indexed by thousand-groups past one million.
///
/// `LONG_NAMES[i]` names `10^(6 + 3i)`.
pub static LONG_NAMES: [&str; SCALE_COUNT] = [
    // 10^6 ..= 10^30
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
    "Sextillion",
    "Septillion",
    "Octillion",
    "Nonillion",
    // 10^33 ..= 10^60
    "Decillion",
    "Undecillion",
    "Duodecillion",
    "Tredecillion",
    "Quattuordecillion",
    "Quindecillion",
    "Sexdecillion",
    "Septendecillion",
    "Octodecillion",
    "Novemdecillion",
    // 10^63 ..= 10^90
    "Vigintillion",
    "Unvigintillion",
    "Duovigintillion",
    "Trevigintillion",
    "Quattuorvigintillion",
    "Quinvigintillion",
    "Sexvigintillion",
    "Septenvigintillion",
    "Octovigintillion",
    "Novemvigintillion",
    // 10^93 ..= 10^120
    "Trigintillion",
    "Untrigintillion",
    "Duotrigintillion",
    "Tretrigintillion",
    "Quattuortrigintillion",
    "Quintrigintillion",
    "Sextrigintillion",
    "Septentrigintillion",
    "Octotrigintillion",
    "Novemtrigintillion",
    // 10^123 ..= 10^150
    "Quadragintillion",
    "Unquadragintillion",
    "Duoquadragintillion",
    "Trequadragintillion",
    "Quattuorquadragintillion",
    "Quinquadragintillion",
    "Sexquadragintillion",
    "Septenquadragintillion",
    "Octoquadragintillion",
    "Novemquadragintillion",
    // 10^153 ..= 10^180
    "Quinquagintillion",
    "Unquinquagintillion",
    "Duoquinquagintillion",
    "Trequinquagintillion",
    "Quattuorquinquagintillion",
    "Quinquinquagintillion",
    "Sexquinquagintillion",
    "Septenquinquagintillion",
    "Octoquinquagintillion",
    "Novemquinquagintillion",
    // 10^183 ..= 10^210
    "Sexagintillion",
    "Unsexagintillion",
    "Duosexagintillion",
    "Tresexagintillion",
    "Quattuorsexagintillion",
    "Quinsexagintillion",
    "Sexsexagintillion",
    "Septensexagintillion",
    "Octosexagintillion",
    "Novemsexagintillion",
    // 10^213 ..= 10^240
    "Septuagintillion",
    "Unseptuagintillion",
    "Duoseptuagintillion",
    "Treseptuagintillion",
    "Quattuorseptuagintillion",
    "Quinseptuagintillion",
    "Sexseptuagintillion",
    "Septenseptuagintillion",
    "Octoseptuagintillion",
    "Novemseptuagintillion",
    // 10^243 ..= 10^270
    "Octogintillion",
    "Unoctogintillion",
    "Duooctogintillion",
    "Treoctogintillion",
    "Quattuoroctogintillion",
    "Quinoctogintillion",
    "Sexoctogintillion",
    "Septenoctogintillion",
    "Octooctogintillion",
    "Novemoctogintillion",
    // 10^273 ..= 10^300
    "Nonagintillion",
    "Unnonagintillion",
    "Duononagintillion",
    "Trenonagintillion",
    "Quattuornonagintillion",
    "Quinnonagintillion",
    "Sexnonagintillion",
    "Septennonagintillion",
    "Octononagintillion",
    "Novemnonagintillion",
    // 10^303 ..= 10^306
    "Centillion",
    "Uncentillion",
];

/// Abbreviated scale tokens, parallel to [`LONG_NAMES`].
///
/// Singles use one or two letters (`M`, `B`, `T`, `Qa`, ...); decade roots
/// are two letters (`Dc` for Decillion, `Vg` for Vigintillion, ...); the
/// unit prefixes `Un Do Tr Qa Qi Sx Sp Oc No` are prepended to a decade
/// root, so `SHORT_SUFFIXES[22]` is `"TrVg"` for Trevigintillion.
pub static SHORT_SUFFIXES: [&str; SCALE_COUNT] = [
    // 10^6 ..= 10^30
    "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc", "No",
    // 10^33 ..= 10^60
    "Dc", "UnDc", "DoDc", "TrDc", "QaDc", "QiDc", "SxDc", "SpDc", "OcDc", "NoDc",
    // 10^63 ..= 10^90
    "Vg", "UnVg", "DoVg", "TrVg", "QaVg", "QiVg", "SxVg", "SpVg", "OcVg", "NoVg",
    // 10^93 ..= 10^120
    "Tg", "UnTg", "DoTg", "TrTg", "QaTg", "QiTg", "SxTg", "SpTg", "OcTg", "NoTg",
    // 10^123 ..= 10^150
    "Qg", "UnQg", "DoQg", "TrQg", "QaQg", "QiQg", "SxQg", "SpQg", "OcQg", "NoQg",
    // 10^153 ..= 10^180
    "Qq", "UnQq", "DoQq", "TrQq", "QaQq", "QiQq", "SxQq", "SpQq", "OcQq", "NoQq",
    // 10^183 ..= 10^210
    "Sg", "UnSg", "DoSg", "TrSg", "QaSg", "QiSg", "SxSg", "SpSg", "OcSg", "NoSg",
    // 10^213 ..= 10^240
    "Su", "UnSu", "DoSu", "TrSu", "QaSu", "QiSu", "SxSu", "SpSu", "OcSu", "NoSu",
    // 10^243 ..= 10^270
    "Og", "UnOg", "DoOg", "TrOg", "QaOg", "QiOg", "SxOg", "SpOg", "OcOg", "NoOg",
    // 10^273 ..= 10^300
    "Ng", "UnNg", "DoNg", "TrNg", "QaNg", "QiNg", "SxNg", "SpNg", "OcNg", "NoNg",
    // 10^303 ..= 10^306
    "Cn", "UnCn",
];

/// Maps a significant-digit count onto a table index.
///
/// The index is `ceil(digit_count / 3) - 3`, so 7 to 9 digits map to index 0
/// ("Million") and each further group of three digits advances one entry.
/// Returns `None` when the count falls below the first bracket (fewer than
/// 7 digits) or past the last one (more than 309 digits).
pub fn index_for_digit_count(digit_count: usize) -> Option<usize> {
    let index = digit_count.div_ceil(3).checked_sub(3)?;
    (index < SCALE_COUNT).then_some(index)
}

/// Returns the long-form name for a table index, e.g. `Some("Billion")`
/// for index 1.
pub fn long_name(index: usize) -> Option<&'static str> {
    LONG_NAMES.get(index).copied()
}

/// Returns the abbreviated token for a table index, e.g. `Some("B")` for
/// index 1.
pub fn short_suffix(index: usize) -> Option<&'static str> {
    SHORT_SUFFIXES.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};
    use std::collections::HashSet;

    #[test]
    fn test_table_endpoints() {
        assert_eq!(LONG_NAMES[0], "Million");
        assert_eq!(LONG_NAMES[SCALE_COUNT - 1], "Uncentillion");
        assert_eq!(SHORT_SUFFIXES[0], "M");
        assert_eq!(SHORT_SUFFIXES[SCALE_COUNT - 1], "UnCn");
    }

    #[test]
    fn test_decade_roots() {
        let decades = [
            (9, "Decillion", "Dc"),
            (19, "Vigintillion", "Vg"),
            (29, "Trigintillion", "Tg"),
            (39, "Quadragintillion", "Qg"),
            (49, "Quinquagintillion", "Qq"),
            (59, "Sexagintillion", "Sg"),
            (69, "Septuagintillion", "Su"),
            (79, "Octogintillion", "Og"),
            (89, "Nonagintillion", "Ng"),
            (99, "Centillion", "Cn"),
        ];
        for (index, long, short) in decades {
            assert_some_eq!(long_name(index), long);
            assert_some_eq!(short_suffix(index), short);
        }
    }

    #[test]
    fn test_unit_prefixes_follow_the_decade_root() {
        assert_some_eq!(long_name(10), "Undecillion");
        assert_some_eq!(short_suffix(10), "UnDc");
        assert_some_eq!(long_name(22), "Trevigintillion");
        assert_some_eq!(short_suffix(22), "TrVg");
        assert_some_eq!(long_name(33), "Quattuortrigintillion");
        assert_some_eq!(short_suffix(33), "QaTg");
        assert_some_eq!(long_name(98), "Novemnonagintillion");
        assert_some_eq!(short_suffix(98), "NoNg");
    }

    #[test]
    fn test_entries_are_unique_and_well_formed() {
        let longs: HashSet<_> = LONG_NAMES.iter().collect();
        assert_eq!(longs.len(), SCALE_COUNT);
        let shorts: HashSet<_> = SHORT_SUFFIXES.iter().collect();
        assert_eq!(shorts.len(), SCALE_COUNT);

        for name in LONG_NAMES {
            assert!(name.ends_with("illion"), "unexpected long name: {name}");
        }
        for suffix in SHORT_SUFFIXES {
            assert!(
                (1..=4).contains(&suffix.len()) && suffix.chars().all(|c| c.is_ascii_alphabetic()),
                "unexpected short suffix: {suffix}"
            );
        }
    }

    #[test]
    fn test_index_for_digit_count() {
        // Below the one-million bracket.
        assert_none!(index_for_digit_count(0));
        assert_none!(index_for_digit_count(6));

        // 7 to 9 digits are all millions.
        assert_some_eq!(index_for_digit_count(7), 0);
        assert_some_eq!(index_for_digit_count(8), 0);
        assert_some_eq!(index_for_digit_count(9), 0);

        // Each further group of three advances one bracket.
        assert_some_eq!(index_for_digit_count(10), 1);
        assert_some_eq!(index_for_digit_count(12), 1);
        assert_some_eq!(index_for_digit_count(13), 2);

        // The last bracket covers 307 to 309 digits.
        assert_some_eq!(index_for_digit_count(307), 100);
        assert_some_eq!(index_for_digit_count(MAX_NAMED_DIGITS), 100);
        assert_none!(index_for_digit_count(MAX_NAMED_DIGITS + 1));
    }

    #[test]
    fn test_out_of_bounds_lookups() {
        assert_none!(long_name(SCALE_COUNT));
        assert_none!(short_suffix(SCALE_COUNT));
    }
}
