use std::{fs, thread};

use romanum::{
    convert,
    converter::{
        evaluator::{Sign, decide, evaluate},
        numeral::{Numeral, TABLE, lookup},
    },
    error::{ConvertError, RuleError, SymbolError},
    explain,
};
use walkdir::WalkDir;

#[test]
fn case_files_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "roman"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, case) in extract_cases(&content) {
            count += 1;
            let result = convert(case.source);
            match case.expected {
                Expected::Value(value) => {
                    assert_eq!(result,
                               Ok(value),
                               "{path:?} line {line_number}: '{}' should convert",
                               case.source);
                },
                Expected::Code(code) => {
                    let error = result.expect_err(&format!("{path:?} line {line_number}: '{}' \
                                                            should be rejected",
                                                           case.source));
                    assert_eq!(error.code(),
                               code,
                               "{path:?} line {line_number}: '{}' failed with {error}",
                               case.source);
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

struct Case<'a> {
    source:   &'a str,
    expected: Expected,
}

enum Expected {
    Value(u64),
    Code(u8),
}

fn extract_cases(content: &str) -> Vec<(usize, Case<'_>)> {
    let mut cases = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let case = if let Some((source, code)) = trimmed.rsplit_once(" ! ") {
            Case { source,
                   expected: Expected::Code(code.parse().expect("bad diagnostic code")) }
        } else if let Some((source, value)) = trimmed.rsplit_once(" = ") {
            Case { source,
                   expected: Expected::Value(value.parse().expect("bad expected value")) }
        } else {
            panic!("Malformed case on line {}: {line}", i + 1);
        };
        cases.push((i + 1, case));
    }

    cases
}

/// Writes `n` the standard way, for checking conversions against.
fn canonical(mut n: u64) -> String {
    const PARTS: [(u64, &str); 13] = [(1000, "M"),
                                      (900, "CM"),
                                      (500, "D"),
                                      (400, "CD"),
                                      (100, "C"),
                                      (90, "XC"),
                                      (50, "L"),
                                      (40, "XL"),
                                      (10, "X"),
                                      (9, "IX"),
                                      (5, "V"),
                                      (4, "IV"),
                                      (1, "I")];

    let mut out = String::new();
    for (value, letters) in PARTS {
        while n >= value {
            out.push_str(letters);
            n -= value;
        }
    }
    out
}

#[test]
fn literal_scenarios() {
    assert_eq!(convert("LIX"), Ok(59));
    assert_eq!(convert("MDCLXII"), Ok(1662));
    assert_eq!(convert("CMLIII"), Ok(953));
    assert_eq!(convert("MCMXLV"), Ok(1945));
    assert_eq!(convert("MDCCLXXVI"), Ok(1776));
    assert!(matches!(convert("acsfga"), Err(ConvertError::Symbol(SymbolError::Unknown { .. }))));
}

#[test]
fn every_canonical_numeral_converts_back() {
    for n in 1..=3999 {
        let numeral = canonical(n);
        assert_eq!(convert(&numeral), Ok(n), "{numeral} should be {n}");
    }
}

#[test]
fn conversion_is_pure() {
    let first = convert("MCXCIX");
    assert_eq!(convert("XLII"), Ok(42));
    assert_eq!(convert("IM").unwrap_err().code(), 3);
    assert_eq!(convert("MCXCIX"), first);
    assert_eq!(first, Ok(1199));
}

#[test]
fn concurrent_conversions_do_not_interfere() {
    thread::scope(|s| {
        let handles: Vec<_> = (1..=8u64).map(|t| {
                                            s.spawn(move || {
                                                 (t * 400 - 399..=t * 400).all(|n| {
                                                                             convert(&canonical(n))
                                                                             == Ok(n)
                                                                         })
                                             })
                                        })
                                        .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(convert(""), Err(ConvertError::Empty));
    assert_eq!(convert("").unwrap_err().code(), 4);
    assert_eq!(explain(""), Err(ConvertError::Empty));
}

#[test]
fn empty_sequence_evaluates_to_zero() {
    assert_eq!(evaluate(&[]), Ok(0));
    assert_eq!(decide(&[]), Ok(Vec::new()));
}

#[test]
fn unknown_symbol_reports_first_offender() {
    assert_eq!(convert("acsfga"),
               Err(ConvertError::Symbol(SymbolError::Unknown { symbol:   'a',
                                                               position: 0, })));
    assert_eq!(convert("MCMq"),
               Err(ConvertError::Symbol(SymbolError::Unknown { symbol:   'q',
                                                               position: 3, })));
    assert_eq!(convert("XIV\n"),
               Err(ConvertError::Symbol(SymbolError::Unknown { symbol:   '\n',
                                                               position: 3, })));
}

#[test]
fn unknown_symbol_is_found_before_rules_are_checked() {
    // `IM` alone breaks a rule, but the trailing letter is caught first.
    assert_eq!(convert("IMz").unwrap_err().code(), 1);
}

#[test]
fn unknown_symbol_position_counts_characters() {
    assert_eq!(convert("MMé"),
               Err(ConvertError::Symbol(SymbolError::Unknown { symbol:   'é',
                                                               position: 2, })));
    assert_eq!(convert("ⅫI").unwrap_err(),
               ConvertError::Symbol(SymbolError::Unknown { symbol:   'Ⅻ',
                                                           position: 0, }));
}

#[test]
fn illegal_subtractive_skip_names_the_pair() {
    assert_eq!(convert("MCIM"),
               Err(ConvertError::Rule(RuleError::IllegalSubtractiveSkip { numeral:  Numeral::I,
                                                                          position: 2,
                                                                          next:     Numeral::M, })));
}

#[test]
fn out_of_order_magnitude_names_both_numerals() {
    assert_eq!(convert("IIXC"),
               Err(ConvertError::Rule(RuleError::OutOfOrderMagnitude { numeral:        Numeral::I,
                                                                       position:       0,
                                                                       later:          Numeral::X,
                                                                       later_position: 2, })));
}

#[test]
fn final_numeral_is_not_part_of_the_scan() {
    assert_eq!(convert("VIX"), Ok(14));
    assert_eq!(convert("VIXX").unwrap_err().code(), 2);
}

#[test]
fn explain_shows_signed_terms() {
    let rendered: Vec<String> =
        explain("MCMXLV").unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["+1000", "-100", "+1000", "-10", "+50", "+5"]);

    let signs: Vec<Sign> = explain("IX").unwrap().iter().map(|t| t.sign).collect();
    assert_eq!(signs, vec![Sign::Subtract, Sign::Add]);
}

#[test]
fn explain_fails_like_convert() {
    for source in ["IM", "IIXC", "abc"] {
        assert_eq!(explain(source).unwrap_err(), convert(source).unwrap_err());
    }
}

#[test]
fn symbol_table_is_ordered() {
    let symbols: String = TABLE.iter().map(|entry| entry.symbol).collect();
    assert_eq!(symbols, "IVXLCDM");

    for (i, numeral) in Numeral::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(numeral.rank()), i + 1);
        assert_eq!(lookup(numeral.symbol()), Some(numeral));
    }

    assert!(TABLE.windows(2).all(|pair| pair[0].value < pair[1].value));
    let values: Vec<u16> = Numeral::ALL.iter().map(|n| n.value()).collect();
    assert_eq!(values, vec![1, 5, 10, 50, 100, 500, 1000]);
}

#[test]
fn lookup_is_case_sensitive() {
    for symbol in ['i', 'v', 'x', 'l', 'c', 'd', 'm', ' ', '0', 'Ⅰ'] {
        assert_eq!(lookup(symbol), None, "{symbol:?} should not resolve");
    }
}

#[test]
fn error_messages_carry_details() {
    assert_eq!(convert("IM").unwrap_err().to_string(),
               "'I' at position 0 cannot be subtracted from 'M'.");
    assert_eq!(convert("abc").unwrap_err().to_string(),
               "Unknown symbol 'a' at position 0.");
    assert_eq!(convert("").unwrap_err().to_string(), "Input is empty.");
}
