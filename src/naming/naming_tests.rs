//! Table-wide properties: every combination the quiz can draw must balance,
//! name, and format cleanly.

use crate::core::models::Kind;
use crate::data::{ANIONS, CATIONS, NONMETALS};
use crate::naming::covalent::name_covalent;
use crate::naming::formula::{classify, format_formula};
use crate::naming::ionic::{balance, ionic_parts, name_ionic};

#[test]
fn every_ion_pair_is_charge_neutral() {
    for cation in CATIONS {
        for anion in ANIONS {
            let (cation_count, anion_count, _) = balance(cation, anion).unwrap();
            assert_eq!(
                cation_count * cation.charge.unsigned_abs(),
                anion_count * anion.charge.unsigned_abs(),
                "{} + {}",
                cation.symbol,
                anion.symbol
            );
            assert!(cation_count >= 1 && anion_count >= 1);
        }
    }
}

#[test]
fn every_ion_pair_names_and_formats() {
    for cation in CATIONS {
        for anion in ANIONS {
            let name = name_ionic(cation, anion).unwrap();
            assert!(name.contains(' '), "{name}");
            assert!(name.ends_with(anion.name), "{name}");
            if cation.variable {
                assert!(name.contains('('), "variable cation without numeral: {name}");
            }

            let parts = ionic_parts(cation, anion).unwrap();
            let markup = format_formula(&parts);
            assert!(!markup.is_empty());
            assert!(!markup.contains('+') && !markup.contains('−'), "{markup}");
            assert_eq!(classify(&parts), Kind::Ionic);
        }
    }
}

#[test]
fn every_nonmetal_pair_names_within_the_quiz_ranges() {
    for first in NONMETALS {
        for second in NONMETALS {
            for first_count in 1..=3 {
                for second_count in 1..=5 {
                    let name =
                        name_covalent(first, first_count, second, second_count).unwrap();
                    assert!(name.ends_with("ide"), "{name}");
                    // Elision never leaves a double vowel at the prefix/root seam
                    assert!(!name.contains("aox") && !name.contains("oox"), "{name}");
                }
            }
        }
    }
}
