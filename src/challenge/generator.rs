//! Random naming challenges drawn from the reference tables.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::Error;
use crate::core::models::{FormulaPart, Kind};
use crate::data::aliases::accepted_aliases;
use crate::data::elements::element_root;
use crate::data::{ANIONS, CATIONS, NONMETALS};
use crate::naming::covalent::{covalent_parts, name_covalent};
use crate::naming::ionic::{ionic_parts, name_ionic};

/// Share of generated challenges that are ionic rather than covalent.
pub const IONIC_PROBABILITY: f64 = 0.7;

/// Attempts at drawing a second, distinct nonmetal before accepting a
/// same-element pair. Intentionally low-stakes; a collision after five
/// retries just produces an odd but harmless question.
const DISTINCT_RETRIES: usize = 5;

/// A generated practice question. Immutable once built; the UI discards it
/// when the student advances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: Uuid,
    pub kind: Kind,
    pub parts: Vec<FormulaPart>,
    /// Canonical expected name.
    pub primary: String,
    /// Curated alternate names also accepted ("water" for H2O).
    pub accepted: Vec<String>,
}

impl Challenge {
    /// JSON form for handing the question to a UI frontend.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A fresh random challenge from the thread-local RNG.
pub fn generate() -> Challenge {
    generate_with(&mut rand::rng())
}

/// A fresh random challenge from the supplied RNG (seedable for tests).
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Challenge {
    if rng.random_bool(IONIC_PROBABILITY) {
        ionic_challenge(rng)
    } else {
        covalent_challenge(rng)
    }
}

fn ionic_challenge<R: Rng + ?Sized>(rng: &mut R) -> Challenge {
    let cation = CATIONS.choose(rng).unwrap_or(&CATIONS[0]);
    let anion = ANIONS.choose(rng).unwrap_or(&ANIONS[0]);

    // Table charges are nonzero, so balancing cannot fail
    let parts = ionic_parts(cation, anion).unwrap_or_else(|_| {
        vec![FormulaPart::from_ion(cation, 1), FormulaPart::from_ion(anion, 1)]
    });
    let primary = name_ionic(cation, anion)
        .unwrap_or_else(|_| format!("{} {}", cation.name, anion.name));
    let accepted = accepted_aliases(&parts);

    Challenge { id: Uuid::new_v4(), kind: Kind::Ionic, parts, primary, accepted }
}

fn covalent_challenge<R: Rng + ?Sized>(rng: &mut R) -> Challenge {
    let first = NONMETALS.choose(rng).unwrap_or(&NONMETALS[0]);
    let mut second = NONMETALS.choose(rng).unwrap_or(&NONMETALS[0]);
    for _ in 0..DISTINCT_RETRIES {
        if second.symbol != first.symbol {
            break;
        }
        second = NONMETALS.choose(rng).unwrap_or(&NONMETALS[0]);
    }

    let first_count = rng.random_range(1..=3);
    let second_count = rng.random_range(1..=5);

    let parts = covalent_parts(first, first_count, second, second_count);
    // Counts stay inside the Greek prefix table, so naming cannot fail
    let primary = name_covalent(first, first_count, second, second_count)
        .unwrap_or_else(|_| format!("{} {}ide", first.name, element_root(second.symbol)));
    let accepted = accepted_aliases(&parts);

    Challenge { id: Uuid::new_v4(), kind: Kind::Covalent, parts, primary, accepted }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::data::ions::ion_by_symbol;

    #[test]
    fn both_kinds_show_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let challenges: Vec<Challenge> = (0..200).map(|_| generate_with(&mut rng)).collect();
        assert!(challenges.iter().any(|c| c.kind == Kind::Ionic));
        assert!(challenges.iter().any(|c| c.kind == Kind::Covalent));
    }

    #[test]
    fn ionic_challenges_are_charge_balanced() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let challenge = generate_with(&mut rng);
            if challenge.kind != Kind::Ionic {
                continue;
            }
            let cation = ion_by_symbol(&challenge.parts[0].symbol).unwrap();
            let anion = ion_by_symbol(&challenge.parts[1].symbol).unwrap();
            assert_eq!(
                challenge.parts[0].count * cation.charge.unsigned_abs(),
                challenge.parts[1].count * anion.charge.unsigned_abs(),
                "{}",
                challenge.primary
            );
        }
    }

    #[test]
    fn covalent_counts_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let challenge = generate_with(&mut rng);
            if challenge.kind != Kind::Covalent {
                continue;
            }
            assert!((1..=3).contains(&challenge.parts[0].count));
            assert!((1..=5).contains(&challenge.parts[1].count));
            assert!(!challenge.primary.is_empty());
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut rng = StdRng::seed_from_u64(17);
        let a = generate_with(&mut rng);
        let b = generate_with(&mut rng);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn challenges_round_trip_through_json() {
        let mut rng = StdRng::seed_from_u64(19);
        let challenge = generate_with(&mut rng);
        let json = challenge.to_json().unwrap();
        let back: Challenge = serde_json::from_str(&json).unwrap();
        assert_eq!(challenge, back);
    }
}
