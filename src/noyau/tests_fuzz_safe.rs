//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - invariant clé : aucune panique, toujours Ok(f64) ou une ErreurCalcul typée

use std::time::{Duration, Instant};

use super::{evaluer, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

/// Alphabet autorisé (validation caractère passe toujours).
const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '7', '9', '.', '+', '-', '*', '/', '^', '(', ')', ' ', '\t',
];

/// Caractères hors alphabet.
const INTRUS: &[char] = &['a', '_', '%', ',', 'é', '=', '!', 'x'];

fn gen_brut(rng: &mut Rng, max_len: u32) -> String {
    let len = rng.pick(max_len + 1);
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/// Expression bien formée (profondeur bornée).
fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 || rng.pick(3) == 0 {
        return format!("{}", rng.pick(20));
    }
    let op = ['+', '-', '*', '/', '^'][rng.pick(5) as usize];
    let a = gen_expr(rng, profondeur - 1);
    let b = gen_expr(rng, profondeur - 1);
    if rng.pick(2) == 0 {
        format!("({a}{op}{b})")
    } else {
        format!("{a} {op} {b}")
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_brut_sans_panique_et_deterministe() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..5_000 {
        budget(start, max);
        let s = gen_brut(&mut rng, 24);
        let a = evaluer(&s);
        assert_eq!(evaluer(&s), a, "non déterministe pour {s:?}");
        // l’alphabet est autorisé : jamais CaracteresEnTrop
        assert_ne!(a, Err(ErreurCalcul::CaracteresEnTrop), "s={s:?}");
    }
}

#[test]
fn fuzz_intrus_toujours_caracteres_en_trop() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..2_000 {
        budget(start, max);
        let mut s = gen_brut(&mut rng, 16);
        let intrus = INTRUS[rng.pick(INTRUS.len() as u32) as usize];
        // position par caractère (l’intrus peut être multi-octets)
        let pos = rng.pick(s.chars().count() as u32 + 1) as usize;
        let idx = s.char_indices().nth(pos).map_or(s.len(), |(i, _)| i);
        s.insert(idx, intrus);

        assert_eq!(evaluer(&s), Err(ErreurCalcul::CaracteresEnTrop), "s={s:?}");
    }
}

#[test]
fn fuzz_parentheses() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);

    for _ in 0..3_000 {
        budget(start, max);
        let s = gen_brut(&mut rng, 20);

        let mut balance: i64 = 0;
        let mut negative = false;
        for c in s.chars() {
            match c {
                '(' => balance += 1,
                ')' => balance -= 1,
                _ => {}
            }
            negative |= balance < 0;
        }

        let r = evaluer(&s);
        if negative {
            assert_eq!(r, Err(ErreurCalcul::OrdreParenthesesIncorrect), "s={s:?}");
        } else if balance != 0 {
            assert_eq!(r, Err(ErreurCalcul::ParentheseNonAppariee), "s={s:?}");
        } else {
            assert!(
                !matches!(
                    r,
                    Err(ErreurCalcul::OrdreParenthesesIncorrect)
                        | Err(ErreurCalcul::ParentheseNonAppariee)
                ),
                "s={s:?}"
            );
        }
    }
}

#[test]
fn fuzz_expressions_bien_formees() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(2024);

    for _ in 0..2_000 {
        budget(start, max);
        let s = gen_expr(&mut rng, 4);
        match evaluer(&s) {
            Ok(_) | Err(ErreurCalcul::DivisionParZero) => {}
            Err(e) => panic!("expression bien formée {s:?} refusée: {e}"),
        }
    }
}
