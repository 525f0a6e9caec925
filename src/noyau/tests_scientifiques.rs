//! Tests scientifiques (campagne) : propriétés observables du pipeline.
//!
//! - priorité / associativité
//! - division par zéro (explicite ou obtenue par calcul)
//! - ordre de précédence des erreurs
//! - scénario de bout en bout

use super::{evaluer, ErreurCalcul};

const EPS: f64 = 1e-9;

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < EPS,
        "expr={expr:?} valeur={v} attendu={attendu}"
    );
}

fn assert_erreur(expr: &str, attendue: ErreurCalcul) {
    assert_eq!(evaluer(expr), Err(attendue), "expr={expr:?}");
}

/* ------------------------ Priorité / associativité ------------------------ */

#[test]
fn sci_priorite() {
    assert_eq!(eval_ok("2+2*2"), 6.0);
    assert_eq!(eval_ok("2 + 2 * 2"), 6.0);
    assert_eq!(eval_ok("(2+2)*2"), 8.0);
    assert_eq!(eval_ok("2*3^2"), 18.0);
}

#[test]
fn sci_associativite_gauche() {
    // (2^3)^2, pas 2^(3^2) = 512
    assert_eq!(eval_ok("2^3^2"), 64.0);
    assert_eq!(eval_ok("10-4-3"), 3.0);
    assert_eq!(eval_ok("64/4/2"), 8.0);
    assert_eq!(eval_ok("2^(3^2)"), 512.0);
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_erreur("(2+2*2)/0", ErreurCalcul::DivisionParZero);
    assert_erreur("(2 + 2 * 2) / 0", ErreurCalcul::DivisionParZero);
    // zéro détecté APRÈS évaluation du dénominateur
    assert_erreur("(2+2*2)/(2-2)", ErreurCalcul::DivisionParZero);
    assert_erreur("1/0.0", ErreurCalcul::DivisionParZero);
}

#[test]
fn sci_zero_au_numerateur() {
    assert_eq!(eval_ok("0/5"), 0.0);
}

/* ------------------------ Espaces / vide ------------------------ */

#[test]
fn sci_insensible_aux_espaces() {
    assert_eq!(eval_ok("1 +  1 +  2 +   3"), eval_ok("1+1+2+3"));
    assert_eq!(eval_ok("1+1+2+3"), 7.0);
}

#[test]
fn sci_vide() {
    assert_erreur("", ErreurCalcul::ExpressionVide);
    assert_erreur("   ", ErreurCalcul::ExpressionVide);
    assert_erreur("\t\n", ErreurCalcul::ExpressionVide);
}

/* ------------------------ Bordures / adjacences ------------------------ */

#[test]
fn sci_operateur_en_bordure() {
    assert_erreur("+2+2", ErreurCalcul::OperateurEnBordure);
    assert_erreur("2+2*", ErreurCalcul::OperateurEnBordure);
    assert_erreur("+ 2 + 2 * 2", ErreurCalcul::OperateurEnBordure);
    assert_erreur("(+ 2) + 2 * 2", ErreurCalcul::OperateurEnBordure);
    assert_erreur("2 + 2 * 2 * ", ErreurCalcul::OperateurEnBordure);
    assert_erreur("2 + 2 * (2 *)", ErreurCalcul::OperateurEnBordure);
    assert_erreur("1+1*", ErreurCalcul::OperateurEnBordure);
}

#[test]
fn sci_operateurs_multiples() {
    assert_erreur("2 + 2 ** 2", ErreurCalcul::OperateursMultiples);
}

/* ------------------------ Précédence des erreurs ------------------------ */

#[test]
fn sci_caracteres_avant_parentheses() {
    assert_erreur("2+2_2*2", ErreurCalcul::CaracteresEnTrop);
    assert_erreur("((2+a", ErreurCalcul::CaracteresEnTrop);
    assert_erreur(")a(", ErreurCalcul::CaracteresEnTrop);
}

#[test]
fn sci_parentheses() {
    assert_erreur("2 + 2 * (2", ErreurCalcul::ParentheseNonAppariee);
    assert_erreur("((1)", ErreurCalcul::ParentheseNonAppariee);
    assert_erreur("2 + 2 ))(( * 2", ErreurCalcul::OrdreParenthesesIncorrect);
    assert_erreur("(1))(", ErreurCalcul::OrdreParenthesesIncorrect);
}

/* ------------------------ Nombres ------------------------ */

#[test]
fn sci_decimaux() {
    assert_proche("2.5+3.7", 6.2);
    assert_proche("0.1+0.2", 0.3);
    assert_proche("2 ^ 0.5", std::f64::consts::SQRT_2);
}

#[test]
fn sci_nombre_mal_forme() {
    assert_erreur("1.2.3", ErreurCalcul::NombreInvalide("1.2.3".into()));
    assert_erreur("1 + 2..", ErreurCalcul::NombreInvalide("2..".into()));
}

/* ------------------------ Juxtapositions (permissives) ------------------------ */

#[test]
fn sci_juxtaposition_sans_panique() {
    // acceptée par les validations, refusée proprement par la pile
    assert!(matches!(evaluer("(2)(3)"), Err(ErreurCalcul::Interne(_))));
    assert!(matches!(evaluer("2(3)"), Err(ErreurCalcul::Interne(_))));
    assert!(matches!(
        evaluer("15/(7-(200+1)^2)3"),
        Err(ErreurCalcul::Interne(_))
    ));
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["2+2*2", "(2+2*2)/0", "1.2.3", "2 ** 2", "", "((1", "x"] {
        let a = evaluer(expr);
        for _ in 0..3 {
            assert_eq!(evaluer(expr), a, "expr={expr:?}");
        }
    }
}

/* ------------------------ Bout en bout ------------------------ */

#[test]
fn sci_scenario_complet() {
    assert_eq!(
        eval_ok(
            "(((45+15)*2-30)/3+(25*4-50))*2+(120/4-5*(3+7))+((30-15)*3+8/4)*5+(12*(5+3)-(10/2))-(100/(4+1))+15"
        ),
        461.0
    );
}
