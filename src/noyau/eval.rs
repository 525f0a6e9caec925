//! Noyau — évaluation (pipeline réel)
//!
//! validation caractères -> retrait des espaces -> jetons -> validation jetons
//!        -> RPN (shunting-yard) -> pile f64
//!
//! Aucun état partagé : chaque appel construit et jette ses propres jetons et piles.

use tracing::debug;

use super::erreurs::ErreurCalcul;
use super::jetons::{format_tokens, retirer_espaces, tokenize};
use super::rpn::{eval_rpn, to_rpn};
use super::sequence::valider_jetons;
use super::validation::valider_expression;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

/// API publique : évalue une expression et retourne sa valeur.
pub fn evaluer(expression: &str) -> Result<f64, ErreurCalcul> {
    evaluer_avec_demarche(expression).map(|(valeur, _d)| valeur)
}

/// Comme `evaluer`, mais retourne aussi la démarche (jetons + RPN).
pub fn evaluer_avec_demarche(expression: &str) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    // 1) Caractères + parenthèses
    valider_expression(expression).inspect_err(|e| debug!(erreur = ?e, "validation"))?;

    // 2) Jetons
    let propre = retirer_espaces(expression);
    let jetons = tokenize(&propre);
    let jetons_txt = format_tokens(&jetons);
    debug!(jetons = %jetons_txt, "tokenisation");

    // 3) Adjacence des jetons
    valider_jetons(&jetons).inspect_err(|e| debug!(erreur = ?e, "validation jetons"))?;

    // 4) RPN
    let rpn = to_rpn(&jetons);
    let rpn_txt = format_tokens(&rpn);
    debug!(rpn = %rpn_txt, "postfixe");

    // 5) Pile
    let valeur = eval_rpn(&rpn)?;
    debug!(valeur, "résultat");

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
        note: "Pipeline: validation → jetons → validation jetons → RPN → pile.".into(),
    };

    Ok((valeur, d))
}
