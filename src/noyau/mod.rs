//! Noyau ordinaire (f64)
//!
//! Organisation interne :
//! - erreurs.rs    : taxonomie fermée des erreurs
//! - validation.rs : caractères autorisés + balance des parenthèses
//! - jetons.rs     : retrait des espaces + tokenisation
//! - sequence.rs   : validation de la suite de jetons (adjacences)
//! - rpn.rs        : shunting-yard + réduction de la RPN
//! - format.rs     : affichage d’un résultat (décimales)
//! - eval.rs       : pipeline complet

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod sequence;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalcul;
pub use eval::{evaluer, evaluer_avec_demarche};
pub use format::format_resultat;
