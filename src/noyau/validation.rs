// src/noyau/validation.rs
//
// Validation “caractères” de l’expression brute, AVANT tokenisation.
// Ordre imposé :
// 1) classe de caractères (CaracteresEnTrop prime sur les parenthèses)
// 2) balance des parenthèses (OrdreParenthesesIncorrect dès qu’elle devient négative,
//    ParentheseNonAppariee si elle n’est pas nulle à la fin)
//
// Une chaîne vide est valide ici : le vide est détecté au niveau des jetons.

use super::erreurs::ErreurCalcul;

/// Opérateurs binaires + parenthèses acceptés.
const SYMBOLES: &str = "+-*/^()";

fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c.is_ascii_whitespace() || SYMBOLES.contains(c)
}

/// Valide une expression brute (espaces compris).
pub fn valider_expression(expression: &str) -> Result<(), ErreurCalcul> {
    if !expression.chars().all(est_autorise) {
        return Err(ErreurCalcul::CaracteresEnTrop);
    }

    let mut balance: usize = 0;
    for c in expression.chars() {
        match c {
            '(' => balance += 1,
            ')' => {
                // ')' sans '(' ouverte avant elle
                balance = balance
                    .checked_sub(1)
                    .ok_or(ErreurCalcul::OrdreParenthesesIncorrect)?;
            }
            _ => {}
        }
    }

    if balance != 0 {
        return Err(ErreurCalcul::ParentheseNonAppariee);
    }
    Ok(())
}
