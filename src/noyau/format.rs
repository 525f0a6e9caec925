// src/noyau/format.rs

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const CHIFFRES_MAX: usize = 17;

/// Affichage d’un résultat f64 : notation fixe, au plus `digits` décimales,
/// zéros finaux (et point final) retirés.
///
/// Exemples : 6.2000 -> "6.2", 64.0 -> "64", -0.0 -> "0", ∞ -> "inf".
pub fn format_resultat(valeur: f64, digits: usize) -> String {
    if !valeur.is_finite() {
        // "inf", "-inf", "NaN"
        return format!("{valeur}");
    }

    let digits = digits.min(CHIFFRES_MAX);
    let mut s = format!("{valeur:.digits$}");

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // "-0" (ex: -0.0001 arrondi à 0 décimale) n’a pas de sens à l’écran
    if s.trim_start_matches('-').chars().all(|c| c == '0') {
        return "0".to_string();
    }

    s
}
