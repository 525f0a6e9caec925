// src/noyau/erreurs.rs
//
// Taxonomie fermée des erreurs du noyau.
// Chaque étape du pipeline renvoie la PREMIÈRE erreur rencontrée (ordre fixe),
// jamais une agrégation.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Caractère hors de [0-9 . + - * / ^ ( ) espaces].
    #[error("caractères non autorisés dans l’expression")]
    CaracteresEnTrop,

    /// Plus de '(' que de ')' en fin de lecture.
    #[error("parenthèses non appariées")]
    ParentheseNonAppariee,

    /// Une ')' arrive avant sa '(' (balance négative).
    #[error("ordre des parenthèses incorrect")]
    OrdreParenthesesIncorrect,

    /// Deux opérateurs consécutifs (ex: "2 ** 2").
    #[error("opérateurs consécutifs")]
    OperateursMultiples,

    /// Deux nombres consécutifs.
    #[error("nombres consécutifs")]
    NombresMultiples,

    /// Opérateur en début/fin d’expression ou de sous-expression.
    #[error("opérateur au début ou à la fin de l’expression")]
    OperateurEnBordure,

    #[error("Entrée vide")]
    ExpressionVide,

    #[error("division par zéro")]
    DivisionParZero,

    /// Texte numérique mal formé (ex: "1.2.3").
    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    /// Incohérence de pile à l’évaluation (chemin défensif).
    #[error("expression incohérente: {0}")]
    Interne(String),
}

impl ErreurCalcul {
    /// Vrai pour les erreurs de validation “utilisateur” (tout sauf `Interne`).
    pub fn est_validation(&self) -> bool {
        !matches!(self, Self::Interne(_))
    }
}
