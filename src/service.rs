// src/service.rs
//
// Contrat JSON du service de calcul (transport non fourni ici).
//
// Requête : {"expression": "..."}
// Succès  : 200 {"result": <nombre>}
// Erreur  : 4xx/5xx {"error": "..."}
//
// Le noyau ne connaît PAS les statuts : la correspondance erreur -> statut vit ici.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::noyau::{evaluer, ErreurCalcul};

pub const STATUT_OK: u16 = 200;
pub const STATUT_REQUETE_INVALIDE: u16 = 400;
pub const STATUT_EXPRESSION_INVALIDE: u16 = 422;
pub const STATUT_INTERNE: u16 = 500;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Requete {
    pub expression: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Resultat {
    pub result: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ErreurHttp {
    pub error: String,
}

/// Réponse prête à envoyer : statut + corps JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct Reponse {
    pub statut: u16,
    pub corps: String,
}

#[derive(Debug, Error)]
pub enum ErreurService {
    #[error("corps de requête invalide: {0}")]
    CorpsInvalide(#[from] serde_json::Error),
}

/// Correspondance erreur du noyau -> (statut, message public).
pub fn statut_et_message(erreur: &ErreurCalcul) -> (u16, &'static str) {
    use ErreurCalcul::*;

    let message = match erreur {
        CaracteresEnTrop => "Expression has extra characters",
        ParentheseNonAppariee => "Expression has unpaired brackets",
        OrdreParenthesesIncorrect => "Expression has wrong bracket order",
        OperateursMultiples => "Expression has multiple operands",
        NombresMultiples => "Expression has multiple numbers",
        OperateurEnBordure => "Expression has operand at the beginning or at the end",
        ExpressionVide => "Expression is empty",
        DivisionParZero => "Expression has zero by division",
        NombreInvalide(_) => "Expression has invalid number",
        Interne(_) => return (STATUT_INTERNE, "Internal server error"),
    };
    (STATUT_EXPRESSION_INVALIDE, message)
}

pub fn decoder_requete(corps: &str) -> Result<Requete, ErreurService> {
    Ok(serde_json::from_str(corps)?)
}

/// Traite un corps de requête complet et produit la réponse.
pub fn traiter(corps: &str) -> Reponse {
    let requete = match decoder_requete(corps) {
        Ok(r) => r,
        Err(e) => {
            info!(erreur = %e, "requête rejetée");
            return reponse_erreur(STATUT_REQUETE_INVALIDE, "Provided data is invalid");
        }
    };

    match evaluer(&requete.expression) {
        // JSON ne sait pas représenter inf / NaN
        Ok(result) if !result.is_finite() => {
            warn!(expression = %requete.expression, result, "résultat non représentable");
            reponse_erreur(STATUT_INTERNE, "Internal server error")
        }
        Ok(result) => {
            info!(expression = %requete.expression, result, "calcul");
            encoder(STATUT_OK, &Resultat { result })
        }
        Err(e) => {
            let (statut, message) = statut_et_message(&e);
            info!(expression = %requete.expression, erreur = %e, statut, "calcul refusé");
            reponse_erreur(statut, message)
        }
    }
}

fn reponse_erreur(statut: u16, message: &str) -> Reponse {
    encoder(
        statut,
        &ErreurHttp {
            error: message.to_string(),
        },
    )
}

fn encoder<T: Serialize>(statut: u16, corps: &T) -> Reponse {
    match serde_json::to_string(corps) {
        Ok(corps) => Reponse { statut, corps },
        Err(e) => {
            warn!(erreur = %e, "encodage JSON impossible");
            Reponse {
                statut: STATUT_INTERNE,
                corps: r#"{"error":"Internal server error"}"#.to_string(),
            }
        }
    }
}
