// src/noyau/sequence.rs
//
// Validation de la suite de jetons (ce que la validation caractère ne voit pas).
//
// Ordre des contrôles (première violation retournée) :
// 1) suite vide                         => ExpressionVide
// 2) opérateur en premier/dernier jeton => OperateurEnBordure
// 3) paires adjacentes, dans l’ordre :
//    - op op                            => OperateursMultiples
//    - nombre nombre                    => NombresMultiples
//    - "(" op  ou  op ")"               => OperateurEnBordure (bord de sous-expression)
//    - "(" ")"                          => ExpressionVide (sous-expression vide)
//
// Les juxtapositions ")(", "2(", ")2" restent permises ici.

use super::erreurs::ErreurCalcul;
use super::jetons::Tok;

pub fn valider_jetons(tokens: &[Tok]) -> Result<(), ErreurCalcul> {
    let (Some(premier), Some(dernier)) = (tokens.first(), tokens.last()) else {
        return Err(ErreurCalcul::ExpressionVide);
    };

    if premier.est_operateur() || dernier.est_operateur() {
        return Err(ErreurCalcul::OperateurEnBordure);
    }

    for paire in tokens.windows(2) {
        let (a, b) = (&paire[0], &paire[1]);

        if a.est_operateur() && b.est_operateur() {
            return Err(ErreurCalcul::OperateursMultiples);
        }
        if a.est_nombre() && b.est_nombre() {
            return Err(ErreurCalcul::NombresMultiples);
        }

        match (a, b) {
            (Tok::LPar, Tok::Op(_)) | (Tok::Op(_), Tok::RPar) => {
                return Err(ErreurCalcul::OperateurEnBordure)
            }
            (Tok::LPar, Tok::RPar) => return Err(ErreurCalcul::ExpressionVide),
            _ => {}
        }
    }

    Ok(())
}
