// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok (déjà validée) en RPN (postfix)
// - Puis réduire la RPN avec une pile d’opérandes
//
// Règles:
// - tous les opérateurs sont associatifs à GAUCHE, '^' compris : 2^3^2 = (2^3)^2
// - ')' sans '(' sur la pile : on ignore (inatteignable après validation)

use num_traits::{Pow, Zero};
use tracing::{trace, warn};

use super::erreurs::ErreurCalcul;
use super::jetons::{Op, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Op(+), Num(2), Op(*), Num(2)]
///   rpn:    [Num(2), Num(2), Num(2), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' (qui est jetée)
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    out.push(top);
                }
            }

            Tok::Op(op) => {
                while let Some(Tok::Op(top)) = ops.last() {
                    if top.rang() < op.rang() {
                        break;
                    }
                    out.push(Tok::Op(*top));
                    ops.pop();
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops (LIFO)
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    out
}

/// Réduit une RPN en une seule valeur.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len() / 2 + 1);

    for tok in rpn {
        match tok {
            Tok::Num(texte) => {
                let v: f64 = texte
                    .parse()
                    .map_err(|_| ErreurCalcul::NombreInvalide(texte.clone()))?;
                st.push(v);
            }

            Tok::Op(op) => {
                let b = st.pop().ok_or_else(|| operande_manquante(*op))?;
                let a = st.pop().ok_or_else(|| operande_manquante(*op))?;
                let r = applique(*op, a, b)?;
                trace!(a, b, op = %op.symbole(), r, "réduction");
                st.push(r);
            }

            Tok::LPar | Tok::RPar => {
                warn!("parenthèse inattendue en RPN");
                return Err(ErreurCalcul::Interne("parenthèse inattendue en RPN".into()));
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => {
            warn!(restants = st.len(), "pile incohérente en fin d’évaluation");
            Err(ErreurCalcul::Interne(format!(
                "{} valeur(s) sur la pile au lieu d’une",
                st.len()
            )))
        }
    }
}

fn applique(op: Op, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    let r = match op {
        Op::Plus => a + b,
        Op::Moins => a - b,
        Op::Fois => a * b,
        Op::Divise => {
            if b.is_zero() {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Op::Puissance => Pow::pow(a, b),
    };
    Ok(r)
}

fn operande_manquante(op: Op) -> ErreurCalcul {
    warn!(op = %op.symbole(), "opérande manquante");
    ErreurCalcul::Interne(format!("opérande manquante pour '{}'", op.symbole()))
}
