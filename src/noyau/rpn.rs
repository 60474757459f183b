// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Jeton (infixe) en RPN (postfix), sans parenthèses
// - Relire une RPN texte ("3 4 ~ -")
//
// Règles:
// - Le dépilage est piloté par la table (précédence + associativité) :
//   on sort le sommet tant que p_sommet > p_op, ou p_sommet == p_op et op associatif à gauche.
// - Un opérateur préfixe (négation) ne dépile rien en arrivant : il n’a pas
//   encore d’opérande gauche. Sinon "2^-1" sortirait '^' avant son exposant.

use log::{debug, trace};

use super::erreur::ExpressionError;
use super::jetons::{est_litteral_numerique, format_tokens, Jeton};
use super::operateurs::{Associativite, Operateur, Proprietes, TableOperateurs};

fn proprietes(table: &TableOperateurs, op: Operateur) -> Result<Proprietes, ExpressionError> {
    table
        .proprietes(op)
        .ok_or_else(|| ExpressionError::UnrecognizedToken(op.to_string()))
}

/// Convertit une suite de jetons en RPN avec la table standard.
///
/// Exemple:
///   jetons: [Nombre("2"), Op(Plus), Nombre("3"), Op(Fois), Nombre("4")]
///   rpn:    [Nombre("2"), Nombre("3"), Nombre("4"), Op(Fois), Op(Plus)]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ExpressionError> {
    to_rpn_avec(jetons, TableOperateurs::standard())
}

/// Comme `to_rpn`, avec une table d’opérateurs fournie par l’appelant.
pub fn to_rpn_avec(
    jetons: &[Jeton],
    table: &TableOperateurs,
) -> Result<Vec<Jeton>, ExpressionError> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    // pile d’opérateurs : seulement Op(_) et LPar
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons {
        match jeton {
            Jeton::Nombre(texte) => {
                if !est_litteral_numerique(texte) {
                    return Err(ExpressionError::UnrecognizedToken(texte.clone()));
                }
                out.push(jeton.clone());
            }

            Jeton::LPar => ops.push(Jeton::LPar),

            Jeton::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Jeton::LPar) => break,
                        Some(top) => {
                            trace!("')' : sortie de {top}");
                            out.push(top);
                        }
                        None => return Err(ExpressionError::MismatchedParentheses),
                    }
                }
            }

            Jeton::Op(op) => {
                let p_op = proprietes(table, *op)?;

                if !op.est_prefixe() {
                    while let Some(&Jeton::Op(top)) = ops.last() {
                        let p_top = proprietes(table, top)?;

                        let doit_pop = p_top.precedence > p_op.precedence
                            || (p_top.precedence == p_op.precedence
                                && p_op.associativite == Associativite::Gauche);

                        if !doit_pop {
                            break;
                        }
                        trace!("'{op}' : sortie de {top}");
                        ops.pop();
                        out.push(Jeton::Op(top));
                    }
                }

                ops.push(Jeton::Op(*op));
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if top == Jeton::LPar {
            return Err(ExpressionError::MismatchedParentheses);
        }
        out.push(top);
    }

    debug!("rpn: {}", format_tokens(&out));
    Ok(out)
}

/// Relit une RPN texte, jetons séparés par des blancs (format de `format_tokens`).
///
/// - `~` : négation
/// - `+ - * / ^` : opérateurs binaires
/// - parenthèses interdites (une RPN n’en a pas)
pub fn lire_postfix(texte: &str) -> Result<Vec<Jeton>, ExpressionError> {
    let mut out = Vec::new();

    for morceau in texte.split_whitespace() {
        let mut chars = morceau.chars();
        let op = match (chars.next(), chars.next()) {
            (Some(c), None) => Operateur::depuis_symbole(c),
            _ => None,
        };

        let jeton = match op {
            Some(op) => Jeton::Op(op),
            None if est_litteral_numerique(morceau) => Jeton::Nombre(morceau.to_string()),
            None => return Err(ExpressionError::UnrecognizedToken(morceau.to_string())),
        };
        out.push(jeton);
    }

    if out.is_empty() {
        return Err(ExpressionError::vide());
    }
    Ok(out)
}
