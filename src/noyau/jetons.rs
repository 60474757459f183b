// src/noyau/jetons.rs
//
// Normalisation + tokenisation.
//
// Étapes:
// - on retire tous les blancs ("1 2" devient le nombre 12)
// - chaque opérateur / parenthèse est entouré d’un seul espace
// - on découpe, puis on repère le moins unaire sur le flux de jetons :
//   un '-' en tête, après un opérateur ou après '(' devient `Operateur::Neg`

use std::fmt;

use super::erreur::ExpressionError;
use super::operateurs::Operateur;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Littéral décimal, gardé sous forme de texte (validé par la conversion RPN).
    Nombre(String),
    Op(Operateur),
    LPar,
    RPar,
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(texte) => f.write_str(texte),
            Jeton::Op(op) => write!(f, "{op}"),
            Jeton::LPar => f.write_str("("),
            Jeton::RPar => f.write_str(")"),
        }
    }
}

/// Opérateurs + parenthèses acceptés en entrée (infixe).
fn est_separateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

fn est_caractere_numerique(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Met l’expression sous forme “un espace entre chaque jeton”.
///
/// Exemple: `" 3--(4 *2)"` -> `"3 - - ( 4 * 2 )"`
///
/// Idempotent : normaliser une forme déjà normalisée la rend telle quelle.
pub fn normalize(entree: &str) -> Result<String, ExpressionError> {
    let mut out = String::with_capacity(entree.len() * 2);

    for (position, c) in entree.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }

        if est_separateur(c) {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            out.push(c);
            out.push(' ');
        } else if est_caractere_numerique(c) {
            out.push(c);
        } else {
            return Err(ExpressionError::UnrecognizedCharacter {
                caractere: c,
                position,
            });
        }
    }

    // séparateur final éventuel
    if out.ends_with(' ') {
        out.pop();
    }

    if out.is_empty() {
        return Err(ExpressionError::vide());
    }
    Ok(out)
}

/// Tokenize une expression infixe.
///
/// Le moins unaire est décidé APRÈS normalisation : l’adjacence se juge
/// sur les jetons, pas sur les positions des caractères bruts.
pub fn tokenize(entree: &str) -> Result<Vec<Jeton>, ExpressionError> {
    let normalise = normalize(entree)?;
    let mut out: Vec<Jeton> = Vec::new();

    for morceau in normalise.split(' ') {
        let jeton = match morceau {
            "(" => Jeton::LPar,
            ")" => Jeton::RPar,
            "-" if attend_operande(out.last()) => Jeton::Op(Operateur::Neg),
            _ => match operateur_binaire(morceau) {
                Some(op) => Jeton::Op(op),
                None => Jeton::Nombre(morceau.to_string()),
            },
        };
        out.push(jeton);
    }

    Ok(out)
}

/// Vrai si le jeton précédent laisse attendre un opérande (début, opérateur, '(').
fn attend_operande(precedent: Option<&Jeton>) -> bool {
    matches!(precedent, None | Some(Jeton::Op(_)) | Some(Jeton::LPar))
}

fn operateur_binaire(morceau: &str) -> Option<Operateur> {
    let mut chars = morceau.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Operateur::depuis_symbole(c).filter(|op| !op.est_prefixe())
}

/// Littéral décimal bien formé : chiffres, au plus un '.', au moins un chiffre.
pub fn est_litteral_numerique(texte: &str) -> bool {
    let mut chiffres = 0usize;
    let mut points = 0usize;
    for c in texte.chars() {
        match c {
            '0'..='9' => chiffres += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    chiffres > 0 && points <= 1
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
/// La négation apparaît comme `~`.
pub fn format_tokens(jetons: &[Jeton]) -> String {
    let mut out = String::new();
    for (i, j) in jetons.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&j.to_string());
    }
    out
}
