//! Noyau — évaluation (pipeline réel)
//!
//! normalize -> tokenize (moins unaire) -> RPN (shunting-yard) -> pile -> valeur
//!
//! Division par zéro : sémantique IEEE-754 (inf / NaN), pas d’erreur.

use std::fmt;
use std::str::FromStr;

use log::debug;
use num_traits::Float;

use super::erreur::ExpressionError;
use super::jetons::{format_tokens, normalize, tokenize, Jeton};
use super::operateurs::{Operateur, TableOperateurs};
use super::rpn::to_rpn_avec;

/// Évalue une RPN sur une pile de flottants.
///
/// - Nombre : empilé
/// - `~` : dépile 1, empile l’opposé
/// - binaire : dépile droite puis gauche, empile `gauche op droite`
/// - à la fin : exactement une valeur, sinon `MalformedExpression`
pub fn evaluate<T>(postfix: &[Jeton]) -> Result<T, ExpressionError>
where
    T: Float + FromStr,
{
    let mut pile: Vec<T> = Vec::with_capacity(postfix.len());

    for jeton in postfix {
        match jeton {
            Jeton::Nombre(texte) => {
                let v = texte
                    .parse::<T>()
                    .map_err(|_| ExpressionError::UnrecognizedToken(texte.clone()))?;
                pile.push(v);
            }

            Jeton::Op(Operateur::Neg) => {
                let x = pile.pop().ok_or(ExpressionError::InsufficientOperands {
                    operateur: Operateur::Neg,
                })?;
                pile.push(-x);
            }

            Jeton::Op(op) => {
                let droite = pile.pop();
                let gauche = pile.pop();
                let (Some(a), Some(b)) = (gauche, droite) else {
                    return Err(ExpressionError::InsufficientOperands { operateur: *op });
                };
                pile.push(applique_binaire(*op, a, b));
            }

            Jeton::LPar | Jeton::RPar => {
                return Err(ExpressionError::UnrecognizedToken(jeton.to_string()))
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ExpressionError::MalformedExpression(format!(
            "{} valeur(s) sur la pile au lieu d’une",
            pile.len()
        ))),
    }
}

fn applique_binaire<T: Float>(op: Operateur, a: T, b: T) -> T {
    match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => a / b,
        Operateur::Puissance => a.powf(b),
        // traité avant l’appel (arité 1)
        Operateur::Neg => -b,
    }
}

/// API publique : évalue une expression infixe (table standard, `^` associatif à droite).
pub fn evaluate_expression(expr: &str) -> Result<f64, ExpressionError> {
    evaluate_expression_avec(expr, TableOperateurs::standard())
}

/// Comme `evaluate_expression`, avec une table d’opérateurs au choix.
pub fn evaluate_expression_avec(
    expr: &str,
    table: &TableOperateurs,
) -> Result<f64, ExpressionError> {
    Expression::avec_table(expr, table).map(|e| e.valeur())
}

/// Expression évaluée : infixe normalisée + RPN + valeur, pour inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    infixe: String,
    postfixe: Vec<Jeton>,
    valeur: f64,
}

impl Expression {
    pub fn new(expr: &str) -> Result<Self, ExpressionError> {
        Self::avec_table(expr, TableOperateurs::standard())
    }

    pub fn avec_table(expr: &str, table: &TableOperateurs) -> Result<Self, ExpressionError> {
        // 1) Forme normalisée (texte)
        let infixe = normalize(expr)?;
        debug!("normalisé: {infixe}");

        // 2) Jetons (moins unaire repéré sur le flux normalisé)
        let jetons = tokenize(&infixe)?;

        // 3) RPN
        let postfixe = to_rpn_avec(&jetons, table)?;

        // 4) Pile
        let valeur = evaluate::<f64>(&postfixe)?;
        debug!("valeur: {valeur}");

        Ok(Self {
            infixe,
            postfixe,
            valeur,
        })
    }

    pub fn infixe(&self) -> &str {
        &self.infixe
    }

    pub fn postfixe(&self) -> &[Jeton] {
        &self.postfixe
    }

    /// RPN texte, négation écrite `~`.
    pub fn postfixe_texte(&self) -> String {
        format_tokens(&self.postfixe)
    }

    pub fn valeur(&self) -> f64 {
        self.valeur
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expression {{ infixe: '{}', postfixe: '{}', valeur: {} }}",
            self.infixe,
            self.postfixe_texte(),
            self.valeur
        )
    }
}
