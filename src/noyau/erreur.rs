// src/noyau/erreur.rs
//
// Erreurs du pipeline (normalisation -> RPN -> évaluation).
// Toute erreur remonte tout de suite à l’appelant : pas de résultat partiel.

use thiserror::Error;

use super::operateurs::Operateur;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ExpressionError {
    /// Entrée vide, ou pile finale qui ne contient pas exactement une valeur.
    #[error("expression invalide : {0}")]
    MalformedExpression(String),

    /// Caractère hors alphabet (chiffres, '.', + - * / ^ ( )).
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    UnrecognizedCharacter { caractere: char, position: usize },

    /// Jeton ni nombre, ni opérateur connu, ni parenthèse.
    #[error("jeton non reconnu: '{0}'")]
    UnrecognizedToken(String),

    #[error("parenthèses non appariées")]
    MismatchedParentheses,

    /// Opérateur évalué sans assez d’opérandes sur la pile.
    #[error("opérandes manquants pour '{operateur}'")]
    InsufficientOperands { operateur: Operateur },
}

impl ExpressionError {
    pub(crate) fn vide() -> Self {
        Self::MalformedExpression("entrée vide".into())
    }
}
