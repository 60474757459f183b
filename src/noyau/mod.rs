//! Noyau RPN
//!
//! Organisation interne :
//! - erreur.rs     : ExpressionError (5 cas)
//! - operateurs.rs : opérateurs + table précédence/associativité
//! - jetons.rs     : normalisation + tokenisation (moins unaire)
//! - rpn.rs        : shunting-yard + lecture RPN texte
//! - eval.rs       : pile d’évaluation + pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod operateurs;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ExpressionError;
pub use eval::{evaluate, evaluate_expression, evaluate_expression_avec, Expression};
pub use jetons::{format_tokens, normalize, tokenize, Jeton};
pub use operateurs::{Associativite, Operateur, Proprietes, TableOperateurs};
pub use rpn::{lire_postfix, to_rpn, to_rpn_avec};
