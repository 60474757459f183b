//! Calculatrice RPN
//!
//! Évalue une expression infixe (`+ - * / ^`, parenthèses, moins unaire)
//! en passant par sa forme postfixe (notation polonaise inversée).
//!
//! ```
//! use calculatrice_rpn::evaluate_expression;
//!
//! assert_eq!(evaluate_expression("(2+3)*4"), Ok(20.0));
//! assert_eq!(evaluate_expression("2^3^2"), Ok(512.0));
//! ```

pub mod noyau;

pub use noyau::{
    evaluate, evaluate_expression, evaluate_expression_avec, format_tokens, lire_postfix,
    normalize, to_rpn, to_rpn_avec, tokenize, Associativite, Expression, ExpressionError, Jeton,
    Operateur, Proprietes, TableOperateurs,
};
