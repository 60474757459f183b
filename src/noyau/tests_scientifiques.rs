//! Tests scientifiques (campagne) : propriétés du pipeline complet.
//!
//! - précédence, parenthèses, moins unaire
//! - associativité de ^ (droite par défaut, gauche via table perso)
//! - erreurs : chaque cas remonte le bon variant
//! - fidélité numérique (pas de division entière)

use super::operateurs::{Associativite, Operateur, TableOperateurs};
use super::{evaluate_expression, evaluate_expression_avec, normalize, ExpressionError};

fn eval_ok(expr: &str) -> f64 {
    evaluate_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_valeur(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= 1e-12 * attendu.abs().max(1.0),
        "expr={expr:?} valeur={v} attendu={attendu}"
    );
}

fn assert_erreur(expr: &str, attendu: ExpressionError) {
    assert_eq!(evaluate_expression(expr), Err(attendu), "expr={expr:?}");
}

/* ------------------------ Précédence + parenthèses ------------------------ */

#[test]
fn sci_precedence() {
    assert_valeur("2+3*4", 14.0);
    assert_valeur("(2+3)*4", 20.0);
    assert_valeur("2*3+4", 10.0);
    assert_valeur("10-4-3", 3.0);
    assert_valeur("64/4/2", 8.0);
    assert_valeur("2+3^2*2", 20.0);
}

#[test]
fn sci_parentheses_invariance() {
    assert_eq!(eval_ok("(((1+2)))"), eval_ok("1+2"));
    assert_eq!(eval_ok("((2))*((3))"), 6.0);
    assert_eq!(eval_ok("(1+(2*(3+(4))))"), 15.0);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_valeur("-3+4", 1.0);
    assert_valeur("3-(-4)", 7.0);
    assert_valeur("3--4", 7.0);
    assert_valeur("--5", 5.0);
    assert_valeur("-(2+3)*2", -10.0);
    assert_valeur("2*-3", -6.0);
    assert_valeur("-2^2", -4.0);
    assert_valeur("2^-1", 0.5);
    assert_valeur("(-2)^2", 4.0);
}

/* ------------------------ Associativité de ^ ------------------------ */

#[test]
fn sci_puissance_droite_par_defaut() {
    assert_valeur("2^3^2", 512.0);
    assert_valeur("2^2^3", 256.0);
}

#[test]
fn sci_puissance_gauche_sur_demande() {
    let table = TableOperateurs::default().avec(Operateur::Puissance, 5, Associativite::Gauche);
    assert_eq!(evaluate_expression_avec("2^3^2", &table), Ok(64.0));
    // le reste ne bouge pas
    assert_eq!(evaluate_expression_avec("2+3*4", &table), Ok(14.0));
}

/* ------------------------ Fidélité numérique ------------------------ */

#[test]
fn sci_division_non_tronquee() {
    assert_valeur("10/4", 2.5);
    assert_valeur("1/3*3", 1.0);
    assert_valeur(".5+1.25", 1.75);
    assert_valeur("2^0.5", std::f64::consts::SQRT_2);
}

#[test]
fn sci_division_par_zero_ieee() {
    assert_eq!(evaluate_expression("1/0"), Ok(f64::INFINITY));
    assert_eq!(evaluate_expression("-1/0"), Ok(f64::NEG_INFINITY));
    assert!(eval_ok("0/0").is_nan());
}

/* ------------------------ Normalisation ------------------------ */

#[test]
fn sci_normalisation_idempotente() {
    for e in ["1+2*3", " ( 4 ) ^ - 2", "3--4", "7", "((1.5))/-.5"] {
        let une = normalize(e).unwrap();
        let deux = normalize(&une).unwrap();
        assert_eq!(une, deux, "e={e:?}");
        assert_eq!(eval_ok(e), eval_ok(&une), "e={e:?}");
    }
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs() {
    assert!(matches!(
        evaluate_expression(""),
        Err(ExpressionError::MalformedExpression(_))
    ));
    assert!(matches!(
        evaluate_expression("   "),
        Err(ExpressionError::MalformedExpression(_))
    ));
    assert_erreur("(1+2", ExpressionError::MismatchedParentheses);
    assert_erreur("1+2)", ExpressionError::MismatchedParentheses);
    assert_erreur(
        "1+@2",
        ExpressionError::UnrecognizedCharacter {
            caractere: '@',
            position: 2,
        },
    );
    assert_erreur(
        "+1",
        ExpressionError::InsufficientOperands {
            operateur: Operateur::Plus,
        },
    );
    assert_erreur(
        "2*",
        ExpressionError::InsufficientOperands {
            operateur: Operateur::Fois,
        },
    );
    assert_erreur("1.2.3", ExpressionError::UnrecognizedToken("1.2.3".into()));
}

#[test]
fn sci_pile_finale_invalide() {
    for e in ["()", "(1)(2)", "(())"] {
        assert!(
            matches!(
                evaluate_expression(e),
                Err(ExpressionError::MalformedExpression(_))
            ),
            "e={e:?}"
        );
    }
}

#[test]
fn sci_messages_lisibles() {
    let e = evaluate_expression("(1").unwrap_err();
    assert_eq!(e.to_string(), "parenthèses non appariées");

    let e = evaluate_expression("1 # 2").unwrap_err();
    assert!(e.to_string().contains("'#'"), "{e}");
}
