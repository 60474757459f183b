// src/noyau/operateurs.rs
//
// Table des opérateurs : opérateur -> (précédence, associativité).
//
// Valeurs par défaut:
// - + -        : 2, gauche
// - * /        : 3, gauche
// - ~ (unaire) : 3, droite
// - ^          : 5, droite  => 2^3^2 = 2^(3^2) = 512
//
// La table standard est construite une seule fois puis lue seulement.
// Une table perso (ex: ^ associatif à gauche) se construit avec `avec(...)`.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    /// Moins unaire (négation). Distinct du moins binaire dès la tokenisation.
    Neg,
}

impl Operateur {
    pub const TOUS: [Operateur; 6] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Puissance,
        Operateur::Neg,
    ];

    /// Symbole en RPN texte. La négation s’écrit `~`.
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
            Operateur::Neg => '~',
        }
    }

    /// Inverse de `symbole`. `-` donne toujours le moins binaire :
    /// la détection de l’unaire se fait sur le flux de jetons.
    pub fn depuis_symbole(c: char) -> Option<Operateur> {
        Operateur::TOUS.into_iter().find(|op| op.symbole() == c)
    }

    /// Nombre d’opérandes consommés à l’évaluation.
    pub fn arite(self) -> usize {
        match self {
            Operateur::Neg => 1,
            _ => 2,
        }
    }

    /// Préfixe = pas d’opérande gauche (seule la négation).
    pub fn est_prefixe(self) -> bool {
        self.arite() == 1
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proprietes {
    pub precedence: u8,
    pub associativite: Associativite,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOperateurs {
    entrees: HashMap<Operateur, Proprietes>,
}

static TABLE_STANDARD: OnceLock<TableOperateurs> = OnceLock::new();

impl TableOperateurs {
    /// Table vide (aucun opérateur reconnu).
    pub fn vide() -> Self {
        Self {
            entrees: HashMap::new(),
        }
    }

    /// Table standard, partagée et immuable.
    pub fn standard() -> &'static TableOperateurs {
        TABLE_STANDARD.get_or_init(|| {
            use Associativite::*;

            TableOperateurs::vide()
                .avec(Operateur::Plus, 2, Gauche)
                .avec(Operateur::Moins, 2, Gauche)
                .avec(Operateur::Fois, 3, Gauche)
                .avec(Operateur::Divise, 3, Gauche)
                .avec(Operateur::Neg, 3, Droite)
                .avec(Operateur::Puissance, 5, Droite)
        })
    }

    /// Ajoute (ou remplace) une entrée.
    pub fn avec(mut self, op: Operateur, precedence: u8, associativite: Associativite) -> Self {
        self.entrees.insert(
            op,
            Proprietes {
                precedence,
                associativite,
            },
        );
        self
    }

    pub fn proprietes(&self, op: Operateur) -> Option<Proprietes> {
        self.entrees.get(&op).copied()
    }

    pub fn contient(&self, op: Operateur) -> bool {
        self.entrees.contains_key(&op)
    }
}

impl Default for TableOperateurs {
    fn default() -> Self {
        Self::standard().clone()
    }
}
