//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche,
//! réglage d’associativité de ^) et offrir des opérations simples (C/CLR/AC).
//! Aucune évaluation ici : vue.rs appelle le noyau.

use calculatrice_rpn::{Associativite, Operateur, TableOperateurs};

/// Précédence de ^ dans la table standard (seule l’associativité est réglable).
const PRECEDENCE_PUISSANCE: u8 = 5;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub infixe: String,
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    /// true : 2^3^2 = 2^(3^2) ; false : (2^3)^2
    pub puissance_droite: bool,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            puissance_droite: true,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.puissance_droite = true;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// On garde le dernier résultat affiché, mais la démarche n’a plus de sens.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Table d’opérateurs selon le réglage courant.
    pub fn table(&self) -> TableOperateurs {
        let associativite = if self.puissance_droite {
            Associativite::Droite
        } else {
            Associativite::Gauche
        };
        TableOperateurs::default().avec(Operateur::Puissance, PRECEDENCE_PUISSANCE, associativite)
    }
}
