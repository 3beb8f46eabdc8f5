//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l’état courant de la machine et relayer les activations
//! de touches. La vue ne touche jamais la machine directement : elle
//! passe par ici, et ne lit que des chaînes prêtes à afficher.
//!
//! Contrats :
//! - Aucune logique d’arithmétique ici (tout est dans le noyau).
//! - Chaque activation remplace l’état ENTIER par celui que la machine
//!   renvoie (transitions pures, pas de mutation partielle).

use crate::noyau::{self, Etat, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    etat: Etat,
}

impl AppCalc {
    /// Activation d’une touche (clic sur un bouton du pavé).
    pub fn presser(&mut self, touche: Touche) {
        self.etat = self.etat.presser(touche);
    }

    /// Texte courant de l’écran.
    pub fn affichage(&self) -> String {
        noyau::texte_affichage(&self.etat)
    }

    /// Libellé courant de la touche d’effacement ("C" ou "AC").
    pub fn libelle_effacer(&self) -> &'static str {
        noyau::libelle_effacer(&self.etat)
    }
}
