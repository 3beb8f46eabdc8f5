// src/noyau/affichage.rs
//
// Formatage de l’écran : fonction PURE de l’état, recalculée à chaque
// rendu, aucun état propre.

use super::machine::{est_significatif, Etat};

/// Texte de l’écran :
/// - saisie en cours si présente (y compris les formes partielles "0.", "3.")
/// - sinon l’accumulateur s’il est significatif (forme Display de f64 :
///   "7" pour 7.0, "inf"/"NaN" pour les valeurs spéciales IEEE)
/// - sinon "0"
pub fn texte_affichage(etat: &Etat) -> String {
    if let Some(s) = &etat.saisie {
        s.clone()
    } else if est_significatif(etat.accumulateur) {
        etat.accumulateur.to_string()
    } else {
        "0".to_string()
    }
}

/// Libellé de la touche d’effacement :
/// - "C"  (annuler la saisie) quand une saisie est en cours
/// - "AC" (remise à zéro) sinon
pub fn libelle_effacer(etat: &Etat) -> &'static str {
    if etat.saisie.is_some() {
        "C"
    } else {
        "AC"
    }
}
