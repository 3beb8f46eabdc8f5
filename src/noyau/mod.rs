//! Noyau de la calculatrice de bureau
//!
//! Organisation interne :
//! - touches.rs   : identifiants logiques (touches + opérateurs) + ordre du pavé
//! - machine.rs   : machine à états pure (état, transition) + évaluateur binaire
//! - affichage.rs : texte de l’écran + libellé C/AC
//!
//! Le noyau ne connaît NI egui NI les glyphes des boutons : il consomme
//! des touches logiques et expose des chaînes.

pub mod affichage;
pub mod machine;
pub mod touches;


#[cfg(test)]
mod tests_scenarios;

// API publique minimale
pub use affichage::{libelle_effacer, texte_affichage};
pub use machine::Etat;
pub use touches::{libelle, Operateur, Touche, ORDRE_TOUCHES};
