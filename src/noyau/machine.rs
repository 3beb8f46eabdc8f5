//! src/noyau/machine.rs
//!
//! Machine à états de la calculatrice (sans vue, sans egui).
//!
//! Rôle : interpréter une touche logique et produire le nouvel état.
//!
//! Contrats :
//! - Transitions PURES : `(état, touche) -> état`, aucun champ muté,
//!   aucun effet de bord. La vue remplace simplement son état courant.
//! - Totalité : aucune transition n’échoue. Les cas numériques limites
//!   (division par zéro, etc.) suivent IEEE 754 (inf/NaN) et s’affichent
//!   tels quels — pas d’erreur, pas de dialogue.
//! - La saisie ne contient JAMAIS autre chose que des chiffres ASCII et
//!   au plus un point (discipline imposée par `chiffre`/`point`).

use super::touches::{Operateur, Touche};

/// État complet de la machine.
///
/// - `accumulateur` : total courant, porté d’une opération à l’autre.
///   Démarre à 0.0 et n’est jamais “absent” ensuite : les gardes testent
///   `est_significatif` (voir plus bas).
/// - `saisie` : nombre en cours de frappe, pas encore engagé.
/// - `operateur` : opérateur binaire en attente de son second opérande.
#[derive(Clone, Debug, PartialEq)]
pub struct Etat {
    pub accumulateur: f64,
    pub saisie: Option<String>,
    pub operateur: Option<Operateur>,
}

impl Default for Etat {
    fn default() -> Self {
        Self {
            accumulateur: 0.0,
            saisie: None,
            operateur: None,
        }
    }
}

/// Garde “significatif” : vrai si l’accumulateur vaut quelque chose.
///
/// ATTENTION (comportement voulu, ne pas “corriger”) : zéro est traité
/// comme “rien”, exactement comme NaN. Conséquence observable : après
/// `5 − 5 =`, un appui sur ± est un non-événement (pas de −0), et un
/// enchaînement d’opérateur repart du cas “engager la saisie”.
pub(crate) fn est_significatif(a: f64) -> bool {
    a != 0.0 && !a.is_nan()
}

/// Valeur numérique d’une saisie.
///
/// La discipline `chiffre`/`point` garantit un littéral f64 valide
/// (chiffres + au plus un point) ; le repli 0.0 est inatteignable.
fn valeur(saisie: &str) -> f64 {
    saisie.parse().unwrap_or(0.0)
}

/// Évaluateur binaire : `accumulateur (op) saisie`.
///
/// Division par zéro : résultat IEEE (inf / NaN), jamais une erreur.
pub fn appliquer(accumulateur: f64, saisie: &str, operateur: Operateur) -> f64 {
    let v = valeur(saisie);
    match operateur {
        Operateur::Division => accumulateur / v,
        Operateur::Multiplication => accumulateur * v,
        Operateur::Soustraction => accumulateur - v,
        Operateur::Addition => accumulateur + v,
    }
}

impl Etat {
    /* ------------------------ Dispatch ------------------------ */

    /// Transition unique : une touche, un nouvel état.
    pub fn presser(&self, touche: Touche) -> Etat {
        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Point => self.point(),
            Touche::Effacer => self.effacer(),
            Touche::Signe => self.signe(),
            Touche::Pourcent => self.pourcent(),
            Touche::Op(op) => self.choisir_operateur(op),
            Touche::Egal => self.executer(),
        }
    }

    /* ------------------------ Frappe (saisie) ------------------------ */

    /// Chiffre : ajoute à la saisie en cours, ou la démarre.
    ///
    /// Un "0" seul depuis l’état vide est un non-événement
    /// (suppression du zéro de tête).
    fn chiffre(&self, d: u8) -> Etat {
        debug_assert!(d <= 9, "chiffre hors pavé: {d}");

        match &self.saisie {
            Some(s) => {
                let mut s = s.clone();
                s.push(char::from(b'0' + d));
                Etat {
                    saisie: Some(s),
                    ..self.clone()
                }
            }
            None if d != 0 => Etat {
                saisie: Some(d.to_string()),
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// Point décimal : démarre "0." si rien n’est saisi ; sinon ajoute
    /// le point, sauf s’il y en a déjà un (idempotent).
    fn point(&self) -> Etat {
        match &self.saisie {
            None => Etat {
                saisie: Some("0.".to_string()),
                ..self.clone()
            },
            Some(s) if !s.contains('.') => {
                let mut s = s.clone();
                s.push('.');
                Etat {
                    saisie: Some(s),
                    ..self.clone()
                }
            }
            Some(_) => self.clone(),
        }
    }

    /* ------------------------ Effacement ------------------------ */

    /// C / AC selon l’état :
    /// - saisie présente  => "C"  : annule la saisie + l’opérateur,
    ///   l’accumulateur reste intact.
    /// - saisie absente   => "AC" : accumulateur remis à 0 + opérateur
    ///   effacé.
    fn effacer(&self) -> Etat {
        if self.saisie.is_some() {
            Etat {
                saisie: None,
                operateur: None,
                ..self.clone()
            }
        } else {
            Etat {
                accumulateur: 0.0,
                operateur: None,
                ..self.clone()
            }
        }
    }

    /* ------------------------ Unaires (± et %) ------------------------ */

    /// Opérande effectif des unaires : la saisie si présente, sinon
    /// l’accumulateur.
    fn operande_unaire(&self) -> Option<f64> {
        if let Some(s) = &self.saisie {
            Some(valeur(s))
        } else if est_significatif(self.accumulateur) {
            Some(self.accumulateur)
        } else {
            None
        }
    }

    /// ± : dépose l’opposé de l’opérande dans l’accumulateur, saisie
    /// effacée. Non-événement si tout est vide (voir `est_significatif`).
    fn signe(&self) -> Etat {
        match self.operande_unaire() {
            Some(v) => Etat {
                accumulateur: -v,
                saisie: None,
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// % : opérande divisé par 100, même règle d’opérande que ±.
    fn pourcent(&self) -> Etat {
        match self.operande_unaire() {
            Some(v) => Etat {
                accumulateur: v / 100.0,
                saisie: None,
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /* ------------------------ Opérateurs binaires ------------------------ */

    /// Choix d’opérateur, trois cas DANS CET ORDRE :
    /// 1. accumulateur significatif + saisie + opérateur en attente :
    ///    on applique l’opérateur en attente (enchaînement : `3 + 4 ×`
    ///    calcule 7 puis attend la multiplication), puis on arme `op`.
    /// 2. saisie seule : on l’engage dans l’accumulateur, puis on arme `op`.
    /// 3. sinon : on (ré)arme `op` — l’opérateur peut être changé tant
    ///    que le second opérande n’est pas tapé.
    fn choisir_operateur(&self, op: Operateur) -> Etat {
        match (&self.saisie, self.operateur) {
            (Some(s), Some(en_attente)) if est_significatif(self.accumulateur) => Etat {
                accumulateur: appliquer(self.accumulateur, s, en_attente),
                saisie: None,
                operateur: Some(op),
            },
            (Some(s), _) => Etat {
                accumulateur: valeur(s),
                saisie: None,
                operateur: Some(op),
            },
            _ => Etat {
                operateur: Some(op),
                ..self.clone()
            },
        }
    }

    /// = : mêmes deux premiers cas que `choisir_operateur`, mais
    /// l’opérateur est EFFACÉ au lieu d’être réarmé (évaluation
    /// terminale). À défaut, on efface seulement l’opérateur.
    fn executer(&self) -> Etat {
        match (&self.saisie, self.operateur) {
            (Some(s), Some(en_attente)) if est_significatif(self.accumulateur) => Etat {
                accumulateur: appliquer(self.accumulateur, s, en_attente),
                saisie: None,
                operateur: None,
            },
            (Some(s), _) => Etat {
                accumulateur: valeur(s),
                saisie: None,
                operateur: None,
            },
            _ => Etat {
                operateur: None,
                ..self.clone()
            },
        }
    }
}
