//! Tests scénarios (campagne) : séquences complètes de touches,
//! comme un utilisateur au clavier… de souris.
//!
//! But : vérifier les enchaînements (opérateur en attente appliqué au
//! vol), les effacements en cours de calcul, et le comportement CONSERVÉ
//! de la garde “zéro = rien” :
//! - après `5 − 5 =`, un ± est un non-événement (pas de −0)
//! - un enchaînement qui repart d’un accumulateur nul passe par le cas
//!   “engager la saisie” (donc `0 + 3 =` donne 3, pas une application)
//! - NaN est lui aussi “rien” pour l’écran (inf × 0 affiche "0")

use super::affichage::texte_affichage;
use super::machine::Etat;
use super::touches::{Operateur, Touche};

fn scenario(touches: &[Touche]) -> Etat {
    touches.iter().fold(Etat::default(), |etat, t| etat.presser(*t))
}

const PLUS: Touche = Touche::Op(Operateur::Addition);
const MOINS: Touche = Touche::Op(Operateur::Soustraction);
const FOIS: Touche = Touche::Op(Operateur::Multiplication);
const DIV: Touche = Touche::Op(Operateur::Division);

/* ------------------------ Enchaînements ------------------------ */

#[test]
fn scenario_enchainement_sans_precedence() {
    // 3 + 4 × 2 = : le + s’applique AU MOMENT du ×, donc (3+4)*2 = 14
    // (pas de précédence : c’est une calculatrice de bureau)
    let etat = scenario(&[
        Touche::Chiffre(3),
        PLUS,
        Touche::Chiffre(4),
        FOIS,
        Touche::Chiffre(2),
        Touche::Egal,
    ]);
    assert_eq!(etat.accumulateur, 14.0);
    assert!(etat.saisie.is_none());
    assert!(etat.operateur.is_none());
    assert_eq!(texte_affichage(&etat), "14");
}

#[test]
fn scenario_changement_d_operateur_en_route() {
    // 6 + puis × (avant de taper le second opérande) puis 2 = : 12
    let etat = scenario(&[
        Touche::Chiffre(6),
        PLUS,
        FOIS,
        Touche::Chiffre(2),
        Touche::Egal,
    ]);
    assert_eq!(etat.accumulateur, 12.0);
}

#[test]
fn scenario_signe_puis_addition() {
    // 5 ± + 3 = : (-5) + 3 = -2
    let etat = scenario(&[
        Touche::Chiffre(5),
        Touche::Signe,
        PLUS,
        Touche::Chiffre(3),
        Touche::Egal,
    ]);
    assert_eq!(etat.accumulateur, -2.0);
    assert_eq!(texte_affichage(&etat), "-2");
}

#[test]
fn scenario_pourcent_puis_multiplication() {
    // 50 % engage 0.5, puis × 8 = : 4
    let etat = scenario(&[
        Touche::Chiffre(5),
        Touche::Chiffre(0),
        Touche::Pourcent,
        FOIS,
        Touche::Chiffre(8),
        Touche::Egal,
    ]);
    assert_eq!(etat.accumulateur, 4.0);
}

/* ------------------------ Effacement en cours de calcul ------------------------ */

#[test]
fn scenario_ce_en_plein_calcul() {
    // 8 + 5, C (annule la frappe), + 2 = : 10 — le total survit au C
    let etat = scenario(&[
        Touche::Chiffre(8),
        PLUS,
        Touche::Chiffre(5),
        Touche::Effacer,
        PLUS,
        Touche::Chiffre(2),
        Touche::Egal,
    ]);
    assert_eq!(etat.accumulateur, 10.0);
}

/* ------------------------ Garde “zéro = rien” (conservée) ------------------------ */

#[test]
fn scenario_zero_puis_signe_non_evenement() {
    // 5 − 5 = : accumulateur 0 ; ± ensuite ne produit PAS −0
    let depart = scenario(&[
        Touche::Chiffre(5),
        MOINS,
        Touche::Chiffre(5),
        Touche::Egal,
    ]);
    assert_eq!(depart.accumulateur, 0.0);

    let etat = depart.presser(Touche::Signe);
    assert_eq!(etat, depart);
    assert_eq!(texte_affichage(&etat), "0");
}

#[test]
fn scenario_repartir_d_un_accumulateur_nul() {
    // accumulateur nul + opérateur armé + saisie : la garde écarte le
    // cas “appliquer” (0 n’est pas significatif) => la saisie est
    // simplement engagée. 0 + 3 = donne 3.
    let etat = scenario(&[
        Touche::Chiffre(5),
        MOINS,
        Touche::Chiffre(5),
        Touche::Egal,
        PLUS,
        Touche::Chiffre(3),
        Touche::Egal,
    ]);
    assert_eq!(etat.accumulateur, 3.0);
}

/* ------------------------ Valeurs spéciales IEEE ------------------------ */

#[test]
fn scenario_division_par_zero_affiche_inf() {
    // 1 ÷ 0. = : IEEE => +inf, affiché tel quel ("inf", forme Display)
    let etat = scenario(&[
        Touche::Chiffre(1),
        DIV,
        Touche::Point, // "0."
        Touche::Egal,
    ]);
    assert!(etat.accumulateur.is_infinite());
    assert_eq!(texte_affichage(&etat), "inf");
}

#[test]
fn scenario_inf_fois_zero_affiche_zero() {
    // inf × 0. = : NaN — et NaN n’est pas “significatif”, donc l’écran
    // retombe sur "0" (comportement conservé de la garde)
    let etat = scenario(&[
        Touche::Chiffre(1),
        DIV,
        Touche::Point,
        Touche::Egal, // inf
        FOIS,
        Touche::Point, // "0."
        Touche::Egal,  // inf * 0 = NaN
    ]);
    assert!(etat.accumulateur.is_nan());
    assert_eq!(texte_affichage(&etat), "0");
}
