// src/noyau/touches.rs

/// Opérateur binaire en attente d’un second opérande.
///
/// Identifiant LOGIQUE : le pavé transmet cette valeur directement,
/// jamais le glyphe affiché (÷, ×, …). La machine n’a donc aucune
/// dépendance à la présentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Division,
    Multiplication,
    Soustraction,
    Addition,
}

/// Une touche du pavé, identifiée logiquement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9 (valeur du chiffre, pas le caractère du bouton)
    Chiffre(u8),
    Point,
    Effacer,
    Signe,
    Pourcent,
    Op(Operateur),
    Egal,
}

/// Ordre FIXE des 19 touches du pavé (4 colonnes, de haut en bas) :
///
///   C   ±   %   ÷
///   7   8   9   ×
///   4   5   6   −
///   1   2   3   +
///   0   .   =
pub const ORDRE_TOUCHES: [Touche; 19] = [
    Touche::Effacer,
    Touche::Signe,
    Touche::Pourcent,
    Touche::Op(Operateur::Division),
    Touche::Chiffre(7),
    Touche::Chiffre(8),
    Touche::Chiffre(9),
    Touche::Op(Operateur::Multiplication),
    Touche::Chiffre(4),
    Touche::Chiffre(5),
    Touche::Chiffre(6),
    Touche::Op(Operateur::Soustraction),
    Touche::Chiffre(1),
    Touche::Chiffre(2),
    Touche::Chiffre(3),
    Touche::Op(Operateur::Addition),
    Touche::Chiffre(0),
    Touche::Point,
    Touche::Egal,
];

/// Libellé STATIQUE d’une touche (glyphe du bouton).
///
/// Exception : `Effacer` dépend de l’état ("C" vs "AC") — voir
/// `affichage::libelle_effacer`. Ici on renvoie "C" par convention.
pub fn libelle(touche: Touche) -> String {
    match touche {
        Touche::Chiffre(d) => d.to_string(),
        Touche::Point => ".".to_string(),
        Touche::Effacer => "C".to_string(),
        Touche::Signe => "±".to_string(),
        Touche::Pourcent => "%".to_string(),
        Touche::Op(Operateur::Division) => "÷".to_string(),
        Touche::Op(Operateur::Multiplication) => "×".to_string(),
        Touche::Op(Operateur::Soustraction) => "−".to_string(),
        Touche::Op(Operateur::Addition) => "+".to_string(),
        Touche::Egal => "=".to_string(),
    }
}
