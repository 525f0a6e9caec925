// src/noyau/jetons.rs

/// Opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Op {
    /// Table de priorité : {+:1, -:1, *:2, /:2, ^:3}.
    pub fn rang(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Divise => 2,
            Op::Puissance => 3,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Divise => '/',
            Op::Puissance => '^',
        }
    }

    fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Divise),
            '^' => Some(Op::Puissance),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte décimal brut : converti en f64 seulement à l’évaluation.
    Num(String),
    Op(Op),

    LPar,
    RPar,
}

impl Tok {
    pub fn est_operateur(&self) -> bool {
        matches!(self, Tok::Op(_))
    }

    pub fn est_nombre(&self) -> bool {
        matches!(self, Tok::Num(_))
    }
}

/// Supprime tous les espaces (ASCII : ' ', \t, \n, \x0C, \r) en gardant l’ordre du reste.
pub fn retirer_espaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// Tokenize une chaîne SANS espaces.
///
/// - tout caractère qui n’est ni opérateur ni parenthèse s’accumule dans le nombre en cours
///   (donc "1.2.3" donne UN jeton ; sa validité est vérifiée à l’évaluation)
/// - opérateurs + - * / ^ et parenthèses : un jeton chacun
/// - n’échoue jamais ; chaîne vide => suite vide
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut nombre = String::new();

    for c in s.chars() {
        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => match Op::depuis_char(c) {
                Some(op) => Tok::Op(op),
                None => {
                    nombre.push(c);
                    continue;
                }
            },
        };

        if !nombre.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut nombre)));
        }
        out.push(tok);
    }

    if !nombre.is_empty() {
        out.push(Tok::Num(nombre));
    }

    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(texte) => texte.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
