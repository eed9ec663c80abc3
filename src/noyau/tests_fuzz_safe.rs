//! Tests fuzz safe : suites de touches aléatoires, déterminisme, invariants.
//!
//! - RNG déterministe (seed fixe)
//! - longueur de suite bornée
//! - budget temps global
//! - invariants : au plus un point à l’écran, double « clear » => état initial,
//!   même suite => même écran, jamais de panique

use std::time::{Duration, Instant};

use super::{Calculatrice, Categorie, Chiffre, EtiquetteEffacer, Operateur, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_chiffre(rng: &mut Rng) -> Chiffre {
    let d = rng.pick(10) as u8;
    Chiffre::new(d).unwrap_or_else(|| panic!("chiffre hors plage: {d}"))
}

fn gen_touche(rng: &mut Rng) -> Touche {
    // Chiffres majoritaires, sinon les « suites » n’ont que des opérateurs.
    match rng.pick(20) {
        0..=9 => Touche::Chiffre(gen_chiffre(rng)),
        10 | 11 => Touche::Decimale,
        12..=15 => Touche::Operateur(Operateur::TOUS[rng.pick(4) as usize]),
        16..=18 => Touche::Egal,
        _ => Touche::Effacer,
    }
}

fn gen_suite(rng: &mut Rng, max_len: u32) -> Vec<Touche> {
    let n = 1 + rng.pick(max_len);
    (0..n).map(|_| gen_touche(rng)).collect()
}

fn jouer(suite: &[Touche]) -> Calculatrice {
    let mut calc = Calculatrice::new();
    for t in suite {
        calc.appuyer(*t);
    }
    calc
}

fn check_invariant_point(calc: &Calculatrice, suite: &[Touche]) {
    let points = calc.texte().matches('.').count();
    assert!(points <= 1, "écran={:?} suite={suite:?}", calc.texte());
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariant_point_et_etiquette() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let suite = gen_suite(&mut rng, 30);
        let mut calc = Calculatrice::new();
        for t in &suite {
            let a = calc.appuyer(*t);
            check_invariant_point(&calc, &suite);

            let attendue = if *t == Touche::Effacer {
                EtiquetteEffacer::AC
            } else {
                EtiquetteEffacer::CE
            };
            assert_eq!(a.etiquette_effacer, attendue, "suite={suite:?}");
            assert_eq!(calc.categorie_precedente(), Some(t.categorie()));
        }
    }
}

#[test]
fn fuzz_safe_double_effacer_revient_a_l_etat_initial() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let suite = gen_suite(&mut rng, 25);
        let mut calc = jouer(&suite);
        calc.appuyer(Touche::Effacer);
        let a = calc.appuyer(Touche::Effacer);

        assert_eq!(a.texte, "0", "suite={suite:?}");
        assert_eq!(a.etiquette_effacer, EtiquetteEffacer::AC);
        assert_eq!(a.operateur_engage, None);
        assert!(calc.est_vierge(), "suite={suite:?}");
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes suites => mêmes écrans
    let mut rng_a = Rng::new(0x5EED_u64);
    let mut rng_b = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let sa = gen_suite(&mut rng_a, 20);
        let sb = gen_suite(&mut rng_b, 20);
        assert_eq!(sa, sb);

        let ca = jouer(&sa);
        let cb = jouer(&sb);
        assert_eq!(ca.affichage(), cb.affichage(), "suite={sa:?}");
    }
}

#[test]
fn fuzz_safe_chiffres_seuls_concatenes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xD161_u64);

    for _ in 0..200 {
        budget(t0, max);

        let n = 1 + rng.pick(15);
        let chiffres: Vec<Chiffre> = (0..n).map(|_| gen_chiffre(&mut rng)).collect();

        let mut calc = Calculatrice::new();
        for d in &chiffres {
            calc.appuyer(Touche::Chiffre(*d));
        }

        // Les zéros de tête se replient sur le premier chiffre non nul.
        let brut: String = chiffres.iter().map(|d| d.caractere()).collect();
        let attendu = match brut.trim_start_matches('0') {
            "" => "0",
            reste => reste,
        };
        assert_eq!(calc.texte(), attendu);
        assert!(calc.est_vierge());
        assert_eq!(calc.categorie_precedente(), Some(Categorie::Nombre));
    }
}
