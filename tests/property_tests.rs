//! Randomized checks of the algebraic and geometric identities.

use linvec::{Vector, VectorError};
use rand::Rng;

const EPS: f64 = 1e-9;
const DIMENSIONS: [usize; 5] = [1, 2, 3, 4, 16];
const ROUNDS: usize = 50;

fn random_vector(rng: &mut impl Rng, dimension: usize) -> Vector {
    Vector::new((0..dimension).map(|_| rng.gen_range(-10.0_f64..10.0))).unwrap()
}

#[test]
fn addition_commutes() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS {
        for _ in 0..ROUNDS {
            let a = random_vector(&mut rng, n);
            let b = random_vector(&mut rng, n);
            assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }
    }
}

#[test]
fn adding_the_negation_gives_zero() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS {
        for _ in 0..ROUNDS {
            let a = random_vector(&mut rng, n);
            let sum = a.add(&a.scalar_multiply(-1.0)).unwrap();
            assert_eq!(sum, Vector::zero(n).unwrap(), "input {:?}", a);
        }
    }
}

#[test]
fn sub_undoes_add() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS {
        for _ in 0..ROUNDS {
            let a = random_vector(&mut rng, n);
            let b = random_vector(&mut rng, n);
            let back = a.add(&b).unwrap().sub(&b).unwrap();
            for (x, y) in back.iter().zip(a.iter()) {
                assert!((x - y).abs() < EPS);
            }
        }
    }
}

#[test]
fn magnitude_is_non_negative_and_zero_only_for_zero() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS {
        assert_eq!(Vector::zero(n).unwrap().magnitude(), 0.0);
        for _ in 0..ROUNDS {
            let a = random_vector(&mut rng, n);
            let m = a.magnitude();
            assert!(m >= 0.0);
            assert_eq!(m == 0.0, a.is_zero());
        }
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS {
        for _ in 0..ROUNDS {
            let a = random_vector(&mut rng, n);
            if a.is_zero() {
                continue;
            }
            let unit = a.normalize().unwrap();
            assert!((unit.magnitude() - 1.0).abs() < EPS);
            assert!(a.is_parallel(&unit).unwrap());
        }
    }
}

#[test]
fn dot_product_commutes_and_is_bilinear() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS {
        for _ in 0..ROUNDS {
            let a = random_vector(&mut rng, n);
            let b = random_vector(&mut rng, n);
            let c = random_vector(&mut rng, n);
            let k: f64 = rng.gen_range(-5.0..5.0);

            assert_eq!(a.dot_product(&b).unwrap(), b.dot_product(&a).unwrap());

            let lhs = a.scalar_multiply(k).add(&b).unwrap().dot_product(&c).unwrap();
            let rhs = k * a.dot_product(&c).unwrap() + b.dot_product(&c).unwrap();
            assert!((lhs - rhs).abs() < 1e-8 * (1.0 + rhs.abs()));
        }
    }
}

#[test]
fn angle_stays_in_range() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS {
        for _ in 0..ROUNDS {
            let a = random_vector(&mut rng, n);
            let b = random_vector(&mut rng, n);
            let angle = a.angle_between(&b).unwrap();
            assert!((0.0..=std::f64::consts::PI).contains(&angle));
            assert!((angle - b.angle_between(&a).unwrap()).abs() < EPS);
        }
    }
}

#[test]
fn scaled_copies_are_parallel() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS {
        for _ in 0..ROUNDS {
            let a = random_vector(&mut rng, n);
            let k = rng.gen_range(0.1..10.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            assert!(a.is_parallel(&a.scalar_multiply(k)).unwrap());
        }
    }
}

#[test]
fn decomposition_parts_are_parallel_and_orthogonal() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS[1..] {
        for _ in 0..ROUNDS {
            let base = random_vector(&mut rng, n);
            let target = random_vector(&mut rng, n);
            let (parallel, orthogonal) = base.decompose(&target).unwrap();

            assert!(orthogonal.dot_product(&base).unwrap().abs() < 1e-8);
            assert!(base.is_parallel_within(&parallel, 1e-8).unwrap());
            let rebuilt = parallel.add(&orthogonal).unwrap();
            for (x, y) in rebuilt.iter().zip(target.iter()) {
                assert!((x - y).abs() < EPS);
            }
        }
    }
}

#[test]
fn cross_product_is_orthogonal_to_operands() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS * 4 {
        let a = random_vector(&mut rng, 3);
        let b = random_vector(&mut rng, 3);
        let c = a.cross_product_3d(&b).unwrap();
        assert!(c.dot_product(&a).unwrap().abs() < 1e-8);
        assert!(c.dot_product(&b).unwrap().abs() < 1e-8);

        // |a × b| = |a| |b| sin θ
        let sin = a.angle_between(&b).unwrap().sin();
        let expected = a.magnitude() * b.magnitude() * sin;
        assert!((c.magnitude() - expected).abs() < 1e-6 * (1.0 + expected));
    }
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS {
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, n + 1);
        let expected = VectorError::dimension_mismatch(n, n + 1);
        assert_eq!(a.add(&b), Err(expected.clone()));
        assert_eq!(a.sub(&b), Err(expected.clone()));
        assert_eq!(a.dot_product(&b), Err(expected));
    }
}

#[test]
fn display_parses_back_at_display_precision() {
    let mut rng = rand::thread_rng();
    for &n in &DIMENSIONS {
        for _ in 0..ROUNDS {
            let a = random_vector(&mut rng, n);
            let parsed: Vector = a.to_string().parse().unwrap();
            assert_eq!(parsed.dimension(), n);
            for (x, y) in parsed.iter().zip(a.iter()) {
                assert!((x - y).abs() <= 5e-4 + 1e-12);
            }
        }
    }
}
