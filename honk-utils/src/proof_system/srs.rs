//! A deterministic powers-of-tau structured reference string for tests

use ark_bn254::G1Projective;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::One;
use ark_std::UniformRand;
use honk_common::types::{G1Affine, G2Affine, ScalarField};
use rand::{CryptoRng, RngCore};

/// A structured reference string with a locally sampled trapdoor.
///
/// Only suitable for tests: whoever samples the trapdoor can forge openings.
pub struct TestSrs {
    /// The powers of the trapdoor in G1: `[1]_1, [x]_1, [x^2]_1, ...`
    pub points: Vec<G1Affine>,
    /// The generator of the G2 group
    pub h: G2Affine,
    /// The G2 commitment to the trapdoor
    pub x_h: G2Affine,
}

impl TestSrs {
    /// Samples a fresh SRS supporting polynomials up to the given degree
    pub fn new<R: CryptoRng + RngCore>(max_degree: usize, rng: &mut R) -> Self {
        let tau = ScalarField::rand(rng);
        let g = G1Affine::generator();

        let mut points = Vec::with_capacity(max_degree + 1);
        let mut power = ScalarField::one();
        for _ in 0..=max_degree {
            points.push((g * power).into_affine());
            power *= tau;
        }

        let h = G2Affine::generator();
        let x_h = (h * tau).into_affine();

        TestSrs { points, h, x_h }
    }

    /// The generator of the G1 group
    pub fn g1(&self) -> G1Affine {
        self.points[0]
    }

    /// Commits to a polynomial in coefficient form
    pub fn commit(&self, coeffs: &[ScalarField]) -> G1Affine {
        G1Projective::msm(&self.points[..coeffs.len()], coeffs)
            .unwrap()
            .into_affine()
    }
}

#[cfg(test)]
mod tests {
    use ark_ec::AffineRepr;
    use ark_ff::One;
    use honk_common::types::{G1Affine, ScalarField};
    use rand::thread_rng;

    use super::TestSrs;

    /// Committing to the constant polynomial 1 yields the generator
    #[test]
    fn test_commit_constant() {
        let mut rng = thread_rng();
        let srs = TestSrs::new(4, &mut rng);
        assert_eq!(
            srs.commit(&[ScalarField::one()]),
            G1Affine::generator()
        );
    }
}
