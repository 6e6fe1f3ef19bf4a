//! An honest Standard Honk prover.
//!
//! Produces proofs by replaying the verifier's transcript schedule from the
//! sending side: circuit metadata, public inputs, and wire commitments, the
//! permutation grand product, the sumcheck round univariates and multilinear
//! evaluations, and finally the Gemini, Shplonk, and KZG opening rounds.

use ark_ff::{batch_inversion, Field, One, Zero};
use honk_common::{
    backends::HashBackend,
    constants::{
        MAX_RELATION_LENGTH, NUM_POLYNOMIALS, NUM_PRECOMPUTED_POLYNOMIALS,
        NUM_UNSHIFTED_POLYNOMIALS, PROGRAM_WIDTH, Z_PERM_SHIFT,
    },
    types::{G1Affine, Proof, RelationParameters, ScalarField, VerificationKey},
};
use honk_core::{
    pcs::gemini::{powers_of_rho, squares_of},
    public_inputs::compute_public_input_delta,
    relations::evaluate_combined_relations,
};

use super::{
    circuit::{CircuitBuilder, CircuitPolynomials},
    polynomials::{add_scaled, divide_by_linear, evaluate_univariate, fold_evaluations, shifted},
    srs::TestSrs,
    transcript::ProverTranscript,
};

/// Builds the verification key for a circuit under the given SRS
pub fn create_verification_key(builder: &CircuitBuilder, srs: &TestSrs) -> VerificationKey {
    let polys = builder.compute_circuit_polynomials();

    let mut commitments = [G1Affine::identity(); NUM_PRECOMPUTED_POLYNOMIALS];
    for (commitment, poly) in commitments.iter_mut().zip(polys.precomputed()) {
        *commitment = srs.commit(poly);
    }

    VerificationKey {
        circuit_size: polys.circuit_size as u64,
        num_public_inputs: polys.public_inputs.len() as u64,
        commitments,
        g: srs.g1(),
        h: srs.h,
        x_h: srs.x_h,
    }
}

/// Computes the permutation grand product polynomial.
///
/// Row zero holds zero rather than one; the first-row Lagrange term of the
/// grand product relation restores the initial value, which lets the shifted
/// polynomial keep a zero constant coefficient.
pub fn compute_grand_product(
    polys: &CircuitPolynomials,
    beta: ScalarField,
    gamma: ScalarField,
) -> Vec<ScalarField> {
    let n = polys.circuit_size;

    let mut numerators = vec![ScalarField::one(); n];
    let mut denominators = vec![ScalarField::one(); n];
    for wire in 0..PROGRAM_WIDTH {
        for row in 0..n {
            numerators[row] *= polys.wires[wire][row] + beta * polys.ids[wire][row] + gamma;
            denominators[row] *= polys.wires[wire][row] + beta * polys.sigmas[wire][row] + gamma;
        }
    }
    batch_inversion(&mut denominators);

    let mut z_perm = vec![ScalarField::zero(); n];
    let mut running = ScalarField::one();
    for row in 1..n {
        running *= numerators[row - 1] * denominators[row - 1];
        z_perm[row] = running;
    }
    z_perm
}

/// Produces a proof for the circuit's statement under the given SRS.
///
/// The builder's witness assignment is used as-is; an unsatisfied assignment
/// yields a proof the verifier rejects.
pub fn create_proof<H: HashBackend>(builder: &CircuitBuilder, srs: &TestSrs) -> Proof {
    let polys = builder.compute_circuit_polynomials();
    let n = polys.circuit_size;
    let num_rounds = n.trailing_zeros() as usize;

    let mut transcript = ProverTranscript::<H>::new();
    transcript.send(&(n as u64));
    transcript.send(&(polys.public_inputs.len() as u64));
    for public_input in &polys.public_inputs {
        transcript.send(public_input);
    }
    for wire in polys.wires.iter() {
        transcript.send(&srs.commit(wire));
    }

    let beta = transcript.get_challenge();
    let gamma = transcript.get_challenge();

    let z_perm = compute_grand_product(&polys, beta, gamma);
    transcript.send(&srs.commit(&z_perm));

    let alpha = transcript.get_challenge();
    let zeta = transcript.get_challenge();

    // The verifier rejects earlier if this inversion fails, so an honest
    // prover never reaches it with a zero denominator
    let public_input_delta =
        compute_public_input_delta(&polys.public_inputs, beta, gamma, n as u64).unwrap();
    let params = RelationParameters {
        beta,
        gamma,
        public_input_delta,
        alpha,
        zeta,
    };

    // The full polynomial store in batching order
    let mut store: Vec<Vec<ScalarField>> = Vec::with_capacity(NUM_POLYNOMIALS);
    for poly in polys.precomputed() {
        store.push(poly.clone());
    }
    for wire in polys.wires.iter() {
        store.push(wire.clone());
    }
    store.push(z_perm.clone());
    store.push(shifted(&z_perm));

    // Sumcheck: send each round's univariate, then fold every polynomial by
    // the round challenge. The unfolded store is kept for the opening rounds.
    let mut folded = store.clone();
    let mut evaluation_point = Vec::with_capacity(num_rounds);
    for _ in 0..num_rounds {
        let round_univariate = compute_round_univariate(&folded, &params);
        for evaluation in round_univariate.iter() {
            transcript.send(evaluation);
        }

        let round_challenge = transcript.get_challenge();
        evaluation_point.push(round_challenge);
        for poly in folded.iter_mut() {
            *poly = fold_evaluations(poly, round_challenge);
        }
    }
    for poly in folded.iter() {
        transcript.send(&poly[0]);
    }

    // Gemini: batch the store by powers of rho and fold the batched
    // polynomial down the evaluation point, committing to each fold
    let rho = transcript.get_challenge();
    let rhos = powers_of_rho(rho, NUM_POLYNOMIALS);

    let mut batched_unshifted = vec![ScalarField::zero(); n];
    for (poly, rho_power) in store[..NUM_UNSHIFTED_POLYNOMIALS].iter().zip(rhos.iter()) {
        add_scaled(&mut batched_unshifted, poly, *rho_power);
    }
    let mut batched_to_be_shifted = vec![ScalarField::zero(); n];
    add_scaled(&mut batched_to_be_shifted, &z_perm, rhos[Z_PERM_SHIFT]);

    let mut batched = batched_unshifted.clone();
    add_scaled(&mut batched, &shifted(&batched_to_be_shifted), ScalarField::one());

    let mut fold_polys = vec![batched];
    for round in 0..num_rounds - 1 {
        let next = fold_evaluations(&fold_polys[round], evaluation_point[round]);
        fold_polys.push(next);
    }
    for poly in fold_polys[1..].iter() {
        transcript.send(&srs.commit(poly));
    }

    let r = transcript.get_challenge();
    let r_squares = squares_of(r, num_rounds);
    for (poly, point) in fold_polys.iter().zip(r_squares.iter()) {
        transcript.send(&evaluate_univariate(poly, -*point));
    }

    // The polynomials and points the opening claims refer to, in the order
    // the verifier assembles them
    let r_inv = r.inverse().unwrap();
    let mut positive_poly = batched_unshifted.clone();
    add_scaled(&mut positive_poly, &batched_to_be_shifted, r_inv);
    let mut negative_poly = batched_unshifted;
    add_scaled(&mut negative_poly, &batched_to_be_shifted, -r_inv);

    let mut opened: Vec<(Vec<ScalarField>, ScalarField)> = Vec::with_capacity(num_rounds + 1);
    opened.push((positive_poly, r));
    opened.push((negative_poly, -r));
    for round in 1..num_rounds {
        opened.push((fold_polys[round].clone(), -r_squares[round]));
    }

    // Shplonk: commit to the batched quotient of the opening claims
    let nu = transcript.get_challenge();
    let mut q_poly = vec![ScalarField::zero(); n];
    let mut nu_power = ScalarField::one();
    for (poly, point) in opened.iter() {
        let evaluation = evaluate_univariate(poly, *point);
        let mut numerator = poly.clone();
        numerator[0] -= evaluation;
        add_scaled(&mut q_poly, &divide_by_linear(&numerator, *point), nu_power);
        nu_power *= nu;
    }
    transcript.send(&srs.commit(&q_poly));

    // KZG: open the partially evaluated Shplonk polynomial at z
    let z = transcript.get_challenge();
    let mut g_poly = q_poly;
    let mut nu_power = ScalarField::one();
    for (poly, point) in opened.iter() {
        let scaling = nu_power * (z - point).inverse().unwrap();
        let evaluation = evaluate_univariate(poly, *point);
        add_scaled(&mut g_poly, poly, -scaling);
        g_poly[0] += scaling * evaluation;
        nu_power *= nu;
    }
    let w_poly = divide_by_linear(&g_poly, z);
    transcript.send(&srs.commit(&w_poly));

    transcript.into_proof()
}

/// Computes a sumcheck round univariate as its evaluations on
/// `{0, ..., MAX_RELATION_LENGTH - 1}`: for each evaluation point, extend
/// every polynomial's adjacent evaluation pairs linearly and sum the combined
/// relation over the remaining hypercube.
fn compute_round_univariate(
    folded: &[Vec<ScalarField>],
    params: &RelationParameters,
) -> [ScalarField; MAX_RELATION_LENGTH] {
    let half = folded[0].len() / 2;

    let mut result = [ScalarField::zero(); MAX_RELATION_LENGTH];
    let mut row_evaluations = [ScalarField::zero(); NUM_POLYNOMIALS];
    for pair in 0..half {
        for (point, accumulator) in result.iter_mut().enumerate() {
            let point_scalar = ScalarField::from(point as u64);
            for (poly_index, poly) in folded.iter().enumerate() {
                let even = poly[2 * pair];
                let odd = poly[2 * pair + 1];
                row_evaluations[poly_index] = even + point_scalar * (odd - even);
            }
            *accumulator += evaluate_combined_relations(&row_evaluations, params);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use ark_ff::{One, Zero};
    use ark_std::UniformRand;
    use honk_common::{
        constants::{NUM_POLYNOMIALS, PROGRAM_WIDTH},
        types::{RelationParameters, ScalarField},
    };
    use honk_core::{
        public_inputs::compute_public_input_delta, relations::evaluate_combined_relations,
    };
    use rand::thread_rng;

    use crate::proof_system::{
        polynomials::shifted,
        test_data::{random_scalars, sample_circuit},
    };

    use super::{compute_grand_product, compute_round_univariate};

    /// The grand product starts at zero, telescopes through the row ratios,
    /// and closes at the public input correction factor
    #[test]
    fn test_grand_product_boundaries() {
        let mut rng = thread_rng();
        let polys = sample_circuit().compute_circuit_polynomials();
        let n = polys.circuit_size;

        let beta = ScalarField::rand(&mut rng);
        let gamma = ScalarField::rand(&mut rng);
        let z_perm = compute_grand_product(&polys, beta, gamma);

        assert_eq!(z_perm[0], ScalarField::zero());

        let row_ratio = |row: usize| {
            let mut ratio = ScalarField::one();
            for wire in 0..PROGRAM_WIDTH {
                let numerator = polys.wires[wire][row] + beta * polys.ids[wire][row] + gamma;
                let denominator = polys.wires[wire][row] + beta * polys.sigmas[wire][row] + gamma;
                ratio *= numerator / denominator;
            }
            ratio
        };

        // Row zero holds zero in place of one; the telescoping product
        // starts from one
        let mut running = ScalarField::one();
        for row in 1..n {
            running *= row_ratio(row - 1);
            assert_eq!(z_perm[row], running);
        }

        let delta =
            compute_public_input_delta(&polys.public_inputs, beta, gamma, n as u64).unwrap();
        assert_eq!(z_perm[n - 1] * row_ratio(n - 1), delta);
    }

    /// A round univariate of an honest execution sums to zero over {0, 1}
    #[test]
    fn test_round_univariate_sums_to_zero() {
        let mut rng = thread_rng();
        let polys = sample_circuit().compute_circuit_polynomials();
        let n = polys.circuit_size;

        let beta = ScalarField::rand(&mut rng);
        let gamma = ScalarField::rand(&mut rng);
        let z_perm = compute_grand_product(&polys, beta, gamma);
        let delta =
            compute_public_input_delta(&polys.public_inputs, beta, gamma, n as u64).unwrap();

        let params = RelationParameters {
            beta,
            gamma,
            public_input_delta: delta,
            alpha: ScalarField::rand(&mut rng),
            zeta: ScalarField::rand(&mut rng),
        };

        let mut store: Vec<Vec<ScalarField>> = Vec::with_capacity(NUM_POLYNOMIALS);
        for poly in polys.precomputed() {
            store.push(poly.clone());
        }
        for wire in polys.wires.iter() {
            store.push(wire.clone());
        }
        store.push(z_perm.clone());
        store.push(shifted(&z_perm));

        let univariate = compute_round_univariate(&store, &params);
        assert_eq!(univariate[0] + univariate[1], ScalarField::zero());
    }

    /// The round univariate at a point matches the partially evaluated sum
    /// of the combined relation
    #[test]
    fn test_round_univariate_matches_definition() {
        let mut rng = thread_rng();
        let n = 4;

        let params = RelationParameters {
            beta: ScalarField::rand(&mut rng),
            gamma: ScalarField::rand(&mut rng),
            public_input_delta: ScalarField::one(),
            alpha: ScalarField::rand(&mut rng),
            zeta: ScalarField::rand(&mut rng),
        };

        let store: Vec<Vec<ScalarField>> = (0..NUM_POLYNOMIALS)
            .map(|_| random_scalars(n, &mut rng))
            .collect();

        let univariate = compute_round_univariate(&store, &params);

        // Check the evaluation at t = 2 directly against the definition
        let two = ScalarField::from(2u64);
        let mut expected = ScalarField::zero();
        let mut row_evaluations = [ScalarField::zero(); NUM_POLYNOMIALS];
        for pair in 0..n / 2 {
            for (slot, poly) in row_evaluations.iter_mut().zip(store.iter()) {
                *slot = poly[2 * pair] + two * (poly[2 * pair + 1] - poly[2 * pair]);
            }
            expected += evaluate_combined_relations(&row_evaluations, &params);
        }
        assert_eq!(univariate[2], expected);
    }
}
